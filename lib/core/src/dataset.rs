//! Built-in question sets.
//!
//! Both tables are compiled into the binary and never change at runtime.
//! `mdcat` backs the helper bot, `fsc` backs the quiz.

use crate::{Error, QuestionTable, Record};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// (class, chapter, question, answer)
type Row = (&'static str, &'static str, &'static str, &'static str);

const MDCAT_ROWS: &[Row] = &[
    ("11", "Cell Structure", "What is the basic unit of life?", "Cell"),
    ("11", "Cell Structure", "Which organelle is known as the powerhouse of the cell?", "Mitochondria"),
    ("11", "Cell Structure", "Which organelle contains hydrolytic enzymes for intracellular digestion?", "Lysosome"),
    ("11", "Cell Structure", "Which organelle is the site of protein synthesis?", "Ribosome"),
    ("11", "Cell Structure", "Which structure regulates movement of substances into and out of the cell?", "Plasma membrane"),
    ("11", "Cell Structure", "What is the semifluid substance inside the cell that suspends organelles?", "Cytoplasm"),
    ("11", "Cell Structure", "Name the organelle responsible for photosynthesis in plants.", "Chloroplast"),
    ("11", "Cell Structure", "Which cytoskeletal elements provide shape and intracellular transport?", "Microtubules and microfilaments"),
    ("11", "Cell Structure", "What is the function of the Golgi apparatus?", "Modification, sorting, and packaging of proteins and lipids"),
    ("11", "Cell Structure", "What is the nucleolus mainly responsible for?", "Ribosomal RNA synthesis and ribosome assembly"),
    ("11", "Biomolecules", "What are the monomers of proteins?", "Amino acids"),
    ("11", "Biomolecules", "Which bond links amino acids in proteins?", "Peptide bond"),
    ("11", "Biomolecules", "What are the monomers of nucleic acids?", "Nucleotides"),
    ("11", "Biomolecules", "Which polysaccharide stores energy in animals?", "Glycogen"),
    ("11", "Biomolecules", "Which polysaccharide stores energy in plants?", "Starch"),
    ("11", "Biomolecules", "Which polysaccharide is a major component of plant cell walls?", "Cellulose"),
    ("11", "Biomolecules", "What is the primary structure of a protein?", "Unique sequence of amino acids"),
    ("11", "Biomolecules", "Which lipids are the main components of membranes?", "Phospholipids"),
    ("11", "Biomolecules", "Which nitrogenous bases are purines?", "Adenine and Guanine"),
    ("11", "Biomolecules", "Which nitrogenous bases are pyrimidines?", "Cytosine, Thymine, and Uracil"),
    ("11", "Enzymes", "What is the active site of an enzyme?", "Region where substrate binds and reaction occurs"),
    ("11", "Enzymes", "How does temperature above optimum affect an enzyme?", "Denaturation leading to loss of activity"),
    ("11", "Enzymes", "How does pH affect enzyme activity?", "Deviation from optimum alters ionization and reduces activity"),
    ("11", "Enzymes", "What is a cofactor?", "A non-protein helper (metal ion or coenzyme) required for activity"),
    ("11", "Enzymes", "What is competitive inhibition?", "Inhibitor competes with substrate for the active site"),
    ("11", "Enzymes", "What is noncompetitive inhibition?", "Inhibitor binds at a site other than active site reducing Vmax"),
    ("11", "Cell Division", "Name the two main stages of the cell cycle.", "Interphase and M phase"),
    ("11", "Cell Division", "Which process produces two genetically identical daughter cells?", "Mitosis"),
    ("11", "Cell Division", "Which process reduces chromosome number by half?", "Meiosis"),
    ("11", "Cell Division", "During which phase do chromosomes align at the equator?", "Metaphase"),
    ("11", "Cell Division", "Crossing over occurs in which stage of meiosis?", "Prophase I"),
    ("11", "Cell Division", "What is cytokinesis?", "Division of cytoplasm into two daughter cells"),
    ("11", "Cell Division", "Name the protein structures that pull chromatids apart.", "Spindle fibers (microtubules)"),
    ("11", "Cell Division", "In which mitotic phase do sister chromatids separate?", "Anaphase"),
    ("11", "Diversity of Life", "Who proposed binomial nomenclature?", "Carl Linnaeus"),
    ("11", "Diversity of Life", "What is taxonomy?", "Science of classification, identification, and naming of organisms"),
    ("11", "Diversity of Life", "Name the five-kingdom classification proposer.", "R.H. Whittaker"),
    ("11", "Diversity of Life", "What is a species in biological terms?", "A group of interbreeding natural populations reproductively isolated from others"),
    ("11", "Plant Anatomy", "Which tissue transports water in plants?", "Xylem"),
    ("11", "Plant Anatomy", "Which tissue transports food in plants?", "Phloem"),
    ("11", "Plant Anatomy", "Which meristem increases length of plant organs?", "Apical meristem"),
    ("11", "Plant Anatomy", "What protects the tip of the root?", "Root cap"),
    ("11", "Plant Physiology", "Stomata regulate exchange of which gases?", "CO2 and O2 (and water vapor)"),
    ("11", "Plant Physiology", "What is transpiration?", "Loss of water vapor from aerial parts of plants"),
    ("11", "Plant Physiology", "Primary light-absorbing pigment in plants?", "Chlorophyll a"),
    ("11", "Plant Physiology", "Where does the Calvin cycle occur?", "Stroma of chloroplast"),
    ("11", "Plant Physiology", "Primary electron donor in photosystem II?", "Water (H2O)"),
    ("11", "Plant Physiology", "What is photophosphorylation?", "Synthesis of ATP using light energy in chloroplasts"),
    ("12", "Homeostasis", "Define homeostasis.", "Maintenance of a stable internal environment"),
    ("12", "Homeostasis", "Which organ secretes insulin?", "Pancreas (beta cells)"),
    ("12", "Homeostasis", "Which hormone increases blood glucose?", "Glucagon"),
    ("12", "Blood & Immunity", "What is the normal pH of human blood?", "Approximately 7.4"),
    ("12", "Blood & Immunity", "Which cells transport oxygen in blood?", "Red blood cells (erythrocytes)"),
    ("12", "Blood & Immunity", "Which blood component is essential for clotting?", "Platelets (thrombocytes)"),
    ("12", "Blood & Immunity", "Which WBCs produce antibodies?", "B lymphocytes (plasma cells)"),
    ("12", "Blood & Immunity", "Which protein in RBCs binds oxygen?", "Hemoglobin"),
    ("12", "Blood & Immunity", "Which blood group is universal donor?", "O negative"),
    ("12", "Blood & Immunity", "Which blood group is universal recipient?", "AB positive"),
    ("12", "Respiration", "Where does gaseous exchange occur in lungs?", "Alveoli"),
    ("12", "Respiration", "Define tidal volume.", "Volume of air inhaled or exhaled in a normal breath"),
    ("12", "Respiration", "Name the pigment carrying oxygen in blood.", "Hemoglobin"),
    ("12", "Respiration", "What is vital capacity?", "Maximum amount of air expelled after maximum inspiration"),
    ("12", "Excretion", "Functional unit of kidney?", "Nephron"),
    ("12", "Excretion", "Where does filtration occur in the nephron?", "Glomerulus (Bowman's capsule)"),
    ("12", "Excretion", "What is reabsorption in the nephron?", "Return of useful substances from filtrate to blood"),
    ("12", "Excretion", "Where is ADH produced and what is its role?", "Produced by hypothalamus; increases water reabsorption in kidneys"),
    ("12", "Excretion", "What is the main nitrogenous waste in humans?", "Urea"),
    ("12", "Excretion", "Which part of nephron creates osmotic gradient?", "Loop of Henle"),
    ("12", "Coordination & Control", "Which brain part controls balance and coordination?", "Cerebellum"),
    ("12", "Coordination & Control", "Which division controls voluntary actions?", "Somatic nervous system"),
    ("12", "Coordination & Control", "Neurotransmitter at neuromuscular junction?", "Acetylcholine"),
    ("12", "Coordination & Control", "Which part of the brain regulates breathing and heart rate?", "Medulla oblongata"),
    ("12", "Coordination & Control", "Which lobe of brain is primarily for vision?", "Occipital lobe"),
    ("12", "Coordination & Control", "Which cells form myelin in the CNS?", "Oligodendrocytes"),
    ("12", "Coordination & Control", "Which cells form myelin in the PNS?", "Schwann cells"),
    ("12", "Coordination & Control", "Which ion triggers synaptic vesicle fusion?", "Calcium (Ca2+)"),
    ("12", "Endocrine System", "Which gland is called the master gland?", "Pituitary gland"),
    ("12", "Endocrine System", "Which hormone regulates basal metabolic rate?", "Thyroxine (T4)"),
    ("12", "Endocrine System", "Which gland secretes adrenaline?", "Adrenal medulla"),
    ("12", "Endocrine System", "Hormone responsible for calcium regulation by lowering blood Ca2+?", "Calcitonin"),
    ("12", "Endocrine System", "Which hormone increases blood calcium levels?", "Parathyroid hormone (PTH)"),
    ("12", "Endocrine System", "Which hormone is antidiuretic?", "ADH (vasopressin)"),
    ("12", "Endocrine System", "Which pancreatic cells secrete glucagon?", "Alpha cells"),
    ("12", "Reproduction", "Define fertilization.", "Fusion of male and female gametes"),
    ("12", "Reproduction", "Define implantation.", "Attachment of the embryo to the uterine wall"),
    ("12", "Reproduction", "What is placenta?", "Organ for exchange of nutrients, gases, and wastes between mother and fetus"),
    ("12", "Reproduction", "Where are Leydig cells located and what do they secrete?", "In testes; secrete testosterone"),
    ("12", "Reproduction", "Where does oogenesis occur?", "Ovaries"),
    ("12", "Reproduction", "Which hormone triggers ovulation?", "LH (Luteinizing Hormone)"),
    ("12", "Genetics", "Who is the father of genetics?", "Gregor Mendel"),
    ("12", "Genetics", "What is phenotype?", "Observable characteristics of an organism"),
    ("12", "Genetics", "What is genotype?", "Genetic makeup of an organism"),
    ("12", "Genetics", "What are alleles?", "Alternative forms of a gene"),
    ("12", "Genetics", "What is a test cross?", "Cross with homozygous recessive to determine genotype"),
    ("12", "Genetics", "Which principle explains separation of allele pairs?", "Law of Segregation"),
    ("12", "Genetics", "Which inheritance shows blending of traits?", "Incomplete dominance"),
    ("12", "Genetics", "Which process makes mRNA from DNA?", "Transcription"),
    ("12", "Genetics", "Which process synthesizes protein from mRNA?", "Translation"),
    ("12", "Genetics", "Which enzyme synthesizes RNA from a DNA template?", "RNA polymerase"),
    ("12", "Evolution", "Define natural selection.", "Differential survival and reproduction of individuals due to heritable traits"),
    ("12", "Evolution", "What is speciation?", "Formation of new species"),
    ("12", "Evolution", "What are homologous structures?", "Structures with similar architecture indicating common ancestry"),
    ("12", "Evolution", "What are analogous structures?", "Structures with similar function but different origin"),
    ("12", "Evolution", "What is genetic drift?", "Random change in allele frequencies in small populations"),
    ("12", "Ecology", "Define ecosystem.", "Community of organisms interacting with their physical environment"),
    ("12", "Ecology", "What is a trophic level?", "Position of an organism in a food chain"),
    ("12", "Ecology", "Who are producers?", "Autotrophs that synthesize organic compounds"),
    ("12", "Ecology", "Define food chain.", "Linear sequence of organisms through which nutrients and energy pass"),
    ("12", "Ecology", "What is nitrogen fixation?", "Conversion of atmospheric nitrogen into ammonia"),
    ("12", "Biotechnology", "What is genetic engineering?", "Direct manipulation of an organism's DNA"),
    ("12", "Biotechnology", "Which enzymes cut DNA at specific sequences?", "Restriction endonucleases"),
    ("12", "Biotechnology", "What technique amplifies DNA segments?", "Polymerase Chain Reaction (PCR)"),
    ("MDCAT", "Quick", "Where does glycolysis occur?", "Cytoplasm"),
    ("MDCAT", "Quick", "Where does Krebs cycle occur?", "Mitochondrial matrix"),
    ("MDCAT", "Quick", "Gas used by plants in photosynthesis?", "Carbon dioxide (CO2)"),
    ("MDCAT", "Quick", "Sugar formed in photosynthesis?", "Glucose"),
    ("MDCAT", "Quick", "Which vitamin is synthesized in skin by sunlight?", "Vitamin D"),
    ("MDCAT", "Quick", "Largest organ of human body?", "Skin"),
    ("MDCAT", "Quick", "Hormone for fight-or-flight response?", "Adrenaline (epinephrine)"),
];

const FSC_ROWS: &[Row] = &[
    ("FSc Part 1", "Cell Biology", "What is the basic unit of life?", "Cell"),
    ("FSc Part 1", "Biomolecules", "Which biomolecule stores genetic information?", "DNA"),
    ("FSc Part 1", "Enzymes", "Enzymes act as?", "Catalysts"),
    ("FSc Part 2", "Human Physiology", "Which organ pumps blood?", "Heart"),
    ("FSc Part 2", "Human Physiology", "What is the functional unit of kidney?", "Nephron"),
    ("FSc Part 2", "Genetics", "Who is called the father of genetics?", "Gregor Mendel"),
    ("MDCAT", "Cell Division", "Mitosis results in how many daughter cells?", "2"),
    ("MDCAT", "Cell Division", "Meiosis results in how many daughter cells?", "4"),
    ("MDCAT", "Human Blood", "What is the universal donor blood group?", "O-"),
    ("MDCAT", "Human Blood", "What is the universal recipient blood group?", "AB+"),
];

/// A named built-in question table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dataset {
    /// 11th & 12th (F.Sc) plus MDCAT-style questions for the helper bot
    #[default]
    Mdcat,
    /// Short F.Sc/MDCAT set used by the quiz
    Fsc,
}

impl Dataset {
    pub const ALL: [Dataset; 2] = [Dataset::Mdcat, Dataset::Fsc];

    pub fn name(&self) -> &'static str {
        match self {
            Dataset::Mdcat => "mdcat",
            Dataset::Fsc => "fsc",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Dataset::Mdcat => "11th & 12th (F.Sc) + MDCAT-style Biology Q/A",
            Dataset::Fsc => "Biology MCQs quiz: FSc Part 1, FSc Part 2 and MDCAT",
        }
    }

    fn rows(&self) -> &'static [Row] {
        match self {
            Dataset::Mdcat => MDCAT_ROWS,
            Dataset::Fsc => FSC_ROWS,
        }
    }

    pub fn len(&self) -> usize {
        self.rows().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows().is_empty()
    }

    pub fn records(&self) -> Vec<Record> {
        self.rows()
            .iter()
            .map(|&(class, chapter, question, answer)| Record::new(class, chapter, question, answer))
            .collect()
    }

    pub fn table(&self) -> QuestionTable {
        QuestionTable::from_records(self.records())
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dataset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mdcat" => Ok(Dataset::Mdcat),
            "fsc" => Ok(Dataset::Fsc),
            other => Err(Error::UnknownDataset(other.to_string())),
        }
    }
}
