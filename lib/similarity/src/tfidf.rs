// TF-IDF index over a small set of short documents
use crate::distance::{cosine_similarity, SparseVector};
use crate::tokenizer::analyze;
use ahash::AHashMap;

#[derive(Debug, Clone, Default)]
pub struct TfidfIndex {
    // term -> column index
    vocabulary: AHashMap<String, usize>,
    // column index -> smoothed idf
    idf: Vec<f32>,
    // one L2-normalised row per fitted document
    rows: Vec<SparseVector>,
}

impl TfidfIndex {
    /// Learn the vocabulary and IDF weights from `documents` and vectorise them
    pub fn fit<S: AsRef<str>>(documents: &[S]) -> Self {
        let analyzed: Vec<Vec<String>> = documents.iter().map(|d| analyze(d.as_ref())).collect();

        let mut vocabulary: AHashMap<String, usize> = AHashMap::new();
        let mut doc_freqs: Vec<u32> = Vec::new();
        for terms in &analyzed {
            let mut seen: Vec<usize> = Vec::with_capacity(terms.len());
            for term in terms {
                let next = vocabulary.len();
                let idx = *vocabulary.entry(term.clone()).or_insert(next);
                if idx == doc_freqs.len() {
                    doc_freqs.push(0);
                }
                if !seen.contains(&idx) {
                    seen.push(idx);
                    doc_freqs[idx] += 1;
                }
            }
        }

        // smooth_idf: ln((1 + n) / (1 + df)) + 1
        let n = documents.len() as f32;
        let idf = doc_freqs
            .iter()
            .map(|&df| ((1.0 + n) / (1.0 + df as f32)).ln() + 1.0)
            .collect();

        let mut index = Self { vocabulary, idf, rows: Vec::new() };
        index.rows = analyzed.iter().map(|terms| index.vectorize(terms)).collect();
        index
    }

    /// Vector for `text` against the fitted vocabulary; unknown terms are ignored
    pub fn transform(&self, text: &str) -> SparseVector {
        self.vectorize(&analyze(text))
    }

    fn vectorize(&self, terms: &[String]) -> SparseVector {
        let entries = terms
            .iter()
            .filter_map(|term| self.vocabulary.get(term))
            .map(|&idx| (idx, self.idf[idx]))
            .collect();
        // raw counts times idf, summed per term by from_entries
        let mut vector = SparseVector::from_entries(entries);
        vector.normalize();
        vector
    }

    /// Cosine similarity of `query` against every fitted document, in document order
    pub fn scores(&self, query: &str) -> Vec<f32> {
        let query = self.transform(query);
        self.rows.iter().map(|row| cosine_similarity(&query, row)).collect()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }
}
