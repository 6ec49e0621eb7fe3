// Integration tests for BioBot
use biobot_core::{Dataset, Error, Filter, QuizDeck, Record, RecordFilter};
use biobot_similarity::{Lookup, Retriever};
use biobot_storage::{export_csv_string, import_csv, import_csv_file, SessionManager};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::Write;

#[test]
fn test_filter_returns_only_matching_rows() {
    let table = Dataset::Mdcat.table();
    for class in table.classes() {
        for chapter in table.chapters_for_class(&class) {
            let filter = RecordFilter::from_labels(Some(&class), Some(&chapter));
            let subset = table.select(&filter);
            assert!(!subset.is_empty());
            assert!(subset.iter().all(|r| r.class == class && r.chapter == chapter));
            assert_eq!(subset.len(), table.iter().filter(|r| filter.matches(r)).count());
        }
    }
}

#[test]
fn test_all_selection_is_identity() {
    let table = Dataset::Mdcat.table();
    let subset = table.select(&RecordFilter::from_labels(Some("All"), None));
    assert_eq!(subset, table);

    let class_only = table.select(&RecordFilter::from_labels(Some("11"), Some("All")));
    assert_eq!(class_only.len(), table.iter().filter(|r| r.class == "11").count());
}

#[test]
fn test_exact_question_matches_itself() {
    let retriever = Retriever::default();
    let table = Dataset::Mdcat.table();
    for record in table.iter() {
        let subset = table.select(&RecordFilter::exact(record.class.clone(), record.chapter.clone()));
        match retriever.lookup(&record.question, &subset) {
            Lookup::Match { best, .. } => {
                assert!(best.score > 0.99, "{}: {}", record.question, best.score);
                assert_eq!(best.record.question, record.question);
            }
            other => panic!("{} did not match: {:?}", record.question, other),
        }
    }
}

#[test]
fn test_upload_merge_and_download() {
    let manager = SessionManager::new();
    let info = manager.create_session(Dataset::Mdcat);

    let csv = "Question,ANSWER,Class,Chapter\n\
               Which enzyme unwinds DNA?,Helicase,12,Genetics\n\
               Which enzyme joins Okazaki fragments?,DNA ligase,12,Genetics\n\
               Which enzyme synthesizes RNA primers?,Primase,12,Genetics\n";
    let total = manager
        .with_session_mut(info.id, |s| s.upload(csv.as_bytes()))
        .unwrap();
    assert_eq!(total, 122);

    let exported = manager
        .with_session(info.id, |s| export_csv_string(s.table()))
        .unwrap()
        .unwrap();
    let back = import_csv(exported.as_bytes()).unwrap();
    assert_eq!(back.len(), 122);
    assert_eq!(back[119], Record::new("12", "Genetics", "Which enzyme unwinds DNA?", "Helicase"));

    // uploaded rows are searchable right away
    let lookup = manager
        .with_session(info.id, |s| Retriever::default().lookup("enzyme that unwinds DNA", s.table()))
        .unwrap();
    assert_eq!(lookup.answer(), Some("Helicase"));
}

#[test]
fn test_offered_labels_select_uploaded_rows() {
    let manager = SessionManager::new();
    let info = manager.create_session(Dataset::Mdcat);
    let csv = "class,chapter,question,answer\n\
               12, Virology,What is the protein coat of a virus called?,Capsid\n";
    manager
        .with_session_mut(info.id, |s| s.upload(csv.as_bytes()))
        .unwrap();

    let options = manager.with_session(info.id, |s| s.table().filter_options()).unwrap();
    let chapter = options
        .chapters
        .iter()
        .find(|c| c.contains("Virology"))
        .cloned()
        .unwrap();
    assert_eq!(chapter, " Virology");

    // the label offered by the dropdown selects the row for both lookup and quiz
    let lookup = manager
        .with_session(info.id, |s| {
            let subset = s.table().select(&RecordFilter::from_labels(Some("12"), Some(&chapter)));
            Retriever::default().lookup("protein coat of a virus", &subset)
        })
        .unwrap();
    assert_eq!(lookup.answer(), Some("Capsid"));

    let mut rng = StdRng::seed_from_u64(11);
    let prompt = manager
        .with_session_mut(info.id, |s| s.next_question("12", &chapter, &mut rng))
        .unwrap();
    assert_eq!(prompt.question, "What is the protein coat of a virus called?");
}

#[test]
fn test_rejected_upload_leaves_session_untouched() {
    let manager = SessionManager::new();
    let info = manager.create_session(Dataset::Fsc);
    let err = manager
        .with_session_mut(info.id, |s| s.upload(b"class,chapter,answer\nMDCAT,Quick,Glucose\n"))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "CSV must contain columns: class, chapter, question, answer (missing: question)"
    );
    assert_eq!(manager.get(info.id).unwrap().rows, 10);
}

#[test]
fn test_quiz_draws_stay_in_selection() {
    let table = Dataset::Mdcat.table();
    let deck = QuizDeck::new(&table, "12", "Genetics").unwrap();
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..50 {
        let card = deck.draw(&mut rng).unwrap();
        assert_eq!(card.record().class, "12");
        assert_eq!(card.record().chapter, "Genetics");
        assert!(!card.is_revealed());
    }
}

#[test]
fn test_quiz_empty_selection() {
    let table = Dataset::Fsc.table();
    assert!(matches!(
        QuizDeck::new(&table, "FSc Part 1", "Human Blood"),
        Err(Error::EmptySelection { .. })
    ));
}

#[test]
fn test_import_file_extends_builtin() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "class,chapter,question,answer").unwrap();
    writeln!(file, "MDCAT,Quick,Site of protein synthesis?,Ribosome").unwrap();

    let extra = import_csv_file(file.path()).unwrap();
    let manager = SessionManager::with_extra(Dataset::Mdcat, extra);
    let info = manager.create_session(Dataset::Mdcat);
    assert_eq!(info.rows, 120);
    assert_eq!(info.uploaded_rows, 0);
}
