//! Tests for data sources

use std::io::Write;
use std::time::Instant;

use super::*;

fn fetch_now<S: DataSource<String>>(source: &mut S, query: &str) -> Vec<String> {
    let (responder, mut rx) = Responder::channel(1);
    source.fetch(Request::new(1, query), responder);
    rx.try_recv().expect("synchronous response")
}

#[test]
fn test_word_list_prefix_match_is_case_insensitive() {
    let mut source = WordListSource::new(vec![
        "Apple".to_string(),
        "avocado".to_string(),
        "banana".to_string(),
    ]);
    assert_eq!(fetch_now(&mut source, "A"), vec!["Apple", "avocado"]);
    assert_eq!(fetch_now(&mut source, "ban"), vec!["banana"]);
}

#[test]
fn test_word_list_no_match_responds_empty() {
    let mut source = WordListSource::builtin();
    assert!(fetch_now(&mut source, "zzz").is_empty());
}

#[test]
fn test_word_list_caps_results() {
    let mut source = WordListSource::builtin().with_max_results(2);
    assert_eq!(fetch_now(&mut source, "b").len(), 2);
}

#[test]
fn test_builtin_words_match_scenario() {
    let source = WordListSource::builtin();
    assert_eq!(source.matches("av"), vec!["avocado"]);
    assert!(source.words().len() > 40);
}

#[test]
fn test_from_text_skips_blank_lines() {
    let source = WordListSource::from_text("alpha\n\n  beta  \n\ngamma\n");
    assert_eq!(source.words(), &["alpha", "beta", "gamma"]);
}

#[test]
fn test_load_reads_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "kiwi\nkumquat").unwrap();

    let source = WordListSource::load(file.path()).unwrap();
    assert_eq!(source.words(), &["kiwi", "kumquat"]);
}

#[test]
fn test_load_missing_file_is_word_list_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.txt");

    let err = WordListSource::load(&path).unwrap_err();
    assert!(matches!(err, TypeaheadError::WordList { .. }));
    assert!(err.to_string().contains("missing.txt"));
}

#[test]
fn test_closure_is_a_data_source() {
    let mut source =
        |request: Request, responder: Responder<String>| responder.respond(vec![request.query().to_uppercase()]);
    assert_eq!(fetch_now(&mut source, "abc"), vec!["ABC"]);
}

#[test]
fn test_threaded_source_responds_from_worker() {
    let mut source = ThreadedSource::<String>::spawn(WordListSource::builtin(), Duration::ZERO);
    let (responder, mut rx) = Responder::channel(7);
    source.fetch(Request::new(7, "che"), responder);

    let start = Instant::now();
    let data = loop {
        match rx.try_recv() {
            Ok(data) => break data,
            Err(_) if start.elapsed() < Duration::from_secs(2) => {
                thread::sleep(Duration::from_millis(5))
            }
            Err(e) => panic!("worker did not respond: {:?}", e),
        }
    };
    assert_eq!(data, vec!["cherry"]);
}

#[test]
fn test_threaded_source_preserves_issue_order() {
    let mut source = ThreadedSource::<String>::spawn(WordListSource::builtin(), Duration::from_millis(1));
    let (first, mut first_rx) = Responder::channel(1);
    let (second, mut second_rx) = Responder::channel(2);
    source.fetch(Request::new(1, "p"), first);
    source.fetch(Request::new(2, "pe"), second);

    let start = Instant::now();
    while second_rx.try_recv().is_err() {
        assert!(start.elapsed() < Duration::from_secs(2), "worker stalled");
        thread::sleep(Duration::from_millis(5));
    }
    // The earlier request was handled before the later one
    assert!(first_rx.try_recv().is_ok());
}

#[tokio::test]
async fn test_task_source_responds_from_spawned_task() {
    let mut source = TaskSource::new(Handle::current(), |request: Request| async move {
        vec![format!("{}!", request.query())]
    });
    let (responder, mut rx) = Responder::channel(3);
    source.fetch(Request::new(3, "hey"), responder);

    let mut data = None;
    for _ in 0..50 {
        tokio::task::yield_now().await;
        if let Ok(received) = rx.try_recv() {
            data = Some(received);
            break;
        }
    }
    assert_eq!(data, Some(vec!["hey!".to_string()]));
}
