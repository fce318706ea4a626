//! Tests for SuggestionSet

use super::*;

#[test]
fn test_new_keeps_query_and_order() {
    let set = SuggestionSet::new("a", vec!["apple", "avocado"]);
    assert_eq!(set.query(), "a");
    assert_eq!(set.items(), &["apple", "avocado"]);
    assert_eq!(set.len(), 2);
    assert!(!set.is_empty());
}

#[test]
fn test_empty_set() {
    let set: SuggestionSet<String> = SuggestionSet::new("zzz", Vec::new());
    assert!(set.is_empty());
    assert_eq!(set.len(), 0);
    assert!(set.get(0).is_none());
}

#[test]
fn test_get_out_of_range() {
    let set = SuggestionSet::new("b", vec![1, 2, 3]);
    assert_eq!(set.get(2), Some(&3));
    assert_eq!(set.get(3), None);
}

#[test]
fn test_iterates_by_reference() {
    let set = SuggestionSet::new("c", vec!["cherry".to_string(), "citron".to_string()]);
    let collected: Vec<&str> = (&set).into_iter().map(String::as_str).collect();
    assert_eq!(collected, vec!["cherry", "citron"]);
    assert_eq!(set.iter().count(), 2);
}
