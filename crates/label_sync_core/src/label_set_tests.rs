use super::*;
use tracing_test::traced_test;

#[test]
fn test_from_labels_keys_by_name() {
    let set = LabelSet::from_labels(vec![
        Label::new("feature", "00ff00"),
        Label::new("bug", "d73a4a"),
    ]);

    assert_eq!(set.len(), 2);
    assert_eq!(set.get("bug").map(|l| l.color.as_str()), Some("d73a4a"));
    assert!(set.contains("feature"));
    assert!(!set.contains("docs"));
}

#[test]
fn test_iteration_is_in_name_order() {
    let set: LabelSet = vec![
        Label::new("wontfix", "ffffff"),
        Label::new("bug", "d73a4a"),
        Label::new("feature", "00ff00"),
    ]
    .into_iter()
    .collect();

    let names: Vec<&str> = set.names().collect();
    assert_eq!(names, vec!["bug", "feature", "wontfix"]);
}

#[traced_test]
#[test]
fn test_duplicate_name_keeps_last_definition() {
    let set = LabelSet::from_labels(vec![
        Label::new("bug", "d73a4a"),
        Label::new("bug", "ff0000"),
    ]);

    assert_eq!(set.len(), 1);
    assert_eq!(set.get("bug").map(|l| l.color.as_str()), Some("ff0000"));
    assert!(logs_contain("Duplicate label name"));
}

#[test]
fn test_insert_returns_replaced_label() {
    let mut set = LabelSet::new();

    assert!(set.insert(Label::new("bug", "d73a4a")).is_none());
    let replaced = set.insert(Label::new("bug", "ff0000"));

    assert_eq!(replaced, Some(Label::new("bug", "d73a4a")));
}

#[test]
fn test_remove() {
    let mut set = LabelSet::from_labels(vec![Label::new("bug", "d73a4a")]);

    assert_eq!(set.remove("bug"), Some(Label::new("bug", "d73a4a")));
    assert!(set.remove("bug").is_none());
    assert!(set.is_empty());
}

#[test]
fn test_into_iter_yields_records() {
    let set = LabelSet::from_labels(vec![
        Label::new("b", "222222"),
        Label::new("a", "111111"),
    ]);

    let labels: Vec<Label> = set.into_iter().collect();

    assert_eq!(
        labels,
        vec![Label::new("a", "111111"), Label::new("b", "222222")]
    );
}
