use gradient_feed::utils::text::{pluralize, truncate, wrap_text};

#[test]
fn test_pluralize() {
    assert_eq!(pluralize(0, "like"), "0 likes");
    assert_eq!(pluralize(1, "like"), "1 like");
    assert_eq!(pluralize(235, "like"), "235 likes");
    assert_eq!(pluralize(1, "comment"), "1 comment");
}

#[test]
fn test_truncate() {
    assert_eq!(truncate("short", 10), "short");
    assert_eq!(truncate("exactly10!", 10), "exactly10!");
    assert_eq!(truncate("a longer sentence", 8), "a longe…");
    assert_eq!(truncate("💜💜💜💜", 3), "💜💜…");
}

#[test]
fn test_wrap_text() {
    assert!(wrap_text("", 10).is_empty());
    assert_eq!(wrap_text("one two three", 7), vec!["one two", "three"]);
    assert_eq!(wrap_text("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
    assert_eq!(wrap_text("first\n\nsecond", 20), vec!["first", "", "second"]);
    assert_eq!(wrap_text("hi  there", 20), vec!["hi there"]);
}
