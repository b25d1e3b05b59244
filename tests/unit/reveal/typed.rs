use super::*;

#[test]
fn reveals_one_char_per_interval() {
    let r = TypedReveal::new("hello", 36);
    assert_eq!(r.visible_at(0), "");
    assert_eq!(r.visible_at(35), "");
    assert_eq!(r.visible_at(36), "h");
    assert_eq!(r.visible_at(72), "he");
    assert_eq!(r.visible_at(179), "hell");
    assert_eq!(r.visible_at(180), "hello");
    assert_eq!(r.visible_at(10_000), "hello");
}

#[test]
fn completion_time_matches_length() {
    let r = TypedReveal::new("abc", 10);
    assert_eq!(r.completes_after(), 30);
    assert!(!r.is_complete_at(29));
    assert!(r.is_complete_at(30));
}

#[test]
fn multibyte_characters_are_never_split() {
    let r = TypedReveal::new("a\u{2014}b", 1);
    assert_eq!(r.visible_at(1), "a");
    assert_eq!(r.visible_at(2), "a\u{2014}");
    assert_eq!(r.visible_at(3), "a\u{2014}b");
}

#[test]
fn default_message_completes_in_under_five_seconds() {
    let r = TypedReveal::default();
    assert!(r.text().starts_with("Roses are pink"));
    assert_eq!(r.completes_after(), r.text().chars().count() as u64 * 36);
    assert!(r.completes_after() < 5000);
    assert_eq!(r.visible_at(r.completes_after()), r.text());
}

#[test]
fn zero_interval_is_clamped() {
    let r = TypedReveal::new("xy", 0);
    assert_eq!(r.visible_at(1), "x");
}

#[test]
fn empty_text_is_complete_immediately() {
    let r = TypedReveal::new("", 36);
    assert!(r.is_complete_at(0));
    assert_eq!(r.visible_at(100), "");
}
