use super::*;

#[test]
fn text_falls_back_for_missing_and_blank() {
    assert_eq!(text(None), EMPTY_CELL);
    assert_eq!(text(Some("  ")), EMPTY_CELL);
    assert_eq!(text(Some(" Computing ")), "Computing");
}

#[test]
fn date_strips_time_component() {
    assert_eq!(date(Some("2025-03-01T09:30:00Z")), "2025-03-01");
    assert_eq!(date(Some("2025-03-01 09:30:00")), "2025-03-01");
    assert_eq!(date(Some("2025-03-01")), "2025-03-01");
    assert_eq!(date(None), EMPTY_CELL);
}

#[test]
fn bytes_scales_units() {
    assert_eq!(bytes(Some(512)), "512 B");
    assert_eq!(bytes(Some(2048)), "2.0 KB");
    assert_eq!(bytes(Some(5 * 1024 * 1024)), "5.0 MB");
    assert_eq!(bytes(None), EMPTY_CELL);
    assert_eq!(bytes(Some(-1)), EMPTY_CELL);
}

#[test]
fn humanize_snake_case() {
    assert_eq!(humanize(Some("full_time")), "Full time");
    assert_eq!(humanize(None), EMPTY_CELL);
}

#[test]
fn number_and_flags() {
    assert_eq!(number(Some(30)), "30");
    assert_eq!(number::<i32>(None), EMPTY_CELL);
    assert_eq!(yes_no(true), "Yes");
}
