use super::*;

#[test]
fn default_query_has_page_only() {
    assert_eq!(ListQuery::default().to_query_string(), "skip=0&limit=100");
}

#[test]
fn search_is_trimmed_and_encoded() {
    let query = ListQuery::new().with_search("  O'Brien & co ");
    assert_eq!(query.to_query_string(), "skip=0&limit=100&search=O%27Brien%20%26%20co");
}

#[test]
fn blank_search_is_omitted() {
    let query = ListQuery::new().with_search("   ");
    assert_eq!(query.to_query_string(), "skip=0&limit=100");
}

#[test]
fn filters_are_sorted_and_blank_values_skipped() {
    let query = ListQuery::new()
        .with_filter("status", "under_review")
        .with_filter("cohort", "")
        .with_filter("student_number", "24001234")
        .with_page(20, 10);
    assert_eq!(
        query.to_query_string(),
        "skip=20&limit=10&status=under_review&student_number=24001234"
    );
}

#[test]
fn unreserved_characters_stay_literal() {
    let query = ListQuery::new().with_search("a-b_c.d~e");
    assert!(query.to_query_string().ends_with("search=a-b_c.d~e"));
}
