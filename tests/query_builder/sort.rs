use docflow_core::query_builder::{parse_sort_fields, SortField};

#[test]
fn test_parse_sort_fields_mixed() {
    assert_eq!(
        parse_sort_fields("name,-createdAt"),
        vec![SortField::asc("name"), SortField::desc("createdAt")]
    );
}

#[test]
fn test_parse_sort_fields_empty_yields_empty() {
    assert!(parse_sort_fields("").is_empty());
}

#[test]
fn test_parse_sort_fields_whitespace_and_order() {
    assert_eq!(
        parse_sort_fields("  status ,  -attempt , name "),
        vec![
            SortField::asc("status"),
            SortField::desc("attempt"),
            SortField::asc("name")
        ]
    );
}

#[test]
fn test_parse_sort_fields_degenerate_segments() {
    assert!(parse_sort_fields(",,,").is_empty());
    assert!(parse_sort_fields(" - ").is_empty());
    assert_eq!(parse_sort_fields("a,,-b"), vec![
        SortField::asc("a"),
        SortField::desc("b")
    ]);
}
