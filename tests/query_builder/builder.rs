use docflow_core::query_builder::{parse_sort_fields, Projection, QueryBuilder, SortField, SqlValue};

fn profiles_projection() -> Projection {
    Projection::new("public", "profiles", "p")
        .project("id", "ID")
        .project("workflow_name", "WorkflowName")
        .project("name", "Name")
}

#[test]
fn test_profile_listing_end_to_end() {
    let projection = profiles_projection();
    let builder = QueryBuilder::new(&projection, vec![SortField::asc("Name")])
        .where_equals("WorkflowName", Some("summarize"));

    let (count_sql, count_args) = builder.build_count();
    assert_eq!(
        count_sql,
        "SELECT COUNT(*) FROM public.profiles p WHERE p.workflow_name = $1"
    );
    assert_eq!(count_args, vec![SqlValue::Text("summarize".to_string())]);

    let (page_sql, page_args) = builder.build_page(2, 10);
    assert!(page_sql.contains("LIMIT 10 OFFSET 10"));
    assert!(page_sql.contains("ORDER BY p.name ASC"));
    assert_eq!(page_args, count_args);
}

#[test]
fn test_chained_filters_on_aliased_projection() {
    let projection = Projection::new("public", "users", "u")
        .project("id", "ID")
        .project("name", "Name");

    let (sql, args) = QueryBuilder::new(&projection, vec![])
        .where_equals("ID", Some(5))
        .where_contains("Name", Some("john"))
        .build_count();

    assert!(sql.ends_with("WHERE u.id = $1 AND u.name ILIKE $2"));
    assert_eq!(
        args,
        vec![SqlValue::Int(5), SqlValue::Text("%john%".to_string())]
    );
}

#[test]
fn test_count_never_orders_or_windows() {
    let projection = profiles_projection();
    let (sql, _) = QueryBuilder::new(&projection, vec![SortField::desc("Name")])
        .where_contains("Name", Some("ada"))
        .order_by_fields(vec![SortField::asc("ID"), SortField::desc("Name")])
        .build_count();

    assert!(!sql.contains("ORDER BY"));
    assert!(!sql.contains("LIMIT"));
    assert!(!sql.contains("OFFSET"));
}

#[test]
fn test_page_offset_progression() {
    let projection = profiles_projection();
    let builder = QueryBuilder::new(&projection, vec![]);

    let (first, _) = builder.build_page(1, 25);
    assert!(first.contains("LIMIT 25 OFFSET 0"));

    let (third, _) = builder.build_page(3, 25);
    assert!(third.contains("LIMIT 25 OFFSET 50"));

    let (large, _) = builder.build_page(41, 50);
    assert!(large.contains("LIMIT 50 OFFSET 2000"));
}

#[test]
fn test_explicit_sort_replaces_default_and_clears_back() {
    let projection = profiles_projection();
    let base = QueryBuilder::new(&projection, vec![SortField::asc("Name")]);

    let (explicit, _) = base
        .clone()
        .order_by_fields(vec![SortField::asc("WorkflowName"), SortField::desc("ID")])
        .build_page(1, 10);
    assert!(explicit.contains("ORDER BY p.workflow_name ASC, p.id DESC"));

    let (cleared, _) = base
        .clone()
        .order_by("ID", true)
        .order_by_fields(vec![])
        .build_page(1, 10);
    assert!(cleared.contains("ORDER BY p.name ASC"));

    let (cleared_by_name, _) = base
        .order_by("ID", true)
        .order_by("", false)
        .build_page(1, 10);
    assert!(cleared_by_name.contains("ORDER BY p.name ASC"));
}

#[test]
fn test_sort_spec_string_drives_order_by() {
    let projection = profiles_projection();
    let (sql, _) = QueryBuilder::new(&projection, vec![])
        .order_by_fields(parse_sort_fields("Name,-ID"))
        .build_page(1, 10);

    assert!(sql.contains("ORDER BY p.name ASC, p.id DESC"));
}

#[test]
fn test_where_in_binds_one_placeholder_per_value() {
    let projection = profiles_projection();
    let (sql, args) = QueryBuilder::new(&projection, vec![])
        .where_in("WorkflowName", vec!["classify", "summarize", "extract"])
        .build_count();

    assert!(sql.ends_with("WHERE p.workflow_name IN ($1, $2, $3)"));
    assert_eq!(args.len(), 3);
}

#[test]
fn test_build_single_is_a_fresh_lookup() {
    let projection = profiles_projection();
    let (sql, args) = QueryBuilder::new(&projection, vec![SortField::asc("Name")])
        .where_equals("WorkflowName", Some("summarize"))
        .build_single("ID", 99);

    assert_eq!(
        sql,
        "SELECT p.id, p.workflow_name, p.name FROM public.profiles p WHERE p.id = $1"
    );
    assert_eq!(args, vec![SqlValue::Int(99)]);
}
