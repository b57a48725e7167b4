use docflow_core::query_builder::Projection;

#[test]
fn test_projection_builds_table_and_columns() {
    let projection = Projection::new("public", "profiles", "p")
        .project("id", "ID")
        .project("workflow_name", "WorkflowName")
        .project("name", "Name");

    assert_eq!(projection.table(), "public.profiles p");
    assert_eq!(projection.column("WorkflowName"), "p.workflow_name");
    assert_eq!(projection.columns(), "p.id, p.workflow_name, p.name");
    assert_eq!(
        projection.column_list(),
        vec!["p.id", "p.workflow_name", "p.name"]
    );
}

#[test]
fn test_unregistered_names_pass_through_verbatim() {
    let projection = Projection::new("public", "profiles", "p").project("id", "ID");

    // Names outside the registered vocabulary are an escape hatch, not an
    // error: already-qualified expressions survive untouched.
    assert_eq!(projection.column("ID"), "p.id");
    assert_eq!(projection.column("p.updated_at"), "p.updated_at");
    assert_eq!(projection.column("LOWER(p.name)"), "LOWER(p.name)");
}

#[test]
fn test_last_registration_wins_first_position_kept() {
    let projection = Projection::new("app", "items", "i")
        .project("col_a", "A")
        .project("col_b", "B")
        .project("col_a2", "A");

    assert_eq!(projection.column("A"), "i.col_a2");
    assert_eq!(projection.columns(), "i.col_a2, i.col_b");
}

#[test]
fn test_shared_projection_is_read_only_across_threads() {
    use std::sync::LazyLock;

    static SHARED: LazyLock<Projection> = LazyLock::new(|| {
        Projection::new("public", "profiles", "p")
            .project("id", "ID")
            .project("name", "Name")
    });

    let handles: Vec<_> = (0..8)
        .map(|_| {
            std::thread::spawn(|| {
                for _ in 0..100 {
                    assert_eq!(SHARED.column("Name"), "p.name");
                    assert_eq!(SHARED.columns(), "p.id, p.name");
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
