use docflow_core::config::DatabaseConfig;
use docflow_core::database::{DatabaseConnection, QueryExecutor};
use docflow_core::query_builder::SqlValue;

async fn connect() -> DatabaseConnection {
    let config = DatabaseConfig::default();
    DatabaseConnection::new(&config)
        .await
        .expect("DATABASE_URL must point at a running PostgreSQL instance")
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_health_check() {
    let db = connect().await;
    assert!(db.health_check().await.unwrap());
    db.close().await;
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_fetch_count_with_bound_arguments() {
    let db = connect().await;
    let executor = QueryExecutor::new(db.pool().clone());

    let count = executor
        .fetch_count(
            "SELECT COUNT(*) FROM (VALUES (1), (2), (3)) v(n) WHERE v.n > $1",
            &[SqlValue::Int(1)],
        )
        .await
        .unwrap();
    assert_eq!(count, 2);

    db.close().await;
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_fetch_all_binds_every_variant() {
    let db = connect().await;
    let executor = QueryExecutor::new(db.pool().clone());

    #[derive(sqlx::FromRow)]
    struct Echo {
        text: String,
        int: i64,
        flag: bool,
    }

    let rows: Vec<Echo> = executor
        .fetch_all(
            "SELECT $1 AS text, $2 AS int, $3 AS flag",
            &[
                SqlValue::Text("hello".to_string()),
                SqlValue::Int(7),
                SqlValue::Bool(true),
            ],
        )
        .await
        .unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].text, "hello");
    assert_eq!(rows[0].int, 7);
    assert!(rows[0].flag);

    db.close().await;
}
