//! # Database Operations
//!
//! Connection pooling and execution of builder-emitted queries.
//!
//! ## Overview
//!
//! This is the boundary where SQL text finally meets the database. Everything
//! above it (query construction, filter adapters, pagination math) is pure;
//! everything below it is sqlx.
//!
//! ## Key Components
//!
//! - [`connection`] - Pool construction, health checks, shutdown
//! - [`executor`] - Typed binding and row mapping for `(sql, args)` pairs
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use docflow_core::config::DocflowConfig;
//! use docflow_core::database::{DatabaseConnection, QueryExecutor};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = DocflowConfig::load()?;
//! let db = DatabaseConnection::new(&config.database).await?;
//! let executor = QueryExecutor::new(db.pool().clone());
//! # Ok(())
//! # }
//! ```

pub mod connection;
pub mod executor;

pub use connection::DatabaseConnection;
pub use executor::QueryExecutor;
