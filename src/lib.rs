#![allow(clippy::doc_markdown)] // Allow technical terms like PostgreSQL, SQLx in docs
#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Docflow Core
//!
//! Data-access core for the Docflow document processing platform.
//!
//! ## Overview
//!
//! Every listable resource (profiles, documents, stages) needs the same three
//! queries: a row count, a filtered/sorted/windowed page, and a find-by-id.
//! This crate builds all three declaratively from one chain of typed filter
//! and sort calls, so no endpoint hand-writes SQL and the count query can
//! never drift from the page query it summarizes.
//!
//! ## Architecture
//!
//! Construction and execution are strictly separated. The
//! [`query_builder`] layer is pure: it composes parameterized Postgres SQL
//! (`$N` placeholders, `ILIKE`, `LIMIT`/`OFFSET`) plus a typed argument list,
//! performs no I/O, and cannot fail. The [`database`] layer owns the pool and
//! binds those arguments through sqlx. Resource modules in [`models`] wire the
//! two together behind `list`/`find_by_id` repository methods.
//!
//! ## Key Features
//!
//! - **One filter chain, three queries**: count/page/single emitted from the
//!   same builder state with guaranteed WHERE and argument parity
//! - **Logical field vocabulary**: API names decouple from physical columns
//!   through per-resource [`query_builder::Projection`]s
//! - **Optional-filter elision**: absent or empty inputs add no predicates,
//!   so sparse query parameters need no special-casing at call sites
//! - **Typed argument binding**: uuids and timestamps reach Postgres natively
//!   through [`query_builder::SqlValue`]
//!
//! ## Module Organization
//!
//! - [`query_builder`] - Projections, sort parsing, and SQL emission
//! - [`models`] - Resource models, filter adapters, repositories
//! - [`database`] - Connection pooling and query execution
//! - [`pagination`] - Page normalization and the list envelope
//! - [`config`] - Configuration management
//! - [`error`] - Structured error handling
//! - [`logging`] - Structured logging initialization
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use docflow_core::config::DocflowConfig;
//! use docflow_core::database::{DatabaseConnection, QueryExecutor};
//! use docflow_core::models::{Profile, ProfileFilter};
//! use docflow_core::pagination::PageParams;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = DocflowConfig::load()?;
//! let db = DatabaseConnection::new(&config.database).await?;
//! let executor = QueryExecutor::new(db.pool().clone());
//!
//! let filter = ProfileFilter {
//!     workflow_name: Some("summarize".to_string()),
//!     ..Default::default()
//! };
//! let page = Profile::list(&executor, &filter, "-createdAt", PageParams::default()).await?;
//! println!("{} of {} profiles", page.items.len(), page.pagination.total_count);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod database;
pub mod error;
pub mod logging;
pub mod models;
pub mod pagination;
pub mod query_builder;

pub use config::{DatabaseConfig, DocflowConfig};
pub use database::{DatabaseConnection, QueryExecutor};
pub use error::{DataStoreError, DataStoreResult};
pub use pagination::{PageParams, Paginated, PaginationInfo};
pub use query_builder::{parse_sort_fields, Projection, QueryBuilder, SortField, SqlValue};
