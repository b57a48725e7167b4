//! # Query Builder System
//!
//! Declarative construction of parameterized Postgres queries for listable
//! resources.
//!
//! ## Overview
//!
//! Every resource endpoint needs the same three query shapes: a row count, a
//! bounded and ordered page, and a single-row exact match. This module builds
//! all three from one chain of typed filter/search/sort calls, guaranteeing
//! the count query and the page query agree exactly on which rows match and
//! that `$N` placeholders always line up with the emitted argument list.
//!
//! ## Key Components
//!
//! - [`projection`] - Logical field name to qualified column mapping per table
//! - [`builder`] - Predicate/sort accumulation and SQL emission
//! - [`sort`] - Compact sort-string parsing (`"name,-createdAt"`)
//! - [`value`] - Typed argument values bound by the execution layer
//!
//! ## Example Usage
//!
//! ```rust
//! use docflow_core::query_builder::{Projection, QueryBuilder, SortField};
//!
//! let projection = Projection::new("public", "profiles", "p")
//!     .project("id", "id")
//!     .project("workflow_name", "workflowName")
//!     .project("name", "name");
//!
//! let builder = QueryBuilder::new(&projection, vec![SortField::asc("name")])
//!     .where_equals("workflowName", Some("summarize"));
//!
//! let (count_sql, count_args) = builder.build_count();
//! let (page_sql, page_args) = builder.build_page(2, 10);
//! assert_eq!(count_args, page_args);
//! assert!(page_sql.contains("LIMIT 10 OFFSET 10"));
//! ```
//!
//! No SQL is executed here and no connection is opened; emission produces
//! `(String, Vec<SqlValue>)` pairs consumed by [`crate::database::QueryExecutor`].

pub mod builder;
pub mod projection;
pub mod sort;
pub mod value;

pub use builder::QueryBuilder;
pub use projection::Projection;
pub use sort::{parse_sort_fields, SortField};
pub use value::SqlValue;
