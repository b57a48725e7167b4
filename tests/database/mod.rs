//! Database integration tests
//!
//! Everything here needs a live PostgreSQL instance, so the tests are
//! `#[ignore]`d by default. Run them with a `DATABASE_URL` pointing at a
//! disposable database:
//!
//! ```bash
//! DATABASE_URL=postgresql://postgres@localhost/docflow_test cargo test -- --ignored
//! ```

pub mod executor;
