pub mod document;
pub mod profile;
pub mod stage;

// Re-export core models for easy access
pub use document::{Document, DocumentFilter};
pub use profile::{Profile, ProfileFilter};
pub use stage::{Stage, StageFilter};
