//! Read-only access to the host content store.
//!
//! # Architecture
//!
//! ```text
//! snapshot.json ──► MemoryRepository ──┐
//!                                      ├──► impl ContentRepository ──► DescriptorBuilder::build()
//!          (any other host adapter) ───┘
//! ```
//!
//! The builder only ever sees the [`ContentRepository`] trait, so tests and
//! the CLI share one code path.

mod memory;
mod model;
mod repository;

pub use memory::{MemoryRepository, SnapshotCoauthors};
pub use model::{
    AuthorIdentity, ContentItem, DateArchive, ItemId, ItemKind, PostStatus, RequestInfo, Term,
    TermId, UserId, ViewContext,
};
pub use repository::{
    ContentRepository, EXCLUDED_TAXONOMIES, RepositoryError, TAG_TAXONOMY, first_inline_image,
};
