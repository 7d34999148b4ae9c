//! Page descriptor derivation.
//!
//! # Flow
//!
//! ```text
//! ViewContext ──► DescriptorBuilder::build()
//!                   │  guard: site id set, audience not suppressed
//!                   ├─ single post ─► authors · section · tags · url · dates
//!                   ├─ page / archives / front page ─► headline + url
//!                   └─ final page hook ─► PageDescriptor
//! ```

mod authors;
mod builder;
mod canonical;
mod descriptor;
mod hooks;
mod tags;
mod taxonomy;

pub use authors::{AuthorProvider, display_name, resolve_authors};
pub use builder::DescriptorBuilder;
pub use canonical::{item_url, request_url};
pub use descriptor::{
    Identified, Located, Named, NewsArticle, PageDescriptor, SCHEMA_CONTEXT, Typed, WebPage,
};
pub use hooks::Hooks;
pub use tags::{category_segments, compute_tags, custom_taxonomy_values};
pub use taxonomy::{UNCATEGORIZED, ancestor_path, resolve_section, top_level_term};

use crate::{config::Options, content::ContentRepository};

/// Whether a logged-in member must not be tracked.
pub fn audience_suppressed(options: &Options, repo: &dyn ContentRepository) -> bool {
    !options.track_authenticated_users && repo.visitor_is_member()
}
