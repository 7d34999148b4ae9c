//! The read-only repository contract.

use super::model::{AuthorIdentity, ContentItem, ItemId, RequestInfo, Term, TermId, UserId};
use regex::Regex;
use std::{path::PathBuf, sync::LazyLock};
use thiserror::Error;

/// Taxonomy holding native tags.
pub const TAG_TAXONOMY: &str = "post_tag";

/// Built-in taxonomies never treated as custom taxonomies.
pub const EXCLUDED_TAXONOMIES: [&str; 5] = [
    TAG_TAXONOMY,
    "nav_menu",
    "author",
    "link_category",
    "post_format",
];

/// First `<img ... src="...">` in body markup. Lazy so the earliest image wins.
static INLINE_IMAGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<[iI][mM][gG][^>]*?[ \t\r\n/][sS][rR][cC]=['"]([^'"]+)['"]"#).unwrap()
});

/// Repository failures.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Snapshot parsing error")]
    Json(#[from] serde_json::Error),

    #[error("No content item with id {0}")]
    MissingItem(ItemId),

    #[error("No term {id} in taxonomy `{taxonomy}`")]
    MissingTerm { taxonomy: String, id: TermId },
}

/// Side-effect-free accessor over the host's posts, terms, users and request.
pub trait ContentRepository {
    fn content_item(&self, id: ItemId) -> Result<&ContentItem, RepositoryError>;

    /// Terms assigned to an item under `taxonomy`, in repository order.
    fn terms_for_item(&self, id: ItemId, taxonomy: &str) -> Vec<&Term>;

    fn term(&self, taxonomy: &str, id: TermId) -> Option<&Term>;

    /// Every registered taxonomy, built-in ones included.
    fn all_taxonomy_names(&self) -> Vec<&str>;

    fn user(&self, id: UserId) -> Option<&AuthorIdentity>;

    fn site_name(&self) -> &str;

    fn home_url(&self) -> &str;

    fn request(&self) -> &RequestInfo;

    /// Whether the visitor is a logged-in member of the current site.
    fn visitor_is_member(&self) -> bool;

    /// Registered taxonomies minus [`EXCLUDED_TAXONOMIES`].
    fn taxonomy_names(&self) -> Vec<&str> {
        self.all_taxonomy_names()
            .into_iter()
            .filter(|name| !EXCLUDED_TAXONOMIES.contains(name))
            .collect()
    }

    /// Featured image, else the first inline image of the body.
    fn first_image_url(&self, item: &ContentItem) -> Option<String> {
        item.featured_image
            .clone()
            .filter(|url| !url.is_empty())
            .or_else(|| first_inline_image(&item.content))
    }

    /// Look up a term, failing on a dangling reference.
    fn require_term(&self, taxonomy: &str, id: TermId) -> Result<&Term, RepositoryError> {
        self.term(taxonomy, id).ok_or_else(|| RepositoryError::MissingTerm {
            taxonomy: taxonomy.to_owned(),
            id,
        })
    }
}

/// `src` of the first `<img>` tag in `markup`.
pub fn first_inline_image(markup: &str) -> Option<String> {
    INLINE_IMAGE_RE
        .captures(markup)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_owned())
}
