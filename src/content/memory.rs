//! In-memory repository loaded from a JSON site snapshot.
//!
//! # Snapshot format
//!
//! ```json
//! {
//!   "site": { "name": "Example News", "home_url": "http://example.com", "members": [1] },
//!   "request": { "host": "example.com", "port": 80, "uri": "/2024/03/" },
//!   "visitor": { "user_id": 1 },
//!   "taxonomies": ["category", "post_tag", "sports"],
//!   "terms": [{ "id": 3, "name": "News", "parent": 0, "taxonomy": "category" }],
//!   "users": [{ "id": 1, "display_name": "Jane Doe", "user_nicename": "jdoe" }],
//!   "items": [{
//!     "id": 12, "kind": "post", "status": "publish", "title": "Hello",
//!     "created": "2024-03-05T10:00:00Z", "modified": "2024-03-06T08:00:00Z",
//!     "author": 1, "permalink": "http://example.com/hello/",
//!     "terms": { "category": [3] }
//!   }],
//!   "coauthors": { "12": [1, 2] }
//! }
//! ```
//!
//! `visitor`, `taxonomies` and `coauthors` are optional. Without
//! `taxonomies`, every taxonomy named by a term is registered.

use super::{
    model::{AuthorIdentity, ContentItem, ItemId, RequestInfo, Term, TermId, UserId},
    repository::{ContentRepository, RepositoryError},
};
use crate::page::AuthorProvider;
use serde::Deserialize;
use std::{
    collections::{BTreeMap, HashMap},
    fs,
    path::Path,
};

// ============================================================================
// Snapshot Schema
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Snapshot {
    site: SiteInfo,
    #[serde(default)]
    request: RequestInfo,
    #[serde(default)]
    visitor: Visitor,
    #[serde(default)]
    taxonomies: Vec<String>,
    #[serde(default)]
    terms: Vec<Term>,
    #[serde(default)]
    users: Vec<AuthorIdentity>,
    #[serde(default)]
    items: Vec<SnapshotItem>,
    #[serde(default)]
    coauthors: Option<HashMap<ItemId, Vec<UserId>>>,
}

#[derive(Debug, Deserialize)]
struct SiteInfo {
    name: String,
    home_url: String,
    #[serde(default)]
    members: Vec<UserId>,
}

#[derive(Debug, Default, Deserialize)]
struct Visitor {
    user_id: Option<UserId>,
}

#[derive(Debug, Deserialize)]
struct SnapshotItem {
    #[serde(flatten)]
    item: ContentItem,
    /// Taxonomy name → assigned term ids, in assignment order.
    #[serde(default)]
    terms: BTreeMap<String, Vec<TermId>>,
}

// ============================================================================
// MemoryRepository
// ============================================================================

/// [`ContentRepository`] over a fully loaded snapshot.
#[derive(Debug)]
pub struct MemoryRepository {
    site: SiteInfo,
    request: RequestInfo,
    visitor: Visitor,
    taxonomies: Vec<String>,
    terms: HashMap<(String, TermId), Term>,
    users: HashMap<UserId, AuthorIdentity>,
    items: HashMap<ItemId, SnapshotItem>,
    coauthors: Option<HashMap<ItemId, Vec<UserId>>>,
}

impl MemoryRepository {
    /// Parse a snapshot from a JSON string.
    pub fn from_str(content: &str) -> Result<Self, RepositoryError> {
        Ok(Self::from_snapshot(serde_json::from_str(content)?))
    }

    /// Build from an already parsed JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self, RepositoryError> {
        Ok(Self::from_snapshot(serde_json::from_value(value)?))
    }

    /// Load a snapshot file.
    pub fn from_path(path: &Path) -> Result<Self, RepositoryError> {
        let content =
            fs::read_to_string(path).map_err(|err| RepositoryError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    fn from_snapshot(snapshot: Snapshot) -> Self {
        let mut taxonomies = snapshot.taxonomies;
        if taxonomies.is_empty() {
            for term in &snapshot.terms {
                if !taxonomies.contains(&term.taxonomy) {
                    taxonomies.push(term.taxonomy.clone());
                }
            }
        }

        Self {
            site: snapshot.site,
            request: snapshot.request,
            visitor: snapshot.visitor,
            taxonomies,
            terms: snapshot
                .terms
                .into_iter()
                .map(|term| ((term.taxonomy.clone(), term.id), term))
                .collect(),
            users: snapshot.users.into_iter().map(|u| (u.id, u)).collect(),
            items: snapshot.items.into_iter().map(|i| (i.item.id, i)).collect(),
            coauthors: snapshot.coauthors,
        }
    }

    /// Co-author data as an [`AuthorProvider`], when the snapshot carries any.
    pub fn coauthors(&self) -> Option<SnapshotCoauthors<'_>> {
        self.coauthors.as_ref().map(|assignments| SnapshotCoauthors {
            repo: self,
            assignments,
        })
    }
}

impl ContentRepository for MemoryRepository {
    fn content_item(&self, id: ItemId) -> Result<&ContentItem, RepositoryError> {
        self.items
            .get(&id)
            .map(|entry| &entry.item)
            .ok_or(RepositoryError::MissingItem(id))
    }

    fn terms_for_item(&self, id: ItemId, taxonomy: &str) -> Vec<&Term> {
        let Some(ids) = self.items.get(&id).and_then(|entry| entry.terms.get(taxonomy)) else {
            return Vec::new();
        };
        ids.iter().filter_map(|&term| self.term(taxonomy, term)).collect()
    }

    fn term(&self, taxonomy: &str, id: TermId) -> Option<&Term> {
        self.terms.get(&(taxonomy.to_owned(), id))
    }

    fn all_taxonomy_names(&self) -> Vec<&str> {
        self.taxonomies.iter().map(String::as_str).collect()
    }

    fn user(&self, id: UserId) -> Option<&AuthorIdentity> {
        self.users.get(&id)
    }

    fn site_name(&self) -> &str {
        &self.site.name
    }

    fn home_url(&self) -> &str {
        &self.site.home_url
    }

    fn request(&self) -> &RequestInfo {
        &self.request
    }

    fn visitor_is_member(&self) -> bool {
        self.visitor
            .user_id
            .is_some_and(|id| self.site.members.contains(&id))
    }
}

// ============================================================================
// Co-authors
// ============================================================================

/// Co-author assignments from a snapshot.
#[derive(Debug, Clone, Copy)]
pub struct SnapshotCoauthors<'a> {
    repo: &'a MemoryRepository,
    assignments: &'a HashMap<ItemId, Vec<UserId>>,
}

impl AuthorProvider for SnapshotCoauthors<'_> {
    /// Assigned co-authors in order. Unknown user ids are skipped.
    fn coauthors(&self, item: &ContentItem) -> Vec<AuthorIdentity> {
        self.assignments
            .get(&item.id)
            .into_iter()
            .flatten()
            .filter_map(|&id| self.repo.user(id).cloned())
            .collect()
    }
}
