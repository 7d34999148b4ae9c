//! Author name resolution.

use super::Hooks;
use crate::{
    content::{AuthorIdentity, ContentItem, ContentRepository},
    log,
    utils::sanitize::clean,
};
use anyhow::Result;

/// Source of co-authors for an item, e.g. a multi-author extension.
pub trait AuthorProvider {
    /// Ordered co-authors. Empty means "use the native author".
    fn coauthors(&self, item: &ContentItem) -> Vec<AuthorIdentity>;
}

/// Ordered, cleaned author names of an item.
///
/// Co-authors win over the native author. If neither yields anyone, a single
/// empty name is emitted so the article still carries an `author` entry.
pub fn resolve_authors(
    repo: &dyn ContentRepository,
    item: &ContentItem,
    provider: Option<&dyn AuthorProvider>,
    hooks: &Hooks,
) -> Result<Vec<String>> {
    let mut authors = provider.map(|p| p.coauthors(item)).unwrap_or_default();

    if authors.is_empty() {
        match item.author.and_then(|id| repo.user(id)) {
            Some(author) => authors.push(author.clone()),
            None => log!("warn"; "item {} has no resolvable author", item.id),
        }
    }

    let names = if authors.is_empty() {
        vec![String::new()]
    } else {
        authors.iter().map(display_name).collect()
    };

    let names = hooks.filter_authors(names, item)?;
    Ok(names.iter().map(|name| clean(name)).collect())
}

/// First usable name: display name, "first last", nickname, then the login-derived name.
pub fn display_name(author: &AuthorIdentity) -> String {
    if !author.display_name.is_empty() {
        return author.display_name.clone();
    }

    let full = format!("{} {}", author.first_name, author.last_name);
    if full != " " {
        return full;
    }

    if !author.nickname.is_empty() {
        return author.nickname.clone();
    }

    author.user_nicename.clone()
}
