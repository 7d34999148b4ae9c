//! Keyword aggregation.
//!
//! ```text
//! native tags
//!   + last category path segments   ┐ cats_as_tags
//!   + every custom taxonomy term    ┘
//!   → lowercase (lowercase_tags) → tag hook → clean → dedup
//! ```

use super::{
    Hooks,
    taxonomy::{UNCATEGORIZED, ancestor_path},
};
use crate::{
    config::Options,
    content::{ContentItem, ContentRepository, TAG_TAXONOMY},
    utils::sanitize::clean,
};
use anyhow::Result;
use std::collections::HashSet;

/// Taxonomy walked for category path segments.
const CATEGORY_TAXONOMY: &str = "category";

/// Compute the final keyword list of an item.
pub fn compute_tags(
    repo: &dyn ContentRepository,
    item: &ContentItem,
    options: &Options,
    hooks: &Hooks,
) -> Result<Vec<String>> {
    let mut tags: Vec<String> = repo
        .terms_for_item(item.id, TAG_TAXONOMY)
        .into_iter()
        .map(|term| term.name.clone())
        .collect();

    if options.cats_as_tags {
        tags.extend(category_segments(repo, item)?);
        tags.extend(custom_taxonomy_values(repo, item));
    }

    if options.lowercase_tags {
        tags = tags.into_iter().map(|tag| tag.to_lowercase()).collect();
    }

    let tags = hooks.filter_tags(tags, item.id)?;
    Ok(dedup(tags.iter().map(|tag| clean(tag))))
}

/// Path segments of the item's *last* assigned category, `Uncategorized` removed.
///
/// Earlier categories contribute nothing. Their names still arrive through
/// [`custom_taxonomy_values`], but their ancestors do not.
pub fn category_segments(repo: &dyn ContentRepository, item: &ContentItem) -> Result<Vec<String>> {
    let categories = repo.terms_for_item(item.id, CATEGORY_TAXONOMY);
    let Some(last) = categories.last() else {
        return Ok(Vec::new());
    };

    let path = ancestor_path(repo, last)?
        .iter()
        .map(|term| term.name.as_str())
        .collect::<Vec<_>>()
        .join("/");

    Ok(path
        .split('/')
        .filter(|segment| *segment != UNCATEGORIZED)
        .map(str::to_owned)
        .collect())
}

/// Names of every term assigned to the item in any non-excluded taxonomy.
pub fn custom_taxonomy_values(repo: &dyn ContentRepository, item: &ContentItem) -> Vec<String> {
    repo.taxonomy_names()
        .into_iter()
        .flat_map(|taxonomy| repo.terms_for_item(item.id, taxonomy))
        .map(|term| term.name.clone())
        .collect()
}

/// Drop repeats, keeping first occurrences in order.
fn dedup(values: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    values.filter(|value| seen.insert(value.clone())).collect()
}
