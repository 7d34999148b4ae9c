//! Section resolution over hierarchical taxonomies.

use super::Hooks;
use crate::{
    config::Options,
    content::{ContentItem, ContentRepository, Term},
    utils::sanitize::clean,
};
use anyhow::{Result, bail};

/// Section used when nothing is assigned under the section taxonomy.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Upper bound on ancestor walks; deeper chains are treated as cyclic.
const MAX_TERM_DEPTH: usize = 256;

/// Compute the `articleSection` of an item.
///
/// The first assigned term decides the top-level name; the first leaf
/// among all assigned terms decides the bottom-level name. Which one is
/// used depends on `use_top_level_cats`.
pub fn resolve_section(
    repo: &dyn ContentRepository,
    item: &ContentItem,
    options: &Options,
    hooks: &Hooks,
) -> Result<String> {
    let taxonomy = options.custom_taxonomy_section.as_str();
    let terms = repo.terms_for_item(item.id, taxonomy);

    let section = match terms.first() {
        None => UNCATEGORIZED.to_owned(),
        Some(_) if !options.use_top_level_cats => bottom_level_name(&terms).to_owned(),
        Some(first) => top_level_term(repo, first)?.name.clone(),
    };

    let section = hooks.filter_section(section, item, options)?;
    Ok(clean(&section))
}

/// Walk parent links up to the root term.
pub fn top_level_term<'a>(repo: &'a dyn ContentRepository, term: &'a Term) -> Result<&'a Term> {
    let path = ancestor_path(repo, term)?;
    Ok(path[0])
}

/// Terms from the root down to `term` inclusive.
pub fn ancestor_path<'a>(repo: &'a dyn ContentRepository, term: &'a Term) -> Result<Vec<&'a Term>> {
    let mut path = vec![term];
    let mut current = term;

    while let Some(parent) = current.parent_id() {
        if path.len() > MAX_TERM_DEPTH {
            bail!(
                "term hierarchy of `{}` in `{}` is deeper than {MAX_TERM_DEPTH} levels",
                term.name,
                term.taxonomy
            );
        }
        current = repo.require_term(&current.taxonomy, parent)?;
        path.push(current);
    }

    path.reverse();
    Ok(path)
}

/// Name of the first assigned term that is not the parent of another assigned term.
///
/// Falls back to the first term when every assigned term is someone's parent,
/// which only happens with cyclic data.
fn bottom_level_name<'a>(terms: &[&'a Term]) -> &'a str {
    terms
        .iter()
        .find(|term| !terms.iter().any(|other| other.parent == term.id))
        .or_else(|| terms.first())
        .map_or(UNCATEGORIZED, |term| term.name.as_str())
}
