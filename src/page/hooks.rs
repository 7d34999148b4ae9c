//! Extension callbacks applied while a descriptor is built.
//!
//! | Hook      | Signature                                    | Applied                        |
//! |-----------|----------------------------------------------|--------------------------------|
//! | `tags`    | `(Vec<String>, ItemId) -> Vec<String>`       | after lowercasing, before clean|
//! | `authors` | `(Vec<String>, &ContentItem) -> Vec<String>` | after name derivation          |
//! | `section` | `(String, &ContentItem, &Options) -> String` | before clean                   |
//! | `page`    | `(PageDescriptor, Option<&ContentItem>, &Options) -> PageDescriptor` | last |
//!
//! Unset hooks are the identity. A hook error aborts the build and is
//! returned to the caller unchanged.

use super::PageDescriptor;
use crate::{
    config::Options,
    content::{ContentItem, ItemId},
};
use anyhow::Result;
use std::fmt;

pub type TagFilter = Box<dyn Fn(Vec<String>, ItemId) -> Result<Vec<String>>>;
pub type AuthorFilter = Box<dyn Fn(Vec<String>, &ContentItem) -> Result<Vec<String>>>;
pub type SectionFilter = Box<dyn Fn(String, &ContentItem, &Options) -> Result<String>>;
pub type PageFilter =
    Box<dyn Fn(PageDescriptor, Option<&ContentItem>, &Options) -> Result<PageDescriptor>>;

#[derive(Default)]
pub struct Hooks {
    tags: Option<TagFilter>,
    authors: Option<AuthorFilter>,
    section: Option<SectionFilter>,
    page: Option<PageFilter>,
}

impl Hooks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_tags(
        mut self,
        filter: impl Fn(Vec<String>, ItemId) -> Result<Vec<String>> + 'static,
    ) -> Self {
        self.tags = Some(Box::new(filter));
        self
    }

    pub fn on_authors(
        mut self,
        filter: impl Fn(Vec<String>, &ContentItem) -> Result<Vec<String>> + 'static,
    ) -> Self {
        self.authors = Some(Box::new(filter));
        self
    }

    pub fn on_section(
        mut self,
        filter: impl Fn(String, &ContentItem, &Options) -> Result<String> + 'static,
    ) -> Self {
        self.section = Some(Box::new(filter));
        self
    }

    pub fn on_page(
        mut self,
        filter: impl Fn(PageDescriptor, Option<&ContentItem>, &Options) -> Result<PageDescriptor>
        + 'static,
    ) -> Self {
        self.page = Some(Box::new(filter));
        self
    }

    pub(crate) fn filter_tags(&self, tags: Vec<String>, item: ItemId) -> Result<Vec<String>> {
        match &self.tags {
            Some(filter) => filter(tags, item),
            None => Ok(tags),
        }
    }

    pub(crate) fn filter_authors(
        &self,
        authors: Vec<String>,
        item: &ContentItem,
    ) -> Result<Vec<String>> {
        match &self.authors {
            Some(filter) => filter(authors, item),
            None => Ok(authors),
        }
    }

    pub(crate) fn filter_section(
        &self,
        section: String,
        item: &ContentItem,
        options: &Options,
    ) -> Result<String> {
        match &self.section {
            Some(filter) => filter(section, item, options),
            None => Ok(section),
        }
    }

    pub(crate) fn filter_page(
        &self,
        page: PageDescriptor,
        item: Option<&ContentItem>,
        options: &Options,
    ) -> Result<PageDescriptor> {
        match &self.page {
            Some(filter) => filter(page, item, options),
            None => Ok(page),
        }
    }
}

impl fmt::Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("tags", &self.tags.is_some())
            .field("authors", &self.authors.is_some())
            .field("section", &self.section.is_some())
            .field("page", &self.page.is_some())
            .finish()
    }
}
