//! Page descriptor builder: one branch per view kind.
//!
//! | View                      | `@type`       | headline                              | url            |
//! |---------------------------|---------------|---------------------------------------|----------------|
//! | single post (published)   | `NewsArticle` | title                                 | item canonical |
//! | page (published)          | `WebPage`     | title                                 | item canonical |
//! | author archive            | `WebPage`     | `Author - <display name>`             | request        |
//! | category archive          | `WebPage`     | category name                         | request        |
//! | date archive              | `WebPage`     | `Yearly Archive - 2024`, ...          | request        |
//! | tag archive               | `WebPage`     | `Tagged - <tag>`                      | request        |
//! | front page                | `WebPage`     | site name                             | home URL       |
//! | anything else, unpublished| `WebPage`     | -                                     | -              |

use super::{
    AuthorProvider, Hooks, audience_suppressed,
    authors::resolve_authors,
    canonical::{item_url, request_url},
    descriptor::{NewsArticle, PageDescriptor, Typed, WebPage},
    tags::compute_tags,
    taxonomy::resolve_section,
};
use crate::{
    config::Options,
    content::{ContentItem, ContentRepository, DateArchive, ViewContext},
    debug,
    utils::{date, sanitize::clean},
};
use anyhow::Result;

pub struct DescriptorBuilder<'a> {
    repo: &'a dyn ContentRepository,
    options: &'a Options,
    hooks: Hooks,
    authors: Option<&'a dyn AuthorProvider>,
}

impl<'a> DescriptorBuilder<'a> {
    pub fn new(repo: &'a dyn ContentRepository, options: &'a Options) -> Self {
        Self {
            repo,
            options,
            hooks: Hooks::default(),
            authors: None,
        }
    }

    pub fn hooks(mut self, hooks: Hooks) -> Self {
        self.hooks = hooks;
        self
    }

    /// Co-author source consulted before the native author.
    pub fn author_provider(mut self, provider: &'a dyn AuthorProvider) -> Self {
        self.authors = Some(provider);
        self
    }

    /// Compute the descriptor for `view`.
    ///
    /// Returns `None` when nothing may be emitted: no site ID is configured,
    /// or the visitor is a member and authenticated tracking is off.
    pub fn build(&self, view: &ViewContext) -> Result<Option<PageDescriptor>> {
        if !self.options.is_configured() {
            debug!("page"; "no site id configured, skipping");
            return Ok(None);
        }
        if audience_suppressed(self.options, self.repo) {
            debug!("page"; "authenticated member, tracking disabled");
            return Ok(None);
        }

        let page = match view {
            ViewContext::SinglePost(item) if item.is_published() => {
                PageDescriptor::NewsArticle(self.article(item)?)
            }
            ViewContext::Page(item) if item.is_published() => PageDescriptor::WebPage(
                WebPage::new(clean(&item.title), item_url(&item.permalink, self.options)?),
            ),
            ViewContext::AuthorArchive(author) => self.archive(clean(&format!(
                "Author - {}",
                author.display_name
            ))),
            ViewContext::CategoryArchive(term) => self.archive(clean(&term.name)),
            ViewContext::DateArchive(archive) => self.archive(date_headline(archive)),
            ViewContext::TagArchive(term) => {
                self.archive(clean(&format!("Tagged - {}", term.name)))
            }
            ViewContext::FrontPage => PageDescriptor::WebPage(WebPage::new(
                clean(self.repo.site_name()),
                self.repo.home_url(),
            )),
            ViewContext::SinglePost(_) | ViewContext::Page(_) | ViewContext::Other => {
                PageDescriptor::default()
            }
        };

        let page = self.hooks.filter_page(page, view.item(), self.options)?;
        debug!("page"; "{} {}", page.type_name(), page.url().unwrap_or("-"));
        Ok(Some(page))
    }

    /// Archive pages point at the current request.
    fn archive(&self, headline: String) -> PageDescriptor {
        let url = request_url(self.repo.request(), self.options);
        PageDescriptor::WebPage(WebPage::new(headline, url))
    }

    fn article(&self, item: &ContentItem) -> Result<NewsArticle> {
        let authors = resolve_authors(self.repo, item, self.authors, &self.hooks)?;
        let section = resolve_section(self.repo, item, self.options, &self.hooks)?;
        let keywords = compute_tags(self.repo, item, self.options, &self.hooks)?;
        let url = item_url(&item.permalink, self.options)?;
        let image = self.repo.first_image_url(item).unwrap_or_default();

        let created = date::iso8601(item.created);
        let modified = date::iso8601(date::effective_modified(item.created, item.modified));

        Ok(NewsArticle {
            page: WebPage::new(clean(&item.title), url.clone()),
            content_id: format!("{}{}", self.options.content_id_prefix, item.id),
            main_entity_of_page: Typed::web_page(url),
            thumbnail_url: image.clone(),
            image: Typed::image(image),
            date_created: created.clone(),
            date_published: created,
            date_modified: modified,
            article_section: section,
            author: authors.iter().map(|name| Typed::person(name.as_str())).collect(),
            creator: authors,
            publisher: Typed::organization(self.repo.site_name()),
            keywords,
        })
    }
}

/// Headline of a date archive.
fn date_headline(archive: &DateArchive) -> String {
    match archive {
        DateArchive::Year(year) => format!("Yearly Archive - {year}"),
        DateArchive::Month(month) => format!("Monthly Archive - {}", date::month_year(*month)),
        DateArchive::Day(day) => format!("Daily Archive - {}", date::long_date(*day)),
        DateArchive::Time(time) => format!(
            "Hourly, Minutely, or Secondly Archive - {}",
            date::long_time(*time)
        ),
    }
}
