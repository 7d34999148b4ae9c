//! The computed page description and its JSON-LD shape.
//!
//! | Variant       | Keys                                                        |
//! |---------------|-------------------------------------------------------------|
//! | `WebPage`     | `@context`, `@type`, optional `headline`, `url`             |
//! | `NewsArticle` | the above plus `mainEntityOfPage`, `thumbnailUrl`, `image`, |
//! |               | `dateCreated`, `datePublished`, `dateModified`,             |
//! |               | `articleSection`, `author`, `creator`, `publisher`,         |
//! |               | `keywords`                                                  |
//!
//! Keys added by the final filter live in [`WebPage::extra`] and are
//! serialized alongside the fixed ones.

use anyhow::{Result, bail};
use serde::Serialize;
use serde_json::{Map, Value};

pub const SCHEMA_CONTEXT: &str = "http://schema.org";

const ARTICLE_KEYS: [&str; 13] = [
    "@context",
    "@type",
    "mainEntityOfPage",
    "thumbnailUrl",
    "image",
    "dateCreated",
    "datePublished",
    "dateModified",
    "articleSection",
    "author",
    "creator",
    "publisher",
    "keywords",
];

fn text_field(key: &str, value: Value) -> Result<Option<String>> {
    match value {
        Value::String(text) => Ok(Some(text)),
        Value::Null => Ok(None),
        other => bail!("`{key}` must be a string, got {other}"),
    }
}

/// Page description, tagged by its schema.org `@type`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "@type")]
pub enum PageDescriptor {
    WebPage(WebPage),
    NewsArticle(NewsArticle),
}

impl PageDescriptor {
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::WebPage(_) => "WebPage",
            Self::NewsArticle(_) => "NewsArticle",
        }
    }

    /// Shared base fields.
    pub const fn base(&self) -> &WebPage {
        match self {
            Self::WebPage(page) => page,
            Self::NewsArticle(article) => &article.page,
        }
    }

    pub const fn base_mut(&mut self) -> &mut WebPage {
        match self {
            Self::WebPage(page) => page,
            Self::NewsArticle(article) => &mut article.page,
        }
    }

    pub fn headline(&self) -> Option<&str> {
        self.base().headline.as_deref()
    }

    pub fn url(&self) -> Option<&str> {
        self.base().url.as_deref()
    }

    pub const fn as_article(&self) -> Option<&NewsArticle> {
        match self {
            Self::NewsArticle(article) => Some(article),
            Self::WebPage(_) => None,
        }
    }

    /// Keys serialized from typed fields, excluding `headline` and `url`.
    pub const fn reserved_keys(&self) -> &'static [&'static str] {
        match self {
            Self::WebPage(_) => &["@context", "@type"],
            Self::NewsArticle(_) => &ARTICLE_KEYS,
        }
    }

    /// Add or replace a key.
    ///
    /// `headline` and `url` update the typed fields (a JSON `null` clears
    /// them). Any other key the variant already serializes is rejected, so
    /// every key appears once in the output.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Result<()> {
        let key = key.into();
        let value = value.into();

        match key.as_str() {
            "headline" => self.base_mut().headline = text_field(&key, value)?,
            "url" => self.base_mut().url = text_field(&key, value)?,
            _ if self.reserved_keys().contains(&key.as_str()) => {
                bail!("`{key}` is fixed for {} and cannot be replaced", self.type_name())
            }
            _ => {
                self.base_mut().extra.insert(key, value);
            }
        }
        Ok(())
    }

    /// Serialize into a JSON value.
    pub fn to_value(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}

impl Default for PageDescriptor {
    fn default() -> Self {
        Self::WebPage(WebPage::default())
    }
}

// ============================================================================
// WebPage
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebPage {
    #[serde(rename = "@context")]
    pub context: &'static str,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for WebPage {
    fn default() -> Self {
        Self {
            context: SCHEMA_CONTEXT,
            headline: None,
            url: None,
            extra: Map::new(),
        }
    }
}

impl WebPage {
    pub fn new(headline: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            headline: Some(headline.into()),
            url: Some(url.into()),
            ..Self::default()
        }
    }
}

// ============================================================================
// NewsArticle
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsArticle {
    #[serde(flatten)]
    pub page: WebPage,

    /// `content_id_prefix` + item id. Not part of the JSON-LD block.
    #[serde(skip)]
    pub content_id: String,

    pub main_entity_of_page: Typed<Identified>,
    /// Empty when the item has no image.
    pub thumbnail_url: String,
    pub image: Typed<Located>,
    pub date_created: String,
    pub date_published: String,
    pub date_modified: String,
    pub article_section: String,
    pub author: Vec<Typed<Named>>,
    pub creator: Vec<String>,
    pub publisher: Typed<Named>,
    pub keywords: Vec<String>,
}

/// A nested schema.org node: `{"@type": ..., ...fields}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Typed<T> {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    #[serde(flatten)]
    pub fields: T,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identified {
    #[serde(rename = "@id")]
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Located {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Named {
    pub name: String,
}

impl Typed<Identified> {
    pub fn web_page(id: impl Into<String>) -> Self {
        Self { kind: "WebPage", fields: Identified { id: id.into() } }
    }
}

impl Typed<Located> {
    pub fn image(url: impl Into<String>) -> Self {
        Self { kind: "ImageObject", fields: Located { url: url.into() } }
    }
}

impl Typed<Named> {
    pub fn person(name: impl Into<String>) -> Self {
        Self { kind: "Person", fields: Named { name: name.into() } }
    }

    pub fn organization(name: impl Into<String>) -> Self {
        Self { kind: "Organization", fields: Named { name: name.into() } }
    }
}
