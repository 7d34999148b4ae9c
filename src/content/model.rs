//! Content model: items, terms, authors and the current view.

use anyhow::{Result, bail};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub type ItemId = u64;
pub type TermId = u64;
pub type UserId = u64;

// ============================================================================
// Content Items
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Post,
    Page,
}

/// Publication status of a content item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PostStatus {
    #[default]
    Publish,
    Future,
    Draft,
    Pending,
    Private,
    Trash,
    AutoDraft,
}

/// One addressable post or page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: ItemId,
    pub kind: ItemKind,
    #[serde(default)]
    pub status: PostStatus,
    pub title: String,
    /// Raw body markup, scanned for an inline image when no featured image is set.
    #[serde(default)]
    pub content: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    /// Native author. `None` only for broken data.
    #[serde(default)]
    pub author: Option<UserId>,
    pub permalink: String,
    #[serde(default)]
    pub featured_image: Option<String>,
}

impl ContentItem {
    pub fn is_published(&self) -> bool {
        self.status == PostStatus::Publish
    }
}

// ============================================================================
// Terms
// ============================================================================

/// Node of a hierarchical taxonomy.
///
/// Parent chains must be acyclic; ancestor walks rely on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    pub id: TermId,
    pub name: String,
    /// Parent term id, `0` for a root term.
    #[serde(default)]
    pub parent: TermId,
    pub taxonomy: String,
}

impl Term {
    pub const fn is_root(&self) -> bool {
        self.parent == 0
    }

    pub const fn parent_id(&self) -> Option<TermId> {
        if self.is_root() { None } else { Some(self.parent) }
    }
}

// ============================================================================
// Authors
// ============================================================================

/// Name fields of a user account, in the order display names are derived from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthorIdentity {
    pub id: UserId,
    pub display_name: String,
    pub first_name: String,
    pub last_name: String,
    pub nickname: String,
    /// Login-derived name, always set by the host.
    pub user_nicename: String,
}

// ============================================================================
// Request
// ============================================================================

/// Host, port and path of the request being served.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestInfo {
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_uri")]
    pub uri: String,
}

const fn default_port() -> u16 {
    80
}

fn default_uri() -> String {
    "/".into()
}

impl Default for RequestInfo {
    fn default() -> Self {
        Self {
            host: "localhost".into(),
            port: default_port(),
            uri: default_uri(),
        }
    }
}

// ============================================================================
// View Context
// ============================================================================

/// The kind of page being rendered, plus its subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewContext {
    SinglePost(ContentItem),
    Page(ContentItem),
    AuthorArchive(AuthorIdentity),
    CategoryArchive(Term),
    DateArchive(DateArchive),
    TagArchive(Term),
    FrontPage,
    Other,
}

impl ViewContext {
    /// Content item behind the view, if any.
    pub const fn item(&self) -> Option<&ContentItem> {
        match self {
            Self::SinglePost(item) | Self::Page(item) => Some(item),
            _ => None,
        }
    }
}

/// Date archive granularity, carrying the date parts of the archive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateArchive {
    Year(i32),
    Month(NaiveDate),
    Day(NaiveDate),
    Time(NaiveDateTime),
}

impl FromStr for DateArchive {
    type Err = anyhow::Error;

    /// Parse `yyyy`, `yyyy-mm`, `yyyy-mm-dd` or `yyyy-mm-ddThh:mm:ss`.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Ok(time) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
            return Ok(Self::Time(time));
        }
        if let Ok(day) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Ok(Self::Day(day));
        }
        if let Ok(month) = NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d") {
            return Ok(Self::Month(month));
        }
        if s.len() == 4
            && let Ok(year) = s.parse::<i32>()
        {
            return Ok(Self::Year(year));
        }
        bail!("invalid archive date `{s}`, expected yyyy[-mm[-dd[Thh:mm:ss]]]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    #[test]
    fn test_date_archive_parse() {
        assert_eq!("2024".parse::<DateArchive>().unwrap(), DateArchive::Year(2024));

        let march = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!("2024-03".parse::<DateArchive>().unwrap(), DateArchive::Month(march));

        let fifth = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!("2024-03-05".parse::<DateArchive>().unwrap(), DateArchive::Day(fifth));

        let time = fifth.and_time(NaiveTime::from_hms_opt(15, 4, 5).unwrap());
        assert_eq!(
            "2024-03-05T15:04:05".parse::<DateArchive>().unwrap(),
            DateArchive::Time(time)
        );
    }

    #[test]
    fn test_date_archive_parse_invalid() {
        assert!("24".parse::<DateArchive>().is_err());
        assert!("2024-13".parse::<DateArchive>().is_err());
        assert!("march".parse::<DateArchive>().is_err());
    }

    #[test]
    fn test_term_parent() {
        let root = Term {
            id: 1,
            name: "News".into(),
            parent: 0,
            taxonomy: "category".into(),
        };
        assert!(root.is_root());
        assert_eq!(root.parent_id(), None);

        let child = Term { id: 2, parent: 1, ..root };
        assert_eq!(child.parent_id(), Some(1));
    }

    #[test]
    fn test_post_status_serde() {
        let status: PostStatus = serde_json::from_str("\"auto-draft\"").unwrap();
        assert_eq!(status, PostStatus::AutoDraft);
        let status: PostStatus = serde_json::from_str("\"publish\"").unwrap();
        assert_eq!(status, PostStatus::Publish);
    }
}
