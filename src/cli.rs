//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use anyhow::{Context, Result, anyhow, bail};
use clap::{Parser, Subcommand};
use parsely_meta::content::{
    ContentItem, ContentRepository, DateArchive, ItemId, ItemKind, TAG_TAXONOMY, TermId, UserId,
    ViewContext,
};
use std::path::PathBuf;

/// Parse.ly page metadata and beacon renderer
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Options file (default: parsely.toml)
    #[arg(short = 'C', long, default_value = "parsely.toml")]
    pub config: PathBuf,

    /// Site snapshot (JSON) providing content, users and the current request
    #[arg(short, long)]
    pub site: Option<PathBuf>,

    /// Print debug messages
    #[arg(short, long)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Compute the page descriptor for a view and print its JSON-LD block
    Page {
        #[command(subcommand)]
        view: ViewArg,

        /// Print the raw descriptor as JSON instead of a script block
        #[arg(long, global = true)]
        json: bool,
    },

    /// Print the beacon loader, if it may load for the view
    Beacon {
        /// Render for this single post instead of a generic page
        #[arg(long)]
        post: Option<ItemId>,
    },

    /// Print the AMP analytics configuration
    Amp,

    /// Print the Instant Articles analytics embed
    Fbia,

    /// Validate settings given as key=value pairs
    Validate {
        /// e.g. apikey=example.com cats_as_tags=true
        #[arg(value_parser = parse_key_value, required = true)]
        pairs: Vec<(String, String)>,
    },
}

/// View to compute a descriptor for
#[derive(Subcommand, Debug, Clone)]
pub enum ViewArg {
    /// Single post
    Post { id: ItemId },
    /// Static page
    Page { id: ItemId },
    /// Author archive
    Author { id: UserId },
    /// Category archive
    Category { id: TermId },
    /// Tag archive
    Tag { id: TermId },
    /// Date archive: yyyy, yyyy-mm, yyyy-mm-dd or yyyy-mm-ddThh:mm:ss
    Date { date: DateArchive },
    /// Front page
    Front,
    /// Any other view
    Other,
}

impl ViewArg {
    /// Look up the subject of the view in the repository.
    pub fn resolve(&self, repo: &dyn ContentRepository) -> Result<ViewContext> {
        let view = match self {
            Self::Post { id } => ViewContext::SinglePost(item_of_kind(repo, *id, ItemKind::Post)?),
            Self::Page { id } => ViewContext::Page(item_of_kind(repo, *id, ItemKind::Page)?),
            Self::Author { id } => ViewContext::AuthorArchive(
                repo.user(*id)
                    .cloned()
                    .ok_or_else(|| anyhow!("No user with id {id}"))?,
            ),
            Self::Category { id } => {
                ViewContext::CategoryArchive(repo.require_term("category", *id)?.clone())
            }
            Self::Tag { id } => ViewContext::TagArchive(repo.require_term(TAG_TAXONOMY, *id)?.clone()),
            Self::Date { date } => ViewContext::DateArchive(*date),
            Self::Front => ViewContext::FrontPage,
            Self::Other => ViewContext::Other,
        };
        Ok(view)
    }
}

fn item_of_kind(repo: &dyn ContentRepository, id: ItemId, kind: ItemKind) -> Result<ContentItem> {
    let item = repo.content_item(id)?;
    if item.kind != kind {
        bail!("item {id} is a {:?}, not a {kind:?}", item.kind);
    }
    Ok(item.clone())
}

fn parse_key_value(s: &str) -> Result<(String, String)> {
    let (key, value) = s
        .split_once('=')
        .with_context(|| format!("expected key=value, got `{s}`"))?;
    Ok((key.trim().to_owned(), value.to_owned()))
}
