//! parsely-meta - Parse.ly page metadata derivation.
//!
//! Computes the structured-data descriptor (headline, authors, section,
//! keywords, dates, canonical URL) of a publishing site's pages and renders
//! it with the tracking beacon.
//!
//! ```ignore
//! let options = Options::load(Path::new("parsely.toml"))?;
//! let repo = MemoryRepository::from_path(Path::new("site.json"))?;
//! let view = ViewContext::SinglePost(repo.content_item(12)?.clone());
//!
//! if let Some(page) = DescriptorBuilder::new(&repo, &options).build(&view)? {
//!     println!("{}", render_ld_json(&page)?);
//! }
//! ```

pub mod config;
pub mod content;
pub mod logger;
pub mod page;
pub mod render;
pub mod utils;
