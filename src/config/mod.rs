//! Site-wide option record, loaded from `parsely.toml`.
//!
//! # Keys
//!
//! | Key                         | Default      | Effect                                         |
//! |-----------------------------|--------------|------------------------------------------------|
//! | `apikey`                    | `""`         | Site ID, required for any output               |
//! | `api_secret`                | `""`         | API secret (recommendation widget only)        |
//! | `content_id_prefix`         | `""`         | Prepended to numeric content IDs               |
//! | `use_top_level_cats`        | `false`      | Section is the root term instead of the leaf   |
//! | `custom_taxonomy_section`   | `"category"` | Taxonomy used to derive the section            |
//! | `cats_as_tags`              | `false`      | Fold category/taxonomy names into keywords     |
//! | `track_authenticated_users` | `true`       | `false` suppresses output for logged-in members|
//! | `lowercase_tags`            | `true`       | Lowercase every keyword                        |
//! | `force_https_canonicals`    | `false`      | Canonical URLs use `https://`                  |
//! | `disable_javascript`        | `false`      | Suppress the beacon loader                     |
//!
//! # Example
//!
//! ```toml
//! apikey = "example.com"
//! content_id_prefix = "WP-"
//! use_top_level_cats = true
//! lowercase_tags = false
//! ```

pub mod defaults;
mod error;
mod input;

pub use error::{ConfigError, OptionError};
pub use input::OptionsInput;

use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// The complete option record.
///
/// Every field is always present: keys missing from the file take the
/// defaults from [`defaults`], and `Options::default()` is the record used
/// when no file exists at all.
#[derive(Debug, Clone, PartialEq, Eq, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct Options {
    /// Site ID, e.g. `example.com`.
    #[serde(default)]
    pub apikey: String,

    /// API secret used by the recommendation widget.
    #[serde(default)]
    pub api_secret: String,

    /// Prefix prepended to content IDs (e.g. `WP-`).
    #[serde(default)]
    pub content_id_prefix: String,

    #[serde(default = "defaults::r#false")]
    #[educe(Default = defaults::r#false())]
    pub use_top_level_cats: bool,

    #[serde(default = "defaults::custom_taxonomy_section")]
    #[educe(Default = defaults::custom_taxonomy_section())]
    pub custom_taxonomy_section: String,

    #[serde(default = "defaults::r#false")]
    #[educe(Default = defaults::r#false())]
    pub cats_as_tags: bool,

    #[serde(default = "defaults::r#true")]
    #[educe(Default = defaults::r#true())]
    pub track_authenticated_users: bool,

    #[serde(default = "defaults::r#true")]
    #[educe(Default = defaults::r#true())]
    pub lowercase_tags: bool,

    #[serde(default = "defaults::r#false")]
    #[educe(Default = defaults::r#false())]
    pub force_https_canonicals: bool,

    #[serde(default = "defaults::r#false")]
    #[educe(Default = defaults::r#false())]
    pub disable_javascript: bool,
}

impl Options {
    /// Parse options from a TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let options: Options = toml::from_str(content).map_err(ConfigError::Toml)?;
        options.validate()?;
        Ok(options)
    }

    /// Load options from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Load options from `path`, falling back to defaults when the file does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::from_path(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Reject a site ID the settings form would not have accepted.
    ///
    /// An empty site ID is allowed; it only disables output.
    pub fn validate(&self) -> Result<()> {
        if self.is_configured() && (!self.apikey.contains('.') || self.apikey.contains(' ')) {
            bail!(ConfigError::Validation(format!(
                "site id `{}` should look like \"example.com\"",
                self.apikey
            )));
        }
        Ok(())
    }

    /// Whether a site ID has been configured.
    ///
    /// Without one, nothing is rendered at all.
    pub fn is_configured(&self) -> bool {
        !self.apikey.is_empty()
    }

    /// URL scheme prefix for canonical URLs.
    pub const fn scheme(&self) -> &'static str {
        if self.force_https_canonicals {
            "https://"
        } else {
            "http://"
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
