//! Raw settings input and its validation.
//!
//! The settings form submits every value as a string. [`OptionsInput`]
//! holds those strings untouched; [`OptionsInput::validate`] turns them into
//! a typed [`Options`] record or reports every rejected field at once.

use super::{OptionError, Options};
use crate::utils::sanitize::sanitize_text_field;
use serde::Deserialize;

/// String-valued settings as submitted by a form. Absent fields keep their defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OptionsInput {
    pub apikey: Option<String>,
    pub api_secret: Option<String>,
    pub content_id_prefix: Option<String>,
    pub use_top_level_cats: Option<String>,
    pub custom_taxonomy_section: Option<String>,
    pub cats_as_tags: Option<String>,
    pub track_authenticated_users: Option<String>,
    pub lowercase_tags: Option<String>,
    pub force_https_canonicals: Option<String>,
    pub disable_javascript: Option<String>,
}

impl OptionsInput {
    /// Set a field by option key.
    pub fn set(&mut self, key: &str, value: impl Into<String>) -> Result<(), OptionError> {
        let slot = match key {
            "apikey" => &mut self.apikey,
            "api_secret" => &mut self.api_secret,
            "content_id_prefix" => &mut self.content_id_prefix,
            "use_top_level_cats" => &mut self.use_top_level_cats,
            "custom_taxonomy_section" => &mut self.custom_taxonomy_section,
            "cats_as_tags" => &mut self.cats_as_tags,
            "track_authenticated_users" => &mut self.track_authenticated_users,
            "lowercase_tags" => &mut self.lowercase_tags,
            "force_https_canonicals" => &mut self.force_https_canonicals,
            "disable_javascript" => &mut self.disable_javascript,
            _ => return Err(OptionError::Unknown(key.to_owned())),
        };
        *slot = Some(value.into());
        Ok(())
    }

    /// Validate every field, collecting all errors instead of stopping at the first.
    ///
    /// - The site ID is required, lowercased and sanitized, and must look
    ///   like a domain (contain a `.` and no spaces).
    /// - Free-text fields are sanitized.
    /// - Flags must be exactly `"true"` or `"false"`.
    pub fn validate(&self) -> Result<Options, Vec<OptionError>> {
        let defaults = Options::default();
        let mut errors = Vec::new();

        let apikey = match self.apikey.as_deref() {
            None | Some("") => {
                errors.push(OptionError::MissingSiteId);
                String::new()
            }
            Some(raw) => {
                let apikey = sanitize_text_field(&raw.to_lowercase());
                if !apikey.contains('.') || apikey.contains(' ') {
                    errors.push(OptionError::MalformedSiteId(apikey.clone()));
                }
                apikey
            }
        };

        let text = |raw: &Option<String>, default: String| {
            raw.as_deref().map_or(default, sanitize_text_field)
        };

        let options = Options {
            apikey,
            api_secret: text(&self.api_secret, defaults.api_secret),
            content_id_prefix: text(&self.content_id_prefix, defaults.content_id_prefix),
            custom_taxonomy_section: text(
                &self.custom_taxonomy_section,
                defaults.custom_taxonomy_section,
            ),
            use_top_level_cats: parse_flag(
                "use_top_level_cats",
                self.use_top_level_cats.as_deref(),
                defaults.use_top_level_cats,
                &mut errors,
            ),
            cats_as_tags: parse_flag(
                "cats_as_tags",
                self.cats_as_tags.as_deref(),
                defaults.cats_as_tags,
                &mut errors,
            ),
            track_authenticated_users: parse_flag(
                "track_authenticated_users",
                self.track_authenticated_users.as_deref(),
                defaults.track_authenticated_users,
                &mut errors,
            ),
            lowercase_tags: parse_flag(
                "lowercase_tags",
                self.lowercase_tags.as_deref(),
                defaults.lowercase_tags,
                &mut errors,
            ),
            force_https_canonicals: parse_flag(
                "force_https_canonicals",
                self.force_https_canonicals.as_deref(),
                defaults.force_https_canonicals,
                &mut errors,
            ),
            disable_javascript: parse_flag(
                "disable_javascript",
                self.disable_javascript.as_deref(),
                defaults.disable_javascript,
                &mut errors,
            ),
        };

        if errors.is_empty() {
            Ok(options)
        } else {
            Err(errors)
        }
    }
}

/// Parse a `"true"` / `"false"` flag, recording an error for anything else.
fn parse_flag(
    key: &'static str,
    raw: Option<&str>,
    default: bool,
    errors: &mut Vec<OptionError>,
) -> bool {
    match raw {
        None => default,
        Some("true") => true,
        Some("false") => false,
        Some(other) => {
            errors.push(OptionError::NotBoolean {
                key,
                value: other.to_owned(),
            });
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(pairs: &[(&str, &str)]) -> OptionsInput {
        let mut input = OptionsInput::default();
        for (key, value) in pairs {
            input.set(key, *value).unwrap();
        }
        input
    }

    #[test]
    fn test_validate_minimal() {
        let options = input(&[("apikey", "Example.COM")]).validate().unwrap();

        assert_eq!(options.apikey, "example.com");
        assert!(options.lowercase_tags);
        assert_eq!(options.custom_taxonomy_section, "category");
    }

    #[test]
    fn test_validate_missing_site_id() {
        let errors = OptionsInput::default().validate().unwrap_err();
        assert_eq!(errors, vec![OptionError::MissingSiteId]);

        let errors = input(&[("apikey", "")]).validate().unwrap_err();
        assert_eq!(errors, vec![OptionError::MissingSiteId]);
    }

    #[test]
    fn test_validate_malformed_site_id() {
        let errors = input(&[("apikey", "localhost")]).validate().unwrap_err();
        assert_eq!(errors, vec![OptionError::MalformedSiteId("localhost".into())]);

        let errors = input(&[("apikey", "my site.com")]).validate().unwrap_err();
        assert_eq!(errors[0].key(), "apikey");
    }

    #[test]
    fn test_validate_sanitizes_text() {
        let options = input(&[
            ("apikey", " <b>example.com</b> "),
            ("content_id_prefix", "WP-\n"),
            ("custom_taxonomy_section", " sports "),
        ])
        .validate()
        .unwrap();

        assert_eq!(options.apikey, "example.com");
        assert_eq!(options.content_id_prefix, "WP-");
        assert_eq!(options.custom_taxonomy_section, "sports");
    }

    #[test]
    fn test_validate_flags() {
        let options = input(&[
            ("apikey", "example.com"),
            ("use_top_level_cats", "true"),
            ("lowercase_tags", "false"),
            ("force_https_canonicals", "true"),
        ])
        .validate()
        .unwrap();

        assert!(options.use_top_level_cats);
        assert!(!options.lowercase_tags);
        assert!(options.force_https_canonicals);
        assert!(!options.disable_javascript);
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let errors = input(&[
            ("apikey", "nodot"),
            ("cats_as_tags", "yes"),
            ("disable_javascript", "1"),
        ])
        .validate()
        .unwrap_err();

        let keys: Vec<_> = errors.iter().map(OptionError::key).collect();
        assert_eq!(keys, vec!["apikey", "cats_as_tags", "disable_javascript"]);
    }

    #[test]
    fn test_set_unknown_key() {
        let mut input = OptionsInput::default();
        assert_eq!(
            input.set("apikeys", "x"),
            Err(OptionError::Unknown("apikeys".into()))
        );
    }
}
