//! Canonical URL resolution.

use crate::{config::Options, content::RequestInfo};
use anyhow::{Context, Result, anyhow, bail};
use url::Url;

/// Canonical URL of a content item: configured scheme, permalink host and path.
///
/// Host and path are copied as written in the permalink, without case
/// folding, percent-encoding or dot-segment removal. User info, port, query
/// and fragment are dropped.
pub fn item_url(permalink: &str, options: &Options) -> Result<String> {
    let parsed =
        Url::parse(permalink).with_context(|| format!("invalid permalink `{permalink}`"))?;
    if parsed.host().is_none() {
        bail!("permalink `{permalink}` has no host");
    }

    let (host, path) = raw_host_and_path(permalink)
        .ok_or_else(|| anyhow!("permalink `{permalink}` has no authority"))?;
    Ok(format!("{}{host}{path}", options.scheme()))
}

/// Split `scheme://[user@]host[:port]/path?query#fragment` into the literal
/// host and path text.
fn raw_host_and_path(permalink: &str) -> Option<(&str, &str)> {
    let (_, rest) = permalink.split_once("://")?;
    let rest = &rest[..rest.find(['?', '#']).unwrap_or(rest.len())];
    let (authority, path) = rest.split_at(rest.find('/').unwrap_or(rest.len()));

    let host = authority.rsplit_once('@').map_or(authority, |(_, host)| host);
    let host = match host.rsplit_once(':') {
        Some((name, port)) if !name.is_empty() && port.bytes().all(|b| b.is_ascii_digit()) => {
            name
        }
        _ => host,
    };
    Some((host, path))
}

/// URL of the current request. Default ports are left out.
pub fn request_url(request: &RequestInfo, options: &Options) -> String {
    let mut url = format!("{}{}", options.scheme(), request.host);
    if !matches!(request.port, 80 | 443) {
        url.push_str(&format!(":{}", request.port));
    }
    url.push_str(&request.uri);
    url
}
