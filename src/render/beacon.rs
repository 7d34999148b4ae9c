//! Beacon loader and third-party analytics payloads.

use crate::{
    config::Options,
    content::{ContentRepository, ViewContext},
    page::audience_suppressed,
};
use quick_xml::escape::escape;
use serde::Serialize;
use serde_json::{Value, json};

pub const FBIA_IDENTIFIER: &str = "parsely-analytics-for-wordpress";
pub const FBIA_NAME: &str = "Parsely Analytics";

/// Async loader for `p.js`. Picks the CDN host by page protocol and never loads twice.
const LOADER: &str = r#"
    (function(s, p, d) {
        var h=d.location.protocol, i=p+"-"+s,
            e=d.getElementById(i), r=d.getElementById(p+"-root"),
            u=h==="https:"?"d1z2jf7jlzjs58.cloudfront.net"
                :"static."+p+".com";
        if (e) return;
        e = d.createElement(s); e.id = i; e.async = true;
        e.setAttribute('data-cfasync', 'false'); e.src = h+"//"+u+"/p.js"; r.appendChild(e);
    })("script", "parsely", document);
"#;

/// Instant Articles variant: manual page view with a fixed referrer.
const FBIA_CONFIG: &str = r#"
    PARSELY = {
        autotrack: false,
        onload: function() {
            PARSELY.beacon.trackPageView({
                urlref: 'http://facebook.com/instantarticles'
            });
            return true;
        }
    }
"#;

const FBIA_LOADER: &str = r#"
    (function(s, p, d) {
        var h=d.location.protocol, i=p+"-"+s,
            e=d.getElementById(i), r=d.getElementById(p+"-root"),
            u=h==="https:"?"d1z2jf7jlzjs58.cloudfront.net"
                :"static."+p+".com";
        if (e) return;
        e = d.createElement(s); e.id = i; e.async = true;
        e.src = h+"//"+u+"/p.js"; r.appendChild(e);
    })("script", "parsely", document);
"#;

// ============================================================================
// Beacon
// ============================================================================

/// Beacon markup for the current view, or `None` when it must not load.
///
/// Withheld without a site ID, with `disable_javascript`, on an unpublished
/// single post, and for members when authenticated tracking is off.
pub fn render_beacon(
    options: &Options,
    repo: &dyn ContentRepository,
    view: &ViewContext,
) -> Option<String> {
    if !options.is_configured() || options.disable_javascript {
        return None;
    }
    if let ViewContext::SinglePost(item) = view
        && !item.is_published()
    {
        return None;
    }
    if audience_suppressed(options, repo) {
        return None;
    }

    let site = escape(options.apikey.as_str());
    Some(format!(
        "<div id=\"parsely-root\" style=\"display: none\">\n    \
         <div id=\"parsely-cfg\" data-parsely-site=\"{site}\"></div>\n\
         </div>\n\
         <script data-cfasync=\"false\">{LOADER}</script>\n"
    ))
}

// ============================================================================
// AMP
// ============================================================================

/// AMP analytics vendor entry, keyed `parsely`. `None` without a site ID.
pub fn amp_analytics(options: &Options) -> Option<Value> {
    if !options.is_configured() {
        return None;
    }
    Some(json!({
        "parsely": {
            "type": "parsely",
            "attributes": {},
            "config_data": {
                "vars": { "apikey": options.apikey }
            }
        }
    }))
}

// ============================================================================
// Instant Articles
// ============================================================================

/// Analytics registration for Instant Articles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstantArticlesEmbed {
    pub identifier: &'static str,
    pub name: &'static str,
    pub payload: String,
}

pub fn instant_articles_embed(options: &Options) -> InstantArticlesEmbed {
    let site = escape(options.apikey.as_str());
    let payload = format!(
        "<script>{FBIA_CONFIG}</script>\n\
         <div id=\"parsely-root\" style=\"display: none\">\n    \
         <span id=\"parsely-cfg\" data-parsely-site=\"{site}\"></span>\n\
         </div>\n\
         <script>{FBIA_LOADER}</script>\n\
         <!-- END Parse.ly Include: Standard -->"
    );

    InstantArticlesEmbed {
        identifier: FBIA_IDENTIFIER,
        name: FBIA_NAME,
        payload,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::MemoryRepository;

    fn repo(visitor: Option<u64>) -> MemoryRepository {
        MemoryRepository::from_value(json!({
            "site": { "name": "Blog", "home_url": "http://blog.parsely.com", "members": [1] },
            "visitor": { "user_id": visitor },
            "items": [
                {
                    "id": 1, "kind": "post", "title": "Live",
                    "created": "2024-03-05T10:00:00Z", "modified": "2024-03-05T10:00:00Z",
                    "permalink": "http://blog.parsely.com/live/"
                },
                {
                    "id": 2, "kind": "post", "status": "draft", "title": "Draft",
                    "created": "2024-03-05T10:00:00Z", "modified": "2024-03-05T10:00:00Z",
                    "permalink": "http://blog.parsely.com/?p=2"
                }
            ]
        }))
        .unwrap()
    }

    fn options() -> Options {
        Options {
            apikey: "blog.parsely.com".into(),
            ..Options::default()
        }
    }

    #[test]
    fn test_beacon_markup() {
        let html = render_beacon(&options(), &repo(None), &ViewContext::FrontPage).unwrap();

        assert!(html.starts_with(
            "<div id=\"parsely-root\" style=\"display: none\">\n    \
             <div id=\"parsely-cfg\" data-parsely-site=\"blog.parsely.com\"></div>\n\
             </div>\n<script data-cfasync=\"false\">"
        ));
        assert!(html.contains("e.setAttribute('data-cfasync', 'false');"));
        assert!(html.contains(r#"})("script", "parsely", document);"#));
        assert!(html.trim_end().ends_with("</script>"));
    }

    #[test]
    fn test_beacon_withheld() {
        let repo = repo(None);
        let view = ViewContext::FrontPage;

        assert!(render_beacon(&Options::default(), &repo, &view).is_none());

        let disabled = Options { disable_javascript: true, ..options() };
        assert!(render_beacon(&disabled, &repo, &view).is_none());

        let draft = ViewContext::SinglePost(repo.content_item(2).unwrap().clone());
        assert!(render_beacon(&options(), &repo, &draft).is_none());

        let live = ViewContext::SinglePost(repo.content_item(1).unwrap().clone());
        assert!(render_beacon(&options(), &repo, &live).is_some());
    }

    #[test]
    fn test_beacon_member_visitor() {
        let repo = repo(Some(1));
        let view = ViewContext::Other;

        assert!(render_beacon(&options(), &repo, &view).is_some());

        let members_off = Options { track_authenticated_users: false, ..options() };
        assert!(render_beacon(&members_off, &repo, &view).is_none());

        // not a member of this site
        let outsider = self::repo(Some(2));
        assert!(render_beacon(&members_off, &outsider, &view).is_some());
    }

    #[test]
    fn test_beacon_escapes_site_id() {
        let options = Options { apikey: "a\"b.com".into(), ..Options::default() };
        let html = render_beacon(&options, &repo(None), &ViewContext::Other).unwrap();
        assert!(html.contains("data-parsely-site=\"a&quot;b.com\""));
    }

    #[test]
    fn test_amp_analytics() {
        let amp = amp_analytics(&options()).unwrap();
        assert_eq!(amp["parsely"]["type"], "parsely");
        assert_eq!(amp["parsely"]["attributes"], json!({}));
        assert_eq!(amp["parsely"]["config_data"]["vars"]["apikey"], "blog.parsely.com");

        assert!(amp_analytics(&Options::default()).is_none());
    }

    #[test]
    fn test_instant_articles_embed() {
        let embed = instant_articles_embed(&options());

        assert_eq!(embed.identifier, "parsely-analytics-for-wordpress");
        assert_eq!(embed.name, "Parsely Analytics");
        assert!(embed.payload.contains("facebook.com/instantarticles"));
        assert!(embed.payload.contains("autotrack: false"));
        assert!(embed.payload.contains(
            "<span id=\"parsely-cfg\" data-parsely-site=\"blog.parsely.com\"></span>"
        ));
        assert!(embed.payload.ends_with("<!-- END Parse.ly Include: Standard -->"));
    }
}
