//! Output rendering: JSON-LD block, beacon loader and integration payloads.
//!
//! | Function                   | Output                                        |
//! |----------------------------|-----------------------------------------------|
//! | [`render_ld_json`]         | `<script type="application/ld+json">` block   |
//! | [`render_beacon`]          | `#parsely-root` config + async `p.js` loader  |
//! | [`amp_analytics`]          | AMP analytics vendor config                   |
//! | [`instant_articles_embed`] | Instant Articles analytics embed              |

mod beacon;
mod ld_json;

pub use beacon::{
    FBIA_IDENTIFIER, FBIA_NAME, InstantArticlesEmbed, amp_analytics, instant_articles_embed,
    render_beacon,
};
pub use ld_json::render_ld_json;

use anyhow::Result;
use quick_xml::{
    Writer,
    events::{BytesEnd, BytesStart, BytesText, Event},
};
use std::io::Cursor;

type HtmlWriter = Writer<Cursor<Vec<u8>>>;

/// Write `<script attrs...>body</script>` with `body` emitted verbatim.
///
/// Script content is never entity-decoded by browsers, so the caller is
/// responsible for keeping `</` out of `body`.
fn write_raw_script(writer: &mut HtmlWriter, attrs: &[(&str, &str)], body: &str) -> Result<()> {
    let mut elem = BytesStart::new("script");
    for (k, v) in attrs {
        elem.push_attribute((*k, *v));
    }
    writer.write_event(Event::Start(elem))?;
    writer.write_event(Event::Text(BytesText::from_escaped(body)))?;
    writer.write_event(Event::End(BytesEnd::new("script")))?;
    Ok(())
}

fn into_string(writer: HtmlWriter) -> Result<String> {
    Ok(String::from_utf8(writer.into_inner().into_inner())?)
}
