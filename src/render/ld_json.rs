//! Structured-data block for search engines.

use super::{HtmlWriter, into_string, write_raw_script};
use crate::page::PageDescriptor;
use anyhow::Result;
use std::io::Cursor;

/// Render the descriptor as a JSON-LD `<script>` block.
///
/// `</` inside string values is written as `<\/` so the block cannot be
/// closed early by content.
pub fn render_ld_json(page: &PageDescriptor) -> Result<String> {
    let json = serde_json::to_string(page)?.replace("</", r"<\/");

    let mut writer = HtmlWriter::new(Cursor::new(Vec::new()));
    write_raw_script(&mut writer, &[("type", "application/ld+json")], &json)?;
    into_string(writer)
}
