//! # Rofi Script-Mode Protocol
//!
//! Rofi reads menu rows from the script's stdout. Rows and options may carry
//! out-of-band data introduced by a NUL byte, with the key and value separated
//! by the ASCII unit separator (`0x1F`):
//!
//! ```text
//! \0markup-rows\x1ftrue\n                           <- enable Pango markup
//! docs <span ...>(rust)</span>\0info\x1f{"name":...}  <- one row per link
//! ```
//!
//! The `info` value is handed back to the script through the `ROFI_INFO`
//! environment variable when the user picks the row. Rofi installations that
//! do not round-trip it only pass the visible row text as an argument, so the
//! visible text is built such that the link name can be recovered from it
//! (see [`visible_name`]).
//!
//! ## Known limitation
//!
//! Name recovery splits on the first [`SPAN_MARKER`]. A link whose `name`
//! itself contains `" <span "` cannot be resolved from visible text alone;
//! such links only resolve through the `info` payload.

use crate::error::{RofiWebError, Result};
use crate::model::Link;
use std::fmt;

/// Fallback accent color for the tag annotation.
pub const DEFAULT_ACCENT_COLOR: &str = "#928374";

/// Delimiter between the link name and the markup-wrapped tags in a row.
pub const SPAN_MARKER: &str = " <span ";

/// Option line that tells Rofi to interpret rows as Pango markup.
pub const MARKUP_ROWS_OPTION: &str = "\0markup-rows\x1ftrue";

const INFO_PREFIX: &str = "\0info\x1f";

/// One selectable menu row: the markup shown to the user and the hidden
/// payload Rofi hands back on selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub text: String,
    pub info: String,
}

impl Row {
    /// Encodes a link as a row. An empty `accent_color` falls back to
    /// [`DEFAULT_ACCENT_COLOR`].
    pub fn encode(link: &Link, accent_color: &str) -> Self {
        let color = if accent_color.is_empty() {
            DEFAULT_ACCENT_COLOR
        } else {
            accent_color
        };

        let text = format!(
            "{}{}color=\"{}\" size=\"10pt\" style=\"italic\">({})</span>",
            link.name, SPAN_MARKER, color, link.tags
        );

        Self {
            text,
            info: encode_payload(link),
        }
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.text, INFO_PREFIX, self.info)
    }
}

/// A full script-mode response: the markup option line followed by the rows.
///
/// Rows are separated by `\n` with no separator after the last one, so an
/// empty menu is just the option line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Menu {
    rows: Vec<Row>,
}

impl Menu {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    pub fn from_links(links: &[Link], accent_color: &str) -> Self {
        Self::new(
            links
                .iter()
                .map(|link| Row::encode(link, accent_color))
                .collect(),
        )
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl fmt::Display for Menu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", MARKUP_ROWS_OPTION)?;
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}", row)?;
        }
        Ok(())
    }
}

/// Serializes a link into the row payload. JSON escapes every control
/// character, so the payload never contains the NUL, `0x1F` or newline bytes
/// the protocol uses as delimiters.
pub fn encode_payload(link: &Link) -> String {
    serde_json::json!({
        "name": link.name,
        "tags": link.tags,
        "url": link.url,
    })
    .to_string()
}

pub fn decode_payload(payload: &str) -> Result<Link> {
    serde_json::from_str(payload).map_err(RofiWebError::Payload)
}

/// Recovers the link name from the visible text of a row.
///
/// Text without the markup wrapping is returned whole.
pub fn visible_name(text: &str) -> &str {
    match text.find(SPAN_MARKER) {
        Some(end) => &text[..end],
        None => text,
    }
}
