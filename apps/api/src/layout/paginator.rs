//! Fixed-step paginator: places each newline-delimited line one `line_height`
//! below the previous one and starts a new page once the cursor drops below
//! the margin. Long lines are not wrapped.

use crate::generation::markup::strip_markup;
use crate::layout::page_config::PageConfig;

/// A line of text anchored at its baseline position on a page.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub text: String,
    pub x: f32,
    pub y: f32,
}

/// Lays out `text` into pages of placed lines.
///
/// Markup characters are stripped first. A page is only emitted once it holds
/// a line, so the result never ends with a blank page; empty input still
/// yields one page with one empty line.
pub fn layout_lines(text: &str, config: &PageConfig) -> Vec<Vec<PlacedLine>> {
    let cleaned = strip_markup(text);

    let mut pages = Vec::new();
    let mut current = Vec::new();
    let mut y = config.first_page_cursor;

    for line in cleaned.split('\n') {
        current.push(PlacedLine {
            text: line.trim_end_matches('\r').to_string(),
            x: config.margin,
            y,
        });
        y -= config.line_height;

        if y < config.margin {
            pages.push(std::mem::take(&mut current));
            y = config.next_page_cursor;
        }
    }

    if !current.is_empty() {
        pages.push(current);
    }

    pages
}
