//! Page geometry for the formatted resume PDF.
//!
//! All distances are PDF points measured from the bottom-left corner of the page.

/// A4 in points (210mm × 297mm).
pub const A4_WIDTH_PT: f32 = 595.28;
pub const A4_HEIGHT_PT: f32 = 841.89;

/// Layout parameters for every page of the generated resume.
#[derive(Debug, Clone, PartialEq)]
pub struct PageConfig {
    pub page_width: f32,
    pub page_height: f32,
    /// One of the 14 standard PDF fonts, so no font program is embedded.
    pub font_name: String,
    pub font_size_pt: u8,
    /// Left margin, also the lowest baseline a line may be drawn at.
    pub margin: f32,
    pub line_height: f32,
    /// Baseline of the first line on page 1.
    pub first_page_cursor: f32,
    /// Baseline of the first line on every later page.
    pub next_page_cursor: f32,
}

/// Returns the default page config: A4, Helvetica 12pt, 13pt leading.
///
/// Page 1 starts lower (600pt) than continuation pages (800pt), leaving the top
/// of the first page empty.
pub fn default_page_config() -> PageConfig {
    PageConfig {
        page_width: A4_WIDTH_PT,
        page_height: A4_HEIGHT_PT,
        font_name: "Helvetica".to_string(),
        font_size_pt: 12,
        margin: 15.0,
        line_height: 13.0,
        first_page_cursor: 600.0,
        next_page_cursor: 800.0,
    }
}

impl PageConfig {
    /// Number of lines page 1 holds before the cursor drops below the margin.
    pub fn first_page_capacity(&self) -> usize {
        self.capacity_from(self.first_page_cursor)
    }

    /// Number of lines each continuation page holds.
    pub fn next_page_capacity(&self) -> usize {
        self.capacity_from(self.next_page_cursor)
    }

    fn capacity_from(&self, cursor: f32) -> usize {
        if cursor < self.margin || self.line_height <= 0.0 {
            return 1;
        }
        ((cursor - self.margin) / self.line_height).floor() as usize + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_a4_helvetica() {
        let config = default_page_config();
        assert_eq!(config.page_width, A4_WIDTH_PT);
        assert_eq!(config.page_height, A4_HEIGHT_PT);
        assert_eq!(config.font_name, "Helvetica");
        assert_eq!(config.font_size_pt, 12);
    }

    #[test]
    fn test_first_page_capacity_matches_cursor_math() {
        // floor((600 - 15) / 13) + 1
        assert_eq!(default_page_config().first_page_capacity(), 46);
    }

    #[test]
    fn test_next_page_capacity_matches_cursor_math() {
        // floor((800 - 15) / 13) + 1
        assert_eq!(default_page_config().next_page_capacity(), 61);
    }
}
