//! Page geometry and text metrics shared by layout-aware backends.

/// Conversion factor from millimetres to PostScript points.
pub const MM_TO_PT: f32 = 72.0 / 25.4;

/// Physical page setup, in points.
///
/// The default matches the classic A4 portrait layout used for court forms:
/// 10 mm margins on the left, right and top, with a 15 mm reserve at the
/// bottom where the page break is triggered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageStyle {
    pub width: f32,
    pub height: f32,
    pub margin_left: f32,
    pub margin_right: f32,
    pub margin_top: f32,
    pub margin_bottom: f32,
}

impl PageStyle {
    /// A4 portrait with the standard form margins.
    pub fn a4() -> Self {
        PageStyle {
            width: 595.28,
            height: 841.89,
            margin_left: 10.0 * MM_TO_PT,
            margin_right: 10.0 * MM_TO_PT,
            margin_top: 10.0 * MM_TO_PT,
            margin_bottom: 15.0 * MM_TO_PT,
        }
    }

    /// Horizontal space available to text.
    pub fn content_width(&self) -> f32 {
        self.width - self.margin_left - self.margin_right
    }

    /// Vertical space available to text.
    pub fn content_height(&self) -> f32 {
        self.height - self.margin_top - self.margin_bottom
    }
}

impl Default for PageStyle {
    fn default() -> Self {
        PageStyle::a4()
    }
}

/// Type size and vertical rhythm for body text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Font size in points.
    pub font_size: f32,
    /// Baseline-to-baseline distance in points.
    pub leading: f32,
    /// Extra vertical gap inserted between paragraphs, in points.
    pub paragraph_spacing: f32,
}

impl Default for TextStyle {
    fn default() -> Self {
        TextStyle {
            font_size: 12.0,
            leading: 16.0,
            paragraph_spacing: 10.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a4_leaves_room_for_text() {
        let page = PageStyle::a4();
        assert!(page.content_width() > 500.0);
        assert!(page.content_height() > 700.0);
        assert!(page.margin_bottom > page.margin_top);
    }

    #[test]
    fn default_leading_exceeds_font_size() {
        let style = TextStyle::default();
        assert!(style.leading > style.font_size);
    }
}
