//! Text pane: paints plain lines clipped to its content rectangle.
//!
//! The simplest useful pane. Real dashboards bind richer panes (source
//! listing with a current-line marker, backtrace with frame selection);
//! this one carries static lines and is what the demo and the manager
//! tests draw with.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use super::Pane;
use crate::error::DrawResult;
use crate::layout::Rect;
use crate::terminal::OutputBuffer;

/// A pane painting a fixed list of text lines, top-aligned, clipped to its
/// bounds in both dimensions.
#[derive(Debug, Clone)]
pub struct TextPane {
    bounds: Rect,
    lines: Vec<String>,
}

impl TextPane {
    /// Create an empty text pane.
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            lines: Vec::new(),
        }
    }

    /// Create a text pane with content.
    pub fn with_lines(bounds: Rect, lines: Vec<String>) -> Self {
        Self { bounds, lines }
    }

    /// Replace the pane's content.
    pub fn set_lines(&mut self, lines: Vec<String>) {
        self.lines = lines;
    }

    /// Clip a line to at most `width` terminal columns, grapheme-aware.
    fn clip(line: &str, width: u16) -> String {
        if line.width() <= width as usize {
            return line.to_string();
        }
        let mut clipped = String::new();
        let mut used = 0usize;
        for grapheme in line.graphemes(true) {
            let w = grapheme.width();
            if used + w > width as usize {
                break;
            }
            clipped.push_str(grapheme);
            used += w;
        }
        clipped
    }
}

impl Pane for TextPane {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    fn paint(&mut self, out: &mut OutputBuffer) -> DrawResult<()> {
        if self.bounds.is_empty() {
            return Ok(());
        }
        let visible = self.lines.iter().take(self.bounds.height as usize);
        for (i, line) in visible.enumerate() {
            #[allow(clippy::cast_possible_truncation)]
            let y = self.bounds.y + i as u16;
            out.cursor_move(self.bounds.x, y);
            out.write_str(&Self::clip(line, self.bounds.width));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paints_within_bounds() {
        let mut pane = TextPane::with_lines(
            Rect::new(2, 1, 5, 2),
            vec!["abcdefgh".to_string(), "xy".to_string(), "dropped".to_string()],
        );
        let mut out = OutputBuffer::new();
        pane.paint(&mut out).unwrap();

        let text = String::from_utf8(out.as_bytes().to_vec()).unwrap();
        assert!(text.contains("abcde"));
        assert!(!text.contains("abcdef"));
        assert!(text.contains("xy"));
        assert!(!text.contains("dropped"));
    }

    #[test]
    fn test_empty_bounds_draw_nothing() {
        let mut pane = TextPane::with_lines(Rect::ZERO, vec!["hi".to_string()]);
        let mut out = OutputBuffer::new();
        pane.paint(&mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_clip_is_width_aware() {
        // Double-width characters count as two columns.
        assert_eq!(TextPane::clip("日本語", 4), "日本");
        assert_eq!(TextPane::clip("ascii", 10), "ascii");
    }
}
