//! Border arms: which cardinal directions a border cell connects to.

use bitflags::bitflags;

bitflags! {
    /// Directions in which a border cell has an adjoining segment.
    ///
    /// The union of arms contributed by every region touching a cell
    /// determines its glyph: opposite pairs make straight lines,
    /// perpendicular pairs make corners, three arms a T, four a cross.
    #[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
    pub struct Arms: u8 {
        /// A segment continues upward.
        const UP = 1 << 0;
        /// A segment continues downward.
        const DOWN = 1 << 1;
        /// A segment continues leftward.
        const LEFT = 1 << 2;
        /// A segment continues rightward.
        const RIGHT = 1 << 3;
    }
}

/// Select the single-line box-drawing glyph for an arm set.
///
/// A lone arm can only arise from a degenerate (1-cell-wide or -tall)
/// region; it degrades to the matching straight line rather than a
/// half-line glyph.
pub const fn glyph(arms: Arms) -> char {
    match arms.bits() {
        0b1111 => '┼',
        0b0111 => '┤', // up + down + left
        0b1011 => '├', // up + down + right
        0b1101 => '┴', // up + left + right
        0b1110 => '┬', // down + left + right
        0b0011 => '│',
        0b1100 => '─',
        0b1010 => '┌', // down + right
        0b0110 => '┐', // down + left
        0b1001 => '└', // up + right
        0b0101 => '┘', // up + left
        0b0001 | 0b0010 => '│',
        _ => '─',
    }
}
