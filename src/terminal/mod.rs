//! Terminal module: the control capability seam and the output accumulator.

mod control;
mod output;

pub use control::{CrosstermTerminal, TerminalControl};
pub use output::OutputBuffer;
