//! `DrawError`: the recoverable failure class of a draw cycle.
//!
//! Everything that can go wrong while computing layout or painting panes is
//! funneled into this type and handled at the `update()` boundary. Failures
//! outside this class (programming errors) panic and propagate uncaught.

use std::error::Error;
use std::fmt;
use std::io;

/// Result alias for draw-cycle operations.
pub type DrawResult<T> = Result<T, DrawError>;

/// A recoverable failure during a single draw cycle.
#[derive(Debug)]
pub enum DrawError {
    /// The output sink or a terminal control call failed.
    Io(io::Error),
    /// The viewport size could not be queried.
    TerminalSize(io::Error),
    /// The layout configuration holds no templates at all.
    NoTemplates,
    /// A pane's paint call failed.
    Pane {
        /// Symbolic name of the pane that failed.
        name: String,
        /// The underlying failure reported by the pane.
        source: Box<dyn Error + Send + Sync>,
    },
}

impl DrawError {
    /// Render the error's origin trace as display lines, outermost first.
    ///
    /// Walks the `source()` chain; each nested cause becomes one line.
    /// Used by the fallback error panel, which truncates to the viewport.
    pub fn trace_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        let mut cause: Option<&(dyn Error + 'static)> = self.source();
        while let Some(err) = cause {
            lines.push(format!("caused by: {err}"));
            cause = err.source();
        }
        lines
    }
}

impl fmt::Display for DrawError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "terminal output failed: {err}"),
            Self::TerminalSize(err) => write!(f, "viewport size unavailable: {err}"),
            Self::NoTemplates => write!(f, "no layout templates configured"),
            Self::Pane { name, .. } => write!(f, "pane '{name}' failed to paint"),
        }
    }
}

impl Error for DrawError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) | Self::TerminalSize(err) => Some(err),
            Self::NoTemplates => None,
            Self::Pane { source, .. } => Some(source.as_ref()),
        }
    }
}

impl From<io::Error> for DrawError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}
