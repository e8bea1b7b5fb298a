//! Screen manager: the draw-cycle orchestrator and lifecycle state machine.
//!
//! `Stopped → Started → (Updating)* → Stopped`. One manager instance owns
//! the physical terminal for the lifetime of the dashboard. Every debugger
//! stop triggers `update()`, which redraws the whole dashboard from
//! scratch: pick a template for the current size, resolve regions, build
//! panes, paint borders, paint panes, park the cursor below the lowest
//! region for the prompt.
//!
//! The single most important property here is that a broken cycle never
//! leaves the terminal in raw/hidden-cursor mode: the restoration step at
//! the end of `update()` runs on every branch, and `Drop` restores again
//! if the process unwinds past the manager.

use std::io::Write;
use std::sync::Arc;

use crate::border::{BorderPlan, SpacePolicy};
use crate::diag::DiagnosticLog;
use crate::error::{DrawError, DrawResult};
use crate::layout::{pick, resolve, LayoutTemplate, Rect, ResolvedRegion};
use crate::pane::{Pane, PaneRegistry, TextPane};
use crate::screen::intercept::{InterceptGate, TeeWriter};
use crate::terminal::{OutputBuffer, TerminalControl};

/// Static configuration for a screen manager, supplied once at startup.
#[derive(Debug, Clone)]
pub struct ScreenConfig {
    /// Ordered layout templates, most specific/large first. The first
    /// entry doubles as the fallback when nothing matches.
    pub templates: Vec<LayoutTemplate>,
    /// Whether blank filler regions draw their own frame.
    pub space_policy: SpacePolicy,
    /// Issue tracker pointed to by the fallback error panel.
    pub issue_url: String,
    /// Marker line framing appended diagnostic-log output.
    pub log_marker: String,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            templates: Vec::new(),
            space_policy: SpacePolicy::Open,
            issue_url: "https://github.com/lattice-tui/lattice/issues".to_string(),
            log_marker: "─".repeat(24),
        }
    }
}

impl ScreenConfig {
    /// Configuration with the given templates and defaults elsewhere.
    pub fn with_templates(templates: Vec<LayoutTemplate>) -> Self {
        Self {
            templates,
            ..Self::default()
        }
    }
}

/// The dashboard draw engine.
///
/// Construct one per process, hand out [`TeeWriter`] decorators for the
/// application's output path via [`ScreenManager::intercept_writer`], and
/// call [`ScreenManager::update`] on every debugger stop.
pub struct ScreenManager<T: TerminalControl, W: Write> {
    config: ScreenConfig,
    registry: PaneRegistry,
    terminal: T,
    sink: W,
    gate: InterceptGate,
    log: Option<Arc<dyn DiagnosticLog>>,
}

impl<T: TerminalControl, W: Write> ScreenManager<T, W> {
    /// Create a manager in the stopped state.
    pub fn new(config: ScreenConfig, registry: PaneRegistry, terminal: T, sink: W) -> Self {
        Self {
            config,
            registry,
            terminal,
            sink,
            gate: InterceptGate::new(),
            log: None,
        }
    }

    /// Attach a diagnostic log drained below the panes on each cycle.
    #[must_use]
    pub fn with_log(mut self, log: Arc<dyn DiagnosticLog>) -> Self {
        self.log = Some(log);
        self
    }

    /// Wrap an output sink in the interception decorator. The decorator
    /// mirrors writes into the side buffer only while the dashboard is
    /// started and no cycle is in flight.
    pub fn intercept_writer<O: Write>(&self, inner: O) -> TeeWriter<O> {
        self.gate.writer(inner)
    }

    /// Check whether the dashboard is active.
    pub fn is_started(&self) -> bool {
        self.gate.is_started()
    }

    /// Activate the dashboard. Idempotent.
    ///
    /// Enters the alternate screen buffer, clears it fully, and activates
    /// output interception. Teardown is guaranteed by `Drop` even if the
    /// caller never reaches `stop()`.
    ///
    /// # Errors
    /// Returns an error if the terminal refuses the alternate screen or
    /// the clear.
    pub fn start(&mut self) -> std::io::Result<()> {
        if self.gate.is_started() {
            return Ok(());
        }
        self.terminal.enter_alt_screen()?;
        self.terminal.hard_clear()?;
        self.gate.set_started(true);
        tracing::debug!("dashboard started");
        Ok(())
    }

    /// Run one full draw cycle.
    ///
    /// Starts the dashboard first if needed. Recoverable failures while
    /// computing layout or painting panes are contained here: the screen is
    /// cleared and a framed error panel is rendered instead, and the call
    /// still returns `Ok`. The terminal restoration step (cooked mode, echo
    /// on, cursor shown) runs on every branch.
    ///
    /// # Errors
    /// Returns an error only for failures of `start()` or of the
    /// restoration step itself.
    pub fn update(&mut self) -> std::io::Result<()> {
        if !self.gate.is_started() {
            self.start()?;
        }
        self.gate.set_updating(true);

        let cycle = self.draw_cycle();
        if let Err(err) = cycle {
            tracing::warn!(error = %err, "draw cycle failed, rendering error panel");
            if let Err(panel_err) = self.draw_error_panel(&err) {
                tracing::warn!(error = %panel_err, "error panel could not be drawn");
            }
        }

        // Draw paths report failure through Results rather than unwinding,
        // so this straight-line restore covers every branch above. Panics
        // (programmer errors) propagate, and Drop restores the terminal
        // during unwind.
        self.restore_terminal()
    }

    /// Deactivate the dashboard. No-op unless started.
    ///
    /// Leaves the alternate screen and flushes any intercepted output to
    /// the restored normal screen, framed by blank lines.
    ///
    /// # Errors
    /// Returns an error if leaving the alternate screen or writing the
    /// buffered output fails.
    pub fn stop(&mut self) -> std::io::Result<()> {
        if !self.gate.is_started() {
            return Ok(());
        }
        self.terminal.leave_alt_screen()?;
        self.terminal.show_cursor()?;
        self.gate.set_started(false);

        let buffered = self.gate.drain();
        if !buffered.is_empty() {
            self.sink.write_all(b"\n")?;
            self.sink.write_all(&buffered)?;
            self.sink.write_all(b"\n")?;
            self.sink.flush()?;
        }
        tracing::debug!("dashboard stopped");
        Ok(())
    }

    /// The fallible part of a cycle, contained at the `update()` boundary.
    fn draw_cycle(&mut self) -> DrawResult<()> {
        self.terminal.hide_cursor()?;
        self.terminal.clear()?;
        let (width, height) = self.terminal.size().map_err(DrawError::TerminalSize)?;

        let template =
            pick(&self.config.templates, width, height).ok_or(DrawError::NoTemplates)?;
        let regions = resolve(template, Rect::from_size(width, height));
        tracing::debug!(width, height, regions = regions.len(), "layout resolved");

        let mut out = OutputBuffer::new();
        BorderPlan::build(&regions, self.config.space_policy).paint(&mut out);

        // Panes are constructed with the full region rectangle, then shrunk
        // to the content rectangle once borders are down.
        let mut bottom: u16 = 0;
        let mut panes: Vec<(String, Box<dyn Pane>)> = Vec::new();
        for region in &regions {
            bottom = bottom.max(region.rect.bottom());
            let Some(name) = &region.pane else { continue };
            // Unknown names are skipped: border drawn, nothing painted.
            if let Some(pane) = self.registry.instantiate(name, region.rect) {
                panes.push((name.clone(), pane));
            }
        }
        for (name, pane) in &mut panes {
            let content = pane.bounds().shrink(1);
            pane.set_bounds(content);
            pane.paint(&mut out).map_err(|err| DrawError::Pane {
                name: name.clone(),
                source: Box::new(err),
            })?;
        }

        // Park the cursor one row below the lowest region: the next
        // interactive prompt line.
        out.cursor_move(0, bottom);
        self.append_diagnostics(&mut out, height);

        out.flush_to(&mut self.sink)?;
        Ok(())
    }

    /// Append pending diagnostic-log lines below the prompt line, framed
    /// by marker lines, then clear the log.
    fn append_diagnostics(&self, out: &mut OutputBuffer, height: u16) {
        let Some(log) = &self.log else { return };
        let lines = log.pending_lines();
        if lines.is_empty() {
            return;
        }
        let budget = height.saturating_sub(2) as usize;
        out.newline();
        out.write_str(&self.config.log_marker);
        out.newline();
        for line in lines.iter().take(budget) {
            out.write_str(line);
            out.newline();
        }
        out.write_str(&self.config.log_marker);
        out.newline();
        log.clear();
    }

    /// Render the fallback panel for a failed cycle: the error description,
    /// a truncated origin trace, and issue-tracker guidance, in one framed
    /// block. Best effort; the caller logs and ignores failures here.
    fn draw_error_panel(&mut self, err: &DrawError) -> DrawResult<()> {
        self.terminal.clear()?;
        // The size query may be the failing part; fall back to a safe
        // default rather than giving up on the panel.
        let (width, height) = self.terminal.size().unwrap_or((80, 24));

        let mut lines = vec![err.to_string()];
        let budget = height.saturating_sub(5) as usize;
        lines.extend(err.trace_lines().into_iter().take(budget));
        lines.push(String::new());
        // The URL goes on its own line so narrow panels clip the prose,
        // not the address.
        lines.push("The dashboard failed to draw. Please report this at:".to_string());
        lines.push(self.config.issue_url.clone());

        #[allow(clippy::cast_possible_truncation)]
        let panel_height = (lines.len() as u16).saturating_add(2).min(height);
        let rect = Rect::from_size(width, panel_height);
        let region = ResolvedRegion {
            pane: Some("error".to_string()),
            rect,
        };

        let mut out = OutputBuffer::new();
        BorderPlan::build(&[region], SpacePolicy::Open).paint(&mut out);
        TextPane::with_lines(rect.shrink(1), lines).paint(&mut out)?;
        out.cursor_move(0, rect.bottom());
        out.flush_to(&mut self.sink)?;
        Ok(())
    }

    /// The guaranteed final step of every `update()`: cooked mode, echo on,
    /// cursor shown, `updating` cleared. All three terminal calls are
    /// attempted even when an earlier one fails.
    fn restore_terminal(&mut self) -> std::io::Result<()> {
        let cooked = self.terminal.set_cooked();
        let echo = self.terminal.set_echo(true);
        let cursor = self.terminal.show_cursor();
        self.gate.set_updating(false);
        cooked.and(echo).and(cursor)
    }
}

impl<T: TerminalControl, W: Write> Drop for ScreenManager<T, W> {
    fn drop(&mut self) {
        if self.gate.is_started() {
            let _ = self.stop();
            let _ = self.terminal.set_cooked();
            let _ = self.terminal.set_echo(true);
        }
    }
}
