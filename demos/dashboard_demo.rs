//! Dashboard demo: a static debugger-style dashboard drawn twice.
//!
//! Run with: cargo run --example dashboard_demo

use std::io;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use lattice::{
    CrosstermTerminal, LayoutNode, LayoutTemplate, MemoryLog, PaneRegistry, ScreenConfig,
    ScreenManager, TextPane, Weighted,
};

fn templates() -> Vec<LayoutTemplate> {
    // Wide terminals: source on the left, stacked inspection panes right,
    // menu strip at the bottom.
    let wide = LayoutTemplate::new(LayoutNode::row(vec![
        Weighted::with_weight(
            5,
            LayoutNode::column(vec![
                Weighted::with_weight(3, LayoutNode::span("source")),
                Weighted::with_weight(2, LayoutNode::column(vec![
                    Weighted::new(LayoutNode::span("backtrace")),
                    Weighted::new(LayoutNode::span("variables")),
                ])),
            ]),
        ),
        Weighted::new(LayoutNode::span("menu")),
    ]))
    .with_min_width(100)
    .with_min_height(24);

    // Everything else: a simple vertical stack.
    let narrow = LayoutTemplate::new(LayoutNode::row(vec![
        Weighted::with_weight(2, LayoutNode::span("source")),
        Weighted::new(LayoutNode::span("backtrace")),
        Weighted::new(LayoutNode::span("menu")),
    ]));

    vec![wide, narrow]
}

fn registry() -> PaneRegistry {
    let mut registry = PaneRegistry::new();
    registry.register("source", |rect| {
        Box::new(TextPane::with_lines(
            rect,
            vec![
                "  12   fn fibonacci(n: u64) -> u64 {".to_string(),
                "  13       if n < 2 {".to_string(),
                "→ 14           return n;".to_string(),
                "  15       }".to_string(),
                "  16       fibonacci(n - 1) + fibonacci(n - 2)".to_string(),
                "  17   }".to_string(),
            ],
        ))
    });
    registry.register("backtrace", |rect| {
        Box::new(TextPane::with_lines(
            rect,
            vec![
                "#0 fibonacci n=1".to_string(),
                "#1 fibonacci n=3".to_string(),
                "#2 main".to_string(),
            ],
        ))
    });
    registry.register("variables", |rect| {
        Box::new(TextPane::with_lines(rect, vec!["n = 1".to_string()]))
    });
    registry.register("menu", |rect| {
        Box::new(TextPane::with_lines(
            rect,
            vec!["step (s)  next (n)  continue (c)  quit (q)".to_string()],
        ))
    });
    registry
}

fn main() -> io::Result<()> {
    let log = Arc::new(MemoryLog::new());
    let mut screen = ScreenManager::new(
        ScreenConfig::with_templates(templates()),
        registry(),
        CrosstermTerminal::new(),
        io::stdout(),
    )
    .with_log(log.clone());

    // First stop.
    screen.update()?;
    thread::sleep(Duration::from_secs(2));

    // Second stop, with diagnostics pending.
    log.push("breakpoint 1 hit at demo.rs:14".to_string());
    screen.update()?;
    thread::sleep(Duration::from_secs(2));

    screen.stop()
}
