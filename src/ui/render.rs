//! Rendering contract and the default terminal renderer.

use super::settings;
use crate::orders::ProjectedOrder;
use crossterm::style::Stylize;
use std::io::{self, Write};

/// Injectable rendering interface used by the lookup loop and first-run setup.
///
/// [`Renderer`] is the terminal implementation; tests substitute a recording
/// sink.
pub trait RenderSink: Send + Sync {
    /// Render a lifecycle/status line.
    fn activity(&self, text: &str);
    /// Render a warning line.
    fn warn(&self, msg: &str);
    /// Render an error line.
    fn error(&self, msg: &str);
    /// Render a matched order on stdout.
    fn order(&self, order: &ProjectedOrder);
    /// Report that no fetched order matched the query.
    fn not_found(&self);
    /// Report loop termination.
    fn done(&self);
}

/// One line of terminal output.
#[derive(Debug, Clone, Copy)]
pub enum RenderEvent<'a> {
    Activity(&'a str),
    Warn(&'a str),
    Error(&'a str),
    Order(&'a ProjectedOrder),
    NotFound,
    Done,
}

/// Terminal renderer writing status to stderr and results to stdout.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Write `event` to `out` (order dumps, `Done.`) or `err` (everything else).
    pub fn render_to<O: Write, E: Write>(
        &self,
        event: RenderEvent<'_>,
        out: &mut O,
        err: &mut E,
    ) -> io::Result<()> {
        match event {
            RenderEvent::Activity(text) => {
                if self.color {
                    writeln!(err, "{}", text.with(settings::COLOR_ACTIVITY))
                } else {
                    writeln!(err, "{text}")
                }
            }
            RenderEvent::Warn(msg) => {
                if self.color {
                    writeln!(
                        err,
                        "{} {msg}",
                        settings::LABEL_WARNING.with(settings::COLOR_WARNING).bold()
                    )
                } else {
                    writeln!(err, "{} {msg}", settings::LABEL_WARNING)
                }
            }
            RenderEvent::Error(msg) => {
                if self.color {
                    writeln!(
                        err,
                        "{} {msg}",
                        settings::LABEL_ERROR.with(settings::COLOR_ERROR).bold()
                    )
                } else {
                    writeln!(err, "{} {msg}", settings::LABEL_ERROR)
                }
            }
            RenderEvent::Order(order) => writeln!(out, "{}", order.to_pretty_json()),
            RenderEvent::NotFound => writeln!(err, "{}", settings::MSG_NOT_FOUND),
            RenderEvent::Done => writeln!(out, "{}", settings::MSG_DONE),
        }
    }

    fn emit(&self, event: RenderEvent<'_>) {
        let stdout = io::stdout();
        let stderr = io::stderr();
        // A closed pipe must not abort the session.
        let _ = self.render_to(event, &mut stdout.lock(), &mut stderr.lock());
    }
}

impl RenderSink for Renderer {
    fn activity(&self, text: &str) {
        self.emit(RenderEvent::Activity(text));
    }

    fn warn(&self, msg: &str) {
        self.emit(RenderEvent::Warn(msg));
    }

    fn error(&self, msg: &str) {
        self.emit(RenderEvent::Error(msg));
    }

    fn order(&self, order: &ProjectedOrder) {
        self.emit(RenderEvent::Order(order));
    }

    fn not_found(&self) {
        self.emit(RenderEvent::NotFound);
    }

    fn done(&self) {
        self.emit(RenderEvent::Done);
    }
}
