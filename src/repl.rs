//! Sequential read-prompt-lookup loop.
//!
//! Each non-empty line runs a full lookup before the next prompt is shown. An
//! empty line or end of input ends the session.

use crate::api::OrderSource;
use crate::error::LookupError;
use crate::lookup::{lookup_order, LookupOutcome};
use crate::ui::input::LineReader;
use crate::ui::render::RenderSink;
use crate::ui::settings;

/// What to do when a lookup fails on the network or while decoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FetchErrorPolicy {
    /// Report the error and prompt again.
    #[default]
    Continue,
    /// Abort the session with the error.
    FailFast,
}

/// Counters for one finished session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub queries: usize,
    pub found: usize,
    pub failed: usize,
}

/// Run the interactive loop until empty input or end of input.
pub async fn run_repl(
    input: &mut dyn LineReader,
    source: &dyn OrderSource,
    renderer: &dyn RenderSink,
    policy: FetchErrorPolicy,
) -> Result<SessionSummary, LookupError> {
    let mut summary = SessionSummary::default();

    loop {
        let query = match input.read_line(settings::PROMPT_ORDER_QUERY)? {
            Some(line) if !line.is_empty() => line,
            _ => break,
        };
        summary.queries += 1;

        match lookup_order(source, &query).await {
            Ok(LookupOutcome::Found(order)) => {
                summary.found += 1;
                renderer.order(&order);
            }
            Ok(LookupOutcome::NotFound) => renderer.not_found(),
            Err(err) => {
                summary.failed += 1;
                if policy == FetchErrorPolicy::FailFast {
                    return Err(err.into());
                }
                tracing::warn!(error = %err, "lookup failed");
                renderer.error(&format!("lookup failed: {err}"));
            }
        }
    }

    renderer.done();
    tracing::debug!(?summary, "session finished");
    Ok(summary)
}
