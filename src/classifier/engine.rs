//! Classification pipeline for a single line

use super::category::Category;
use super::detectors::DetectorState;
use super::history::History;
use super::rules::{first_match, RuleContext};
use super::Line;
use tracing::trace;

/// Assign a category to `line`, given what came before it.
///
/// Evaluation order: thread dump containment, server sniffing, block
/// detectors, then the rule table. Only `state` is mutated; `history` is
/// read-only here and the caller records the result.
pub fn classify(line: &Line, history: &History, state: &mut DetectorState) -> Category {
    let trimmed = line.trimmed();

    if let Some(category) = state.track_thread_dump(trimmed) {
        trace!("thread dump -> {}", category);
        return category;
    }

    state.sniff_server(trimmed);

    if let Some(category) = state.track_blocks(trimmed) {
        trace!("block detector -> {}", category);
        return category;
    }

    let ctx = RuleContext {
        trimmed,
        history,
        server: state.server(),
    };
    match first_match(&ctx) {
        Some(rule) => {
            trace!("rule {} -> {}", rule.name, rule.category);
            rule.category
        }
        None => Category::Other,
    }
}
