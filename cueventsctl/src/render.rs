//! Text and JSON rendering of a sorted list.

use std::fmt::Write;

use cuevents_core::{ContextKind, SortController};
use serde_json::json;

/// Header line plus one row per record, in display order.
pub fn list_table(controller: &SortController) -> String {
    let state = controller.state();
    let show_location = controller.context().requires_location();

    let mut out = format!(
        "{} (sorted by {}, {})\n",
        controller.context().name(),
        state.key.label(),
        state.order.label()
    );

    let name_width = controller
        .records()
        .iter()
        .map(|e| e.name().len())
        .max()
        .unwrap_or(0);
    let location_width = controller
        .records()
        .iter()
        .filter_map(|e| e.location())
        .map(str::len)
        .max()
        .unwrap_or(0);

    for event in controller.records() {
        let _ = write!(out, "{:<14}  {:<name_width$}", event.date(), event.name());
        if show_location {
            let _ = write!(
                out,
                "  {:<location_width$}",
                event.location().unwrap_or_default()
            );
        }
        let marker = if event.rsvp_status().is_confirmed() {
            "[x]"
        } else {
            "[ ]"
        };
        let _ = writeln!(
            out,
            "  {:>15}  {} {}",
            event.interested_label(),
            marker,
            event.rsvp_status()
        );
    }
    out
}

/// Ordered records with the list's sort state.
pub fn list_json(list: ContextKind, controller: &SortController) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&json!({
        "list": list,
        "state": controller.state(),
        "records": controller.records(),
    }))
}

/// Sort menu, marking the active entry.
pub fn menu(controller: &SortController) -> String {
    let mut out = String::new();
    for entry in controller.menu() {
        let marker = if entry.active { '*' } else { ' ' };
        let _ = writeln!(out, "{marker} {:<18} {}  [{}]", entry.key, entry.label, entry.icon);
    }
    out
}
