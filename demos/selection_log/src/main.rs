//! Drives a multi-select list through a short scripted session and logs every
//! selection change. Run with `RUST_LOG=debug` to also see controller logs.

use anyhow::Context;
use trellis_core::Span;
use trellis_ui::{ListSelectionController, Modifiers, SelectMode, SelectionEvent};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut rows: Vec<String> = (0..20).map(|i| format!("Row {i}")).collect();
    let mut ctrl = ListSelectionController::new(SelectMode::Multi).with_item_count(rows.len());

    ctrl.subscribe(|event| match event {
        SelectionEvent::Changed { added, removed } => {
            log::info!("changed: +{added:?} -{removed:?}")
        }
        SelectionEvent::Shifted {
            index,
            delta,
            removed,
        } => log::info!("shifted {delta:+} at {index}, dropped {removed:?}"),
        SelectionEvent::Cleared { removed } => log::info!("cleared {removed:?}"),
    });

    ctrl.press(2, Modifiers::NONE)?;
    ctrl.press(6, Modifiers::SHIFT)?;
    ctrl.press(10, Modifiers::CTRL)?;
    ctrl.press(4, Modifiers::CTRL)?;
    log::info!("selected: {}", ctrl.selection());

    rows.insert(3, "New row".to_string());
    ctrl.items_inserted(3)?;
    log::info!("after insert: {}", ctrl.selection());

    rows.drain(5..9);
    ctrl.items_removed(5, 4)?;
    log::info!("after removal: {}", ctrl.selection());

    ctrl.set_selected_range(Span::new(0, rows.len()))
        .context("selecting one past the end should fail")
        .unwrap_or_else(|err| log::warn!("{err:#}"));

    for index in ctrl.selection().indices() {
        log::info!("  {}", rows[index]);
    }

    ctrl.clear_selection();
    Ok(())
}
