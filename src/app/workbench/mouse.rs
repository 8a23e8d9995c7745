use crossterm::event::MouseEvent;

use crate::core::view::EventResult;
use crate::kernel::{Action, Cell, SwapDirection};
use crate::ui::hit::HitTarget;
use crate::ui::pointer::PointerEvent;

use super::dnd_rules::BoardDragRules;
use super::{input, Workbench};

pub(super) fn handle_mouse(workbench: &mut Workbench, event: &MouseEvent) -> EventResult {
    let events = {
        let rules = BoardDragRules {
            board: &workbench.store.state().board,
        };
        workbench.tracker.on_mouse(event, &workbench.hits, &rules)
    };

    if events.is_empty() {
        return EventResult::Ignored;
    }

    for pointer_event in events {
        match pointer_event {
            PointerEvent::Click { target } => apply_click(workbench, target),
            PointerEvent::DragStart { id } => {
                workbench.dispatch(Action::DragStarted { id });
            }
            PointerEvent::DragHover { id } => {
                workbench.dispatch(Action::DragHoverSet { id });
            }
            PointerEvent::DragMove { pos } => {
                workbench.pending_edge_sample = Some((pos.x, pos.y));
            }
            PointerEvent::Drop { payload, target } => apply_drop(workbench, &payload, target),
            PointerEvent::DragEnd => {
                workbench.dispatch(Action::DragEnded);
            }
            PointerEvent::Scroll { delta } => {
                workbench.dispatch(Action::GridScrollBy { delta });
            }
        }
    }

    EventResult::Consumed
}

fn apply_click(workbench: &mut Workbench, target: HitTarget) {
    match target {
        HitTarget::FormField(field) => {
            workbench.dispatch(Action::FormFocusSet { field });
        }
        HitTarget::Submit => input::submit(workbench),
        HitTarget::CellPrev { index } => {
            workbench.dispatch(Action::CellSwapAdjacent {
                index,
                dir: SwapDirection::Prev,
            });
        }
        HitTarget::CellNext { index } => {
            workbench.dispatch(Action::CellSwapAdjacent {
                index,
                dir: SwapDirection::Next,
            });
        }
        HitTarget::CellDelete { id } => {
            workbench.dispatch(Action::CellDelete { id });
        }
        HitTarget::Cell(_) => {}
    }
}

/// Resolves a drop: the payload captured at drag start names the source
/// cell. Malformed or stale payloads are ignored, not errors.
fn apply_drop(workbench: &mut Workbench, payload: &str, target: crate::kernel::CellId) {
    match serde_json::from_str::<Cell>(payload) {
        Ok(source) => {
            workbench.dispatch(Action::CellSwapByIds {
                source: source.id,
                dest: target,
            });
        }
        Err(error) => {
            tracing::warn!(%error, "drag payload did not deserialize");
        }
    }
}
