use crossterm::event::{KeyCode, KeyEventKind, KeyModifiers};
use rand::Rng;

use crate::core::event::{InputEvent, Key};
use crate::core::view::EventResult;
use crate::kernel::{Action, FormField};

use super::{mouse, Workbench};

pub(super) fn handle_input(workbench: &mut Workbench, event: &InputEvent) -> EventResult {
    match event {
        InputEvent::Key(key_event) => {
            if key_event.kind == KeyEventKind::Release {
                return EventResult::Ignored;
            }
            handle_key(workbench, Key::from(*key_event))
        }
        InputEvent::Mouse(mouse_event) => mouse::handle_mouse(workbench, mouse_event),
        InputEvent::Resize(..) => EventResult::Consumed,
        _ => EventResult::Ignored,
    }
}

fn handle_key(workbench: &mut Workbench, key: Key) -> EventResult {
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::CONTROL) => EventResult::Quit,
        (KeyCode::Esc, _) => {
            if workbench.tracker.cancel() {
                workbench.dispatch(Action::DragEnded);
            }
            EventResult::Consumed
        }
        (KeyCode::Tab, _) => {
            workbench.dispatch(Action::FormFocusNext);
            EventResult::Consumed
        }
        (KeyCode::BackTab, _) => {
            workbench.dispatch(Action::FormFocusPrev);
            EventResult::Consumed
        }
        (KeyCode::Enter, _) => {
            submit(workbench);
            EventResult::Consumed
        }
        (KeyCode::Backspace, _) => {
            workbench.dispatch(Action::FormBackspace);
            commit_columns_if_focused(workbench);
            EventResult::Consumed
        }
        (KeyCode::Up, _) => {
            workbench.dispatch(Action::FormSpin { delta: 1 });
            commit_columns_if_focused(workbench);
            EventResult::Consumed
        }
        (KeyCode::Down, _) => {
            workbench.dispatch(Action::FormSpin { delta: -1 });
            commit_columns_if_focused(workbench);
            EventResult::Consumed
        }
        (KeyCode::Left, _) | (KeyCode::Right, _)
            if workbench.state().ui.form.focus == FormField::Kind =>
        {
            let delta = if key.code == KeyCode::Right { 1 } else { -1 };
            workbench.dispatch(Action::FormSpin { delta });
            EventResult::Consumed
        }
        (KeyCode::PageUp, _) => {
            let page = workbench.state().ui.grid_view.view_height() as i32;
            workbench.dispatch(Action::GridScrollBy { delta: -page });
            EventResult::Consumed
        }
        (KeyCode::PageDown, _) => {
            let page = workbench.state().ui.grid_view.view_height() as i32;
            workbench.dispatch(Action::GridScrollBy { delta: page });
            EventResult::Consumed
        }
        (KeyCode::Char(ch), KeyModifiers::NONE) => {
            workbench.dispatch(Action::FormAppend { ch });
            commit_columns_if_focused(workbench);
            EventResult::Consumed
        }
        _ => EventResult::Ignored,
    }
}

/// Reads the form, samples the height (never user-controlled), prepends.
pub(super) fn submit(workbench: &mut Workbench) {
    let spec = workbench.state().ui.form.spec();
    let height = rand::thread_rng().gen_range(0..250);
    workbench.dispatch(Action::CellCreate { spec, height });
}

/// The column-count field applies live, like the reference's onChange
/// binding; the other fields only apply at submit.
pub(super) fn commit_columns_if_focused(workbench: &mut Workbench) {
    if workbench.state().ui.form.focus != FormField::GridColumns {
        return;
    }
    if let Some(columns) = workbench.state().ui.form.parsed_columns() {
        workbench.dispatch(Action::GridColumnsSet { columns });
    }
}
