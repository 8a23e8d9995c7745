use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::core::event::MousePosition;
use crate::kernel::CellId;

use super::hit::{HitMap, HitTarget};

/// Small movement allowance before a press turns into a drag, so click
/// jitter does not start one.
const DRAG_THRESHOLD: u16 = 2;

const WHEEL_SCROLL_STEP: i32 = 2;

/// How a drag gesture obtains its payload and decides where it may land.
pub trait DragRules {
    fn payload_for(&self, source: CellId) -> Option<String>;
    fn can_drop(&self, payload: &str, target: CellId) -> bool;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PointerEvent {
    Click { target: HitTarget },
    DragStart { id: CellId },
    DragMove { pos: MousePosition },
    DragHover { id: Option<CellId> },
    Drop { payload: String, target: CellId },
    DragEnd,
    Scroll { delta: i32 },
}

#[derive(Debug, Clone)]
struct PressedState {
    button: MouseButton,
    start: MousePosition,
    click: Option<HitTarget>,
    drag_source: Option<CellId>,
}

#[derive(Debug, Clone)]
struct DragSession {
    source: CellId,
    payload: String,
    over: Option<CellId>,
}

/// Per-gesture pointer state machine: Idle -> pressed -> dragging -> Idle.
/// The payload is captured once at drag start so a drop can resolve the
/// source even after the board changed underneath it.
#[derive(Debug, Default)]
pub struct PointerTracker {
    pressed: Option<PressedState>,
    drag: Option<DragSession>,
    last_pos: Option<MousePosition>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn drag_source(&self) -> Option<CellId> {
        self.drag.as_ref().map(|d| d.source)
    }

    pub fn drag_over(&self) -> Option<CellId> {
        self.drag.as_ref().and_then(|d| d.over)
    }

    pub fn last_pos(&self) -> Option<MousePosition> {
        self.last_pos
    }

    /// Aborts any in-flight gesture. Returns whether a drag was active.
    pub fn cancel(&mut self) -> bool {
        self.pressed = None;
        self.drag.take().is_some()
    }

    pub fn on_mouse(
        &mut self,
        event: &MouseEvent,
        hits: &HitMap,
        rules: &impl DragRules,
    ) -> Vec<PointerEvent> {
        let mut out = Vec::new();
        let pos = MousePosition::from_event(event);
        self.last_pos = Some(pos);

        match event.kind {
            MouseEventKind::Down(button) => {
                self.pressed = Some(PressedState {
                    button,
                    start: pos,
                    click: hits.hit(pos.x, pos.y),
                    drag_source: hits.hit_cell(pos.x, pos.y),
                });
                self.drag = None;
            }
            MouseEventKind::Drag(_) => {
                let Some(pressed) = self.pressed.clone() else {
                    return out;
                };

                if self.drag.is_none() && manhattan(pressed.start, pos) >= DRAG_THRESHOLD as u32 {
                    let Some(source) = pressed.drag_source else {
                        return out;
                    };
                    let Some(payload) = rules.payload_for(source) else {
                        return out;
                    };
                    self.drag = Some(DragSession {
                        source,
                        payload,
                        over: None,
                    });
                    out.push(PointerEvent::DragStart { id: source });
                }

                if let Some(drag) = &mut self.drag {
                    let over = hits
                        .hit_cell(pos.x, pos.y)
                        .filter(|t| *t != drag.source && rules.can_drop(&drag.payload, *t));
                    if over != drag.over {
                        drag.over = over;
                        out.push(PointerEvent::DragHover { id: over });
                    }
                    out.push(PointerEvent::DragMove { pos });
                }
            }
            MouseEventKind::Up(button) => {
                let pressed = self.pressed.take();
                let drag = self.drag.take();

                if let Some(drag) = drag {
                    // Drop (if any) precedes DragEnd.
                    if let Some(target) = drag.over {
                        out.push(PointerEvent::Drop {
                            payload: drag.payload,
                            target,
                        });
                    }
                    out.push(PointerEvent::DragEnd);
                } else if let Some(pressed) = pressed {
                    if pressed.button == button {
                        if let Some(target) = pressed.click {
                            out.push(PointerEvent::Click { target });
                        }
                    }
                }
            }
            MouseEventKind::ScrollUp => out.push(PointerEvent::Scroll {
                delta: -WHEEL_SCROLL_STEP,
            }),
            MouseEventKind::ScrollDown => out.push(PointerEvent::Scroll {
                delta: WHEEL_SCROLL_STEP,
            }),
            MouseEventKind::Moved
            | MouseEventKind::ScrollLeft
            | MouseEventKind::ScrollRight => {}
        }

        out
    }
}

fn manhattan(a: MousePosition, b: MousePosition) -> u32 {
    let dx = (a.x as i32 - b.x as i32).unsigned_abs();
    let dy = (a.y as i32 - b.y as i32).unsigned_abs();
    dx + dy
}

#[cfg(test)]
#[path = "../../tests/unit/ui/pointer.rs"]
mod tests;
