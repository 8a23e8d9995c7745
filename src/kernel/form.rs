use super::cell::{CellKind, CellSpec};

/// Advisory spinner ranges, mirroring the form widgets' min/max. Typed
/// values are not clamped against them.
pub const SPAN_SPIN_MAX: u16 = 4;
pub const GRID_COLUMNS_SPIN_MIN: u16 = 2;
pub const GRID_COLUMNS_SPIN_MAX: u16 = 12;

const FIELD_MAX_DIGITS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    ColSpan,
    RowSpan,
    Kind,
    GridColumns,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::ColSpan,
        FormField::RowSpan,
        FormField::Kind,
        FormField::GridColumns,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::ColSpan => "Col",
            Self::RowSpan => "Row",
            Self::Kind => "Kind",
            Self::GridColumns => "Columns",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::ColSpan => Self::RowSpan,
            Self::RowSpan => Self::Kind,
            Self::Kind => Self::GridColumns,
            Self::GridColumns => Self::ColSpan,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::ColSpan => Self::GridColumns,
            Self::RowSpan => Self::ColSpan,
            Self::Kind => Self::RowSpan,
            Self::GridColumns => Self::Kind,
        }
    }
}

/// The add-cell form: two digit fields for the spans, the kind selector,
/// and the live grid column-count field.
#[derive(Debug, Clone)]
pub struct FormState {
    pub col_value: String,
    pub row_value: String,
    pub kind: CellKind,
    pub columns_value: String,
    pub focus: FormField,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            col_value: String::new(),
            row_value: String::new(),
            kind: CellKind::Red,
            columns_value: DEFAULT_COLUMNS_VALUE.to_string(),
            focus: FormField::ColSpan,
        }
    }
}

const DEFAULT_COLUMNS_VALUE: &str = "4";

impl FormState {
    pub fn focus_set(&mut self, field: FormField) -> bool {
        if self.focus == field {
            return false;
        }
        self.focus = field;
        true
    }

    pub fn focus_next(&mut self) -> bool {
        self.focus = self.focus.next();
        true
    }

    pub fn focus_prev(&mut self) -> bool {
        self.focus = self.focus.prev();
        true
    }

    /// Types into the focused field. Digit fields admit digits only (the
    /// native numeric-input analog); the kind selector ignores typing.
    pub fn append(&mut self, ch: char) -> bool {
        if !ch.is_ascii_digit() {
            return false;
        }
        let Some(value) = self.focused_value_mut() else {
            return false;
        };
        if value.len() >= FIELD_MAX_DIGITS {
            return false;
        }
        value.push(ch);
        true
    }

    pub fn backspace(&mut self) -> bool {
        match self.focused_value_mut() {
            Some(value) => value.pop().is_some(),
            None => false,
        }
    }

    /// Up/Down on the focused field: digit fields step within their
    /// advisory range, the kind selector cycles.
    pub fn spin(&mut self, delta: i16) -> bool {
        match self.focus {
            FormField::Kind => {
                self.kind = if delta >= 0 {
                    self.kind.next()
                } else {
                    self.kind.prev()
                };
                true
            }
            FormField::ColSpan | FormField::RowSpan => {
                let current = self.focused_parsed().unwrap_or(0);
                let next = step(current, delta, 0, SPAN_SPIN_MAX);
                self.write_focused(next)
            }
            FormField::GridColumns => {
                let current = self.focused_parsed().unwrap_or(GRID_COLUMNS_SPIN_MIN);
                let next = step(
                    current,
                    delta,
                    GRID_COLUMNS_SPIN_MIN,
                    GRID_COLUMNS_SPIN_MAX,
                );
                self.write_focused(next)
            }
        }
    }

    /// Raw field values as a cell spec. Garbage saturates to a 0 span and
    /// propagates; nothing is rejected here.
    pub fn spec(&self) -> CellSpec {
        CellSpec {
            col: self.col_value.trim().parse().unwrap_or(0),
            row: self.row_value.trim().parse().unwrap_or(0),
            kind: self.kind,
        }
    }

    pub fn parsed_columns(&self) -> Option<u16> {
        self.columns_value.trim().parse().ok()
    }

    fn focused_value_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            FormField::ColSpan => Some(&mut self.col_value),
            FormField::RowSpan => Some(&mut self.row_value),
            FormField::GridColumns => Some(&mut self.columns_value),
            FormField::Kind => None,
        }
    }

    fn focused_parsed(&self) -> Option<u16> {
        let value = match self.focus {
            FormField::ColSpan => &self.col_value,
            FormField::RowSpan => &self.row_value,
            FormField::GridColumns => &self.columns_value,
            FormField::Kind => return None,
        };
        value.trim().parse().ok()
    }

    fn write_focused(&mut self, value: u16) -> bool {
        let text = value.to_string();
        match self.focused_value_mut() {
            Some(slot) if *slot != text => {
                *slot = text;
                true
            }
            _ => false,
        }
    }
}

fn step(current: u16, delta: i16, min: u16, max: u16) -> u16 {
    let next = current as i32 + delta as i32;
    next.clamp(min as i32, max as i32) as u16
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/form.rs"]
mod tests;
