use super::*;
use crate::kernel::cell::CellKind;

#[test]
fn defaults_match_the_reference_form() {
    let form = FormState::default();
    assert_eq!(form.focus, FormField::ColSpan);
    assert_eq!(form.kind, CellKind::Red);
    assert_eq!(form.columns_value, "4");
    assert!(form.col_value.is_empty());
    assert!(form.row_value.is_empty());
}

#[test]
fn append_admits_digits_only() {
    let mut form = FormState::default();
    assert!(form.append('3'));
    assert!(!form.append('x'));
    assert!(!form.append(' '));
    assert_eq!(form.col_value, "3");
}

#[test]
fn append_caps_field_length() {
    let mut form = FormState::default();
    assert!(form.append('1'));
    assert!(form.append('2'));
    assert!(form.append('3'));
    assert!(!form.append('4'));
    assert_eq!(form.col_value, "123");
}

#[test]
fn kind_field_ignores_typing_and_backspace() {
    let mut form = FormState::default();
    form.focus = FormField::Kind;
    assert!(!form.append('5'));
    assert!(!form.backspace());
}

#[test]
fn backspace_removes_last_digit() {
    let mut form = FormState::default();
    form.focus = FormField::GridColumns;
    assert!(form.backspace());
    assert!(form.columns_value.is_empty());
    assert!(!form.backspace());
}

#[test]
fn focus_cycles_and_wraps() {
    let mut form = FormState::default();
    for expected in [
        FormField::RowSpan,
        FormField::Kind,
        FormField::GridColumns,
        FormField::ColSpan,
    ] {
        form.focus_next();
        assert_eq!(form.focus, expected);
    }
    form.focus_prev();
    assert_eq!(form.focus, FormField::GridColumns);
}

#[test]
fn span_spinner_clamps_to_its_advisory_range() {
    let mut form = FormState::default();
    assert!(form.spin(1));
    assert_eq!(form.col_value, "1");
    form.col_value = "4".to_string();
    assert!(!form.spin(1));
    assert_eq!(form.col_value, "4");
    form.col_value = "0".to_string();
    assert!(!form.spin(-1));
}

#[test]
fn columns_spinner_clamps_between_2_and_12() {
    let mut form = FormState::default();
    form.focus = FormField::GridColumns;
    form.columns_value = "12".to_string();
    assert!(!form.spin(1));
    form.columns_value = "2".to_string();
    assert!(!form.spin(-1));
    form.columns_value = "5".to_string();
    assert!(form.spin(-1));
    assert_eq!(form.columns_value, "4");
}

#[test]
fn kind_spinner_cycles() {
    let mut form = FormState::default();
    form.focus = FormField::Kind;
    assert!(form.spin(1));
    assert_eq!(form.kind, CellKind::Orange);
    assert!(form.spin(-1));
    assert_eq!(form.kind, CellKind::Red);
    assert!(form.spin(-1));
    assert_eq!(form.kind, CellKind::Blue);
}

#[test]
fn spec_passes_garbage_through_as_zero_spans() {
    let mut form = FormState::default();
    let spec = form.spec();
    assert_eq!((spec.col, spec.row), (0, 0));

    form.col_value = "2".to_string();
    form.row_value = "9".to_string();
    let spec = form.spec();
    assert_eq!((spec.col, spec.row), (2, 9));
}

#[test]
fn parsed_columns_is_none_for_empty_input() {
    let mut form = FormState::default();
    assert_eq!(form.parsed_columns(), Some(4));
    form.columns_value.clear();
    assert_eq!(form.parsed_columns(), None);
}
