use ratatui::style::{Color, Modifier, Style};

use crate::kernel::CellKind;

#[derive(Debug, Clone)]
pub struct UiTheme {
    pub red: Color,
    pub orange: Color,
    pub blue: Color,
    pub form_border: Style,
    pub field: Style,
    pub field_focused: Style,
    pub field_label: Style,
    pub button: Style,
    pub board_border: Style,
    pub cell_label: Style,
    pub cell_meta: Style,
    pub dragging: Style,
    pub droppable: Style,
    pub drag_preview: Style,
    pub status: Style,
    pub status_hint: Style,
}

impl Default for UiTheme {
    fn default() -> Self {
        Self {
            red: Color::Red,
            orange: Color::Rgb(255, 165, 0),
            blue: Color::Blue,
            form_border: Style::default().fg(Color::DarkGray),
            field: Style::default().fg(Color::Gray),
            field_focused: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            field_label: Style::default().fg(Color::DarkGray),
            button: Style::default().fg(Color::White).bg(Color::Black),
            board_border: Style::default().fg(Color::DarkGray),
            cell_label: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            cell_meta: Style::default().fg(Color::DarkGray),
            dragging: Style::default().add_modifier(Modifier::DIM),
            droppable: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
            drag_preview: Style::default().fg(Color::Black).bg(Color::White),
            status: Style::default().fg(Color::Gray),
            status_hint: Style::default().fg(Color::DarkGray),
        }
    }
}

impl UiTheme {
    pub fn kind_color(&self, kind: CellKind) -> Color {
        match kind {
            CellKind::Red => self.red,
            CellKind::Orange => self.orange,
            CellKind::Blue => self.blue,
        }
    }
}
