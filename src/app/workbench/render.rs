use ratatui::layout::{Position, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::kernel::{Action, Cell, DragUiState, FormField};
use crate::ui::hit::HitTarget;
use crate::views::grid;

use super::{Workbench, FORM_HEIGHT, STATUS_HEIGHT};

pub(super) fn render(workbench: &mut Workbench, frame: &mut Frame, area: Rect) {
    workbench.hits.clear();
    workbench.last_cursor_pos = None;
    workbench.last_board_area = None;

    if area.height < FORM_HEIGHT + STATUS_HEIGHT + 2 || area.width < 20 {
        frame.render_widget(Paragraph::new("terminal too small"), area);
        return;
    }

    let form_area = Rect::new(area.x, area.y, area.width, FORM_HEIGHT);
    let board_area = Rect::new(
        area.x,
        area.y + FORM_HEIGHT,
        area.width,
        area.height - FORM_HEIGHT - STATUS_HEIGHT,
    );
    let status_area = Rect::new(
        area.x,
        area.y + area.height - STATUS_HEIGHT,
        area.width,
        STATUS_HEIGHT,
    );

    render_form(workbench, frame, form_area);
    render_board(workbench, frame, board_area);
    render_drag_preview(workbench, frame, area);
    render_status(workbench, frame, status_area);

    if let Some((x, y)) = workbench.last_cursor_pos {
        frame.set_cursor_position(Position::new(x, y));
    }
}

fn render_form(workbench: &mut Workbench, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(workbench.theme.form_border)
        .title("add cell");
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    let form = workbench.store.state().ui.form.clone();
    let y = inner.y;
    let mut x = inner.x.saturating_add(1);

    for field in FormField::ALL {
        let label = field.label();
        let value = match field {
            FormField::ColSpan => form.col_value.clone(),
            FormField::RowSpan => form.row_value.clone(),
            FormField::Kind => form.kind.as_str().to_string(),
            FormField::GridColumns => form.columns_value.clone(),
        };
        let value_width = match field {
            FormField::Kind => 6,
            _ => 3,
        };

        let label_w = label.len() as u16;
        let boxed = format!("[{:<1$}]", value, value_width);
        let boxed_w = boxed.len() as u16;
        if x + label_w + 1 + boxed_w > inner.right() {
            break;
        }

        frame.render_widget(
            Paragraph::new(label).style(workbench.theme.field_label),
            Rect::new(x, y, label_w, 1),
        );
        x += label_w + 1;

        let rect = Rect::new(x, y, boxed_w, 1);
        let style = if form.focus == field {
            workbench.theme.field_focused
        } else {
            workbench.theme.field
        };
        frame.render_widget(Paragraph::new(boxed).style(style), rect);
        workbench.hits.push(rect, HitTarget::FormField(field));

        if form.focus == field && field != FormField::Kind {
            let cursor_x = rect.x + 1 + value.len().min(value_width) as u16;
            workbench.last_cursor_pos = Some((cursor_x, y));
        }
        x += boxed_w + 2;
    }

    let button = "[ Add ]";
    let button_w = button.len() as u16;
    if x + button_w <= inner.right() {
        let rect = Rect::new(x, y, button_w, 1);
        frame.render_widget(
            Paragraph::new(button).style(workbench.theme.button),
            rect,
        );
        workbench.hits.push(rect, HitTarget::Submit);
    }
}

fn render_board(workbench: &mut Workbench, frame: &mut Frame, area: Rect) {
    let (cells, columns, drag) = {
        let state = workbench.store.state();
        (
            state.board.cells().to_vec(),
            state.board.grid_columns(),
            state.ui.drag,
        )
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(workbench.theme.board_border)
        .title(format!("board · {} cells", cells.len()));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }
    workbench.last_board_area = Some(inner);

    let layout = grid::layout(&cells, columns);
    workbench.dispatch(Action::GridViewportSet {
        view_height: inner.height,
        content_height: layout.total_rows,
    });
    let scroll = workbench.store.state().ui.grid_view.scroll_offset;

    for (index, (_, rel)) in layout.rects(inner.width).iter().enumerate() {
        let cell = &cells[index];
        let top = inner.y as i32 + rel.y as i32 - scroll as i32;
        let bottom = top + rel.height as i32;
        if bottom <= inner.y as i32 || top >= inner.bottom() as i32 {
            continue;
        }

        let top_clip = (inner.y as i32 - top).max(0) as u16;
        let visible_y = top.max(inner.y as i32) as u16;
        let visible_h = (bottom.min(inner.bottom() as i32) - visible_y as i32) as u16;
        let x = inner.x.saturating_add(rel.x);
        if x >= inner.right() {
            continue;
        }
        let width = rel.width.min(inner.right() - x);
        let visible = Rect::new(x, visible_y, width, visible_h);

        render_cell(workbench, frame, cell, index, visible, top_clip, drag);
    }
}

fn render_cell(
    workbench: &mut Workbench,
    frame: &mut Frame,
    cell: &Cell,
    index: usize,
    visible: Rect,
    top_clip: u16,
    drag: DragUiState,
) {
    let is_dragging = drag.dragging == Some(cell.id);
    let is_droppable = drag.droppable == Some(cell.id);
    let drag_active = drag.is_dragging();

    let dragging_style = workbench.theme.dragging;
    let dim = |style: Style| {
        if is_dragging {
            style.patch(dragging_style)
        } else {
            style
        }
    };

    let border_style = if is_droppable {
        workbench.theme.droppable
    } else {
        dim(Style::default().fg(workbench.theme.kind_color(cell.kind)))
    };
    let block = Block::default().borders(Borders::ALL).border_style(border_style);
    let content = block.inner(visible);

    frame.render_widget(Clear, visible);
    frame.render_widget(block, visible);
    workbench.hits.push(visible, HitTarget::Cell(cell.id));
    if content.width == 0 || content.height == 0 {
        return;
    }

    let header_visible = top_clip == 0;
    if header_visible {
        let y = content.y;
        let label = format!("{}.", index + 1);
        let label_w = (label.len() as u16).min(content.width);
        frame.render_widget(
            Paragraph::new(label).style(dim(workbench.theme.cell_label)),
            Rect::new(content.x, y, label_w, 1),
        );

        let prev_x = content.x + label_w + 1;
        if prev_x + 7 <= content.right() {
            let prev_rect = Rect::new(prev_x, y, 3, 1);
            let next_rect = Rect::new(prev_x + 4, y, 3, 1);
            frame.render_widget(
                Paragraph::new("[<]").style(dim(workbench.theme.button)),
                prev_rect,
            );
            frame.render_widget(
                Paragraph::new("[>]").style(dim(workbench.theme.button)),
                next_rect,
            );
            // Controls are dead while any drag is in flight.
            if !drag_active {
                workbench.hits.push(prev_rect, HitTarget::CellPrev { index });
                workbench.hits.push(next_rect, HitTarget::CellNext { index });
            }
        }

        if content.width >= 3 {
            let del_rect = Rect::new(content.right() - 3, y, 3, 1);
            frame.render_widget(
                Paragraph::new("[x]").style(dim(workbench.theme.button)),
                del_rect,
            );
            if !drag_active {
                workbench
                    .hits
                    .push(del_rect, HitTarget::CellDelete { id: cell.id });
            }
        }
    }

    let body_y = if header_visible {
        content.y + 1
    } else {
        content.y
    };
    let available = content.bottom().saturating_sub(body_y);
    if available == 0 {
        return;
    }
    let skip = if header_visible {
        0
    } else {
        top_clip.saturating_sub(1) as usize
    };
    let json = serde_json::to_string_pretty(cell).unwrap_or_default();
    let lines: Vec<Line> = json
        .lines()
        .skip(skip)
        .take(available as usize)
        .map(|l| Line::from(l.to_string()))
        .collect();
    frame.render_widget(
        Paragraph::new(lines).style(dim(workbench.theme.cell_meta)),
        Rect::new(content.x, body_y, content.width, available),
    );
}

fn render_drag_preview(workbench: &mut Workbench, frame: &mut Frame, area: Rect) {
    let Some(source) = workbench.tracker.drag_source() else {
        return;
    };
    let Some(pos) = workbench.tracker.last_pos() else {
        return;
    };

    let label = match workbench.store.state().board.get(source) {
        Some(cell) => format!(" {} {}x{} ", cell.kind, cell.col, cell.row),
        None => format!(" cell {} ", source),
    };
    let width = (UnicodeWidthStr::width(label.as_str()) as u16).min(area.width);
    if width == 0 || area.height == 0 {
        return;
    }

    let mut x = pos.x.saturating_add(1);
    let mut y = pos.y.saturating_add(1);
    if x.saturating_add(width) > area.right() {
        x = area.right().saturating_sub(width);
    }
    if y >= area.bottom() {
        y = area.bottom() - 1;
    }
    x = x.max(area.x);
    y = y.max(area.y);

    let rect = Rect::new(x, y, width, 1);
    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(label).style(workbench.theme.drag_preview),
        rect,
    );
}

fn render_status(workbench: &mut Workbench, frame: &mut Frame, area: Rect) {
    let state = workbench.store.state();
    let mut left = format!(
        " {} cells · {} columns",
        state.board.len(),
        state.board.grid_columns()
    );
    if let Some(id) = state.ui.drag.dragging {
        left.push_str(&format!(" · dragging {id}"));
        if let Some(over) = state.ui.drag.droppable {
            left.push_str(&format!(" → {over}"));
        }
    }
    frame.render_widget(
        Paragraph::new(left).style(workbench.theme.status),
        area,
    );

    let hint = "tab fields · enter add · drag to swap · ^q quit ";
    let hint_w = hint.len() as u16;
    if hint_w < area.width {
        let rect = Rect::new(area.right() - hint_w, area.y, hint_w, 1);
        frame.render_widget(
            Paragraph::new(hint).style(workbench.theme.status_hint),
            rect,
        );
    }
}
