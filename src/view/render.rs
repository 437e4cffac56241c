//! Terminal rendering of a scene
//!
//! One scene pixel unit maps to one terminal cell. The activator is always
//! drawn; the content panel and its rows only while the scene shows them.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;

use crate::menu::{Menu, MenuState};
use crate::types::Rectangle;
use crate::view::scene::Scene;

/// Colors for the activator and the menu panel
#[derive(Debug, Clone, Copy)]
pub struct MenuColors {
    pub activator: Color,
    pub activator_open: Color,
    pub panel_bg: Color,
    pub item: Color,
    pub selected: Color,
    pub highlight_bg: Color,
    pub status: Color,
}

impl Default for MenuColors {
    fn default() -> Self {
        Self {
            activator: Color::White,
            activator_open: Color::Cyan,
            panel_bg: Color::Black,
            item: Color::White,
            selected: Color::Cyan,
            highlight_bg: Color::DarkGray,
            status: Color::DarkGray,
        }
    }
}

/// Layout information for hit testing
#[derive(Debug, Clone, Default)]
pub struct MenuLayout {
    pub activator_area: Rect,
    /// Visible part of the panel, `None` while closed
    pub content_area: Option<Rect>,
    /// Visible rows as (row index, area)
    pub item_areas: Vec<(usize, Rect)>,
}

fn rect_contains(area: Rect, x: u16, y: u16) -> bool {
    x >= area.x && x < area.x + area.width && y >= area.y && y < area.y + area.height
}

impl MenuLayout {
    /// Check if a point is on the activator
    pub fn is_activator(&self, x: u16, y: u16) -> bool {
        rect_contains(self.activator_area, x, y)
    }

    /// Get the row index at a point, if any
    pub fn item_at(&self, x: u16, y: u16) -> Option<usize> {
        self.item_areas
            .iter()
            .find(|(_, area)| rect_contains(*area, x, y))
            .map(|(row, _)| *row)
    }

    /// Check if a point is inside the visible panel
    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.content_area
            .map(|area| rect_contains(area, x, y))
            .unwrap_or(false)
    }
}

/// Convert a scene rectangle to the cells it covers inside `bounds`.
///
/// Edges are rounded to the nearest cell. Returns `None` when nothing of the
/// rectangle is left after clipping.
pub fn to_cells(rect: &Rectangle, bounds: Rect) -> Option<Rect> {
    let left = (bounds.x as f64 + rect.left.round()).max(bounds.x as f64);
    let top = (bounds.y as f64 + rect.top.round()).max(bounds.y as f64);
    let right = (bounds.x as f64 + rect.right.round()).min(bounds.right() as f64);
    let bottom = (bounds.y as f64 + rect.bottom.round()).min(bounds.bottom() as f64);

    if right <= left || bottom <= top {
        return None;
    }

    Some(Rect::new(
        left as u16,
        top as u16,
        (right - left) as u16,
        (bottom - top) as u16,
    ))
}

/// Render the activator and, when shown, the menu panel
///
/// # Returns
/// Layout information for hit testing
pub fn render_scene(
    frame: &mut Frame,
    area: Rect,
    scene: &Scene,
    menu: &Menu,
    colors: &MenuColors,
) -> MenuLayout {
    let mut layout = MenuLayout::default();

    if let Some(activator_area) = to_cells(&scene.activator_box(), area) {
        let (fg, arrow) = if menu.is_open() {
            (colors.activator_open, "▲")
        } else {
            (colors.activator, "▼")
        };
        let label = match scene.spec().selected {
            Some(row) => scene.spec().label(row),
            None => "Menu".to_string(),
        };
        let line = Line::from(vec![
            Span::styled("[", Style::default().fg(fg)),
            Span::styled(label, Style::default().fg(fg).add_modifier(Modifier::BOLD)),
            Span::styled(" ", Style::default()),
            Span::styled(arrow, Style::default().fg(fg)),
            Span::styled("]", Style::default().fg(fg)),
        ]);
        frame.render_widget(Paragraph::new(line), activator_area);
        layout.activator_area = activator_area;
    }

    if !scene.is_shown() {
        return layout;
    }

    let Some(content_area) = to_cells(&scene.content_box(), area) else {
        return layout;
    };
    frame.render_widget(Clear, content_area);
    frame.render_widget(
        Block::default().style(Style::default().bg(colors.panel_bg)),
        content_area,
    );
    layout.content_area = Some(content_area);

    let spec = scene.spec();
    for row in 0..spec.rows {
        let Some(row_area) = to_cells(&scene.row_box(row), area)
            .map(|cells| cells.intersection(content_area))
            .filter(|cells| !cells.is_empty())
        else {
            continue;
        };
        let is_selected = spec.selected == Some(row);
        let (fg, bg) = if is_selected {
            (colors.selected, colors.highlight_bg)
        } else {
            (colors.item, colors.panel_bg)
        };
        let text = format!(" {:width$}", spec.label(row), width = row_area.width as usize);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                text,
                Style::default().fg(fg).bg(bg),
            ))),
            row_area,
        );
        layout.item_areas.push((row, row_area));
    }

    tracing::trace!(
        "Rendered {} of {} rows in {:?}",
        layout.item_areas.len(),
        spec.rows,
        content_area
    );
    layout
}

/// One-line description of the menu state for the status bar
pub fn status_line(menu: &Menu) -> String {
    let state = match menu.state() {
        MenuState::Closed => "closed",
        MenuState::Measuring => "measuring",
        MenuState::Positioned => "positioned",
        MenuState::Visible => "visible",
    };
    let direction = menu.direction();
    let position = menu.position();
    format!(
        "{} | {:?}/{:?} | left {} top {} right {} bottom {} | auto {}",
        state,
        direction.vert,
        direction.horiz,
        position.left,
        position.top,
        position.right,
        position.bottom,
        menu.config().auto
    )
}

/// Render the status line at the bottom row of `area`
pub fn render_status(frame: &mut Frame, area: Rect, menu: &Menu, colors: &MenuColors) {
    if area.height == 0 {
        return;
    }
    let status_area = Rect::new(area.x, area.bottom() - 1, area.width, 1);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            status_line(menu),
            Style::default().fg(colors.status),
        ))),
        status_area,
    );
}
