use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Share of the screen width taken by the progress bar.
const BAR_WIDTH_PERCENT: u16 = 52;

/// Rows of the progress overlay: logo, caption and bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressRegions {
    pub logo: Rect,
    pub caption: Rect,
    pub bar: Rect,
}

/// Place the progress overlay rows slightly above the vertical centre.
pub fn progress_regions(area: Rect) -> ProgressRegions {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    let bar_width = (u32::from(area.width) * u32::from(BAR_WIDTH_PERCENT) / 100) as u16;
    ProgressRegions {
        logo: rows[1],
        caption: rows[3],
        bar: centered_rect_by_size(rows[5], bar_width.max(1), 1),
    }
}

/// A `width` x `height` rect centred in `area`, shrunk to fit.
pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
