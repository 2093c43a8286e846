//! Animated progress bar drawn cell by cell.
//!
//! The filled part carries a three-stop colour gradient with twinkling
//! particles and a shimmer band sweeping left to right. The rest is a dark
//! track. All animation derives from the tick counter.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::widgets::Widget;

use crate::load::clamp_fraction;
use crate::ui::theme::{
    BAR_BLUE, BAR_CORAL, BAR_CYAN, BAR_TRACK, PARTICLE_BRIGHT, PARTICLE_FAINT,
};

/// Ticks for one shimmer sweep (2 s at the default 80 ms tick).
pub const SHIMMER_PERIOD_TICKS: u64 = 25;
pub const SHIMMER_WIDTH: u64 = 3;

const PARTICLE_SPACING: u16 = 4;
const PARTICLE_HALF_PERIOD_TICKS: u64 = 9;
const PARTICLE_SYMBOL: &str = "•";

pub struct ProgressBar {
    fraction: f64,
    tick: u64,
}

impl ProgressBar {
    pub fn new(fraction: f64, tick: u64) -> Self {
        Self {
            fraction: clamp_fraction(fraction),
            tick,
        }
    }
}

impl Widget for ProgressBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        let filled = filled_cells(area.width, self.fraction);
        let last = area.width.saturating_sub(1).max(1);

        for col in 0..area.width {
            let x = area.x + col;
            let filled_cell = col < filled;
            let bg = if filled_cell {
                let base = gradient_color(f64::from(col) / f64::from(last));
                if in_shimmer(col, self.tick, filled) {
                    mix(base, PARTICLE_BRIGHT, 0.6)
                } else {
                    base
                }
            } else {
                BAR_TRACK
            };
            let particle = filled_cell.then(|| particle_color(col, self.tick)).flatten();

            for row in 0..area.height {
                if let Some(cell) = buf.cell_mut((x, area.y + row)) {
                    cell.set_bg(bg);
                    match particle {
                        Some(fg) => {
                            cell.set_symbol(PARTICLE_SYMBOL).set_fg(fg);
                        }
                        None => {
                            cell.set_symbol(" ");
                        }
                    }
                }
            }
        }
    }
}

/// Number of cells covered by `fraction` of `width`, rounded down.
pub fn filled_cells(width: u16, fraction: f64) -> u16 {
    (clamp_fraction(fraction) * f64::from(width)).floor() as u16
}

/// Gradient colour at `position` in `[0, 1]`: cyan, blue at the midpoint,
/// then coral.
pub fn gradient_color(position: f64) -> Color {
    let position = clamp_fraction(position);
    if position <= 0.5 {
        mix(BAR_CYAN, BAR_BLUE, position * 2.0)
    } else {
        mix(BAR_BLUE, BAR_CORAL, (position - 0.5) * 2.0)
    }
}

/// Check if `col` lies under the shimmer band at `tick`.
///
/// The band enters from the left of the filled region and leaves past its
/// right edge once per `SHIMMER_PERIOD_TICKS`.
pub fn in_shimmer(col: u16, tick: u64, filled: u16) -> bool {
    if filled == 0 {
        return false;
    }
    let travel = u64::from(filled) + SHIMMER_WIDTH;
    let head = (tick % SHIMMER_PERIOD_TICKS) * travel / SHIMMER_PERIOD_TICKS;
    let col = u64::from(col);
    col < head && head <= col + SHIMMER_WIDTH
}

/// Particle colour for `col`, or `None` when no particle sits there.
///
/// Each particle pulses a tick later than its left neighbour.
fn particle_color(col: u16, tick: u64) -> Option<Color> {
    if col % PARTICLE_SPACING != PARTICLE_SPACING / 2 {
        return None;
    }
    let index = u64::from(col / PARTICLE_SPACING);
    let bright = ((tick + index) / PARTICLE_HALF_PERIOD_TICKS) % 2 == 0;
    Some(if bright { PARTICLE_BRIGHT } else { PARTICLE_FAINT })
}

fn mix(from: Color, to: Color, amount: f64) -> Color {
    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let channel = |a: u8, b: u8| {
                (f64::from(a) + (f64::from(b) - f64::from(a)) * amount).round() as u8
            };
            Color::Rgb(channel(r1, r2), channel(g1, g2), channel(b1, b2))
        }
        _ => to,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filled_cells_rounds_down() {
        assert_eq!(filled_cells(10, 0.0), 0);
        assert_eq!(filled_cells(10, 0.55), 5);
        assert_eq!(filled_cells(10, 1.0), 10);
        assert_eq!(filled_cells(10, 2.0), 10);
    }

    #[test]
    fn gradient_hits_its_stops() {
        assert_eq!(gradient_color(0.0), BAR_CYAN);
        assert_eq!(gradient_color(0.5), BAR_BLUE);
        assert_eq!(gradient_color(1.0), BAR_CORAL);
    }

    #[test]
    fn shimmer_sweeps_across_filled_region() {
        let filled = 20;
        assert!(!(0..filled).any(|col| in_shimmer(col, 0, filled)));

        let lit: Vec<u16> = (0..filled).filter(|&col| in_shimmer(col, 12, filled)).collect();
        assert_eq!(lit.len(), SHIMMER_WIDTH as usize);

        assert!(!in_shimmer(0, 12, 0));
    }

    #[test]
    fn particles_are_spaced_and_pulse() {
        assert_eq!(particle_color(0, 0), None);
        assert_eq!(particle_color(2, 0), Some(PARTICLE_BRIGHT));
        assert_eq!(particle_color(2, PARTICLE_HALF_PERIOD_TICKS), Some(PARTICLE_FAINT));
        assert_eq!(particle_color(6, PARTICLE_HALF_PERIOD_TICKS - 1), Some(PARTICLE_FAINT));
    }

    #[test]
    fn renders_fill_and_track() {
        let area = Rect::new(0, 0, 10, 1);
        let mut buf = Buffer::empty(area);

        ProgressBar::new(0.5, 0).render(area, &mut buf);

        assert_eq!(buf[(0, 0)].bg, BAR_CYAN);
        assert_ne!(buf[(4, 0)].bg, BAR_TRACK);
        assert_eq!(buf[(5, 0)].bg, BAR_TRACK);
        assert_eq!(buf[(9, 0)].bg, BAR_TRACK);
        assert_eq!(buf[(2, 0)].symbol(), PARTICLE_SYMBOL);
        assert_eq!(buf[(6, 0)].symbol(), " ");
    }
}
