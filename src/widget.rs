//! ratatui rendering and mouse hit testing for the star rating
//!
//! Each star owns a slot `2 * scale` columns wide and `scale` rows high, laid out
//! left to right from the top-left corner of the area. The glyph fills the first
//! `scale` columns of every row in the slot; the rest is spacing.

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Color, Style},
    widgets::Widget,
};

use crate::rating::{RatingProps, StarRating};
use crate::theme::ColorToken;

const FILLED_GLYPH: &str = "★";
const EMPTY_GLYPH: &str = "☆";

/// Cells each drawable star occupies, in star order.
/// Stars whose glyph does not fit in `area` are left out.
pub fn star_slots(props: &RatingProps, area: Rect) -> Vec<Rect> {
    let scale = props.size.scale();
    let slot_width = u32::from(scale) * 2;
    let right = u32::from(area.x) + u32::from(area.width);

    let mut slots = Vec::new();
    for index in 0..props.star_count {
        let x = u32::from(area.x) + index * slot_width;
        if x + u32::from(scale) > right {
            break;
        }

        let slot = Rect {
            x: x as u16,
            y: area.y,
            width: slot_width.min(right - x) as u16,
            height: scale,
        }
        .intersection(area);

        if slot.height == 0 {
            break;
        }
        slots.push(slot);
    }
    slots
}

/// Index of the star drawn at (`column`, `row`), if any
pub fn star_at(props: &RatingProps, area: Rect, column: u16, row: u16) -> Option<u32> {
    let position = Position::new(column, row);
    star_slots(props, area)
        .iter()
        .position(|slot| slot.contains(position))
        .map(|index| index as u32)
}

fn resolve(token: &ColorToken) -> Color {
    token.to_color().unwrap_or_else(|e| {
        tracing::warn!("Falling back to default color: {}", e);
        Color::Reset
    })
}

impl Widget for &RatingProps {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let filled_style = Style::default().fg(resolve(&self.filled_color));
        let empty_style = Style::default().fg(resolve(&self.empty_color));
        let glyph_width = self.size.scale();

        for (index, slot) in (0..).zip(star_slots(self, area)) {
            let (glyph, style) = if index < self.value {
                (FILLED_GLYPH, filled_style)
            } else {
                (EMPTY_GLYPH, empty_style)
            };

            for y in slot.top()..slot.bottom() {
                for x in slot.x..slot.x + glyph_width {
                    buf.set_string(x, y, glyph, style);
                }
            }
        }
    }
}

impl<F> Widget for &StarRating<F> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.props().render(area, buf);
    }
}
