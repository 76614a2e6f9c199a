use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use starrate::{star_at, RatingProps, StarRating};

/// Last click reported by the widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickReport {
    pub index: u32,
    pub reported: u32,
}

pub struct App {
    /// Widget props; `props.value` is the rating this app owns
    pub props: RatingProps,

    /// Star under the keyboard cursor
    pub focused: u32,

    pub last_click: Option<ClickReport>,

    // Status message (shown in info line)
    pub status_message: Option<String>,
}

impl App {
    pub fn new(props: RatingProps) -> Self {
        Self {
            focused: props.value.min(props.star_count).saturating_sub(1),
            props,
            last_click: None,
            status_message: None,
        }
    }

    pub fn value(&self) -> u32 {
        self.props.value
    }

    fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some(msg.into());
    }

    /// Click a star and adopt whatever value the widget reports
    pub fn click(&mut self, index: u32) {
        let mut reported = None;
        let mut rating = StarRating::with_props(self.props.clone(), |v| reported = Some(v));
        rating.click(index);
        drop(rating);

        match reported {
            Some(value) => {
                tracing::info!(index, previous = self.props.value, value, "rating changed");
                self.props.value = value;
                self.focused = index;
                self.last_click = Some(ClickReport {
                    index,
                    reported: value,
                });
                self.status_message = None;
            }
            None => self.set_status(format!("No star {}", index + 1)),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let last = self.props.star_count.saturating_sub(1);

        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                self.focused = self.focused.saturating_sub(1);
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.focused = (self.focused + 1).min(last);
            }
            KeyCode::Home => self.focused = 0,
            KeyCode::End => self.focused = last,
            KeyCode::Char(' ') | KeyCode::Enter => self.click(self.focused),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                // '1' is the first star, '0' the tenth
                let index = match c.to_digit(10) {
                    Some(0) => 9,
                    Some(d) => d - 1,
                    None => return,
                };
                self.click(index);
            }
            _ => {}
        }
    }

    /// Handle a mouse event over the rating drawn in `area`
    pub fn handle_mouse(&mut self, mouse: MouseEvent, area: Rect) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        if let Some(index) = star_at(&self.props, area, mouse.column, mouse.row) {
            self.click(index);
        }
    }
}
