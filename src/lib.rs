//! A star-rating display/input widget for ratatui.
//!
//! [`RatingProps`] describes what to draw, [`StarRating`] pairs the props with
//! the caller's click callback. The caller owns the value: a click reports the
//! new value through the callback and the caller re-renders with it.

pub mod error;
pub mod rating;
pub mod theme;
pub mod widget;

pub use error::RatingError;
pub use rating::{click_value, RatingProps, StarDescriptor, StarRating, StarSize};
pub use theme::ColorToken;
pub use widget::{star_at, star_slots};
