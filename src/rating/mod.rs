//! Star rating control: props in, star descriptors out, clicks back to the caller
//!
//! The control keeps no state between renders. The caller owns `value`, hands it
//! in on every render and gets the next value through the click callback.

mod size;

pub use size::StarSize;

use serde::Serialize;

use crate::theme::ColorToken;

pub const DEFAULT_STAR_COUNT: u32 = 5;
pub const DEFAULT_FILLED_COLOR: &str = "yellow";
pub const DEFAULT_EMPTY_COLOR: &str = "#bbb";

/// Everything the control needs to draw itself
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingProps {
    /// Number of filled stars
    pub value: u32,
    /// Total stars drawn
    pub star_count: u32,
    pub filled_color: ColorToken,
    pub empty_color: ColorToken,
    pub size: StarSize,
}

impl Default for RatingProps {
    fn default() -> Self {
        Self {
            value: 0,
            star_count: DEFAULT_STAR_COUNT,
            filled_color: ColorToken::new(DEFAULT_FILLED_COLOR),
            empty_color: ColorToken::new(DEFAULT_EMPTY_COLOR),
            size: StarSize::default(),
        }
    }
}

impl RatingProps {
    pub fn new(value: u32) -> Self {
        Self {
            value,
            ..Self::default()
        }
    }

    pub fn filled_count(&self) -> u32 {
        self.value.min(self.star_count)
    }

    /// One descriptor per star, in position order
    pub fn describe(&self) -> Vec<StarDescriptor> {
        (0..self.star_count)
            .map(|index| {
                let filled = index < self.value;
                StarDescriptor {
                    index,
                    filled,
                    color: if filled {
                        self.filled_color.clone()
                    } else {
                        self.empty_color.clone()
                    },
                    size: self.size.clone(),
                }
            })
            .collect()
    }
}

/// A single star as the host renderer sees it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StarDescriptor {
    pub index: u32,
    pub filled: bool,
    pub color: ColorToken,
    pub size: StarSize,
}

impl StarDescriptor {
    /// Identifies this star individually, e.g. `star-3`
    pub fn test_id(&self) -> String {
        format!("star-{}", self.index)
    }

    /// Identifies the filled/empty group, `star-is-filled-1` or `star-is-filled-0`
    pub fn group_id(&self) -> String {
        format!("star-is-filled-{}", u8::from(self.filled))
    }

    pub fn class_name(&self) -> String {
        self.size.class_name()
    }
}

/// Value reported when the star at `index` is clicked.
///
/// Clicking the star right after the filled run clears the rating; any other
/// star reports its own index.
pub fn click_value(value: u32, index: u32) -> u32 {
    if index == value {
        0
    } else {
        index
    }
}

/// The clickable control: props plus the caller's callback
pub struct StarRating<F> {
    props: RatingProps,
    on_click: F,
}

impl<F: FnMut(u32)> StarRating<F> {
    pub fn new(value: u32, on_click: F) -> Self {
        Self::with_props(RatingProps::new(value), on_click)
    }

    pub fn with_props(props: RatingProps, on_click: F) -> Self {
        Self { props, on_click }
    }

    /// Click the star at `index`, invoking the callback once.
    /// Returns the reported value, or `None` if there is no star there.
    pub fn click(&mut self, index: u32) -> Option<u32> {
        if index >= self.props.star_count {
            tracing::debug!(index, star_count = self.props.star_count, "click outside stars");
            return None;
        }

        let next = click_value(self.props.value, index);
        tracing::debug!(index, value = self.props.value, next, "star clicked");
        (self.on_click)(next);
        Some(next)
    }
}

impl<F> StarRating<F> {
    pub fn star_count(mut self, star_count: u32) -> Self {
        self.props.star_count = star_count;
        self
    }

    pub fn filled_color(mut self, color: impl Into<ColorToken>) -> Self {
        self.props.filled_color = color.into();
        self
    }

    pub fn empty_color(mut self, color: impl Into<ColorToken>) -> Self {
        self.props.empty_color = color.into();
        self
    }

    pub fn size(mut self, size: StarSize) -> Self {
        self.props.size = size;
        self
    }

    pub fn props(&self) -> &RatingProps {
        &self.props
    }

    pub fn describe(&self) -> Vec<StarDescriptor> {
        self.props.describe()
    }
}
