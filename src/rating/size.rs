use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RatingError;

const NAMED_SIZES: [&str; 6] = ["2xs", "xs", "sm", "lg", "xl", "2xl"];
const MAX_MULTIPLIER: u16 = 10;

/// Display size of a star, named like a Font Awesome size class ("1x", "lg", ...)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StarSize(String);

impl StarSize {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Class token carried by every star, e.g. `fa-1x`
    pub fn class_name(&self) -> String {
        format!("fa-{}", self.0)
    }

    /// Terminal cells per star edge
    pub fn scale(&self) -> u16 {
        match self.0.as_str() {
            "xl" | "2xl" => 2,
            s => Self::multiplier(s).unwrap_or(1),
        }
    }

    fn multiplier(s: &str) -> Option<u16> {
        let n: u16 = s.strip_suffix('x')?.parse().ok()?;
        (1..=MAX_MULTIPLIER).contains(&n).then_some(n)
    }
}

impl Default for StarSize {
    fn default() -> Self {
        Self("1x".to_string())
    }
}

impl fmt::Display for StarSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for StarSize {
    type Err = RatingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if NAMED_SIZES.contains(&s) || Self::multiplier(s).is_some() {
            Ok(Self(s.to_string()))
        } else {
            Err(RatingError::InvalidSize(s.to_string()))
        }
    }
}

impl TryFrom<String> for StarSize {
    type Error = RatingError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<StarSize> for String {
    fn from(size: StarSize) -> Self {
        size.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_1x() {
        let size = StarSize::default();
        assert_eq!(size.class_name(), "fa-1x");
        assert_eq!(size.scale(), 1);
    }

    #[test]
    fn test_multipliers() {
        let size: StarSize = "5x".parse().unwrap();
        assert_eq!(size.class_name(), "fa-5x");
        assert_eq!(size.scale(), 5);
        assert_eq!("10x".parse::<StarSize>().unwrap().scale(), 10);
    }

    #[test]
    fn test_named_sizes() {
        assert_eq!("lg".parse::<StarSize>().unwrap().scale(), 1);
        assert_eq!("2xl".parse::<StarSize>().unwrap().scale(), 2);
        assert_eq!("xs".parse::<StarSize>().unwrap().class_name(), "fa-xs");
    }

    #[test]
    fn test_rejects_unknown() {
        assert_eq!(
            "0x".parse::<StarSize>(),
            Err(RatingError::InvalidSize("0x".to_string()))
        );
        assert!("11x".parse::<StarSize>().is_err());
        assert!("huge".parse::<StarSize>().is_err());
        assert!("x".parse::<StarSize>().is_err());
    }
}
