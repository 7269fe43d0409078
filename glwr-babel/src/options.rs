//! Inclusion flags and header generation options

use crate::error::RefpageError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Number of section toggles in an inclusion mask.
pub const INCLUDE_MASK_BITS: usize = 11;

/// Which refpage sections are parsed and emitted.
///
/// Every toggle is independent. A section that is switched off is never parsed into the
/// document model, so it is absent rather than empty, and it is never emitted either.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Includes {
    /// Permalink to the online refpage in the brief
    pub link: bool,
    /// Purpose line of the refpage
    pub brief: bool,
    /// `\since` line from the versions table
    pub version: bool,
    pub description: bool,
    pub examples: bool,
    pub notes: bool,
    pub parameters: bool,
    pub errors: bool,
    pub associated_gets: bool,
    pub see_also: bool,
    pub copyright: bool,
}

impl Includes {
    /// Every section enabled.
    pub fn all() -> Self {
        Self::from_mask(0b111_1111_1111)
    }

    /// Every section disabled.
    pub fn none() -> Self {
        Self::from_mask(0)
    }

    /// Decode an eleven-bit mask, `link` being the most significant bit and `copyright` the
    /// least significant one.
    pub fn from_mask(mask: u16) -> Self {
        let bit = |index: usize| mask & (1 << (INCLUDE_MASK_BITS - 1 - index)) != 0;
        Self {
            link: bit(0),
            brief: bit(1),
            version: bit(2),
            description: bit(3),
            examples: bit(4),
            notes: bit(5),
            parameters: bit(6),
            errors: bit(7),
            associated_gets: bit(8),
            see_also: bit(9),
            copyright: bit(10),
        }
    }

    /// Encode back into the eleven-bit mask understood by [`Includes::from_mask`].
    pub fn to_mask(&self) -> u16 {
        [
            self.link,
            self.brief,
            self.version,
            self.description,
            self.examples,
            self.notes,
            self.parameters,
            self.errors,
            self.associated_gets,
            self.see_also,
            self.copyright,
        ]
        .iter()
        .fold(0, |mask, &enabled| (mask << 1) | u16::from(enabled))
    }
}

impl Default for Includes {
    fn default() -> Self {
        Self::all()
    }
}

impl FromStr for Includes {
    type Err = RefpageError;

    /// Parse a binary mask such as `11111111111` or `0101`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim();
        if digits.is_empty()
            || digits.len() > INCLUDE_MASK_BITS
            || !digits.bytes().all(|digit| matches!(digit, b'0' | b'1'))
        {
            return Err(RefpageError::InvalidIncludeMask(s.to_string()));
        }
        u16::from_str_radix(digits, 2)
            .map(Self::from_mask)
            .map_err(|_| RefpageError::InvalidIncludeMask(s.to_string()))
    }
}

/// Default column budget of a comment line, not counting the `///` prefix.
pub const DEFAULT_WIDTH: usize = 77;

/// Default base URL of the online refpages used for permalinks.
pub const DEFAULT_LINK_BASE: &str = "https://www.khronos.org/registry/OpenGL-Refpages/gl4/html/";

/// Options for header generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderOptions {
    pub includes: Includes,
    /// Maximum width of comment text after the `///` prefix
    pub width: usize,
    /// Permalink prefix; the page name and `.xhtml` are appended
    pub link_base: String,
}

impl HeaderOptions {
    pub fn new(includes: Includes) -> Self {
        Self {
            includes,
            ..Self::default()
        }
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }
}

impl Default for HeaderOptions {
    fn default() -> Self {
        Self {
            includes: Includes::default(),
            width: DEFAULT_WIDTH,
            link_base: DEFAULT_LINK_BASE.to_string(),
        }
    }
}
