//! Dimension value object - the three parallel world-states
//!
//! The core only needs set membership and equality; the color palette and
//! display names exist solely so the presentation layer has one lookup table
//! instead of per-component switch statements.
//!
//! On the wire a dimension is its integer code (1 = Reality, 2 = Dream,
//! 3 = Memory), matching the save-file layout.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// An RGB color triple handed to the presentation layer as-is
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

/// One of the three parallel world-states the player occupies
///
/// Switching is instantaneous and does not reset per-dimension progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub enum Dimension {
    #[default]
    Reality,
    Dream,
    Memory,
}

impl Dimension {
    /// All dimensions, in wire-code order
    pub const ALL: [Dimension; 3] = [Dimension::Reality, Dimension::Dream, Dimension::Memory];

    /// Integer wire code (1-based, matches the save-file layout)
    pub fn code(self) -> u8 {
        match self {
            Dimension::Reality => 1,
            Dimension::Dream => 2,
            Dimension::Memory => 3,
        }
    }

    /// Look up a dimension by its wire code
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Dimension::Reality),
            2 => Some(Dimension::Dream),
            3 => Some(Dimension::Memory),
            _ => None,
        }
    }

    /// Human-readable name for HUD/menu display
    pub fn display_name(self) -> &'static str {
        match self {
            Dimension::Reality => "Reality",
            Dimension::Dream => "Dream",
            Dimension::Memory => "Memory",
        }
    }

    /// Primary tint color for this dimension's world geometry
    pub fn color(self) -> Rgb {
        match self {
            Dimension::Reality => Rgb::new(1.0, 0.2, 0.8),
            Dimension::Dream => Rgb::new(0.0, 0.9, 0.9),
            Dimension::Memory => Rgb::new(1.0, 0.9, 0.0),
        }
    }

    /// Fog color used by the renderer when this dimension is active
    pub fn fog_color(self) -> Rgb {
        match self {
            Dimension::Reality => Rgb::new(0.3, 0.0, 0.3),
            Dimension::Dream => Rgb::new(0.0, 0.2, 0.3),
            Dimension::Memory => Rgb::new(0.3, 0.3, 0.0),
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Dimension {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Reality" | "reality" => Ok(Dimension::Reality),
            "Dream" | "dream" => Ok(Dimension::Dream),
            "Memory" | "memory" => Ok(Dimension::Memory),
            _ => Err(DomainError::parse(format!("Unknown dimension: {}", s))),
        }
    }
}

impl Serialize for Dimension {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

impl<'de> Deserialize<'de> for Dimension {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = u8::deserialize(deserializer)?;
        Dimension::from_code(code)
            .ok_or_else(|| de::Error::custom(format!("invalid dimension code: {}", code)))
    }
}
