// File: crates/plotline-core/src/types.rs
// Summary: Shared scalar types and constants (colors, fonts, text attributes).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Default surface width in pixels.
pub const WIDTH: f64 = 640.0;
/// Default surface height in pixels.
pub const HEIGHT: f64 = 400.0;
/// Aspect used to infer height when options give only a width.
pub const HEIGHT_FROM_WIDTH: f64 = 0.67;

/// Which axis a piece of geometry belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisKind {
    X,
    Y,
}

/// RGBA color. Serializes as `#rrggbb` (or `#rrggbbaa` when not opaque).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid color literal {0:?} (expected #rgb, #rrggbb or #rrggbbaa)")]
pub struct ColorParseError(pub String);

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').ok_or_else(|| ColorParseError(s.into()))?;
        let nib = |c: u8| -> Result<u8, ColorParseError> {
            (c as char).to_digit(16).map(|d| d as u8).ok_or_else(|| ColorParseError(s.into()))
        };
        let byte = |hi: u8, lo: u8| -> Result<u8, ColorParseError> { Ok(nib(hi)? << 4 | nib(lo)?) };
        let b = hex.as_bytes();
        match b.len() {
            3 => {
                let (r, g, bl) = (nib(b[0])?, nib(b[1])?, nib(b[2])?);
                Ok(Self::rgb(r << 4 | r, g << 4 | g, bl << 4 | bl))
            }
            6 => Ok(Self::rgb(byte(b[0], b[1])?, byte(b[2], b[3])?, byte(b[4], b[5])?)),
            8 => Ok(Self::rgba(
                byte(b[0], b[1])?,
                byte(b[2], b[3])?,
                byte(b[4], b[5])?,
                byte(b[6], b[7])?,
            )),
            _ => Err(ColorParseError(s.into())),
        }
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Color> for String {
    fn from(c: Color) -> String {
        c.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

/// Font weight/slant for label and title text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
    Bold,
}

/// Font face for labels and titles.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    pub family: String,
    pub size: f64,
    pub style: FontStyle,
}

impl FontSpec {
    pub fn new(family: impl Into<String>, size: f64) -> Self {
        Self { family: family.into(), size, style: FontStyle::Normal }
    }
}

/// Horizontal text anchoring for backend text drawing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
}

/// Vertical text anchoring for backend text drawing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextBaseline {
    Top,
    Middle,
    #[default]
    Bottom,
}

/// Placement of a tick mark relative to its anchor point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TickAlign {
    #[default]
    Middle,
    Inside,
    Outside,
}
