//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Color references produced by the SGR state machine.
//!
//! A converter runs in one of two color styles. In inline style every color is
//! resolved to an [`Rgb`] triple; in class style it is kept as a semantic
//! [`ColorClass`]. [`ColorRef`] holds either, so chunks and converter state do
//! not need to know which style produced them.

use crate::consts::{PALETTE_CLASS_PREFIX, SYSTEM_COLORS, TRUECOLOR_CLASS};
use crate::result::{AnsiHtmlError, AnsiHtmlResult};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A 24-bit color.
///
/// Displays as `"r, g, b"`, the form used inside `rgb(...)` declarations and
/// truecolor data attributes.
///
/// ```
/// use termionix_ansihtml::Rgb;
///
/// let orange = Rgb::new(255, 128, 0);
/// assert_eq!(orange.to_string(), "255, 128, 0");
/// assert_eq!("255, 128, 0".parse::<Rgb>().unwrap(), orange);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb {
    /// Creates a color from its three channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Creates a color from wide channel values, returning `None` when any of
    /// them falls outside `0..=255`.
    pub fn from_channels(r: u32, g: u32, b: u32) -> Option<Self> {
        Some(Self {
            r: u8::try_from(r).ok()?,
            g: u8::try_from(g).ok()?,
            b: u8::try_from(b).ok()?,
        })
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = AnsiHtmlError;

    /// Parses the `"r, g, b"` form written by [`Display`](fmt::Display).
    /// Whitespace around each channel is ignored, so `"255,255,255"` is accepted.
    fn from_str(s: &str) -> AnsiHtmlResult<Self> {
        let invalid = |reason: &str| AnsiHtmlError::InvalidColor {
            value: s.to_string(),
            reason: reason.to_string(),
        };

        let mut channels = [0u8; 3];
        let mut parts = s.split(',');
        for channel in &mut channels {
            let part = parts
                .next()
                .ok_or_else(|| invalid("expected three channels"))?;
            *channel = part
                .trim()
                .parse::<u8>()
                .map_err(|err| invalid(&err.to_string()))?;
        }
        if parts.next().is_some() {
            return Err(invalid("expected three channels"));
        }

        Ok(Rgb::new(channels[0], channels[1], channels[2]))
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A semantic color name used in class style.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorClass {
    /// One of the 16 system colors, `0..=7` normal and `8..=15` bright.
    System(u8),
    /// A 256-color palette entry at index 16 or above.
    Palette(u8),
    /// Any 24-bit color; the exact value travels separately.
    TrueColor,
}

impl ColorClass {
    /// Class for palette index `index`, folding `0..=15` onto the system colors.
    pub fn from_palette_index(index: u8) -> Self {
        if index < 16 {
            ColorClass::System(index)
        } else {
            ColorClass::Palette(index)
        }
    }
}

impl fmt::Display for ColorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorClass::System(index) => {
                let index = usize::from(*index & 0x0F);
                f.write_str(SYSTEM_COLORS[index / 8][index % 8].class)
            }
            ColorClass::Palette(index) => write!(f, "{PALETTE_CLASS_PREFIX}{index}"),
            ColorClass::TrueColor => f.write_str(TRUECOLOR_CLASS),
        }
    }
}

impl Serialize for ColorClass {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A resolved foreground or background color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorRef {
    /// Semantic class name (class style).
    Class(ColorClass),
    /// Literal color value (inline style).
    Rgb(Rgb),
}

impl ColorRef {
    /// Returns the class if this is a class reference.
    pub fn as_class(&self) -> Option<ColorClass> {
        match self {
            ColorRef::Class(class) => Some(*class),
            ColorRef::Rgb(_) => None,
        }
    }

    /// Returns the color value if this is an inline reference.
    pub fn as_rgb(&self) -> Option<Rgb> {
        match self {
            ColorRef::Rgb(rgb) => Some(*rgb),
            ColorRef::Class(_) => None,
        }
    }
}

impl From<Rgb> for ColorRef {
    fn from(rgb: Rgb) -> Self {
        ColorRef::Rgb(rgb)
    }
}

impl From<ColorClass> for ColorRef {
    fn from(class: ColorClass) -> Self {
        ColorRef::Class(class)
    }
}

impl fmt::Display for ColorRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorRef::Class(class) => class.fmt(f),
            ColorRef::Rgb(rgb) => rgb.fmt(f),
        }
    }
}

impl Serialize for ColorRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_display() {
        assert_eq!(Rgb::new(187, 0, 0).to_string(), "187, 0, 0");
        assert_eq!(Rgb::default().to_string(), "0, 0, 0");
    }

    #[test]
    fn test_rgb_from_channels_range() {
        assert_eq!(Rgb::from_channels(10, 20, 30), Some(Rgb::new(10, 20, 30)));
        assert_eq!(Rgb::from_channels(255, 255, 255), Some(Rgb::new(255, 255, 255)));
        assert_eq!(Rgb::from_channels(256, 0, 0), None);
        assert_eq!(Rgb::from_channels(0, 0, 1000), None);
    }

    #[test]
    fn test_rgb_parse() {
        assert_eq!("255,255,255".parse::<Rgb>().unwrap(), Rgb::new(255, 255, 255));
        assert_eq!(" 1 , 2 ,3 ".parse::<Rgb>().unwrap(), Rgb::new(1, 2, 3));
    }

    #[test]
    fn test_rgb_parse_errors() {
        assert!(matches!(
            "1, 2".parse::<Rgb>(),
            Err(AnsiHtmlError::InvalidColor { .. })
        ));
        assert!("1, 2, 3, 4".parse::<Rgb>().is_err());
        assert!("1, 2, 300".parse::<Rgb>().is_err());
        assert!("red".parse::<Rgb>().is_err());
    }

    #[test]
    fn test_class_names() {
        assert_eq!(ColorClass::System(1).to_string(), "ansi-red");
        assert_eq!(ColorClass::System(9).to_string(), "ansi-bright-red");
        assert_eq!(ColorClass::System(15).to_string(), "ansi-bright-white");
        assert_eq!(ColorClass::Palette(196).to_string(), "ansi-palette-196");
        assert_eq!(ColorClass::TrueColor.to_string(), "ansi-truecolor");
    }

    #[test]
    fn test_class_from_palette_index() {
        assert_eq!(ColorClass::from_palette_index(3), ColorClass::System(3));
        assert_eq!(ColorClass::from_palette_index(15), ColorClass::System(15));
        assert_eq!(ColorClass::from_palette_index(16), ColorClass::Palette(16));
    }

    #[test]
    fn test_color_ref_accessors() {
        let class = ColorRef::from(ColorClass::TrueColor);
        assert_eq!(class.as_class(), Some(ColorClass::TrueColor));
        assert_eq!(class.as_rgb(), None);

        let rgb = ColorRef::from(Rgb::new(1, 2, 3));
        assert_eq!(rgb.as_rgb(), Some(Rgb::new(1, 2, 3)));
        assert_eq!(rgb.to_string(), "1, 2, 3");
    }
}
