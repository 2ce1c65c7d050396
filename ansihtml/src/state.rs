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

//! Persistent SGR state and the state machine that updates it.

use crate::color::{ColorClass, ColorRef, Rgb};
use crate::config::ColorStyle;
use crate::consts::SYSTEM_COLORS;
use crate::palette::Palette;
use crate::parser::Parameters;
use once_cell::unsync::OnceCell;
use std::str::Split;
use tracing::{debug, trace};

/// Which color an SGR parameter addresses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorTarget {
    /// Text color (`3x`, `9x`, `38`, `39`)
    Foreground,
    /// Cell color (`4x`, `10x`, `48`, `49`)
    Background,
}

/// Graphic state carried from one escape chunk to the next.
///
/// The state belongs to one stream of terminal output. Colors set by one
/// command stay in effect for all following text until changed or reset, and
/// that includes text converted by later calls on the same
/// [`AnsiConverter`](crate::AnsiConverter). Do not feed unrelated streams
/// through one state; [`reset`](ConverterState::reset) it or start fresh.
///
/// The truecolor fields are only set in [`ColorStyle::Classes`] while the
/// matching color is [`ColorClass::TrueColor`], and are cleared as soon as that
/// color is replaced, cleared or reset.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConverterState {
    foreground: Option<ColorRef>,
    background: Option<ColorRef>,
    foreground_truecolor: Option<Rgb>,
    background_truecolor: Option<Rgb>,
    bright: bool,
}

impl ConverterState {
    /// Creates an unstyled state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears every color and the bright flag (SGR `0`).
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Current foreground color.
    pub fn foreground(&self) -> Option<ColorRef> {
        self.foreground
    }

    /// Current background color.
    pub fn background(&self) -> Option<ColorRef> {
        self.background
    }

    /// Exact foreground behind a [`ColorClass::TrueColor`] foreground.
    pub fn foreground_truecolor(&self) -> Option<Rgb> {
        self.foreground_truecolor
    }

    /// Exact background behind a [`ColorClass::TrueColor`] background.
    pub fn background_truecolor(&self) -> Option<Rgb> {
        self.background_truecolor
    }

    /// Whether SGR `1` is in effect for subsequent `30-37` codes.
    pub fn is_bright(&self) -> bool {
        self.bright
    }

    /// Returns `true` when a foreground or background color is set.
    pub fn is_styled(&self) -> bool {
        self.foreground.is_some() || self.background.is_some()
    }

    /// Interprets one SGR parameter list against this state.
    ///
    /// Parameters are consumed left to right; `38` and `48` consume their mode
    /// and color arguments as well. Anything unrecognized, out of range or
    /// truncated is skipped without touching the state. `palette` is built on
    /// the first palette lookup in [`ColorStyle::Inline`].
    ///
    /// Returns [`is_styled`](ConverterState::is_styled) after the whole list
    /// has been applied.
    pub fn apply(
        &mut self,
        parameters: Parameters<'_>,
        style: ColorStyle,
        palette: &OnceCell<Palette>,
    ) -> bool {
        let mut fields = parameters.iter();

        while let Some(field) = fields.next() {
            match parse_parameter(field) {
                None | Some(0) => self.reset(),
                Some(1) => self.bright = true,
                Some(39) => self.set(ColorTarget::Foreground, None, None),
                Some(49) => self.set(ColorTarget::Background, None, None),
                Some(code @ 30..=37) => {
                    let color = system_color(usize::from(self.bright), code, style);
                    self.set(ColorTarget::Foreground, Some(color), None);
                }
                Some(code @ 90..=97) => {
                    let color = system_color(1, code, style);
                    self.set(ColorTarget::Foreground, Some(color), None);
                }
                Some(code @ 40..=47) => {
                    let color = system_color(0, code, style);
                    self.set(ColorTarget::Background, Some(color), None);
                }
                Some(code @ 100..=107) => {
                    let color = system_color(1, code, style);
                    self.set(ColorTarget::Background, Some(color), None);
                }
                Some(38) => self.apply_extended(ColorTarget::Foreground, &mut fields, style, palette),
                Some(48) => self.apply_extended(ColorTarget::Background, &mut fields, style, palette),
                Some(code) => trace!(code, "ignoring unsupported SGR parameter"),
            }
        }

        self.is_styled()
    }

    /// Handles the arguments of `38`/`48`: `5;n` or `2;r;g;b`.
    fn apply_extended(
        &mut self,
        target: ColorTarget,
        fields: &mut Split<'_, char>,
        style: ColorStyle,
        palette: &OnceCell<Palette>,
    ) {
        let Some(mode) = fields.next() else {
            trace!(?target, "extended color without mode");
            return;
        };

        match mode {
            "5" => {
                let Some(index) = fields.next() else {
                    trace!(?target, "palette color without index");
                    return;
                };
                let Some(index) = parse_parameter(index).and_then(|index| u8::try_from(index).ok())
                else {
                    trace!(?target, index, "ignoring out of range palette index");
                    return;
                };
                let color = match style {
                    ColorStyle::Classes => ColorRef::Class(ColorClass::from_palette_index(index)),
                    ColorStyle::Inline => {
                        let palette = palette.get_or_init(|| {
                            debug!("building 256 color palette");
                            Palette::new()
                        });
                        ColorRef::Rgb(palette.get(index))
                    }
                };
                self.set(target, Some(color), None);
            }
            "2" => {
                // Channels are only consumed when all three are present.
                let mut lookahead = fields.clone();
                let (Some(r), Some(g), Some(b)) =
                    (lookahead.next(), lookahead.next(), lookahead.next())
                else {
                    trace!(?target, "truecolor with fewer than three channels");
                    return;
                };
                *fields = lookahead;

                let channels = (parse_parameter(r), parse_parameter(g), parse_parameter(b));
                let rgb = match channels {
                    (Some(r), Some(g), Some(b)) => Rgb::from_channels(r, g, b),
                    _ => None,
                };
                let Some(rgb) = rgb else {
                    trace!(?target, r, g, b, "ignoring out of range truecolor");
                    return;
                };
                match style {
                    ColorStyle::Inline => self.set(target, Some(ColorRef::Rgb(rgb)), None),
                    ColorStyle::Classes => {
                        self.set(target, Some(ColorRef::Class(ColorClass::TrueColor)), Some(rgb));
                    }
                }
            }
            _ => trace!(?target, mode, "ignoring unsupported extended color mode"),
        }
    }

    fn set(&mut self, target: ColorTarget, color: Option<ColorRef>, truecolor: Option<Rgb>) {
        match target {
            ColorTarget::Foreground => {
                self.foreground = color;
                self.foreground_truecolor = truecolor;
            }
            ColorTarget::Background => {
                self.background = color;
                self.background_truecolor = truecolor;
            }
        }
    }
}

/// One of the 16 system colors; `row` 0 is normal, 1 is bright, and the last
/// digit of `code` picks the color.
fn system_color(row: usize, code: u32, style: ColorStyle) -> ColorRef {
    let column = (code % 10) as usize;
    match style {
        ColorStyle::Inline => ColorRef::Rgb(SYSTEM_COLORS[row][column].rgb),
        #[allow(clippy::cast_possible_truncation)]
        ColorStyle::Classes => ColorRef::Class(ColorClass::System((row * 8 + column) as u8)),
    }
}

/// Numeric value of one parameter field.
///
/// `None` for an empty or non-numeric field, which callers treat as a reset.
/// Values too large for `u32` saturate so they stay out of every valid range.
fn parse_parameter(field: &str) -> Option<u32> {
    if field.is_empty() || !field.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    Some(field.bytes().fold(0u32, |value, byte| {
        value
            .saturating_mul(10)
            .saturating_add(u32::from(byte - b'0'))
    }))
}
