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

use crate::color::Rgb;

/// Control Sequence Introducer: `ESC [`.
///
/// Input text is split on every occurrence of this pair; everything between two
/// introducers is one escape chunk.
pub const ESCAPE_INTRODUCER: &str = "\x1b[";

/// An entry of the 16 color system table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SystemColor {
    /// Value used for inline `rgb(...)` styling.
    pub rgb: Rgb,
    /// CSS class used when class names are requested.
    pub class: &'static str,
}

const fn system(r: u8, g: u8, b: u8, class: &'static str) -> SystemColor {
    SystemColor {
        rgb: Rgb::new(r, g, b),
        class,
    }
}

/// System colors, indexed as `[row][color]`.
///
/// Row 0 holds the normal colors selected by `30-37`/`40-47`, row 1 the bright
/// colors selected by `90-97`/`100-107` (or `30-37` after SGR `1`).
pub const SYSTEM_COLORS: [[SystemColor; 8]; 2] = [
    [
        system(0, 0, 0, "ansi-black"),
        system(187, 0, 0, "ansi-red"),
        system(0, 187, 0, "ansi-green"),
        system(187, 187, 0, "ansi-yellow"),
        system(0, 0, 187, "ansi-blue"),
        system(187, 0, 187, "ansi-magenta"),
        system(0, 187, 187, "ansi-cyan"),
        system(255, 255, 255, "ansi-white"),
    ],
    [
        system(85, 85, 85, "ansi-bright-black"),
        system(255, 85, 85, "ansi-bright-red"),
        system(0, 255, 0, "ansi-bright-green"),
        system(255, 255, 85, "ansi-bright-yellow"),
        system(85, 85, 255, "ansi-bright-blue"),
        system(255, 85, 255, "ansi-bright-magenta"),
        system(85, 255, 255, "ansi-bright-cyan"),
        system(255, 255, 255, "ansi-bright-white"),
    ],
];

/// Channel levels of the 6x6x6 color cube (palette indices 16-231).
pub const CUBE_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

/// First level of the grayscale ramp (palette index 232).
pub const GRAYSCALE_START: u8 = 8;

/// Increment between consecutive grayscale entries.
pub const GRAYSCALE_STEP: u8 = 10;

/// Class prefix for palette entries 16-255.
pub const PALETTE_CLASS_PREFIX: &str = "ansi-palette-";

/// Class used for any 24-bit color in class mode.
pub const TRUECOLOR_CLASS: &str = "ansi-truecolor";

/// Data attribute carrying the exact foreground of a truecolor class.
pub const TRUECOLOR_FG_ATTRIBUTE: &str = "data-ansi-truecolor-fg";

/// Data attribute carrying the exact background of a truecolor class.
pub const TRUECOLOR_BG_ATTRIBUTE: &str = "data-ansi-truecolor-bg";
