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
use crate::consts::{CUBE_LEVELS, GRAYSCALE_START, GRAYSCALE_STEP, SYSTEM_COLORS};
use std::ops::Index;

/// The 256-color indexed palette.
///
/// - `0..=15`: the system colors, normal row then bright row
/// - `16..=231`: a 6x6x6 cube, index `16 + 36r + 6g + b`
/// - `232..=255`: 24 grays from 8 to 238 in steps of 10
///
/// Immutable once built. [`AnsiConverter`](crate::AnsiConverter) builds one
/// lazily the first time a palette index is resolved to a color value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette([Rgb; 256]);

impl Palette {
    /// Builds the full table.
    pub fn new() -> Self {
        let mut colors = [Rgb::default(); 256];
        let mut index = 0;

        for row in &SYSTEM_COLORS {
            for color in row {
                colors[index] = color.rgb;
                index += 1;
            }
        }

        for r in CUBE_LEVELS {
            for g in CUBE_LEVELS {
                for b in CUBE_LEVELS {
                    colors[index] = Rgb::new(r, g, b);
                    index += 1;
                }
            }
        }

        let mut level = GRAYSCALE_START;
        while index < colors.len() {
            colors[index] = Rgb::new(level, level, level);
            level = level.saturating_add(GRAYSCALE_STEP);
            index += 1;
        }

        Palette(colors)
    }

    /// Color at `index`.
    pub fn get(&self, index: u8) -> Rgb {
        self.0[usize::from(index)]
    }

    /// All 256 entries in index order.
    pub fn colors(&self) -> &[Rgb; 256] {
        &self.0
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<u8> for Palette {
    type Output = Rgb;

    fn index(&self, index: u8) -> &Self::Output {
        &self.0[usize::from(index)]
    }
}
