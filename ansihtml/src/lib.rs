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

//! Converts captured terminal output containing ANSI SGR color sequences into
//! HTML markup, a list of styled chunk records, or plain text.
//!
//! Only Select Graphic Rendition colors are interpreted: the 16 system colors,
//! the bright flag, the 256-color palette and 24-bit truecolor. Every other
//! control sequence is removed without effect, and malformed input degrades to
//! plain text rather than failing.
//!
//! ```
//! use termionix_ansihtml::{ansi_to_html, ansi_to_text, HtmlConfig};
//!
//! let input = "\x1b[31mHello\x1b[0m World";
//! assert_eq!(
//!     ansi_to_html(input, &HtmlConfig::inline()),
//!     "<span style=\"color:rgb(187, 0, 0)\">Hello</span> World"
//! );
//! assert_eq!(ansi_to_text(input), "Hello World");
//! ```
//!
//! The free functions start from a clean state on every call. To carry colors
//! across calls (one log line at a time, for instance) keep an
//! [`AnsiConverter`] per stream.

mod chunk;
mod color;
mod config;
mod consts;
mod converter;
mod escape;
mod palette;
mod parser;
mod render;
mod result;
mod state;
mod tokenizer;

pub use self::chunk::Chunk;
pub use self::color::{ColorClass, ColorRef, Rgb};
pub use self::config::{ColorStyle, HtmlConfig};
pub use self::consts::{
    CUBE_LEVELS, ESCAPE_INTRODUCER, GRAYSCALE_START, GRAYSCALE_STEP, SYSTEM_COLORS, SystemColor,
};
pub use self::converter::{AnsiConverter, Converted};
pub use self::escape::{escape_for_html, linkify};
pub use self::palette::Palette;
pub use self::parser::{Command, Parameters, parse_command};
pub use self::render::{render_html, render_text};
pub use self::result::{AnsiHtmlError, AnsiHtmlResult};
pub use self::state::{ColorTarget, ConverterState};
pub use self::tokenizer::{ChunkSplit, split_chunks};

/// Converts `input` to markup with a fresh [`AnsiConverter`].
pub fn ansi_to_html(input: &str, config: &HtmlConfig) -> String {
    AnsiConverter::new().ansi_to_html(input, config)
}

/// Converts `input` to chunk records with a fresh [`AnsiConverter`].
pub fn ansi_to_json<'a>(input: &'a str, config: &HtmlConfig) -> Vec<Chunk<'a>> {
    AnsiConverter::new().ansi_to_json(input, config)
}

/// Strips every escape sequence from `input`.
pub fn ansi_to_text(input: &str) -> String {
    AnsiConverter::new().ansi_to_text(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_functions_do_not_share_state() {
        assert_eq!(
            ansi_to_html("\x1b[31m", &HtmlConfig::inline()),
            ""
        );
        assert_eq!(ansi_to_html("\x1b[mx", &HtmlConfig::inline()), "x");
        let chunks = ansi_to_json("\x1b[1mx", &HtmlConfig::json());
        assert!(!chunks[1].was_processed);
    }
}
