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

//! Command grammar for a single escape chunk.
//!
//! An escape chunk is the text following one `ESC [`. It is read as
//!
//! ```text
//! private-marker* parameter* intermediate* final-byte trailing-text
//! ```
//!
//! - private markers: `!` and `0x3C..=0x3F` (`<`, `=`, `>`, `?`)
//! - parameters: ASCII digits and `;`
//! - intermediates: `0x20..=0x2C`
//! - final byte: `0x40..=0x7E`
//!
//! Only a chunk with no private marker, no intermediate and a final `m` is an
//! SGR command. Every other well-formed command is dropped and its trailing
//! text passed through. A chunk that does not reach a final byte is malformed
//! and contributes nothing.

use std::str::Split;

/// Classification of one escape chunk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command<'a> {
    /// Select Graphic Rendition: parameters to interpret and the literal text
    /// that follows the command.
    Sgr {
        /// Semicolon-delimited parameter list
        parameters: Parameters<'a>,
        /// Literal text after the final byte
        text: &'a str,
    },
    /// Any other control sequence (cursor movement, mode set, ...). The
    /// command bytes are discarded.
    Unsupported {
        /// Command bytes, including the final byte
        command: &'a str,
        /// Literal text after the final byte
        text: &'a str,
    },
    /// No final byte could be found.
    Malformed,
}

impl<'a> Command<'a> {
    /// Literal text carried by the chunk. Empty for a malformed chunk.
    pub fn text(&self) -> &'a str {
        match self {
            Command::Sgr { text, .. } | Command::Unsupported { text, .. } => text,
            Command::Malformed => "",
        }
    }

    /// Returns `true` for an SGR command.
    pub fn is_sgr(&self) -> bool {
        matches!(self, Command::Sgr { .. })
    }
}

/// The raw parameter run of an SGR command, e.g. `38;5;196`.
///
/// Iteration yields each semicolon-delimited field in order, including empty
/// fields: `""` yields one empty field, `"1;;31"` yields `"1"`, `""`, `"31"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Parameters<'a>(&'a str);

impl<'a> Parameters<'a> {
    /// Wraps a parameter run. The run should only contain digits and `;`.
    pub fn new(raw: &'a str) -> Self {
        Parameters(raw)
    }

    /// The parameter run as written.
    pub fn as_str(&self) -> &'a str {
        self.0
    }

    /// Iterates the parameter fields.
    pub fn iter(&self) -> Split<'a, char> {
        self.0.split(';')
    }
}

impl<'a> IntoIterator for Parameters<'a> {
    type Item = &'a str;
    type IntoIter = Split<'a, char>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn is_private_marker(byte: u8) -> bool {
    byte == b'!' || (0x3C..=0x3F).contains(&byte)
}

fn is_parameter_byte(byte: u8) -> bool {
    byte.is_ascii_digit() || byte == b';'
}

fn is_intermediate_byte(byte: u8) -> bool {
    (0x20..=0x2C).contains(&byte)
}

fn is_final_byte(byte: u8) -> bool {
    (0x40..=0x7E).contains(&byte)
}

/// Advances `pos` past every byte matching `accept` and returns the new position.
fn skip_while(bytes: &[u8], mut pos: usize, accept: fn(u8) -> bool) -> usize {
    while pos < bytes.len() && accept(bytes[pos]) {
        pos += 1;
    }
    pos
}

/// Classifies one escape chunk.
///
/// ```
/// use termionix_ansihtml::{parse_command, Command};
///
/// let command = parse_command("1;31mError");
/// assert!(command.is_sgr());
/// assert_eq!(command.text(), "Error");
///
/// let command = parse_command("?25hHello");
/// assert!(matches!(command, Command::Unsupported { command: "?25h", .. }));
/// assert_eq!(command.text(), "Hello");
/// ```
pub fn parse_command(chunk: &str) -> Command<'_> {
    let bytes = chunk.as_bytes();

    let private_end = skip_while(bytes, 0, is_private_marker);
    let parameters_end = skip_while(bytes, private_end, is_parameter_byte);
    let intermediates_end = skip_while(bytes, parameters_end, is_intermediate_byte);

    let final_byte = match bytes.get(intermediates_end) {
        Some(&byte) if is_final_byte(byte) => byte,
        _ => return Command::Malformed,
    };

    // Every byte up to and including the final byte is ASCII.
    let command_end = intermediates_end + 1;
    let text = &chunk[command_end..];

    if private_end > 0 || intermediates_end > parameters_end || final_byte != b'm' {
        return Command::Unsupported {
            command: &chunk[..command_end],
            text,
        };
    }

    Command::Sgr {
        parameters: Parameters::new(&chunk[private_end..parameters_end]),
        text,
    }
}
