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

use crate::chunk::Chunk;
use crate::config::{ColorStyle, HtmlConfig};
use crate::palette::Palette;
use crate::parser::{Command, parse_command};
use crate::render::{render_html, render_text};
use crate::result::AnsiHtmlResult;
use crate::state::ConverterState;
use crate::tokenizer::split_chunks;
use once_cell::unsync::OnceCell;
use std::fmt::{self, Write};
use std::iter;
use tracing::{instrument, trace};

/// Output of [`AnsiConverter::process`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Converted<'a> {
    /// Markup, produced when `json` is off
    Html(String),
    /// Chunk records, produced when `json` is on
    Chunks(Vec<Chunk<'a>>),
}

impl<'a> Converted<'a> {
    /// The markup, if this is markup.
    pub fn into_html(self) -> Option<String> {
        match self {
            Converted::Html(html) => Some(html),
            Converted::Chunks(_) => None,
        }
    }

    /// The chunk records, if these are chunk records.
    pub fn into_chunks(self) -> Option<Vec<Chunk<'a>>> {
        match self {
            Converted::Chunks(chunks) => Some(chunks),
            Converted::Html(_) => None,
        }
    }
}

/// Converts text containing ANSI SGR sequences to markup, chunk records or
/// plain text.
///
/// A converter keeps the graphic state of the stream it reads. A color set at
/// the end of one call still applies at the start of the next, which lets a
/// log be converted line by line:
///
/// ```
/// use termionix_ansihtml::{AnsiConverter, HtmlConfig};
///
/// let mut converter = AnsiConverter::new();
/// let config = HtmlConfig::inline();
///
/// assert_eq!(
///     converter.ansi_to_html("\x1b[32mok", &config),
///     "<span style=\"color:rgb(0, 187, 0)\">ok</span>"
/// );
/// // Still green; the leading text of a call is never styled, but the next
/// // command inherits the color.
/// assert_eq!(
///     converter.ansi_to_html("\x1b[44mdone", &config),
///     "<span style=\"color:rgb(0, 187, 0);background-color:rgb(0, 0, 187)\">done</span>"
/// );
/// ```
///
/// Because of this a converter must not be shared between unrelated streams.
/// Use one converter per stream, or call [`reset`](AnsiConverter::reset) when a
/// new stream starts.
#[derive(Debug, Default)]
pub struct AnsiConverter {
    state: ConverterState,
    palette: OnceCell<Palette>,
}

impl AnsiConverter {
    /// Creates a converter with no active colors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current graphic state.
    pub fn state(&self) -> &ConverterState {
        &self.state
    }

    /// Clears the graphic state, as SGR `0` would.
    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Converts `input` to markup or chunk records depending on `config.json`.
    pub fn process<'a>(&mut self, input: &'a str, config: &HtmlConfig) -> Converted<'a> {
        if config.json {
            Converted::Chunks(self.ansi_to_json(input, config))
        } else {
            Converted::Html(self.ansi_to_html(input, config))
        }
    }

    /// Converts `input` to markup.
    ///
    /// Styled text is wrapped in `<span>` elements; everything else, including
    /// the text before the first escape sequence, is copied unchanged. Text is
    /// not HTML-escaped, see [`escape_for_html`](crate::escape_for_html).
    #[instrument(level = "debug", skip_all, fields(len = input.len()))]
    pub fn ansi_to_html(&mut self, input: &str, config: &HtmlConfig) -> String {
        let mut html = String::with_capacity(input.len());
        // Writing into a String cannot fail.
        let _ = self.write_markup(input, config.color_style, &mut html);
        html
    }

    /// Converts `input` to markup, writing into `out`.
    ///
    /// # Errors
    ///
    /// Returns [`AnsiHtmlError::Format`](crate::AnsiHtmlError::Format) when
    /// `out` fails. Chunks converted before the failure have already updated
    /// the graphic state.
    #[instrument(level = "debug", skip_all, fields(len = input.len()))]
    pub fn write_html<W: Write>(
        &mut self,
        input: &str,
        config: &HtmlConfig,
        out: &mut W,
    ) -> AnsiHtmlResult<()> {
        self.write_markup(input, config.color_style, out)?;
        Ok(())
    }

    /// Converts `input` to chunk records.
    ///
    /// The first record always holds the text before the first escape
    /// sequence, unstyled. With `config.remove_empty`, records without text
    /// are dropped; the order of the others is kept. `config.json` is ignored.
    #[instrument(level = "debug", skip_all, fields(len = input.len()))]
    pub fn ansi_to_json<'a>(&mut self, input: &'a str, config: &HtmlConfig) -> Vec<Chunk<'a>> {
        let split = split_chunks(input);
        let mut chunks = vec![Chunk::plain(split.leading())];
        chunks.extend(split.map(|segment| self.interpret(segment, config.color_style)));

        if config.remove_empty {
            chunks.retain(|chunk| !chunk.is_empty());
        }
        chunks
    }

    /// Converts `input` to plain text with every escape sequence removed.
    ///
    /// SGR commands still update the graphic state, so colors set here carry
    /// into later markup conversions on this converter.
    #[instrument(level = "debug", skip_all, fields(len = input.len()))]
    pub fn ansi_to_text(&mut self, input: &str) -> String {
        let split = split_chunks(input);
        let leading = Chunk::plain(split.leading());
        let mut text = String::with_capacity(input.len());

        for chunk in iter::once(leading).chain(
            split.map(|segment| self.interpret(segment, ColorStyle::default())),
        ) {
            // Writing into a String cannot fail.
            let _ = render_text(&chunk, &mut text);
        }
        text
    }

    fn write_markup<W: Write>(&mut self, input: &str, style: ColorStyle, out: &mut W) -> fmt::Result {
        let split = split_chunks(input);
        out.write_str(split.leading())?;
        for segment in split {
            let mut chunk = self.interpret(segment, style);
            render_html(&mut chunk, out)?;
        }
        Ok(())
    }

    /// Parses one escape chunk and applies it to the graphic state.
    fn interpret<'a>(&mut self, segment: &'a str, style: ColorStyle) -> Chunk<'a> {
        match parse_command(segment) {
            Command::Sgr { parameters, text } => {
                if self.state.apply(parameters, style, &self.palette) {
                    Chunk::styled(text, &self.state)
                } else {
                    Chunk::plain(text)
                }
            }
            Command::Unsupported { command, text } => {
                trace!(command, "dropping unsupported control sequence");
                Chunk::plain(text)
            }
            Command::Malformed => {
                trace!(segment, "dropping malformed escape chunk");
                Chunk::plain("")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{ColorClass, ColorRef, Rgb};
    use tracing_test::traced_test;

    #[test]
    #[traced_test]
    fn test_unsupported_sequences_are_logged() {
        let mut converter = AnsiConverter::new();
        let html = converter.ansi_to_html("\x1b[?25hHello\x1b[", &HtmlConfig::inline());
        assert_eq!(html, "Hello");
        assert!(logs_contain("dropping unsupported control sequence"));
        assert!(logs_contain("dropping malformed escape chunk"));
    }

    #[test]
    fn test_process_selects_output() {
        let mut converter = AnsiConverter::new();
        let html = converter.process("\x1b[31mx", &HtmlConfig::inline());
        assert_eq!(
            html.into_html().as_deref(),
            Some("<span style=\"color:rgb(187, 0, 0)\">x</span>")
        );

        let chunks = converter.process("\x1b[0mx", &HtmlConfig::json());
        let chunks = chunks.into_chunks().unwrap();
        assert_eq!(chunks, vec![Chunk::plain(""), Chunk::plain("x")]);
    }

    #[test]
    fn test_state_persists_across_calls() {
        let mut converter = AnsiConverter::new();
        converter.ansi_to_html("\x1b[1;33m", &HtmlConfig::inline());
        assert!(converter.state().is_bright());

        let chunks = converter.ansi_to_json("\x1b[44mx", &HtmlConfig::json());
        assert_eq!(
            chunks[1].foreground,
            Some(ColorRef::Rgb(Rgb::new(255, 255, 85)))
        );
        assert_eq!(chunks[1].background, Some(ColorRef::Rgb(Rgb::new(0, 0, 187))));
    }

    #[test]
    fn test_reset_clears_state() {
        let mut converter = AnsiConverter::new();
        converter.ansi_to_html("\x1b[1;31m", &HtmlConfig::inline());
        converter.reset();
        assert_eq!(converter.state(), &ConverterState::default());
        assert_eq!(converter.ansi_to_html("\x1b[mx", &HtmlConfig::inline()), "x");
    }

    #[test]
    fn test_text_conversion_updates_state() {
        let mut converter = AnsiConverter::new();
        assert_eq!(converter.ansi_to_text("\x1b[35mpurple"), "purple");
        assert_eq!(
            converter.state().foreground(),
            Some(ColorRef::Rgb(Rgb::new(187, 0, 187)))
        );
    }

    #[test]
    fn test_truecolor_override_consumed_per_chunk() {
        let mut converter = AnsiConverter::new();
        let html = converter.ansi_to_html(
            "\x1b[38;2;10;20;30mA\x1b[44mB",
            &HtmlConfig::classes(),
        );
        // Each chunk snapshots the override and renders it once.
        assert_eq!(
            html,
            "<span class=\"ansi-truecolor-fg\" data-ansi-truecolor-fg=\"10, 20, 30\">A</span>\
             <span class=\"ansi-truecolor-fg ansi-blue-bg\" data-ansi-truecolor-fg=\"10, 20, 30\">B</span>"
        );
        assert_eq!(
            converter.state().foreground(),
            Some(ColorRef::Class(ColorClass::TrueColor))
        );
    }

    #[test]
    fn test_write_html_reports_sink_errors() {
        struct Refuse;
        impl Write for Refuse {
            fn write_str(&mut self, _: &str) -> fmt::Result {
                Err(fmt::Error)
            }
        }

        let mut converter = AnsiConverter::new();
        let result = converter.write_html("\x1b[31mx", &HtmlConfig::inline(), &mut Refuse);
        assert!(matches!(result, Err(crate::AnsiHtmlError::Format(_))));
    }

    #[test]
    fn test_write_html_matches_ansi_to_html() {
        let input = "a\x1b[32mb\x1b[0mc";
        let mut out = String::new();
        AnsiConverter::new()
            .write_html(input, &HtmlConfig::inline(), &mut out)
            .unwrap();
        assert_eq!(out, AnsiConverter::new().ansi_to_html(input, &HtmlConfig::inline()));
    }
}
