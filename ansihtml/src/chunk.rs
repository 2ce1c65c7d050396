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

use crate::color::{ColorRef, Rgb};
use crate::state::ConverterState;
use serde::Serialize;

/// One span of literal text and the colors it is shown with.
///
/// Chunks borrow their text from the converted input. The color fields are a
/// snapshot of the converter state taken right after the chunk's command was
/// applied, or all `None` when no color was active.
///
/// Serializes with the keys `content`, `fg`, `bg`, `fg_truecolor`,
/// `bg_truecolor` and `was_processed`; colors appear as class names or
/// `"r, g, b"` strings.
///
/// ```
/// use termionix_ansihtml::{ansi_to_json, HtmlConfig};
///
/// let chunks = ansi_to_json("\x1b[31mHello\x1b[0m World", &HtmlConfig::json());
/// let json = serde_json::to_string(&chunks[1]).unwrap();
/// assert_eq!(
///     json,
///     r#"{"content":"Hello","fg":"187, 0, 0","bg":null,"fg_truecolor":null,"bg_truecolor":null,"was_processed":true}"#
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Chunk<'a> {
    /// Literal text
    pub content: &'a str,
    /// Foreground color
    #[serde(rename = "fg")]
    pub foreground: Option<ColorRef>,
    /// Background color
    #[serde(rename = "bg")]
    pub background: Option<ColorRef>,
    /// Exact value of a truecolor foreground class
    #[serde(rename = "fg_truecolor")]
    pub foreground_truecolor: Option<Rgb>,
    /// Exact value of a truecolor background class
    #[serde(rename = "bg_truecolor")]
    pub background_truecolor: Option<Rgb>,
    /// `true` when the chunk carries a color
    pub was_processed: bool,
}

impl<'a> Chunk<'a> {
    /// An unstyled chunk.
    pub fn plain(content: &'a str) -> Self {
        Chunk {
            content,
            ..Default::default()
        }
    }

    /// A chunk styled with the current colors of `state`.
    pub fn styled(content: &'a str, state: &ConverterState) -> Self {
        Chunk {
            content,
            foreground: state.foreground(),
            background: state.background(),
            foreground_truecolor: state.foreground_truecolor(),
            background_truecolor: state.background_truecolor(),
            was_processed: true,
        }
    }

    /// Returns `true` when the chunk has no text.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ColorClass;
    use crate::config::ColorStyle;
    use crate::parser::Parameters;
    use once_cell::unsync::OnceCell;

    #[test]
    fn test_plain_chunk() {
        let chunk = Chunk::plain("text");
        assert_eq!(chunk.content, "text");
        assert_eq!(chunk.foreground, None);
        assert_eq!(chunk.background, None);
        assert!(!chunk.was_processed);
        assert!(!chunk.is_empty());
        assert!(Chunk::plain("").is_empty());
    }

    #[test]
    fn test_styled_chunk_snapshots_state() {
        let mut state = ConverterState::new();
        state.apply(
            Parameters::new("38;2;10;20;30;44"),
            ColorStyle::Classes,
            &OnceCell::new(),
        );
        let chunk = Chunk::styled("x", &state);
        assert_eq!(chunk.foreground, Some(ColorRef::Class(ColorClass::TrueColor)));
        assert_eq!(chunk.foreground_truecolor, Some(Rgb::new(10, 20, 30)));
        assert_eq!(chunk.background, Some(ColorRef::Class(ColorClass::System(4))));
        assert_eq!(chunk.background_truecolor, None);
        assert!(chunk.was_processed);
    }

    #[test]
    fn test_serialize_plain() {
        let json = serde_json::to_value(Chunk::plain(" World")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "content": " World",
                "fg": null,
                "bg": null,
                "fg_truecolor": null,
                "bg_truecolor": null,
                "was_processed": false,
            })
        );
    }

    #[test]
    fn test_serialize_classes() {
        let chunk = Chunk {
            content: "X",
            foreground: Some(ColorRef::Class(ColorClass::TrueColor)),
            background: Some(ColorRef::Class(ColorClass::Palette(202))),
            foreground_truecolor: Some(Rgb::new(10, 20, 30)),
            background_truecolor: None,
            was_processed: true,
        };
        let json = serde_json::to_value(&chunk).unwrap();
        assert_eq!(json["fg"], "ansi-truecolor");
        assert_eq!(json["bg"], "ansi-palette-202");
        assert_eq!(json["fg_truecolor"], "10, 20, 30");
        assert_eq!(json["was_processed"], true);
    }
}
