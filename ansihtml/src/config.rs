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

/// Conversion settings
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct HtmlConfig {
    /// How colors are expressed in markup and chunk records
    pub color_style: ColorStyle,
    /// Produce the structured chunk list instead of markup
    pub json: bool,
    /// With `json`, drop chunks whose content is empty
    pub remove_empty: bool,
}

impl HtmlConfig {
    /// Markup with inline `style` declarations
    pub fn inline() -> HtmlConfig {
        HtmlConfig {
            color_style: ColorStyle::Inline,
            json: false,
            remove_empty: false,
        }
    }
    /// Markup with CSS class names
    pub fn classes() -> HtmlConfig {
        HtmlConfig {
            color_style: ColorStyle::Classes,
            json: false,
            remove_empty: false,
        }
    }
    /// Structured chunk list with literal colors
    pub fn json() -> HtmlConfig {
        HtmlConfig {
            color_style: ColorStyle::Inline,
            json: true,
            remove_empty: false,
        }
    }

    /// Replaces the color style.
    #[must_use]
    pub fn with_color_style(mut self, color_style: ColorStyle) -> Self {
        self.color_style = color_style;
        self
    }

    /// Sets whether the structured chunk list is produced.
    #[must_use]
    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    /// Sets whether empty chunks are dropped from the structured chunk list.
    #[must_use]
    pub fn with_remove_empty(mut self, remove_empty: bool) -> Self {
        self.remove_empty = remove_empty;
        self
    }
}

/// How a converter expresses colors.
///
/// # Examples
///
/// ```
/// use termionix_ansihtml::{ansi_to_html, ColorStyle, HtmlConfig};
///
/// let input = "\x1b[31mred\x1b[0m";
///
/// let inline = ansi_to_html(input, &HtmlConfig::inline());
/// assert_eq!(inline, "<span style=\"color:rgb(187, 0, 0)\">red</span>");
///
/// let classes = ansi_to_html(input, &HtmlConfig::default().with_color_style(ColorStyle::Classes));
/// assert_eq!(classes, "<span class=\"ansi-red-fg\">red</span>");
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorStyle {
    /// Colors resolve to RGB values and are written as
    /// `color:rgb(r, g, b)` / `background-color:rgb(r, g, b)`.
    #[default]
    Inline,

    /// Colors stay semantic and are written as classes: `ansi-red-fg`,
    /// `ansi-bright-blue-bg`, `ansi-palette-196-fg`, `ansi-truecolor-fg`. A
    /// truecolor class carries its exact value in a
    /// `data-ansi-truecolor-fg`/`data-ansi-truecolor-bg` attribute.
    Classes,
}

impl ColorStyle {
    /// Maps a `use_classes` switch onto a style.
    pub fn from_use_classes(use_classes: bool) -> ColorStyle {
        if use_classes {
            ColorStyle::Classes
        } else {
            ColorStyle::Inline
        }
    }

    /// Returns `true` for [`ColorStyle::Classes`].
    pub fn uses_classes(&self) -> bool {
        matches!(self, ColorStyle::Classes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = HtmlConfig::default();
        assert_eq!(config.color_style, ColorStyle::Inline);
        assert!(!config.json);
        assert!(!config.remove_empty);
        assert_eq!(config, HtmlConfig::inline());
    }

    #[test]
    fn test_presets() {
        assert!(HtmlConfig::classes().color_style.uses_classes());
        assert!(HtmlConfig::json().json);
        assert!(!HtmlConfig::json().color_style.uses_classes());
    }

    #[test]
    fn test_builders() {
        let config = HtmlConfig::json()
            .with_color_style(ColorStyle::Classes)
            .with_remove_empty(true);
        assert_eq!(
            config,
            HtmlConfig {
                color_style: ColorStyle::Classes,
                json: true,
                remove_empty: true,
            }
        );
        assert!(!config.with_json(false).json);
    }

    #[test]
    fn test_from_use_classes() {
        assert_eq!(ColorStyle::from_use_classes(true), ColorStyle::Classes);
        assert_eq!(ColorStyle::from_use_classes(false), ColorStyle::Inline);
    }
}
