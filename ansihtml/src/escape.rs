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

//! Text helpers applied around a conversion.
//!
//! Conversion never escapes or links text by itself. Callers that render
//! untrusted output should pass the input through [`escape_for_html`] before
//! converting (escape sequences contain none of `&`, `<`, `>`), and may run
//! [`linkify`] on the result.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::borrow::Cow;

static URL_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"https?://[^\s]+").unwrap());

/// Replaces `&`, `<` and `>` with their HTML entities.
///
/// Returns the input borrowed when none of them occur.
///
/// ```
/// use termionix_ansihtml::escape_for_html;
///
/// assert_eq!(escape_for_html("a < b && c > d"), "a &lt; b &amp;&amp; c &gt; d");
/// ```
pub fn escape_for_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    Cow::Owned(escaped)
}

/// Wraps every `http://` or `https://` URL in an anchor.
///
/// A URL runs until the next whitespace character.
///
/// ```
/// use termionix_ansihtml::linkify;
///
/// assert_eq!(
///     linkify("see https://example.com/x for details"),
///     "see <a href=\"https://example.com/x\">https://example.com/x</a> for details"
/// );
/// ```
pub fn linkify(text: &str) -> Cow<'_, str> {
    URL_PATTERN.replace_all(text, |caps: &Captures<'_>| {
        format!("<a href=\"{0}\">{0}</a>", &caps[0])
    })
}
