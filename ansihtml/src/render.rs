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

//! Chunk renderers.
//!
//! Markup is a `<span>` around the chunk text. Each color reference decides its
//! own attribute: [`ColorRef::Class`] adds `<name>-fg`/`<name>-bg` to `class`,
//! [`ColorRef::Rgb`] adds a declaration to `style`. A converter running in one
//! [`ColorStyle`](crate::ColorStyle) therefore emits only one of the two.

use crate::chunk::Chunk;
use crate::color::{ColorRef, Rgb};
use crate::consts::{TRUECOLOR_BG_ATTRIBUTE, TRUECOLOR_FG_ATTRIBUTE};
use crate::escape::escape_for_html;
use std::fmt::{self, Write};

/// Writes `chunk` as markup.
///
/// Empty chunks write nothing; chunks without color write their text as is.
/// Truecolor values are moved out of the chunk into `data-` attributes, so a
/// chunk rendered twice only carries them the first time.
///
/// # Errors
///
/// Propagates errors from `out`.
pub fn render_html<W: Write>(chunk: &mut Chunk<'_>, out: &mut W) -> fmt::Result {
    if chunk.is_empty() {
        return Ok(());
    }
    if !chunk.was_processed {
        return out.write_str(chunk.content);
    }

    let mut classes = Vec::with_capacity(2);
    let mut declarations = Vec::with_capacity(2);
    let mut data: Vec<(&str, Rgb)> = Vec::new();

    if let Some(foreground) = chunk.foreground {
        match foreground {
            ColorRef::Class(class) => {
                classes.push(format!("{class}-fg"));
                if let Some(rgb) = chunk.foreground_truecolor.take() {
                    data.push((TRUECOLOR_FG_ATTRIBUTE, rgb));
                }
            }
            ColorRef::Rgb(rgb) => declarations.push(format!("color:rgb({rgb})")),
        }
    }

    if let Some(background) = chunk.background {
        match background {
            ColorRef::Class(class) => {
                classes.push(format!("{class}-bg"));
                if let Some(rgb) = chunk.background_truecolor.take() {
                    data.push((TRUECOLOR_BG_ATTRIBUTE, rgb));
                }
            }
            ColorRef::Rgb(rgb) => declarations.push(format!("background-color:rgb({rgb})")),
        }
    }

    out.write_str("<span")?;
    if !classes.is_empty() {
        write!(out, " class=\"{}\"", classes.join(" "))?;
    }
    if !declarations.is_empty() {
        write!(out, " style=\"{}\"", declarations.join(";"))?;
    }
    for (name, rgb) in data {
        write!(out, " {name}=\"{}\"", escape_for_html(&rgb.to_string()))?;
    }
    write!(out, ">{}</span>", chunk.content)
}

/// Writes the text of `chunk` without any markup.
///
/// # Errors
///
/// Propagates errors from `out`.
pub fn render_text<W: Write>(chunk: &Chunk<'_>, out: &mut W) -> fmt::Result {
    out.write_str(chunk.content)
}
