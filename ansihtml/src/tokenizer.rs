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

use crate::consts::ESCAPE_INTRODUCER;
use std::str::Split;

/// Input text split on every `ESC [`.
///
/// [`leading`](ChunkSplit::leading) is the text before the first introducer and
/// is always literal. Iterating yields the escape chunks that follow, in input
/// order, each starting right after its introducer and ending right before the
/// next one. Escape chunks may be empty (two adjacent introducers, or an
/// introducer at the very end).
#[derive(Clone, Debug)]
pub struct ChunkSplit<'a> {
    leading: &'a str,
    segments: Split<'a, &'static str>,
}

impl<'a> ChunkSplit<'a> {
    /// Literal text before the first escape introducer.
    pub fn leading(&self) -> &'a str {
        self.leading
    }
}

impl<'a> Iterator for ChunkSplit<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.segments.next()
    }
}

/// Splits `input` into its leading text and escape chunks.
pub fn split_chunks(input: &str) -> ChunkSplit<'_> {
    let mut segments = input.split(ESCAPE_INTRODUCER);
    // `split` always yields at least one segment
    let leading = segments.next().unwrap_or_default();
    ChunkSplit { leading, segments }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_introducer() {
        let mut split = split_chunks("plain text");
        assert_eq!(split.leading(), "plain text");
        assert_eq!(split.next(), None);
    }

    #[test]
    fn test_empty_input() {
        let mut split = split_chunks("");
        assert_eq!(split.leading(), "");
        assert_eq!(split.next(), None);
    }

    #[test]
    fn test_leading_and_chunks() {
        let split = split_chunks("before\x1b[31mred\x1b[0m after");
        assert_eq!(split.leading(), "before");
        let chunks: Vec<&str> = split.collect();
        assert_eq!(chunks, vec!["31mred", "0m after"]);
    }

    #[test]
    fn test_leading_introducer_gives_empty_leading() {
        let split = split_chunks("\x1b[1m");
        assert_eq!(split.leading(), "");
        assert_eq!(split.collect::<Vec<_>>(), vec!["1m"]);
    }

    #[test]
    fn test_adjacent_and_trailing_introducers() {
        let split = split_chunks("a\x1b[\x1b[32mb\x1b[");
        assert_eq!(split.leading(), "a");
        assert_eq!(split.collect::<Vec<_>>(), vec!["", "32mb", ""]);
    }

    #[test]
    fn test_lone_escape_is_literal() {
        let split = split_chunks("a\x1bb\x1b]0;title\x07");
        assert_eq!(split.leading(), "a\x1bb\x1b]0;title\x07");
        assert_eq!(split.count(), 0);
    }
}
