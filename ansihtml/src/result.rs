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

//! Error types for the ansihtml crate.
//!
//! Conversion itself never fails: malformed escape sequences degrade to plain
//! text. Errors only arise at the edges, when writing into a caller supplied
//! sink or when reading a color back from its textual form.

use thiserror::Error;

/// Result type alias for operations that may fail with an [`AnsiHtmlError`].
pub type AnsiHtmlResult<T> = Result<T, AnsiHtmlError>;

/// Errors raised around a conversion.
#[derive(Debug, Error)]
pub enum AnsiHtmlError {
    /// A color string is not of the form `"r, g, b"` with channels in `0..=255`.
    #[error("Invalid color '{value}': {reason}")]
    InvalidColor {
        /// The rejected input
        value: String,
        /// Why it was rejected
        reason: String,
    },

    /// The output sink refused a write.
    #[error("Format error: {0}")]
    Format(#[from] std::fmt::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AnsiHtmlError::InvalidColor {
            value: "1, 2".to_string(),
            reason: "expected three channels".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid color '1, 2': expected three channels"
        );
        assert_eq!(
            AnsiHtmlError::from(std::fmt::Error).to_string(),
            "Format error: an error occurred when formatting an argument"
        );
    }
}
