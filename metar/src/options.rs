// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

/// Options controlling how lenient the parser is.
///
/// The default is strict parsing without warnings, matching what
/// [`Metar::parse`] and the `FromStr` implementation use.
///
/// [`Metar::parse`]: crate::Metar::parse
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct ParseOptions {
    /// Fail if the wind, visibility, sky condition, temperature/dewpoint or
    /// altimeter group is missing from the report.
    pub strict: bool,

    /// Log a warning for every token that is skipped and every core group
    /// that is absent.
    pub log_warnings: bool,
}

impl ParseOptions {
    /// Options that accept a report with missing observation groups.
    pub fn lenient() -> Self {
        Self {
            strict: false,
            log_warnings: false,
        }
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            strict: true,
            log_warnings: false,
        }
    }
}
