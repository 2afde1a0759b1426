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

use std::error;
use std::fmt;

/// An observation group that must be present when parsing in strict mode.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum RequiredGroup {
    Wind,
    Visibility,
    SkyCondition,
    Temperature,
    Altimeter,
}

impl fmt::Display for RequiredGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wind => write!(f, "wind"),
            Self::Visibility => write!(f, "visibility"),
            Self::SkyCondition => write!(f, "sky condition"),
            Self::Temperature => write!(f, "temperature and dewpoint"),
            Self::Altimeter => write!(f, "altimeter"),
        }
    }
}

/// Errors raised while decoding a METAR.
///
/// The fatal variants carry the raw report that caused the error so that
/// callers can log or display the offending METAR.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Error {
    /// No airport identifier was found. Raised regardless of parse options.
    MissingAirportCode { metar: String },
    /// No day and Zulu time group was found. Raised regardless of parse
    /// options.
    MissingDateTime { metar: String },
    /// A group required in strict mode is missing from the report.
    MissingGroup { group: RequiredGroup, metar: String },
    /// A string does not match the group format that was parsed from it.
    ///
    /// This is the decline returned by the group `FromStr` implementations.
    /// The parser treats it as "not this group" and moves on, so it never
    /// escapes [`Metar::parse`](crate::Metar::parse).
    UnexpectedGroup,
}

impl Error {
    /// The raw METAR that caused the error, if the variant carries one.
    pub fn metar(&self) -> Option<&str> {
        match self {
            Self::MissingAirportCode { metar }
            | Self::MissingDateTime { metar }
            | Self::MissingGroup { metar, .. } => Some(metar),
            Self::UnexpectedGroup => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingAirportCode { metar } => {
                write!(f, "no airport identifier found in {metar:?}")
            }
            Self::MissingDateTime { metar } => {
                write!(f, "no day and time group found in {metar:?}")
            }
            Self::MissingGroup { group, metar } => {
                write!(f, "no {group} group found in {metar:?}")
            }
            Self::UnexpectedGroup => {
                write!(f, "string does not match the group format")
            }
        }
    }
}

impl error::Error for Error {}
