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

use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The prevailing visibility group in statute miles, e.g. `10SM` or `M1/4SM`.
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Visibility {
    /// Visibility in statute miles. Fractional groups such as `1/4SM` yield
    /// fractional values.
    pub miles: f32,

    /// `true` if the group carries the `M` (less than) prefix.
    pub less_than: bool,
}

impl FromStr for Visibility {
    type Err = Error;

    /// Parses a statute mile visibility group.
    ///
    /// The value is a whole number or a fraction with the `SM` suffix and an
    /// optional `M` prefix for "less than":
    ///
    /// ```text
    /// 10SM  1/2SM  M1/4SM
    /// ```
    ///
    /// The whole number of a split distance like `2 1/2SM` spans a token of
    /// its own and is joined by the parser.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rest = s.strip_suffix("SM").ok_or(Error::UnexpectedGroup)?;

        let (rest, less_than) = match rest.strip_prefix('M') {
            Some(rest) => (rest, true),
            None => (rest, false),
        };

        let miles = match rest.split_once('/') {
            Some((numerator, denominator)) => {
                let numerator = parse_digits(numerator, 1..=2).ok_or(Error::UnexpectedGroup)?;
                let denominator = parse_digits(denominator, 1..=2).ok_or(Error::UnexpectedGroup)?;

                if denominator == 0 {
                    return Err(Error::UnexpectedGroup);
                }

                numerator as f32 / denominator as f32
            }
            None => parse_digits(rest, 1..=3).ok_or(Error::UnexpectedGroup)? as f32,
        };

        Ok(Self { miles, less_than })
    }
}

/// The unit a runway visual range is reported in.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DistanceUnit {
    Feet,
    Meters,
}

/// A runway visual range group, e.g. `R35L/4500V6000FT`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RunwayVisualRange {
    /// Runway designator, e.g. `35L`.
    pub runway: String,
    /// Minimum visual range, or the only one for a non-varying group.
    pub lower: u16,
    /// Maximum visual range of a varying `lowerVupper` group.
    pub upper: Option<u16>,
    /// Feet with the `FT` suffix, meters without.
    pub unit: DistanceUnit,
}

impl FromStr for RunwayVisualRange {
    type Err = Error;

    /// Parses a runway visual range group.
    ///
    /// The runway designator follows the `R` prefix, separated by a slash
    /// from one or two 4 digit ranges. `M` and `P` range prefixes are
    /// accepted:
    ///
    /// ```text
    /// R28/2600FT  R35L/4500V6000FT  R24/P1200
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rest = s.strip_prefix('R').ok_or(Error::UnexpectedGroup)?;
        let (runway, range) = rest.split_once('/').ok_or(Error::UnexpectedGroup)?;

        if !is_runway_designator(runway) {
            return Err(Error::UnexpectedGroup);
        }

        let (range, unit) = match range.strip_suffix("FT") {
            Some(range) => (range, DistanceUnit::Feet),
            None => (range, DistanceUnit::Meters),
        };

        let (lower, upper) = match range.split_once('V') {
            Some((lower, upper)) => (
                parse_range(lower).ok_or(Error::UnexpectedGroup)?,
                Some(parse_range(upper).ok_or(Error::UnexpectedGroup)?),
            ),
            None => (parse_range(range).ok_or(Error::UnexpectedGroup)?, None),
        };

        Ok(Self {
            runway: runway.to_string(),
            lower,
            upper,
            unit,
        })
    }
}

/// Two digits with an optional `L`, `C` or `R` parallel runway suffix.
fn is_runway_designator(s: &str) -> bool {
    let bytes = s.as_bytes();

    match bytes.len() {
        2 => bytes.iter().all(u8::is_ascii_digit),
        3 => {
            bytes[..2].iter().all(u8::is_ascii_digit)
                && matches!(bytes[2], b'L' | b'C' | b'R')
        }
        _ => false,
    }
}

/// Parses a 4 digit range, tolerating the `M`/`P` limit prefixes.
fn parse_range(s: &str) -> Option<u16> {
    let s = match s.as_bytes().first() {
        Some(b'M' | b'P') => &s[1..],
        _ => s,
    };

    parse_digits(s, 4..=4)
}

fn parse_digits(s: &str, len: std::ops::RangeInclusive<usize>) -> Option<u16> {
    if !len.contains(&s.len()) || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    s.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visibility_from_str() {
        assert_eq!(
            "10SM".parse::<Visibility>(),
            Ok(Visibility {
                miles: 10.0,
                less_than: false
            })
        );
        assert_eq!(
            "1/2SM".parse::<Visibility>(),
            Ok(Visibility {
                miles: 0.5,
                less_than: false
            })
        );
        assert_eq!(
            "M1/4SM".parse::<Visibility>(),
            Ok(Visibility {
                miles: 0.25,
                less_than: true
            })
        );
    }

    #[test]
    fn declines_malformed_groups() {
        assert_eq!("10".parse::<Visibility>(), Err(Error::UnexpectedGroup));
        assert_eq!("SM".parse::<Visibility>(), Err(Error::UnexpectedGroup));
        assert_eq!("1/0SM".parse::<Visibility>(), Err(Error::UnexpectedGroup));
        assert_eq!("1/SM".parse::<Visibility>(), Err(Error::UnexpectedGroup));
        assert_eq!("ASM".parse::<Visibility>(), Err(Error::UnexpectedGroup));
        // the P prefix (more than) is not decoded
        assert_eq!("P6SM".parse::<Visibility>(), Err(Error::UnexpectedGroup));
    }

    #[test]
    fn runway_visual_range_from_str() {
        assert_eq!(
            "R35L/4500V6000FT".parse::<RunwayVisualRange>(),
            Ok(RunwayVisualRange {
                runway: "35L".to_string(),
                lower: 4500,
                upper: Some(6000),
                unit: DistanceUnit::Feet,
            })
        );
        assert_eq!(
            "R28/2600FT".parse::<RunwayVisualRange>(),
            Ok(RunwayVisualRange {
                runway: "28".to_string(),
                lower: 2600,
                upper: None,
                unit: DistanceUnit::Feet,
            })
        );
        assert_eq!(
            "R24/P1200".parse::<RunwayVisualRange>(),
            Ok(RunwayVisualRange {
                runway: "24".to_string(),
                lower: 1200,
                upper: None,
                unit: DistanceUnit::Meters,
            })
        );
    }

    #[test]
    fn declines_malformed_ranges() {
        assert_eq!(
            "35L/4500FT".parse::<RunwayVisualRange>(),
            Err(Error::UnexpectedGroup)
        );
        assert_eq!(
            "R35X/4500FT".parse::<RunwayVisualRange>(),
            Err(Error::UnexpectedGroup)
        );
        assert_eq!(
            "R35L/450FT".parse::<RunwayVisualRange>(),
            Err(Error::UnexpectedGroup)
        );
        assert_eq!(
            "R35L4500FT".parse::<RunwayVisualRange>(),
            Err(Error::UnexpectedGroup)
        );
    }
}
