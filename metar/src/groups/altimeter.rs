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

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;

mod constants {
    pub const HPA_IN_INHG: f32 = 33.8639;
}

/// The altimeter setting group.
///
/// `A` groups report hundredths of inches of mercury, `Q` groups whole
/// hectopascals.
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Altimeter {
    /// An `A` group, e.g. `A3012` for 30.12 inHg.
    InchesOfMercury(f32),
    /// A `Q` group, e.g. `Q1013` for 1013 hPa.
    Hectopascals(u16),
}

impl Altimeter {
    /// The setting in inches of mercury.
    pub fn in_hg(&self) -> f32 {
        match self {
            Self::InchesOfMercury(value) => *value,
            Self::Hectopascals(value) => *value as f32 / constants::HPA_IN_INHG,
        }
    }

    /// The setting in hectopascals.
    pub fn hpa(&self) -> f32 {
        match self {
            Self::InchesOfMercury(value) => value * constants::HPA_IN_INHG,
            Self::Hectopascals(value) => *value as f32,
        }
    }
}

impl FromStr for Altimeter {
    type Err = Error;

    /// Parses an `Adddd` or `Qdddd` altimeter group.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = parse_digits(s.get(1..).unwrap_or_default()).ok_or(Error::UnexpectedGroup)?;

        match s.get(..1) {
            Some("A") => Ok(Self::InchesOfMercury(value as f32 / 100.0)),
            Some("Q") => Ok(Self::Hectopascals(value)),
            _ => Err(Error::UnexpectedGroup),
        }
    }
}

impl fmt::Display for Altimeter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InchesOfMercury(value) => write!(f, "{value:.2} inHg"),
            Self::Hectopascals(value) => write!(f, "{value} hPa"),
        }
    }
}

fn parse_digits(s: &str) -> Option<u16> {
    if s.len() != 4 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    s.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn altimeter_from_str() {
        assert_eq!(
            "A3012".parse::<Altimeter>(),
            Ok(Altimeter::InchesOfMercury(30.12))
        );
        assert_eq!(
            "Q1013".parse::<Altimeter>(),
            Ok(Altimeter::Hectopascals(1013))
        );
    }

    #[test]
    fn declines_malformed_groups() {
        assert_eq!("3012".parse::<Altimeter>(), Err(Error::UnexpectedGroup));
        assert_eq!("A301".parse::<Altimeter>(), Err(Error::UnexpectedGroup));
        assert_eq!("A30121".parse::<Altimeter>(), Err(Error::UnexpectedGroup));
        assert_eq!("A301A".parse::<Altimeter>(), Err(Error::UnexpectedGroup));
        assert_eq!("B3012".parse::<Altimeter>(), Err(Error::UnexpectedGroup));
    }

    #[test]
    fn unit_conversion() {
        let inches: Altimeter = "A2992".parse().expect("group should parse");
        assert!((inches.hpa() - 1013.2).abs() < 0.5);

        let pascals: Altimeter = "Q1013".parse().expect("group should parse");
        assert!((pascals.in_hg() - 29.91).abs() < 0.01);
    }
}
