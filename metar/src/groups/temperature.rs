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

/// The temperature and dewpoint group, e.g. `08/M03`.
///
/// Either side of the group may be blank, so both values are optional but
/// never both absent at once.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Temperature {
    /// Air temperature in degrees Celsius.
    pub air: Option<i16>,
    /// Dewpoint in degrees Celsius.
    pub dewpoint: Option<i16>,
}

impl Temperature {
    /// Air temperature in degrees Fahrenheit, rounded.
    pub fn air_f(&self) -> Option<i16> {
        self.air.map(celsius_to_fahrenheit)
    }

    /// Dewpoint in degrees Fahrenheit, rounded.
    pub fn dewpoint_f(&self) -> Option<i16> {
        self.dewpoint.map(celsius_to_fahrenheit)
    }
}

impl FromStr for Temperature {
    type Err = Error;

    /// Parses a temperature/dewpoint group.
    ///
    /// Each side is two digits with an `M` prefix for sub-zero values and
    /// may be blank:
    ///
    /// ```text
    /// 21/12  08/M03  M05/M12  21/
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (air, dewpoint) = s.split_once('/').ok_or(Error::UnexpectedGroup)?;

        let air = match air {
            "" => None,
            _ => Some(parse_celsius(air).ok_or(Error::UnexpectedGroup)?),
        };
        let dewpoint = match dewpoint {
            "" => None,
            _ => Some(parse_celsius(dewpoint).ok_or(Error::UnexpectedGroup)?),
        };

        if air.is_none() && dewpoint.is_none() {
            return Err(Error::UnexpectedGroup);
        }

        Ok(Self { air, dewpoint })
    }
}

fn parse_celsius(s: &str) -> Option<i16> {
    let (s, sign) = match s.strip_prefix('M') {
        Some(s) => (s, -1),
        None => (s, 1),
    };

    if s.len() != 2 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    s.parse::<i16>().ok().map(|value| sign * value)
}

fn celsius_to_fahrenheit(celsius: i16) -> i16 {
    (celsius as f32 * 9.0 / 5.0 + 32.0).round() as i16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temperature_from_str() {
        assert_eq!(
            "21/12".parse::<Temperature>(),
            Ok(Temperature {
                air: Some(21),
                dewpoint: Some(12)
            })
        );
        assert_eq!(
            "08/M03".parse::<Temperature>(),
            Ok(Temperature {
                air: Some(8),
                dewpoint: Some(-3)
            })
        );
        assert_eq!(
            "M05/M12".parse::<Temperature>(),
            Ok(Temperature {
                air: Some(-5),
                dewpoint: Some(-12)
            })
        );
    }

    #[test]
    fn blank_sides() {
        assert_eq!(
            "21/".parse::<Temperature>(),
            Ok(Temperature {
                air: Some(21),
                dewpoint: None
            })
        );
        assert_eq!(
            "/12".parse::<Temperature>(),
            Ok(Temperature {
                air: None,
                dewpoint: Some(12)
            })
        );
        assert_eq!("/".parse::<Temperature>(), Err(Error::UnexpectedGroup));
    }

    #[test]
    fn declines_malformed_groups() {
        assert_eq!("21".parse::<Temperature>(), Err(Error::UnexpectedGroup));
        assert_eq!("2/1".parse::<Temperature>(), Err(Error::UnexpectedGroup));
        assert_eq!("1/2SM".parse::<Temperature>(), Err(Error::UnexpectedGroup));
        assert_eq!("M5/M12".parse::<Temperature>(), Err(Error::UnexpectedGroup));
    }

    #[test]
    fn fahrenheit_is_rounded() {
        let freezing: Temperature = "00/M17".parse().expect("group should parse");
        assert_eq!(freezing.air_f(), Some(32));
        assert_eq!(freezing.dewpoint_f(), Some(1));

        let warm: Temperature = "21/12".parse().expect("group should parse");
        assert_eq!(warm.air_f(), Some(70));
        assert_eq!(warm.dewpoint_f(), Some(54));
    }
}
