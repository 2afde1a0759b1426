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

/// The direction from which the wind is blowing.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum WindDirection {
    /// Direction referenced from true north in degrees (0 to 360).
    Heading(u16),
    /// Variable direction, encoded as `VRB`. Reported for light winds that
    /// shift too much to name a direction.
    Variable,
}

/// Wind speed unit named by the group's suffix.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SpeedUnit {
    Knots,
    MetersPerSecond,
    KilometersPerHour,
}

impl SpeedUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Knots => "kt",
            Self::MetersPerSecond => "m/s",
            Self::KilometersPerHour => "km/h",
        }
    }
}

/// A variable wind direction group, e.g. `040V120`.
///
/// Reported in addition to the wind group when the direction varies by 60
/// degrees or more. Independent of [`WindDirection::Variable`]: a report may
/// carry both, either or neither.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VariableWind {
    /// First bounding direction in degrees.
    pub from: u16,
    /// Second bounding direction in degrees.
    pub to: u16,
}

impl FromStr for VariableWind {
    type Err = Error;

    /// Parses a `dddVddd` group.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (from, to) = s.split_once('V').ok_or(Error::UnexpectedGroup)?;
        let from = parse_direction(from).ok_or(Error::UnexpectedGroup)?;
        let to = parse_direction(to).ok_or(Error::UnexpectedGroup)?;
        Ok(Self { from, to })
    }
}

impl fmt::Display for VariableWind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:03}V{:03}", self.from, self.to)
    }
}

/// The wind group, e.g. `31015G25KT`.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Wind {
    pub direction: WindDirection,
    /// Sustained speed in [`unit`](Wind::unit).
    pub speed: u16,
    /// Gust speed in [`unit`](Wind::unit), if gusts are reported.
    pub gust: Option<u16>,
    pub unit: SpeedUnit,
    /// The `dddVddd` bounding range if a variable wind group follows.
    pub variable: Option<VariableWind>,
}

impl Wind {
    /// `true` if the direction is reported as `VRB`.
    pub fn is_variable(&self) -> bool {
        matches!(self.direction, WindDirection::Variable)
    }

    /// `true` for a calm wind group (`00000KT`).
    pub fn is_calm(&self) -> bool {
        self.speed == 0 && self.gust.is_none()
    }
}

impl FromStr for Wind {
    type Err = Error;

    /// Parses a wind group.
    ///
    /// The direction is 3 digits or `VRB`, followed by the sustained speed,
    /// an optional gust speed separated by `G`, and the unit suffix `KT`,
    /// `MPS` or `KMH`:
    ///
    /// ```text
    /// 31015KT  VRB04KT  31015G25KT  12004MPS
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // the suffix names the unit of measure
        let (rest, unit) = if let Some(rest) = s.strip_suffix("KT") {
            (rest, SpeedUnit::Knots)
        } else if let Some(rest) = s.strip_suffix("MPS") {
            (rest, SpeedUnit::MetersPerSecond)
        } else if let Some(rest) = s.strip_suffix("KMH") {
            (rest, SpeedUnit::KilometersPerHour)
        } else {
            return Err(Error::UnexpectedGroup);
        };

        let direction = match rest.get(0..3) {
            Some("VRB") => WindDirection::Variable,
            Some(digits) => {
                WindDirection::Heading(parse_direction(digits).ok_or(Error::UnexpectedGroup)?)
            }
            None => return Err(Error::UnexpectedGroup),
        };

        let speeds = &rest[3..];
        let (speed, gust) = match speeds.split_once('G') {
            Some((speed, gust)) => (
                parse_speed(speed).ok_or(Error::UnexpectedGroup)?,
                Some(parse_speed(gust).ok_or(Error::UnexpectedGroup)?),
            ),
            None => (parse_speed(speeds).ok_or(Error::UnexpectedGroup)?, None),
        };

        Ok(Self {
            direction,
            speed,
            gust,
            unit,
            variable: None,
        })
    }
}

impl fmt::Display for Wind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_calm() {
            return write!(f, "calm");
        }

        match self.direction {
            WindDirection::Heading(degrees) => {
                write!(f, "from {degrees:03}° at {} {}", self.speed, self.unit.symbol())?
            }
            WindDirection::Variable => {
                write!(f, "variable at {} {}", self.speed, self.unit.symbol())?
            }
        }

        if let Some(gust) = self.gust {
            write!(f, " gusting {gust} {}", self.unit.symbol())?;
        }

        if let Some(range) = &self.variable {
            write!(f, ", variable between {:03}° and {:03}°", range.from, range.to)?;
        }

        Ok(())
    }
}

/// Parses exactly 3 digits to a direction of at most 360 degrees.
fn parse_direction(s: &str) -> Option<u16> {
    if s.len() != 3 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    s.parse().ok().filter(|&degrees| degrees <= 360)
}

/// Parses a 2 or 3 digit speed.
fn parse_speed(s: &str) -> Option<u16> {
    if !matches!(s.len(), 2 | 3) || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    s.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wind_from_str() {
        assert_eq!(
            "31015G25KT".parse::<Wind>(),
            Ok(Wind {
                direction: WindDirection::Heading(310),
                speed: 15,
                gust: Some(25),
                unit: SpeedUnit::Knots,
                variable: None,
            })
        );
        assert_eq!(
            "04003KT".parse::<Wind>(),
            Ok(Wind {
                direction: WindDirection::Heading(40),
                speed: 3,
                gust: None,
                unit: SpeedUnit::Knots,
                variable: None,
            })
        );
        assert_eq!(
            "12004MPS".parse::<Wind>(),
            Ok(Wind {
                direction: WindDirection::Heading(120),
                speed: 4,
                gust: None,
                unit: SpeedUnit::MetersPerSecond,
                variable: None,
            })
        );
    }

    #[test]
    fn variable_direction_wind() {
        let wind: Wind = "VRB04KT".parse().expect("group should parse");
        assert!(wind.is_variable());
        assert_eq!(wind.speed, 4);
        assert_eq!(wind.variable, None);
    }

    #[test]
    fn calm_wind() {
        let wind: Wind = "00000KT".parse().expect("group should parse");
        assert!(wind.is_calm());
        assert_eq!(wind.direction, WindDirection::Heading(0));
        assert_eq!(wind.speed, 0);
    }

    #[test]
    fn three_digit_speeds() {
        let wind: Wind = "240105G130KT".parse().expect("group should parse");
        assert_eq!(wind.speed, 105);
        assert_eq!(wind.gust, Some(130));
    }

    #[test]
    fn declines_malformed_groups() {
        assert_eq!("31015".parse::<Wind>(), Err(Error::UnexpectedGroup));
        assert_eq!("99915KT".parse::<Wind>(), Err(Error::UnexpectedGroup));
        assert_eq!("3101KT".parse::<Wind>(), Err(Error::UnexpectedGroup));
        assert_eq!("31015GKT".parse::<Wind>(), Err(Error::UnexpectedGroup));
        assert_eq!("VRBKT".parse::<Wind>(), Err(Error::UnexpectedGroup));
        assert_eq!("31015KTS".parse::<Wind>(), Err(Error::UnexpectedGroup));
    }

    #[test]
    fn variable_wind_from_str() {
        assert_eq!(
            "040V120".parse::<VariableWind>(),
            Ok(VariableWind { from: 40, to: 120 })
        );
        assert_eq!("040V370".parse::<VariableWind>(), Err(Error::UnexpectedGroup));
        assert_eq!("40V120".parse::<VariableWind>(), Err(Error::UnexpectedGroup));
        assert_eq!("VRB04KT".parse::<VariableWind>(), Err(Error::UnexpectedGroup));
    }

    #[test]
    fn display_wind() {
        let wind: Wind = "31015G25KT".parse().expect("group should parse");
        assert_eq!(wind.to_string(), "from 310° at 15 kt gusting 25 kt");

        let calm: Wind = "00000KT".parse().expect("group should parse");
        assert_eq!(calm.to_string(), "calm");
    }
}
