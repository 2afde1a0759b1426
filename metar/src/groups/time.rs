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

/// The day of month and Zulu time group, e.g. `011251Z`.
///
/// METARs carry no month or year. Resolving the group to a calendar date is
/// done on the decoded report, see [`Metar::date_in`].
///
/// [`Metar::date_in`]: crate::Metar::date_in
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DayTime {
    /// Day of the month (1 to 31).
    pub day: u8,
    /// Hour of the day in UTC (0 to 23).
    pub hour: u8,
    /// Minute of the hour (0 to 59).
    pub minute: u8,
}

impl DayTime {
    /// The Zulu time as reported, e.g. `1251` for 12:51 UTC.
    pub fn time(&self) -> u16 {
        self.hour as u16 * 100 + self.minute as u16
    }
}

impl FromStr for DayTime {
    type Err = Error;

    /// Parses a `ddhhmmZ` group.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_suffix('Z').ok_or(Error::UnexpectedGroup)?;

        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::UnexpectedGroup);
        }

        let day = digits[..2].parse().map_err(|_| Error::UnexpectedGroup)?;
        let hour = digits[2..4].parse().map_err(|_| Error::UnexpectedGroup)?;
        let minute = digits[4..6].parse().map_err(|_| Error::UnexpectedGroup)?;

        if !(1..=31).contains(&day) || hour > 23 || minute > 59 {
            return Err(Error::UnexpectedGroup);
        }

        Ok(Self { day, hour, minute })
    }
}
