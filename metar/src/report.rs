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

use chrono::{DateTime, Datelike, TimeZone, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::groups::{
    Altimeter, RunwayVisualRange, SkyCondition, Temperature, Visibility, Weather, Wind,
};
use crate::options::ParseOptions;
use crate::parser;

/// A decoded METAR.
///
/// Every observation that is missing from the report is `None` or empty, so
/// an absent value is always distinguishable from a legitimate reading like
/// a calm wind's zero speed.
///
/// # Examples
///
/// ```
/// use metar::Metar;
///
/// # fn main() -> Result<(), metar::Error> {
/// let report: Metar = "METAR KJFK 011251Z 31015G25KT 10SM FEW250 08/M03 A3012".parse()?;
///
/// assert_eq!(report.airport, "KJFK");
/// assert_eq!(report.day, 1);
/// assert_eq!(report.time, 1251);
/// assert_eq!(report.temperature_c(), Some(8));
/// assert_eq!(report.dewpoint_f(), Some(27));
/// # Ok(())
/// # }
/// ```
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Metar {
    /// `true` if the report is a special report (`SPECI`).
    pub special: bool,

    /// The 4 letter airport identifier.
    pub airport: String,

    /// Day of the month the report was issued.
    pub day: u8,

    /// Zulu time of the report, e.g. `1251` for 12:51 UTC.
    pub time: u16,

    /// `true` if the report comes from an automated station (`AUTO`).
    pub auto: bool,

    /// `true` for a corrected report (`COR`).
    pub correction: bool,

    /// The wind observation including a variable direction range if one was
    /// reported.
    pub wind: Option<Wind>,

    /// Prevailing visibility in statute miles.
    pub visibility: Option<Visibility>,

    /// Runway visual ranges in report order.
    pub runway_visual_ranges: Vec<RunwayVisualRange>,

    /// Weather phenomena in report order.
    pub weather: Vec<Weather>,

    /// Sky conditions in report order.
    pub sky_conditions: Vec<SkyCondition>,

    /// Air temperature and dewpoint.
    pub temperature: Option<Temperature>,

    /// Altimeter setting.
    pub altimeter: Option<Altimeter>,

    /// The raw report this record was decoded from.
    pub metar: String,
}

impl Metar {
    /// Parses a METAR with the default [`ParseOptions`]: strict and without
    /// warnings.
    ///
    /// # Errors
    ///
    /// Returns an error if the airport identifier or the day/time group can
    /// not be found, or if one of the core observation groups is missing.
    pub fn parse(s: &str) -> Result<Self, Error> {
        parser::parse(s, ParseOptions::default())
    }

    /// Parses a METAR with the given options.
    ///
    /// # Errors
    ///
    /// Returns an error if the airport identifier or the day/time group can
    /// not be found. With [`ParseOptions::strict`] set, missing core
    /// observation groups are errors as well.
    ///
    /// # Examples
    ///
    /// ```
    /// use metar::{Metar, ParseOptions};
    ///
    /// # fn main() -> Result<(), metar::Error> {
    /// // no altimeter group, so strict parsing would fail
    /// let report = Metar::parse_with_options(
    ///     "KSFO 212056Z 29010KT 10SM FEW008 17/12",
    ///     ParseOptions::lenient(),
    /// )?;
    ///
    /// assert_eq!(report.altimeter, None);
    /// # Ok(())
    /// # }
    /// ```
    pub fn parse_with_options(s: &str, options: ParseOptions) -> Result<Self, Error> {
        parser::parse(s, options)
    }

    /// The report date resolved against the current month and year.
    ///
    /// METARs carry no month or year, so the day and Zulu time are combined
    /// with the wall clock's month and year. Callers decoding historical
    /// reports must track those independently and use [`date_in`] instead.
    ///
    /// Returns `None` if the reported day does not exist in the current
    /// month.
    ///
    /// [`date_in`]: Metar::date_in
    pub fn date(&self) -> Option<DateTime<Utc>> {
        let now = Utc::now();
        self.date_in(now.year(), now.month())
    }

    /// The report date within the given month and year.
    ///
    /// Returns `None` if the reported day does not exist in that month.
    pub fn date_in(&self, year: i32, month: u32) -> Option<DateTime<Utc>> {
        Utc.with_ymd_and_hms(
            year,
            month,
            self.day as u32,
            (self.time / 100) as u32,
            (self.time % 100) as u32,
            0,
        )
        .single()
    }

    /// Air temperature in degrees Celsius.
    pub fn temperature_c(&self) -> Option<i16> {
        self.temperature.as_ref().and_then(|group| group.air)
    }

    /// Air temperature in degrees Fahrenheit, rounded.
    pub fn temperature_f(&self) -> Option<i16> {
        self.temperature.as_ref().and_then(|group| group.air_f())
    }

    /// Dewpoint in degrees Celsius.
    pub fn dewpoint_c(&self) -> Option<i16> {
        self.temperature.as_ref().and_then(|group| group.dewpoint)
    }

    /// Dewpoint in degrees Fahrenheit, rounded.
    pub fn dewpoint_f(&self) -> Option<i16> {
        self.temperature.as_ref().and_then(|group| group.dewpoint_f())
    }

    /// The weather phenomena as human readable phrases in report order,
    /// e.g. `light snow` for `-SN`.
    pub fn weather_phrases(&self) -> Vec<String> {
        self.weather.iter().map(ToString::to_string).collect()
    }

    /// The sky conditions as human readable phrases in report order,
    /// e.g. `overcast at 2,000` for `OVC020`.
    pub fn sky_phrases(&self) -> Vec<String> {
        self.sky_conditions.iter().map(ToString::to_string).collect()
    }
}

impl FromStr for Metar {
    type Err = Error;

    /// Parses a METAR with the default [`ParseOptions`], see
    /// [`Metar::parse`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
