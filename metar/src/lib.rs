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

//! METAR aviation weather report parser.
//!
//! This crate decodes METAR routine surface-weather reports into a typed
//! [`Metar`] record. A report is a single line of whitespace-delimited
//! [groups], each encoding one observation: station identity, day and Zulu
//! time, wind, visibility, runway visual ranges, weather phenomena, sky
//! conditions, temperature and dewpoint, and the altimeter setting. The
//! remarks section (`RMK`) is detected but not decoded.
//!
//! A report must start with `METAR`, `SPECI` or the 4 letter airport
//! identifier. There is no guarantee that this crate provides complete or
//! accurate results.
//!
//! # Examples
//!
//! Lets decode a report from John F Kennedy Intl and read some observations:
//!
//! ```
//! use metar::{Metar, SkyCover, WindDirection};
//!
//! # fn main() -> Result<(), metar::Error> {
//! let report: Metar = "METAR KJFK 011251Z 31015G25KT 10SM FEW250 08/M03 A3012".parse()?;
//!
//! assert_eq!(report.airport, "KJFK");
//! assert_eq!(report.day, 1);
//! assert_eq!(report.time, 1251);
//!
//! let wind = report.wind.expect("wind should be found");
//! assert_eq!(wind.direction, WindDirection::Heading(310));
//! assert_eq!(wind.gust, Some(25));
//!
//! assert_eq!(report.sky_conditions[0].cover, SkyCover::Few);
//! assert_eq!(report.temperature_f(), Some(46));
//! # Ok(())
//! # }
//! ```
//!
//! Strict parsing is the default: a report missing one of the core
//! observation groups is an error. Passing [`ParseOptions`] relaxes this and
//! leaves the missing observations absent instead:
//!
//! ```
//! use metar::{Error, Metar, ParseOptions, RequiredGroup};
//!
//! let report = "KSFO 212056Z 29010KT 10SM FEW008 17/12";
//!
//! // the altimeter group is missing
//! assert!(matches!(
//!     Metar::parse(report),
//!     Err(Error::MissingGroup { group: RequiredGroup::Altimeter, .. })
//! ));
//!
//! let report = Metar::parse_with_options(report, ParseOptions::lenient())
//!     .expect("report should parse");
//! assert_eq!(report.altimeter, None);
//! ```
//!
//! [groups]: crate::groups

mod error;
mod options;
mod parser;
mod report;

pub mod groups;

pub use error::{Error, RequiredGroup};
pub use options::ParseOptions;
pub use report::Metar;

// Re-export the group types for convenience
pub use groups::{
    Altimeter, DayTime, Descriptor, DistanceUnit, Intensity, Phenomenon, RunwayVisualRange,
    SkyCondition, SkyCover, SpeedUnit, Temperature, VariableWind, Visibility, Weather, Wind,
    WindDirection,
};
