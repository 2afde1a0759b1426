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

//! The observation groups of a METAR.
//!
//! Each group is one whitespace-delimited token of the report encoding one
//! observation category. Every type in this module implements [`FromStr`]
//! against the group's exact format: fixed lengths, digit ranges and literal
//! prefixes or suffixes. A string that violates the format declines with
//! [`Error::UnexpectedGroup`](crate::Error::UnexpectedGroup) so that the
//! parser can try the token against the next category.
//!
//! [`FromStr`]: std::str::FromStr

mod altimeter;
mod sky;
mod temperature;
mod time;
mod visibility;
mod weather;
mod wind;

pub use altimeter::Altimeter;
pub use sky::{SkyCondition, SkyCover};
pub use temperature::Temperature;
pub use time::DayTime;
pub use visibility::{DistanceUnit, RunwayVisualRange, Visibility};
pub use weather::{Descriptor, Intensity, Phenomenon, Weather};
pub use wind::{SpeedUnit, VariableWind, Wind, WindDirection};
