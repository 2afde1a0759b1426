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

//! Sequential METAR group parsing.
//!
//! The parsing flow is: **Input String → Tokens → Groups → [`Metar`]**.
//!
//! The report is split on whitespace into tokens. A single cursor walks the
//! token sequence from left to right while a [`State`] tracks which group
//! categories are still expected: the grammar fixes the group order, so the
//! state only ever moves forward and a token is never examined twice. Each
//! token is offered to the matchers of the current and all later states; the
//! first one that accepts it claims the token and advances the state. Tokens
//! no matcher claims are skipped.
//!
//! Singular categories such as wind or altimeter step past themselves once
//! matched, so only the first candidate of a report counts. Repeatable
//! categories (runway visual range, weather, sky conditions) hold the state
//! to collect every consecutive match in report order.

use log::{debug, warn};

use crate::error::{Error, RequiredGroup};
use crate::groups::{
    Altimeter, DayTime, RunwayVisualRange, SkyCondition, Temperature, VariableWind, Visibility,
    Weather, Wind,
};
use crate::options::ParseOptions;
use crate::report::Metar;

/// Marker that opens the remarks section. Remarks are not decoded.
const REMARKS: &str = "RMK";

/// The group categories in canonical report order.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Debug)]
enum State {
    Modifier,
    Wind,
    VariableWind,
    Visibility,
    RunwayVisualRange,
    Weather,
    Sky,
    Temperature,
    Altimeter,
    Done,
}

pub(crate) fn parse(s: &str, options: ParseOptions) -> Result<Metar, Error> {
    debug!("metar decode: {s:?}");

    let raw = s.trim();
    let tokens: Vec<&str> = raw.split_whitespace().collect();
    let mut cursor = 0;

    // A report starts with the report type or the airport identifier right
    // away.
    let special = match tokens.first() {
        Some(&"METAR") => {
            cursor += 1;
            false
        }
        Some(&"SPECI") => {
            cursor += 1;
            true
        }
        _ => false,
    };

    let airport = tokens
        .get(cursor)
        .filter(|token| is_airport_code(token))
        .map(|token| token.to_string())
        .ok_or_else(|| Error::MissingAirportCode {
            metar: raw.to_string(),
        })?;
    cursor += 1;

    // The day and time anchor all following groups, without them we can't
    // trust the rest of the report.
    let day_time: DayTime = tokens
        .get(cursor)
        .and_then(|token| token.parse().ok())
        .ok_or_else(|| Error::MissingDateTime {
            metar: raw.to_string(),
        })?;
    cursor += 1;

    let mut auto = false;
    let mut correction = false;
    let mut wind: Option<Wind> = None;
    let mut visibility: Option<Visibility> = None;
    let mut runway_visual_ranges: Vec<RunwayVisualRange> = Vec::new();
    let mut weather: Vec<Weather> = Vec::new();
    let mut sky_conditions: Vec<SkyCondition> = Vec::new();
    let mut temperature: Option<Temperature> = None;
    let mut altimeter: Option<Altimeter> = None;

    let mut state = State::Modifier;
    let mut i = cursor;

    while i < tokens.len() {
        let token = tokens[i];

        if token == REMARKS {
            break;
        }

        if state <= State::Modifier {
            match token {
                "AUTO" => {
                    auto = true;
                    i += 1;
                    continue;
                }
                "COR" => {
                    correction = true;
                    i += 1;
                    continue;
                }
                _ => {}
            }
        }

        if state <= State::Wind {
            if let Ok(group) = token.parse::<Wind>() {
                wind = Some(group);
                state = State::VariableWind;
                i += 1;
                continue;
            }
        }

        if state <= State::VariableWind {
            if let Ok(range) = token.parse::<VariableWind>() {
                match wind.as_mut() {
                    Some(wind) => wind.variable = Some(range),
                    // a bounding range without a wind group has nothing to
                    // attach to
                    None => {
                        if options.log_warnings {
                            warn!("dropping variable wind group {token:?} without a wind group");
                        }
                    }
                }
                state = State::Visibility;
                i += 1;
                continue;
            }
        }

        if state <= State::Visibility {
            // the whole number of a distance like `2 1/2SM` is a token of
            // its own
            if let (Some(whole), Some(next)) = (whole_miles(token), tokens.get(i + 1)) {
                if let Ok(mut group) = next.parse::<Visibility>() {
                    if !group.less_than && group.miles < 1.0 {
                        group.miles += whole as f32;
                        visibility = Some(group);
                        state = State::RunwayVisualRange;
                        i += 2;
                        continue;
                    }
                }
            }

            if let Ok(group) = token.parse::<Visibility>() {
                visibility = Some(group);
                state = State::RunwayVisualRange;
                i += 1;
                continue;
            }
        }

        if state <= State::RunwayVisualRange {
            if let Ok(group) = token.parse::<RunwayVisualRange>() {
                runway_visual_ranges.push(group);
                state = State::RunwayVisualRange;
                i += 1;
                continue;
            }
        }

        if state <= State::Weather {
            if let Ok(group) = token.parse::<Weather>() {
                weather.push(group);
                state = State::Weather;
                i += 1;
                continue;
            }
        }

        if state <= State::Sky {
            if let Ok(group) = token.parse::<SkyCondition>() {
                sky_conditions.push(group);
                state = State::Sky;
                i += 1;
                continue;
            }
        }

        if state <= State::Temperature {
            if let Ok(group) = token.parse::<Temperature>() {
                temperature = Some(group);
                state = State::Altimeter;
                i += 1;
                continue;
            }
        }

        if state <= State::Altimeter {
            if let Ok(group) = token.parse::<Altimeter>() {
                altimeter = Some(group);
                state = State::Done;
                i += 1;
                continue;
            }
        }

        // No matcher claimed the token. A `P` prefixed distance like `P6SM`
        // is a known shape we do not decode, anything else is skipped as is.
        if options.log_warnings {
            if is_prefixed_visibility(token) {
                warn!("prefixed visibility {token:?} is not handled, leaving visibility absent");
            } else {
                warn!("skipping unrecognized group {token:?}");
            }
        }
        i += 1;
    }

    if options.log_warnings {
        if wind.is_none() {
            warn!("no wind group found");
        }
        if visibility.is_none() {
            warn!("no visibility group found");
        }
        if sky_conditions.is_empty() {
            warn!("no sky condition group found");
        }
        if temperature.is_none() {
            warn!("no temperature group found");
        }
        if altimeter.is_none() {
            warn!("no altimeter group found");
        }
    }

    if options.strict {
        let missing = if wind.is_none() {
            Some(RequiredGroup::Wind)
        } else if visibility.is_none() {
            Some(RequiredGroup::Visibility)
        } else if sky_conditions.is_empty() {
            Some(RequiredGroup::SkyCondition)
        } else if temperature.is_none() {
            Some(RequiredGroup::Temperature)
        } else if altimeter.is_none() {
            Some(RequiredGroup::Altimeter)
        } else {
            None
        };

        if let Some(group) = missing {
            return Err(Error::MissingGroup {
                group,
                metar: raw.to_string(),
            });
        }
    }

    Ok(Metar {
        special,
        airport,
        day: day_time.day,
        time: day_time.time(),
        auto,
        correction,
        wind,
        visibility,
        runway_visual_ranges,
        weather,
        sky_conditions,
        temperature,
        altimeter,
        metar: raw.to_string(),
    })
}

/// A 4 character uppercase alphanumeric identifier starting with a letter.
fn is_airport_code(token: &str) -> bool {
    token.len() == 4
        && token.as_bytes()[0].is_ascii_uppercase()
        && token
            .bytes()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
}

/// The whole number token of a split statute mile distance.
fn whole_miles(token: &str) -> Option<u16> {
    if !matches!(token.len(), 1 | 2) || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    token.parse().ok()
}

/// A `P` prefixed statute mile distance, e.g. `P6SM`.
fn is_prefixed_visibility(token: &str) -> bool {
    token
        .strip_prefix('P')
        .and_then(|token| token.strip_suffix("SM"))
        .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
}
