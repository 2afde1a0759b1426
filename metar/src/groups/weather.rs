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

/// Intensity prefix of a weather group.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Intensity {
    /// `-` prefix.
    Light,
    /// No prefix.
    Moderate,
    /// `+` prefix.
    Heavy,
}

/// Weather descriptor qualifying the phenomena of a group.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Descriptor {
    /// `MI`
    Shallow,
    /// `BC`
    Patches,
    /// `DR`
    LowDrifting,
    /// `BL`
    Blowing,
    /// `SH`
    Showers,
    /// `TS`
    Thunderstorm,
    /// `FZ`
    Freezing,
    /// `PR`
    Partial,
}

impl Descriptor {
    fn from_code(code: &str) -> Option<Self> {
        match code {
            "MI" => Some(Self::Shallow),
            "BC" => Some(Self::Patches),
            "DR" => Some(Self::LowDrifting),
            "BL" => Some(Self::Blowing),
            "SH" => Some(Self::Showers),
            "TS" => Some(Self::Thunderstorm),
            "FZ" => Some(Self::Freezing),
            "PR" => Some(Self::Partial),
            _ => None,
        }
    }

    pub fn phrase(&self) -> &'static str {
        match self {
            Self::Shallow => "shallow",
            Self::Patches => "patches",
            Self::LowDrifting => "low drifting",
            Self::Blowing => "blowing",
            Self::Showers => "showers",
            Self::Thunderstorm => "thunderstorm",
            Self::Freezing => "freezing",
            Self::Partial => "partial",
        }
    }
}

/// Precipitation, obscuration or other weather phenomenon.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Phenomenon {
    // precipitation
    /// `DZ`
    Drizzle,
    /// `RA`
    Rain,
    /// `SN`
    Snow,
    /// `SG`
    SnowGrains,
    /// `IC`
    IceCrystals,
    /// `PL`
    IcePellets,
    /// `GR`
    Hail,
    /// `GS`
    SmallHail,
    /// `UP`
    UnknownPrecipitation,

    // obscuration
    /// `BR`
    Mist,
    /// `FG`
    Fog,
    /// `DU`
    Dust,
    /// `SA`
    Sand,
    /// `HZ`
    Haze,
    /// `PY`
    Spray,
    /// `VA`
    VolcanicAsh,
    /// `FU`
    Smoke,

    // other
    /// `PO`
    DustWhirls,
    /// `SQ`
    Squalls,
    /// `FC`
    FunnelCloud,
    /// `SS`
    Sandstorm,
    /// `DS`
    DustStorm,
}

impl Phenomenon {
    fn from_code(code: &str) -> Option<Self> {
        match code {
            "DZ" => Some(Self::Drizzle),
            "RA" => Some(Self::Rain),
            "SN" => Some(Self::Snow),
            "SG" => Some(Self::SnowGrains),
            "IC" => Some(Self::IceCrystals),
            "PL" => Some(Self::IcePellets),
            "GR" => Some(Self::Hail),
            "GS" => Some(Self::SmallHail),
            "UP" => Some(Self::UnknownPrecipitation),
            "BR" => Some(Self::Mist),
            "FG" => Some(Self::Fog),
            "DU" => Some(Self::Dust),
            "SA" => Some(Self::Sand),
            "HZ" => Some(Self::Haze),
            "PY" => Some(Self::Spray),
            "VA" => Some(Self::VolcanicAsh),
            "FU" => Some(Self::Smoke),
            "PO" => Some(Self::DustWhirls),
            "SQ" => Some(Self::Squalls),
            "FC" => Some(Self::FunnelCloud),
            "SS" => Some(Self::Sandstorm),
            "DS" => Some(Self::DustStorm),
            _ => None,
        }
    }

    pub fn phrase(&self) -> &'static str {
        match self {
            Self::Drizzle => "drizzle",
            Self::Rain => "rain",
            Self::Snow => "snow",
            Self::SnowGrains => "snow grains",
            Self::IceCrystals => "ice crystals",
            Self::IcePellets => "ice pellets",
            Self::Hail => "hail",
            Self::SmallHail => "small hail",
            Self::UnknownPrecipitation => "unknown precipitation",
            Self::Mist => "mist",
            Self::Fog => "fog",
            Self::Dust => "dust",
            Self::Sand => "sand",
            Self::Haze => "haze",
            Self::Spray => "spray",
            Self::VolcanicAsh => "volcanic ash",
            Self::Smoke => "smoke",
            Self::DustWhirls => "dust whirls",
            Self::Squalls => "squalls",
            Self::FunnelCloud => "funnel cloud",
            Self::Sandstorm => "sandstorm",
            Self::DustStorm => "dust storm",
        }
    }
}

/// A weather phenomena group, e.g. `-SN` or `+TSRA`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Weather {
    pub intensity: Intensity,
    /// `true` if the group carries the `VC` (in the vicinity) prefix.
    pub in_vicinity: bool,
    /// Descriptors in group order.
    pub descriptors: Vec<Descriptor>,
    /// Phenomena in group order.
    pub phenomena: Vec<Phenomenon>,
}

impl FromStr for Weather {
    type Err = Error;

    /// Parses a weather group.
    ///
    /// An optional `+`/`-` intensity prefix and optional `VC` proximity
    /// prefix are followed by one or more two-letter descriptor or
    /// phenomenon codes:
    ///
    /// ```text
    /// -SN  +TSRA  VCSH  FZDZ  BR
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (rest, intensity) = match s.as_bytes().first() {
            Some(b'+') => (&s[1..], Intensity::Heavy),
            Some(b'-') => (&s[1..], Intensity::Light),
            _ => (s, Intensity::Moderate),
        };

        let (rest, in_vicinity) = match rest.strip_prefix("VC") {
            Some(rest) => (rest, true),
            None => (rest, false),
        };

        if rest.is_empty() || rest.len() % 2 != 0 {
            return Err(Error::UnexpectedGroup);
        }

        let mut descriptors = Vec::new();
        let mut phenomena = Vec::new();

        for chunk in rest.as_bytes().chunks(2) {
            let code = std::str::from_utf8(chunk).map_err(|_| Error::UnexpectedGroup)?;

            if let Some(descriptor) = Descriptor::from_code(code) {
                descriptors.push(descriptor);
            } else if let Some(phenomenon) = Phenomenon::from_code(code) {
                phenomena.push(phenomenon);
            } else {
                return Err(Error::UnexpectedGroup);
            }
        }

        Ok(Self {
            intensity,
            in_vicinity,
            descriptors,
            phenomena,
        })
    }
}

impl fmt::Display for Weather {
    /// Formats the group human readable, e.g. `light snow` for `-SN`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // +FC encodes a tornado or waterspout
        if self.intensity == Intensity::Heavy
            && self.descriptors.is_empty()
            && self.phenomena == [Phenomenon::FunnelCloud]
        {
            write!(f, "tornado or waterspout")?;
            if self.in_vicinity {
                write!(f, " in the vicinity")?;
            }
            return Ok(());
        }

        let mut sep = "";

        match self.intensity {
            Intensity::Light => {
                write!(f, "light")?;
                sep = " ";
            }
            Intensity::Heavy => {
                write!(f, "heavy")?;
                sep = " ";
            }
            Intensity::Moderate => {}
        }

        for descriptor in &self.descriptors {
            write!(f, "{sep}{}", descriptor.phrase())?;
            sep = " ";
        }

        for phenomenon in &self.phenomena {
            write!(f, "{sep}{}", phenomenon.phrase())?;
            sep = " ";
        }

        if self.in_vicinity {
            write!(f, "{sep}in the vicinity")?;
        }

        Ok(())
    }
}
