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

/// Sky cover contraction of a sky condition group.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SkyCover {
    /// `SKC` or `CLR`
    Clear,
    /// `FEW`
    Few,
    /// `SCT`
    Scattered,
    /// `BKN`
    Broken,
    /// `OVC`
    Overcast,
    /// `VV`
    VerticalVisibility,
}

impl SkyCover {
    pub fn phrase(&self) -> &'static str {
        match self {
            Self::Clear => "clear",
            Self::Few => "few",
            Self::Scattered => "scattered",
            Self::Broken => "broken",
            Self::Overcast => "overcast",
            Self::VerticalVisibility => "vertical visibility",
        }
    }
}

/// A sky condition group, e.g. `BKN025`.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SkyCondition {
    pub cover: SkyCover,
    /// Height of the layer base in feet above ground level. `None` for a
    /// clear sky.
    pub base: Option<u32>,
}

impl FromStr for SkyCondition {
    type Err = Error;

    /// Parses a sky condition group.
    ///
    /// `SKC` and `CLR` report a clear sky without a height. All other
    /// contractions are followed by the layer base in hundreds of feet:
    ///
    /// ```text
    /// CLR  FEW025  SCT100  BKN250  OVC008  VV004
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let "SKC" | "CLR" = s {
            return Ok(Self {
                cover: SkyCover::Clear,
                base: None,
            });
        }

        let (cover, height) = if let Some(height) = s.strip_prefix("VV") {
            (SkyCover::VerticalVisibility, height)
        } else {
            let cover = match s.get(..3) {
                Some("FEW") => SkyCover::Few,
                Some("SCT") => SkyCover::Scattered,
                Some("BKN") => SkyCover::Broken,
                Some("OVC") => SkyCover::Overcast,
                _ => return Err(Error::UnexpectedGroup),
            };

            (cover, &s[3..])
        };

        if height.len() != 3 || !height.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::UnexpectedGroup);
        }

        // encoded in hundreds of feet
        let base = height.parse::<u32>().map_err(|_| Error::UnexpectedGroup)? * 100;

        Ok(Self {
            cover,
            base: Some(base),
        })
    }
}

impl fmt::Display for SkyCondition {
    /// Formats the group human readable, e.g. `overcast at 2,000` for
    /// `OVC020`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.base {
            Some(base) => write!(f, "{} at {}", self.cover.phrase(), thousands(base)),
            None => write!(f, "{}", self.cover.phrase()),
        }
    }
}

/// Formats a height with a thousands separator, e.g. `25,000`.
fn thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sky_condition_from_str() {
        assert_eq!(
            "SKC".parse::<SkyCondition>(),
            Ok(SkyCondition {
                cover: SkyCover::Clear,
                base: None
            })
        );
        assert_eq!(
            "CLR".parse::<SkyCondition>(),
            Ok(SkyCondition {
                cover: SkyCover::Clear,
                base: None
            })
        );
        assert_eq!(
            "FEW025".parse::<SkyCondition>(),
            Ok(SkyCondition {
                cover: SkyCover::Few,
                base: Some(2500)
            })
        );
        assert_eq!(
            "BKN250".parse::<SkyCondition>(),
            Ok(SkyCondition {
                cover: SkyCover::Broken,
                base: Some(25000)
            })
        );
        assert_eq!(
            "VV004".parse::<SkyCondition>(),
            Ok(SkyCondition {
                cover: SkyCover::VerticalVisibility,
                base: Some(400)
            })
        );
    }

    #[test]
    fn declines_malformed_groups() {
        assert_eq!("OVC".parse::<SkyCondition>(), Err(Error::UnexpectedGroup));
        assert_eq!("OVC01".parse::<SkyCondition>(), Err(Error::UnexpectedGroup));
        assert_eq!("OVC0100".parse::<SkyCondition>(), Err(Error::UnexpectedGroup));
        assert_eq!("OVC01A".parse::<SkyCondition>(), Err(Error::UnexpectedGroup));
        assert_eq!("XYZ025".parse::<SkyCondition>(), Err(Error::UnexpectedGroup));
        assert_eq!("VV04".parse::<SkyCondition>(), Err(Error::UnexpectedGroup));
    }

    #[test]
    fn human_readable_phrases() {
        let phrase = |s: &str| {
            s.parse::<SkyCondition>()
                .expect("group should parse")
                .to_string()
        };

        assert_eq!(phrase("OVC020"), "overcast at 2,000");
        assert_eq!(phrase("FEW250"), "few at 25,000");
        assert_eq!(phrase("VV004"), "vertical visibility at 400");
        assert_eq!(phrase("CLR"), "clear");
    }
}
