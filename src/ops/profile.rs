// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stylesweep and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

use crate::query::{Tolerances, WeightPolicy};

/// Engine configuration shared by every matching batch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchProfile {
    pub weight_policy: WeightPolicy,
    pub size_tolerance: f64,
    pub line_height_tolerance: f64,
    /// Synthesize and apply a new style when `apply_nearest` finds no match.
    pub auto_create: bool,
}

impl MatchProfile {
    /// Weight window of 100, no auto-create. Nearest and create-new stay separate actions.
    pub fn tolerant() -> Self {
        Self {
            weight_policy: WeightPolicy::Window { max_delta: 100 },
            size_tolerance: 1.0,
            line_height_tolerance: 0.20,
            auto_create: false,
        }
    }

    /// Exact weight labels; unmatched nodes get a freshly synthesized style.
    pub fn strict() -> Self {
        Self { weight_policy: WeightPolicy::Exact, auto_create: true, ..Self::tolerant() }
    }

    pub fn with_auto_create(mut self, auto_create: bool) -> Self {
        self.auto_create = auto_create;
        self
    }

    pub fn tolerances(&self) -> Tolerances {
        Tolerances {
            weight: self.weight_policy,
            size: self.size_tolerance,
            line_height_ratio: self.line_height_tolerance,
        }
    }

    pub fn name(&self) -> &'static str {
        match self.weight_policy {
            WeightPolicy::Window { .. } => "tolerant",
            WeightPolicy::Exact => "strict",
        }
    }
}

impl Default for MatchProfile {
    fn default() -> Self {
        Self::tolerant()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseProfileError {
    value: String,
}

impl fmt::Display for ParseProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown match profile '{}' (expected tolerant|strict)", self.value)
    }
}

impl std::error::Error for ParseProfileError {}

impl FromStr for MatchProfile {
    type Err = ParseProfileError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "tolerant" => Ok(Self::tolerant()),
            "strict" => Ok(Self::strict()),
            _ => Err(ParseProfileError { value: value.to_owned() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::MatchProfile;
    use crate::query::WeightPolicy;

    #[test]
    fn parses_named_profiles() {
        assert_eq!("tolerant".parse::<MatchProfile>(), Ok(MatchProfile::tolerant()));
        let strict = "Strict".parse::<MatchProfile>().expect("strict");
        assert_eq!(strict.weight_policy, WeightPolicy::Exact);
        assert!(strict.auto_create);
    }

    #[test]
    fn rejects_unknown_profile() {
        let err = "lenient".parse::<MatchProfile>().unwrap_err();
        assert_eq!(err.to_string(), "unknown match profile 'lenient' (expected tolerant|strict)");
    }

    #[test]
    fn auto_create_override_keeps_weight_policy() {
        let profile = MatchProfile::tolerant().with_auto_create(true);
        assert!(profile.auto_create);
        assert_eq!(profile.name(), "tolerant");
        assert_eq!(profile.tolerances().size, 1.0);
    }
}
