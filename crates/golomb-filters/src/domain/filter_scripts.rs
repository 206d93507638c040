//! Script categories admitted into a filter

use std::fmt;
use std::str::FromStr;

use crate::error::FilterError;

/// Which address descriptors a filter admits.
///
/// Resolved once from the `filterScripts` configuration string.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FilterScripts {
    /// Unrecognized configuration string
    #[default]
    Invalid,
    /// Every script (`""`)
    All,
    /// Taproot outputs only (`"taproot"`)
    Taproot,
    /// Taproot outputs, skipping transactions carrying ordinal inscriptions
    /// (`"taproot-noordinals"`)
    TaprootNoOrdinals,
}

impl FilterScripts {
    /// Resolve a configuration string. Matching is exact; anything
    /// unrecognized maps to `Invalid`.
    pub fn parse(filter_scripts: &str) -> Self {
        match filter_scripts {
            "" => FilterScripts::All,
            "taproot" => FilterScripts::Taproot,
            "taproot-noordinals" => FilterScripts::TaprootNoOrdinals,
            _ => FilterScripts::Invalid,
        }
    }

    /// Canonical configuration string, `None` for `Invalid`.
    pub fn as_str(&self) -> Option<&'static str> {
        match self {
            FilterScripts::All => Some(""),
            FilterScripts::Taproot => Some("taproot"),
            FilterScripts::TaprootNoOrdinals => Some("taproot-noordinals"),
            FilterScripts::Invalid => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        !matches!(self, FilterScripts::Invalid)
    }

    /// Non-taproot descriptors are dropped.
    pub fn ignores_non_taproot(&self) -> bool {
        matches!(
            self,
            FilterScripts::Taproot | FilterScripts::TaprootNoOrdinals
        )
    }

    /// Descriptors owned by ordinal-looking transactions are dropped.
    pub fn ignores_ordinals(&self) -> bool {
        matches!(self, FilterScripts::TaprootNoOrdinals)
    }
}

impl FromStr for FilterScripts {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match FilterScripts::parse(s) {
            FilterScripts::Invalid => Err(FilterError::InvalidFilterScripts(s.to_string())),
            valid => Ok(valid),
        }
    }
}

impl fmt::Display for FilterScripts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_str() {
            Some("") => f.write_str("all"),
            Some(s) => f.write_str(s),
            None => f.write_str("invalid"),
        }
    }
}
