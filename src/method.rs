//! Site index method selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SiteIndexError;

/// Which published curve set to evaluate.
///
/// The method applies to a whole call, never per row. Birch rows are
/// method-invariant: both curve sets use the Eriksson model for species
/// code 3.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SiteIndexMethod {
    /// Sharma–Brunner GADA curves (the default).
    #[default]
    SharmaBrunner,
    /// Tveite (1977) spruce and Braastad (1980) pine difference curves.
    TveiteBraastad,
}

impl FromStr for SiteIndexMethod {
    type Err = SiteIndexError;

    /// Accepts `"default"`, `"SHARMA-BRUNNER"` or `"TVEITE-BRAASTAD"`,
    /// case-insensitively. Anything else is a configuration error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "DEFAULT" | "SHARMA-BRUNNER" => Ok(SiteIndexMethod::SharmaBrunner),
            "TVEITE-BRAASTAD" => Ok(SiteIndexMethod::TveiteBraastad),
            _ => Err(SiteIndexError::UnknownMethod(s.to_string())),
        }
    }
}

impl fmt::Display for SiteIndexMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteIndexMethod::SharmaBrunner => write!(f, "SHARMA-BRUNNER"),
            SiteIndexMethod::TveiteBraastad => write!(f, "TVEITE-BRAASTAD"),
        }
    }
}
