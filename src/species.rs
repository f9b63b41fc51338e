//! Tree species supported by the site index models.

use serde::{Deserialize, Serialize};

/// Species of a stand observation.
///
/// Codes follow the Norwegian inventory convention: 1 = Norway spruce,
/// 2 = Scots pine, 3 = birch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Spruce = 1,
    Pine = 2,
    Birch = 3,
}

impl Species {
    /// Map an inventory species code to a species, `None` if unsupported.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(Species::Spruce),
            2 => Some(Species::Pine),
            3 => Some(Species::Birch),
            _ => None,
        }
    }

    /// Inventory code of this species.
    pub fn code(self) -> i32 {
        self as i32
    }
}
