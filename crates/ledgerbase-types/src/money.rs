use serde::{Deserialize, Serialize};

/// USD amounts in minor units (cents). Monetary policy never touches floats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UsdCents(pub u64);

impl UsdCents {
    pub const fn from_dollars(dollars: u64) -> Self {
        Self(dollars * 100)
    }
}
