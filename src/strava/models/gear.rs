//! Gear resources from `/gear/{id}`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Summary representation of a bike or a pair of shoes.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct SummaryGear {
    /// Gear identifier, prefixed `b` for bikes and `g` for shoes.
    #[serde(deserialize_with = "super::null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub resource_state: u8,
    /// Whether this is the athlete's default gear.
    #[serde(deserialize_with = "super::null_as_default")]
    pub primary: bool,
    #[serde(deserialize_with = "super::null_as_default")]
    pub name: String,
    /// Distance logged with this gear, in meters.
    #[serde(deserialize_with = "super::null_as_default")]
    pub distance: f64,
}

/// Detailed representation of a gear.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct DetailedGear {
    #[serde(flatten)]
    pub summary: SummaryGear,
    pub brand_name: Option<String>,
    pub model_name: Option<String>,
    /// Bikes only: 1 mtb, 2 cross, 3 road, 4 time trial.
    pub frame_type: Option<u8>,
    pub description: Option<String>,
}

impl fmt::Display for DetailedGear {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "id={}, name={}, brand={}, model={}",
            self.summary.id,
            self.summary.name,
            self.brand_name.as_deref().unwrap_or("-"),
            self.model_name.as_deref().unwrap_or("-")
        )
    }
}
