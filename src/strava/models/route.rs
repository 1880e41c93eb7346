//! Route and upload resources.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::strava::models::activity::PolylineMap;
use crate::strava::models::athlete::SummaryAthlete;
use crate::strava::models::segment::SummarySegment;

/// A planned route from `/routes/{id}`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Route {
    #[serde(deserialize_with = "super::null_as_default")]
    pub id: i64,
    /// String form of the identifier, safe for clients losing integer precision.
    pub id_str: Option<String>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub athlete: SummaryAthlete,
    #[serde(deserialize_with = "super::null_as_default")]
    pub name: String,
    pub description: Option<String>,
    /// Length in meters.
    #[serde(deserialize_with = "super::null_as_default")]
    pub distance: f64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub elevation_gain: f64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub map: PolylineMap,
    /// 1 for ride, 2 for run.
    #[serde(rename = "type")]
    #[serde(deserialize_with = "super::null_as_default")]
    pub route_type: u8,
    /// 1 road, 2 mountain bike, 3 cross, 4 trail, 5 mixed.
    #[serde(deserialize_with = "super::null_as_default")]
    pub sub_type: u8,
    #[serde(deserialize_with = "super::null_as_default")]
    pub private: bool,
    #[serde(deserialize_with = "super::null_as_default")]
    pub starred: bool,
    /// Epoch timestamp of creation.
    #[serde(deserialize_with = "super::null_as_default")]
    pub timestamp: i64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub segments: Vec<SummarySegment>,
    /// Estimated moving time in seconds.
    pub estimated_moving_time: Option<u64>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "id={}, name={}, distance={}",
            self.id, self.name, self.distance
        )
    }
}

/// Status of an activity file upload from `/uploads/{id}`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Upload {
    #[serde(deserialize_with = "super::null_as_default")]
    pub id: i64,
    pub id_str: Option<String>,
    pub external_id: Option<String>,
    /// Set when processing the upload failed.
    pub error: Option<String>,
    /// Human readable processing status.
    #[serde(deserialize_with = "super::null_as_default")]
    pub status: String,
    /// Set once the upload has been turned into an activity.
    pub activity_id: Option<i64>,
}

impl fmt::Display for Upload {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "id={}, status={}", self.id, self.status)
    }
}
