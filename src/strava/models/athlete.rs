//! Athlete resources from `/athlete`, `/athletes/{id}` and their sub-resources.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::strava::models::club::SummaryClub;
use crate::strava::models::gear::SummaryGear;

/// Summary representation of an athlete.
///
/// Embedded in activities, laps, comments and kudoers lists. Upstream sends
/// only `id` and `resource_state` for the owner of an activity, so every
/// other field falls back to its default.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct SummaryAthlete {
    /// Unique identifier of the athlete.
    #[serde(deserialize_with = "super::null_as_default")]
    pub id: i64,
    /// Level of detail: 1 meta, 2 summary, 3 detail.
    #[serde(deserialize_with = "super::null_as_default")]
    pub resource_state: u8,
    pub username: Option<String>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub firstname: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub lastname: String,
    /// URL to a 62x62 pixel profile picture.
    pub profile_medium: Option<String>,
    /// URL to a 124x124 pixel profile picture.
    pub profile: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    /// `M`, `F` or absent.
    pub sex: Option<String>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub premium: bool,
    #[serde(deserialize_with = "super::null_as_default")]
    pub summit: bool,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl fmt::Display for SummaryAthlete {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "id={}, firstname={}, lastname={}",
            self.id, self.firstname, self.lastname
        )
    }
}

/// Detailed representation of an athlete, returned for the authenticated
/// athlete and by `/athletes/{id}`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct DetailedAthlete {
    #[serde(flatten)]
    pub summary: SummaryAthlete,
    #[serde(deserialize_with = "super::null_as_default")]
    pub follower_count: u32,
    #[serde(deserialize_with = "super::null_as_default")]
    pub friend_count: u32,
    /// `feet` or `meters`.
    pub measurement_preference: Option<String>,
    /// Functional threshold power, in watts.
    pub ftp: Option<u32>,
    /// Weight in kilograms.
    pub weight: Option<f64>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub clubs: Vec<SummaryClub>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub bikes: Vec<SummaryGear>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub shoes: Vec<SummaryGear>,
}

impl fmt::Display for DetailedAthlete {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}, bikes={}, shoes={}, clubs={}",
            self.summary,
            self.bikes.len(),
            self.shoes.len(),
            self.clubs.len()
        )
    }
}

/// Rolled-up totals for a set of activities.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ActivityTotal {
    #[serde(deserialize_with = "super::null_as_default")]
    pub count: u32,
    /// Total distance in meters.
    #[serde(deserialize_with = "super::null_as_default")]
    pub distance: f64,
    /// Total moving time in seconds.
    #[serde(deserialize_with = "super::null_as_default")]
    pub moving_time: u64,
    /// Total elapsed time in seconds.
    #[serde(deserialize_with = "super::null_as_default")]
    pub elapsed_time: u64,
    /// Total elevation gain in meters.
    #[serde(deserialize_with = "super::null_as_default")]
    pub elevation_gain: f64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub achievement_count: u32,
}

/// Statistics of an athlete from `/athletes/{id}/stats`.
///
/// Only activities visible to everyone are counted.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ActivityStats {
    /// Longest ride distance in meters.
    #[serde(deserialize_with = "super::null_as_default")]
    pub biggest_ride_distance: f64,
    /// Highest climb ridden in meters.
    #[serde(deserialize_with = "super::null_as_default")]
    pub biggest_climb_elevation_gain: f64,
    /// Last four weeks.
    #[serde(deserialize_with = "super::null_as_default")]
    pub recent_ride_totals: ActivityTotal,
    #[serde(deserialize_with = "super::null_as_default")]
    pub recent_run_totals: ActivityTotal,
    #[serde(deserialize_with = "super::null_as_default")]
    pub recent_swim_totals: ActivityTotal,
    /// Year to date.
    #[serde(deserialize_with = "super::null_as_default")]
    pub ytd_ride_totals: ActivityTotal,
    #[serde(deserialize_with = "super::null_as_default")]
    pub ytd_run_totals: ActivityTotal,
    #[serde(deserialize_with = "super::null_as_default")]
    pub ytd_swim_totals: ActivityTotal,
    #[serde(deserialize_with = "super::null_as_default")]
    pub all_ride_totals: ActivityTotal,
    #[serde(deserialize_with = "super::null_as_default")]
    pub all_run_totals: ActivityTotal,
    #[serde(deserialize_with = "super::null_as_default")]
    pub all_swim_totals: ActivityTotal,
}

/// A single zone boundary pair.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ZoneRange {
    #[serde(deserialize_with = "super::null_as_default")]
    pub min: i32,
    /// `-1` marks the open-ended top zone.
    #[serde(deserialize_with = "super::null_as_default")]
    pub max: i32,
}

/// A set of zones, either heart rate or power.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ZoneRanges {
    /// Whether the athlete has set their own zones. Upstream only sends it
    /// for heart rate zones.
    pub custom_zones: Option<bool>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub zones: Vec<ZoneRange>,
}

pub type HeartRateZoneRanges = ZoneRanges;
pub type PowerZoneRanges = ZoneRanges;

/// Zones of the authenticated athlete from `/athlete/zones`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Zones {
    pub heart_rate: Option<HeartRateZoneRanges>,
    pub power: Option<PowerZoneRanges>,
}
