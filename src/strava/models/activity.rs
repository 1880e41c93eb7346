//! Activity resources from `/activities/{id}`, `/athlete/activities` and the
//! per-activity sub-resources (laps, comments, zones).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::strava::models::athlete::SummaryAthlete;
use crate::strava::models::gear::SummaryGear;
use crate::strava::models::segment::DetailedSegmentEffort;

/// A `[latitude, longitude]` pair. Upstream sends an empty array when the
/// position is unknown.
pub type LatLng = Vec<f64>;

/// Identifier-only reference to an activity.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct MetaActivity {
    #[serde(deserialize_with = "super::null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub resource_state: u8,
}

/// Encoded polylines of an activity, route or segment.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct PolylineMap {
    #[serde(deserialize_with = "super::null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub resource_state: u8,
    /// Full resolution polyline, only on detailed representations.
    pub polyline: Option<String>,
    pub summary_polyline: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct PhotosSummaryPrimary {
    pub id: Option<i64>,
    /// 1 for Strava photos, 2 for Instagram.
    #[serde(deserialize_with = "super::null_as_default")]
    pub source: u8,
    pub unique_id: Option<String>,
    /// Photo URLs keyed by size.
    #[serde(deserialize_with = "super::null_as_default")]
    pub urls: HashMap<String, String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct PhotosSummary {
    #[serde(deserialize_with = "super::null_as_default")]
    pub count: u32,
    pub primary: Option<PhotosSummaryPrimary>,
}

/// Summary representation of an activity.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct SummaryActivity {
    #[serde(deserialize_with = "super::null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub resource_state: u8,
    pub external_id: Option<String>,
    pub upload_id: Option<i64>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub athlete: SummaryAthlete,
    #[serde(deserialize_with = "super::null_as_default")]
    pub name: String,
    /// Distance in meters.
    #[serde(deserialize_with = "super::null_as_default")]
    pub distance: f64,
    /// Moving time in seconds.
    #[serde(deserialize_with = "super::null_as_default")]
    pub moving_time: u64,
    /// Elapsed time in seconds.
    #[serde(deserialize_with = "super::null_as_default")]
    pub elapsed_time: u64,
    /// Elevation gain in meters.
    #[serde(deserialize_with = "super::null_as_default")]
    pub total_elevation_gain: f64,
    pub elev_high: Option<f64>,
    pub elev_low: Option<f64>,
    /// Deprecated upstream in favor of `sport_type`.
    #[serde(rename = "type")]
    #[serde(deserialize_with = "super::null_as_default")]
    pub activity_type: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub sport_type: String,
    /// UTC start time, ISO 8601.
    #[serde(deserialize_with = "super::null_as_default")]
    pub start_date: String,
    /// Local start time, ISO 8601 with a misleading `Z` suffix.
    #[serde(deserialize_with = "super::null_as_default")]
    pub start_date_local: String,
    pub timezone: Option<String>,
    pub start_latlng: Option<LatLng>,
    pub end_latlng: Option<LatLng>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub achievement_count: u32,
    #[serde(deserialize_with = "super::null_as_default")]
    pub kudos_count: u32,
    #[serde(deserialize_with = "super::null_as_default")]
    pub comment_count: u32,
    #[serde(deserialize_with = "super::null_as_default")]
    pub athlete_count: u32,
    #[serde(deserialize_with = "super::null_as_default")]
    pub photo_count: u32,
    #[serde(deserialize_with = "super::null_as_default")]
    pub total_photo_count: u32,
    #[serde(deserialize_with = "super::null_as_default")]
    pub map: PolylineMap,
    #[serde(deserialize_with = "super::null_as_default")]
    pub trainer: bool,
    #[serde(deserialize_with = "super::null_as_default")]
    pub commute: bool,
    #[serde(deserialize_with = "super::null_as_default")]
    pub manual: bool,
    #[serde(deserialize_with = "super::null_as_default")]
    pub private: bool,
    #[serde(deserialize_with = "super::null_as_default")]
    pub flagged: bool,
    pub workout_type: Option<u32>,
    pub upload_id_str: Option<String>,
    /// Average speed in meters per second.
    #[serde(deserialize_with = "super::null_as_default")]
    pub average_speed: f64,
    /// Max speed in meters per second.
    #[serde(deserialize_with = "super::null_as_default")]
    pub max_speed: f64,
    pub average_cadence: Option<f64>,
    pub average_heartrate: Option<f64>,
    pub max_heartrate: Option<f64>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub has_kudoed: bool,
    #[serde(deserialize_with = "super::null_as_default")]
    pub hide_from_home: bool,
    pub gear_id: Option<String>,
    /// Rides only.
    pub kilojoules: Option<f64>,
    /// Rides only.
    pub average_watts: Option<f64>,
    /// Whether the watts come from a power meter rather than an estimate.
    pub device_watts: Option<bool>,
    pub max_watts: Option<u32>,
    pub weighted_average_watts: Option<u32>,
}

impl fmt::Display for SummaryActivity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "id={}, name={}, sport_type={}, distance={}, elapsed_time={}",
            self.id, self.name, self.sport_type, self.distance, self.elapsed_time
        )
    }
}

/// A split of an activity, either per kilometer or per mile.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Split {
    #[serde(deserialize_with = "super::null_as_default")]
    pub average_speed: f64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub distance: f64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub elapsed_time: u64,
    pub elevation_difference: Option<f64>,
    pub pace_zone: Option<u8>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub moving_time: u64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub split: u32,
}

/// Detailed representation of an activity.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct DetailedActivity {
    #[serde(flatten)]
    pub summary: SummaryActivity,
    pub description: Option<String>,
    pub photos: Option<PhotosSummary>,
    pub gear: Option<SummaryGear>,
    /// Kilocalories burned.
    pub calories: Option<f64>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub segment_efforts: Vec<DetailedSegmentEffort>,
    pub device_name: Option<String>,
    pub embed_token: Option<String>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub splits_metric: Vec<Split>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub splits_standard: Vec<Split>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub laps: Vec<Lap>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub best_efforts: Vec<DetailedSegmentEffort>,
}

impl fmt::Display for DetailedActivity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}, laps={}, segment_efforts={}",
            self.summary,
            self.laps.len(),
            self.segment_efforts.len()
        )
    }
}

/// A lap of an activity from `/activities/{id}/laps`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Lap {
    #[serde(deserialize_with = "super::null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub resource_state: u8,
    #[serde(deserialize_with = "super::null_as_default")]
    pub activity: MetaActivity,
    #[serde(deserialize_with = "super::null_as_default")]
    pub athlete: SummaryAthlete,
    #[serde(deserialize_with = "super::null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub elapsed_time: u64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub moving_time: u64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub start_date: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub start_date_local: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub distance: f64,
    /// Index of the first data point in the activity streams.
    #[serde(deserialize_with = "super::null_as_default")]
    pub start_index: u64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub end_index: u64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub total_elevation_gain: f64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub average_speed: f64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub max_speed: f64,
    pub average_cadence: Option<f64>,
    pub average_watts: Option<f64>,
    pub device_watts: Option<bool>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub lap_index: u32,
    #[serde(deserialize_with = "super::null_as_default")]
    pub split: u32,
    pub pace_zone: Option<u8>,
}

/// A comment on an activity from `/activities/{id}/comments`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Comment {
    #[serde(deserialize_with = "super::null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub activity_id: i64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub text: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub created_at: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub athlete: SummaryAthlete,
    /// Opaque cursor to pass as `after_cursor` to fetch the next comments.
    pub cursor: Option<String>,
}

/// Time spent within a single zone bucket.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct TimedZoneRange {
    #[serde(deserialize_with = "super::null_as_default")]
    pub min: i32,
    #[serde(deserialize_with = "super::null_as_default")]
    pub max: i32,
    /// Seconds spent in the bucket.
    #[serde(deserialize_with = "super::null_as_default")]
    pub time: u64,
}

/// Heart rate or power zone distribution of an activity from
/// `/activities/{id}/zones`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ActivityZone {
    pub score: Option<u32>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub distribution_buckets: Vec<TimedZoneRange>,
    /// `heartrate` or `power`.
    #[serde(rename = "type")]
    #[serde(deserialize_with = "super::null_as_default")]
    pub zone_type: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub sensor_based: bool,
    pub points: Option<u32>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub custom_zones: bool,
    pub max: Option<u32>,
}
