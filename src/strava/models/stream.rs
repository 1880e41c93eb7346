//! Activity streams from `/activities/{id}/streams`.
//!
//! Every stream shares the same envelope and only differs by the type of its
//! data points, so a single generic [`Stream`] covers all of them.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::strava::models::activity::LatLng;

/// The stream types that can be requested.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum StreamKey {
    Time,
    Distance,
    Latlng,
    Altitude,
    VelocitySmooth,
    Heartrate,
    Cadence,
    Watts,
    Temp,
    Moving,
    GradeSmooth,
}

impl StreamKey {
    /// Name of the stream as used in the `keys` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            StreamKey::Time => "time",
            StreamKey::Distance => "distance",
            StreamKey::Latlng => "latlng",
            StreamKey::Altitude => "altitude",
            StreamKey::VelocitySmooth => "velocity_smooth",
            StreamKey::Heartrate => "heartrate",
            StreamKey::Cadence => "cadence",
            StreamKey::Watts => "watts",
            StreamKey::Temp => "temp",
            StreamKey::Moving => "moving",
            StreamKey::GradeSmooth => "grade_smooth",
        }
    }
}

impl fmt::Display for StreamKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Joins stream keys into the comma separated form upstream expects.
pub fn join_keys(keys: &[StreamKey]) -> String {
    keys.iter()
        .map(StreamKey::as_str)
        .collect::<Vec<&str>>()
        .join(",")
}

/// A single stream of data points.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Stream<T> {
    /// Number of data points before any downsampling.
    #[serde(deserialize_with = "super::null_as_default")]
    pub original_size: u64,
    /// `low`, `medium` or `high`.
    #[serde(deserialize_with = "super::null_as_default")]
    pub resolution: String,
    /// `distance` or `time`.
    #[serde(deserialize_with = "super::null_as_default")]
    pub series_type: String,
    pub data: Vec<T>,
}

/// Streams of an activity keyed by their type.
///
/// Only the requested streams that the activity actually recorded are set.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct StreamSet {
    /// Seconds since the start of the activity.
    pub time: Option<Stream<u64>>,
    /// Meters since the start of the activity.
    pub distance: Option<Stream<f64>>,
    pub latlng: Option<Stream<LatLng>>,
    /// Meters above sea level.
    pub altitude: Option<Stream<f64>>,
    /// Meters per second.
    pub velocity_smooth: Option<Stream<f64>>,
    /// Beats per minute.
    pub heartrate: Option<Stream<u32>>,
    /// Rotations per minute.
    pub cadence: Option<Stream<u32>>,
    pub watts: Option<Stream<u32>>,
    /// Degrees Celsius.
    pub temp: Option<Stream<i32>>,
    pub moving: Option<Stream<bool>>,
    /// Percent grade.
    pub grade_smooth: Option<Stream<f64>>,
}
