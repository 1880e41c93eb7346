//! Segment and segment effort resources.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::strava::models::activity::{LatLng, MetaActivity, PolylineMap};
use crate::strava::models::athlete::SummaryAthlete;

/// Summary representation of a segment.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct SummarySegment {
    #[serde(deserialize_with = "super::null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub resource_state: u8,
    #[serde(deserialize_with = "super::null_as_default")]
    pub name: String,
    /// `Ride` or `Run`.
    #[serde(deserialize_with = "super::null_as_default")]
    pub activity_type: String,
    /// Length in meters.
    #[serde(deserialize_with = "super::null_as_default")]
    pub distance: f64,
    /// Average grade, in percent.
    #[serde(deserialize_with = "super::null_as_default")]
    pub average_grade: f64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub maximum_grade: f64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub elevation_high: f64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub elevation_low: f64,
    pub start_latlng: Option<LatLng>,
    pub end_latlng: Option<LatLng>,
    /// From 0 (uncategorized) to 5 (hors catégorie).
    #[serde(deserialize_with = "super::null_as_default")]
    pub climb_category: u8,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub private: bool,
    /// Whether the authenticated athlete starred this segment.
    #[serde(deserialize_with = "super::null_as_default")]
    pub starred: bool,
}

impl fmt::Display for SummarySegment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "id={}, name={}, distance={}, average_grade={}",
            self.id, self.name, self.distance, self.average_grade
        )
    }
}

/// Detailed representation of a segment from `/segments/{id}`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct DetailedSegment {
    #[serde(flatten)]
    pub summary: SummarySegment,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub total_elevation_gain: f64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub map: PolylineMap,
    #[serde(deserialize_with = "super::null_as_default")]
    pub effort_count: u64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub athlete_count: u64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub hazardous: bool,
    #[serde(deserialize_with = "super::null_as_default")]
    pub star_count: u64,
}

/// A segment as returned by `/segments/explore`.
///
/// Explorer segments use shorter field names than the other segment
/// representations.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ExplorerSegment {
    #[serde(deserialize_with = "super::null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub resource_state: u8,
    #[serde(deserialize_with = "super::null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub climb_category: u8,
    /// `NC`, `4`, `3`, `2`, `1` or `HC`.
    #[serde(deserialize_with = "super::null_as_default")]
    pub climb_category_desc: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub avg_grade: f64,
    pub start_latlng: Option<LatLng>,
    pub end_latlng: Option<LatLng>,
    /// Elevation difference in meters.
    #[serde(deserialize_with = "super::null_as_default")]
    pub elev_difference: f64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub distance: f64,
    /// Encoded polyline of the segment.
    #[serde(deserialize_with = "super::null_as_default")]
    pub points: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub starred: bool,
}

impl fmt::Display for ExplorerSegment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "id={}, name={}, distance={}, avg_grade={}",
            self.id, self.name, self.distance, self.avg_grade
        )
    }
}

/// Response of `/segments/explore`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ExplorerResponse {
    #[serde(deserialize_with = "super::null_as_default")]
    pub segments: Vec<ExplorerSegment>,
}

/// Summary representation of an effort on a segment.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct SummarySegmentEffort {
    #[serde(deserialize_with = "super::null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub resource_state: u8,
    #[serde(deserialize_with = "super::null_as_default")]
    pub activity_id: i64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub elapsed_time: u64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub start_date: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub start_date_local: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub distance: f64,
    /// Whether this effort is the current best on the leaderboard.
    #[serde(deserialize_with = "super::null_as_default")]
    pub is_kom: bool,
}

/// Detailed representation of a segment effort, embedded in detailed
/// activities and returned by `/segment_efforts/{id}`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct DetailedSegmentEffort {
    #[serde(flatten)]
    pub summary: SummarySegmentEffort,
    #[serde(deserialize_with = "super::null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub activity: MetaActivity,
    #[serde(deserialize_with = "super::null_as_default")]
    pub athlete: SummaryAthlete,
    #[serde(deserialize_with = "super::null_as_default")]
    pub moving_time: u64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub start_index: u64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub end_index: u64,
    pub average_cadence: Option<f64>,
    pub average_watts: Option<f64>,
    pub device_watts: Option<bool>,
    pub average_heartrate: Option<f64>,
    pub max_heartrate: Option<f64>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub segment: SummarySegment,
    /// Rank on the overall leaderboard if in the top 10.
    pub kom_rank: Option<u32>,
    /// Rank on the athlete's own leaderboard if in the top 3.
    pub pr_rank: Option<u32>,
    pub hidden: Option<bool>,
}

impl fmt::Display for DetailedSegmentEffort {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "id={}, name={}, elapsed_time={}, segment={}",
            self.summary.id, self.name, self.summary.elapsed_time, self.segment.id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detailed_segment() {
        let json = r#"{
            "id": 229781,
            "resource_state": 3,
            "name": "Hawk Hill",
            "activity_type": "Ride",
            "distance": 2684.82,
            "average_grade": 5.7,
            "maximum_grade": 14.2,
            "elevation_high": 245.3,
            "elevation_low": 92.4,
            "start_latlng": [37.8331119, -122.4834356],
            "end_latlng": [37.8280722, -122.4981393],
            "climb_category": 1,
            "city": "San Francisco",
            "state": "CA",
            "country": "United States",
            "private": false,
            "hazardous": false,
            "starred": false,
            "created_at": "2009-09-21T20:29:41Z",
            "updated_at": "2018-02-15T09:04:18Z",
            "total_elevation_gain": 155.733,
            "map": {"id": "s229781", "polyline": "}g|eFnpqjVl@En@Md@HbAd@d@", "resource_state": 3},
            "effort_count": 309974,
            "athlete_count": 30623,
            "star_count": 2428
        }"#;

        let segment: DetailedSegment = serde_json::from_str(json).unwrap();

        assert_eq!(segment.summary.id, 229781);
        assert_eq!(segment.summary.name, "Hawk Hill");
        assert_eq!(segment.summary.average_grade, 5.7);
        assert_eq!(segment.summary.climb_category, 1);
        assert_eq!(
            segment.summary.start_latlng,
            Some(vec![37.8331119, -122.4834356])
        );
        assert_eq!(segment.effort_count, 309974);
        assert_eq!(segment.map.id, "s229781");
        assert!(segment.map.polyline.is_some());
    }

    #[test]
    fn test_explorer_response() {
        let json = r#"{
            "segments": [
                {"id": 1, "name": "Hawk Hill", "climb_category": 1, "climb_category_desc": "4", "avg_grade": 5.7, "elev_difference": 152.8, "distance": 2684.8, "points": "abc", "starred": false}
            ]
        }"#;

        let explorer: ExplorerResponse = serde_json::from_str(json).unwrap();

        assert_eq!(explorer.segments.len(), 1);
        assert_eq!(explorer.segments[0].name, "Hawk Hill");
        assert_eq!(explorer.segments[0].climb_category_desc, "4");
        assert_eq!(explorer.segments[0].avg_grade, 5.7);
    }

    #[test]
    fn test_detailed_segment_effort() {
        let json = r#"{
            "id": 1234556789,
            "resource_state": 3,
            "name": "Alpe d'Huez",
            "activity": {"id": 3454504, "resource_state": 1},
            "athlete": {"id": 54321, "resource_state": 1},
            "elapsed_time": 381,
            "moving_time": 340,
            "start_date": "2018-02-12T16:12:41Z",
            "start_date_local": "2018-02-12T08:12:41Z",
            "distance": 83,
            "start_index": 65,
            "end_index": 83,
            "segment": {"id": 63450, "resource_state": 2, "name": "Alpe d'Huez", "activity_type": "Run", "distance": 780.35, "climb_category": 0},
            "kom_rank": null,
            "pr_rank": 1,
            "hidden": false,
            "is_kom": false
        }"#;

        let effort: DetailedSegmentEffort = serde_json::from_str(json).unwrap();

        assert_eq!(effort.summary.id, 1234556789);
        assert_eq!(effort.summary.elapsed_time, 381);
        assert_eq!(effort.summary.distance, 83.0);
        assert_eq!(effort.activity.id, 3454504);
        assert_eq!(effort.segment.id, 63450);
        assert!(effort.kom_rank.is_none());
        assert_eq!(effort.pr_rank, Some(1));
        assert_eq!(
            format!("{}", effort),
            "id=1234556789, name=Alpe d'Huez, elapsed_time=381, segment=63450"
        );
    }
}
