//! Club resources from `/clubs/{id}` and its members and activities.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::strava::models::athlete::SummaryAthlete;

/// Summary representation of a club.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct SummaryClub {
    #[serde(deserialize_with = "super::null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub resource_state: u8,
    #[serde(deserialize_with = "super::null_as_default")]
    pub name: String,
    pub profile_medium: Option<String>,
    pub cover_photo: Option<String>,
    pub cover_photo_small: Option<String>,
    /// `cycling`, `running`, `triathlon` or `other`.
    pub sport_type: Option<String>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub activity_types: Vec<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub private: bool,
    #[serde(deserialize_with = "super::null_as_default")]
    pub member_count: u32,
    #[serde(deserialize_with = "super::null_as_default")]
    pub featured: bool,
    #[serde(deserialize_with = "super::null_as_default")]
    pub verified: bool,
    /// Vanity URL of the club.
    pub url: Option<String>,
}

/// Detailed representation of a club.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct DetailedClub {
    #[serde(flatten)]
    pub summary: SummaryClub,
    /// Membership status of the requesting athlete: `member` or `pending`.
    pub membership: Option<String>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub admin: bool,
    #[serde(deserialize_with = "super::null_as_default")]
    pub owner: bool,
    #[serde(deserialize_with = "super::null_as_default")]
    pub following_count: u32,
}

impl fmt::Display for DetailedClub {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "id={}, name={}, members={}",
            self.summary.id, self.summary.name, self.summary.member_count
        )
    }
}

/// A member of a club from `/clubs/{id}/members`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ClubAthlete {
    #[serde(deserialize_with = "super::null_as_default")]
    pub resource_state: u8,
    #[serde(deserialize_with = "super::null_as_default")]
    pub firstname: String,
    /// Upstream only exposes the initial of the last name.
    #[serde(deserialize_with = "super::null_as_default")]
    pub lastname: String,
    /// `member` or `pending`.
    pub member: Option<String>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub admin: bool,
    #[serde(deserialize_with = "super::null_as_default")]
    pub owner: bool,
}

/// An activity of a club member from `/clubs/{id}/activities`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ClubActivity {
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
    #[serde(deserialize_with = "super::null_as_default")]
    pub total_elevation_gain: f64,
    /// Deprecated upstream in favor of `sport_type`.
    #[serde(rename = "type")]
    pub activity_type: Option<String>,
    pub sport_type: Option<String>,
    pub workout_type: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detailed_club() {
        let json = r#"{
            "id": 1,
            "resource_state": 3,
            "name": "Team Strava Cycling",
            "profile_medium": "https://dgalywyr863hv.cloudfront.net/pictures/clubs/1/1582/4/medium.jpg",
            "sport_type": "cycling",
            "activity_types": ["Ride", "VirtualRide"],
            "city": "San Francisco",
            "state": "California",
            "country": "United States",
            "private": true,
            "member_count": 116,
            "featured": false,
            "verified": false,
            "url": "team-strava-bike",
            "membership": "member",
            "admin": false,
            "owner": false,
            "following_count": 0
        }"#;

        let club: DetailedClub = serde_json::from_str(json).unwrap();

        assert_eq!(club.summary.id, 1);
        assert_eq!(club.summary.name, "Team Strava Cycling");
        assert_eq!(club.summary.activity_types, vec!["Ride", "VirtualRide"]);
        assert!(club.summary.private);
        assert_eq!(club.summary.member_count, 116);
        assert_eq!(club.membership.as_deref(), Some("member"));
        assert!(!club.owner);
    }

    #[test]
    fn test_club_activity() {
        let json = r#"{
            "resource_state": 2,
            "athlete": {"resource_state": 2, "firstname": "Peter", "lastname": "S."},
            "name": "World Championship",
            "distance": 2641.7,
            "moving_time": 577,
            "elapsed_time": 635,
            "total_elevation_gain": 8.8,
            "type": "Ride",
            "sport_type": "MountainBikeRide",
            "workout_type": null
        }"#;

        let activity: ClubActivity = serde_json::from_str(json).unwrap();

        assert_eq!(activity.athlete.firstname, "Peter");
        assert_eq!(activity.athlete.lastname, "S.");
        assert_eq!(activity.activity_type.as_deref(), Some("Ride"));
        assert_eq!(activity.moving_time, 577);
        assert!(activity.workout_type.is_none());
    }

    #[test]
    fn test_detailed_club_display() {
        let club = DetailedClub {
            summary: SummaryClub {
                id: 3,
                name: "Bullsharks".to_string(),
                member_count: 12,
                ..Default::default()
            },
            ..Default::default()
        };

        assert_eq!(format!("{}", club), "id=3, name=Bullsharks, members=12");
    }
}
