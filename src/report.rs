//! Aggregation of the resources requested on the command line.
//!
//! This module provides [`collect`], which issues the selected fetches through
//! a [`StravaApi`] implementation and gathers the results into a [`Report`].

use log::{info, warn};
use serde::Serialize;

use crate::strava::{
    ActivityFilter, ActivityStats, DetailedAthlete, DetailedClub, DetailedGear, ExplorerSegment,
    StravaApi, StravaError, SummaryActivity,
};

/// San Francisco area explored by the segments fetch: south-west then
/// north-east corner.
pub const SEGMENT_BOUNDS: [f64; 4] = [37.82, -122.52, 37.84, -122.35];

/// Activity type of the segments fetch.
pub const SEGMENT_ACTIVITY_TYPE: &str = "riding";

/// Number of activities of the activities fetch.
pub const ACTIVITIES_PER_PAGE: u32 = 10;

/// Resources to fetch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    /// Fetch this athlete instead of the authenticated one. When set, `stats`
    /// and `gear` are ignored.
    pub athlete_id: Option<i64>,
    /// Include the authenticated athlete
    pub athlete: bool,
    /// Include the statistics of the authenticated athlete
    pub stats: bool,
    /// Include the first bike of the authenticated athlete
    pub gear: bool,
    /// Include the latest activities
    pub activities: bool,
    /// Include the segments of [`SEGMENT_BOUNDS`]
    pub segments: bool,
    /// Include this club
    pub club: Option<i64>,
}

impl Selection {
    fn needs_authenticated_athlete(&self) -> bool {
        self.athlete || self.stats || self.gear
    }
}

/// Fetched resources, absent entries are left out of the serialized form.
#[derive(Serialize, Debug, Default, PartialEq)]
pub struct Report {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub athlete: Option<DetailedAthlete>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<ActivityStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gear: Option<DetailedGear>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activities: Option<Vec<SummaryActivity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segments: Option<Vec<ExplorerSegment>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub club: Option<DetailedClub>,
}

/// Fetch the resources of `selection` one after the other.
///
/// # Errors
///
/// Only a failure to fetch the athlete is returned. Other failures are logged
/// and the matching entry of the report stays empty.
pub async fn collect<A: StravaApi>(api: &A, selection: &Selection) -> Result<Report, StravaError> {
    let mut report = Report::default();

    if let Some(athlete_id) = selection.athlete_id {
        report.athlete = Some(api.get_athlete_by_id(athlete_id).await?);
    } else if selection.needs_authenticated_athlete() {
        let athlete = api.get_athlete().await?;
        info!("authenticated as {}", &athlete);

        if selection.stats {
            report.stats = optional("stats", api.get_athlete_stats(athlete.summary.id).await);
        }

        if selection.gear {
            match athlete.bikes.first() {
                Some(bike) => {
                    report.gear = optional("gear", api.get_gear(&bike.id).await);
                }
                None => info!("athlete {} has no bike", athlete.summary.id),
            }
        }

        if selection.athlete {
            report.athlete = Some(athlete);
        }
    }

    if selection.activities {
        let filter = ActivityFilter {
            page: Some(1),
            per_page: Some(ACTIVITIES_PER_PAGE),
            ..Default::default()
        };
        report.activities = optional("activities", api.list_athlete_activities(filter).await);
    }

    if selection.segments {
        report.segments = optional(
            "segments",
            api.explore_segments(SEGMENT_BOUNDS, SEGMENT_ACTIVITY_TYPE, 0, 5)
                .await
                .map(|explorer| explorer.segments),
        );
    }

    if let Some(club_id) = selection.club {
        report.club = optional("club", api.get_club(club_id).await);
    }

    Ok(report)
}

fn optional<T>(entry: &str, result: Result<T, StravaError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Failed to fetch {}: {}", entry, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strava::{
        ExplorerResponse, MockStravaApi, SummaryAthlete, SummaryClub, SummaryGear,
    };
    use mockall::predicate::eq;
    use reqwest::StatusCode;

    fn athlete_with_bike() -> DetailedAthlete {
        DetailedAthlete {
            summary: SummaryAthlete {
                id: 42,
                firstname: "Ada".to_string(),
                lastname: "Lovelace".to_string(),
                ..Default::default()
            },
            bikes: vec![SummaryGear {
                id: "b1".to_string(),
                name: "Road".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_collect_nothing() {
        let mock_api = MockStravaApi::new();

        let report = collect(&mock_api, &Selection::default()).await.unwrap();

        assert_eq!(report, Report::default());
        assert_eq!(serde_json::to_string(&report).unwrap(), "{}");
    }

    #[tokio::test]
    async fn test_collect_athlete_stats_and_gear() {
        let mut mock_api = MockStravaApi::new();
        mock_api
            .expect_get_athlete()
            .times(1)
            .returning(|| Ok(athlete_with_bike()));
        mock_api
            .expect_get_athlete_stats()
            .with(eq(42))
            .times(1)
            .returning(|_| {
                Ok(ActivityStats {
                    biggest_ride_distance: 120000.0,
                    ..Default::default()
                })
            });
        mock_api
            .expect_get_gear()
            .with(eq("b1"))
            .times(1)
            .returning(|_| {
                Ok(DetailedGear {
                    summary: SummaryGear {
                        id: "b1".to_string(),
                        ..Default::default()
                    },
                    brand_name: Some("BMC".to_string()),
                    ..Default::default()
                })
            });

        let selection = Selection {
            athlete: true,
            stats: true,
            gear: true,
            ..Default::default()
        };
        let report = collect(&mock_api, &selection).await.unwrap();

        assert_eq!(report.athlete.unwrap().summary.lastname, "Lovelace");
        assert_eq!(report.stats.unwrap().biggest_ride_distance, 120000.0);
        assert_eq!(report.gear.unwrap().brand_name.as_deref(), Some("BMC"));
    }

    #[tokio::test]
    async fn test_collect_stats_without_athlete() {
        let mut mock_api = MockStravaApi::new();
        mock_api
            .expect_get_athlete()
            .times(1)
            .returning(|| Ok(athlete_with_bike()));
        mock_api
            .expect_get_athlete_stats()
            .times(1)
            .returning(|_| Ok(ActivityStats::default()));

        let selection = Selection {
            stats: true,
            ..Default::default()
        };
        let report = collect(&mock_api, &selection).await.unwrap();

        assert!(report.athlete.is_none());
        assert!(report.stats.is_some());
    }

    #[tokio::test]
    async fn test_collect_gear_without_bike() {
        let mut mock_api = MockStravaApi::new();
        mock_api
            .expect_get_athlete()
            .times(1)
            .returning(|| Ok(DetailedAthlete::default()));
        mock_api.expect_get_gear().times(0);

        let selection = Selection {
            gear: true,
            ..Default::default()
        };
        let report = collect(&mock_api, &selection).await.unwrap();

        assert!(report.gear.is_none());
    }

    #[tokio::test]
    async fn test_collect_athlete_failure_is_fatal() {
        let mut mock_api = MockStravaApi::new();
        mock_api
            .expect_get_athlete()
            .times(1)
            .returning(|| Err(StravaError::UnexpectedStatus(StatusCode::UNAUTHORIZED)));
        mock_api.expect_get_athlete_stats().times(0);

        let selection = Selection {
            athlete: true,
            stats: true,
            ..Default::default()
        };
        let result = collect(&mock_api, &selection).await;

        assert!(matches!(
            result,
            Err(StravaError::UnexpectedStatus(StatusCode::UNAUTHORIZED))
        ));
    }

    #[tokio::test]
    async fn test_collect_athlete_by_id() {
        let mut mock_api = MockStravaApi::new();
        mock_api
            .expect_get_athlete_by_id()
            .with(eq(7))
            .times(1)
            .returning(|id| {
                Ok(DetailedAthlete {
                    summary: SummaryAthlete {
                        id,
                        ..Default::default()
                    },
                    ..Default::default()
                })
            });
        mock_api.expect_get_athlete().times(0);
        mock_api.expect_get_athlete_stats().times(0);

        let selection = Selection {
            athlete_id: Some(7),
            stats: true,
            ..Default::default()
        };
        let report = collect(&mock_api, &selection).await.unwrap();

        assert_eq!(report.athlete.unwrap().summary.id, 7);
        assert!(report.stats.is_none());
    }

    #[tokio::test]
    async fn test_collect_optional_failures_are_omitted() {
        let mut mock_api = MockStravaApi::new();
        mock_api
            .expect_list_athlete_activities()
            .with(eq(ActivityFilter {
                page: Some(1),
                per_page: Some(10),
                ..Default::default()
            }))
            .times(1)
            .returning(|_| Err(StravaError::UnexpectedStatus(StatusCode::TOO_MANY_REQUESTS)));
        mock_api
            .expect_explore_segments()
            .with(eq(SEGMENT_BOUNDS), eq("riding"), eq(0), eq(5))
            .times(1)
            .returning(|_, _, _, _| {
                Ok(ExplorerResponse {
                    segments: vec![ExplorerSegment {
                        id: 229781,
                        name: "Hawk Hill".to_string(),
                        ..Default::default()
                    }],
                })
            });
        mock_api
            .expect_get_club()
            .with(eq(1))
            .times(1)
            .returning(|_| {
                Ok(DetailedClub {
                    summary: SummaryClub {
                        id: 1,
                        name: "Team Strava Cycling".to_string(),
                        ..Default::default()
                    },
                    ..Default::default()
                })
            });

        let selection = Selection {
            activities: true,
            segments: true,
            club: Some(1),
            ..Default::default()
        };
        let report = collect(&mock_api, &selection).await.unwrap();

        assert!(report.activities.is_none());

        let value = serde_json::to_value(&report).unwrap();
        assert!(value.get("activities").is_none());
        assert!(value["segments"].is_array());
        assert_eq!(value["segments"][0]["id"], 229781);
        assert_eq!(value["club"]["name"], "Team Strava Cycling");

        assert_eq!(report.segments.unwrap()[0].name, "Hawk Hill");
    }

    #[test]
    fn test_report_serialization_omits_absent_entries() {
        let report = Report {
            activities: Some(vec![]),
            ..Default::default()
        };

        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value, serde_json::json!({ "activities": [] }));
    }
}
