//! HTTP client for the Strava v3 API.
//!
//! This module provides the [`StravaApi`] trait, one method per upstream
//! endpoint, and [`StravaClient`], its implementation over `reqwest`.

use std::fmt::Debug;

use log::{debug, info, warn};
use mockall::automock;
use reqwest::{Client, RequestBuilder};
use serde::{Serialize, de::DeserializeOwned};

use crate::strava::StravaError;
use crate::strava::models::{
    ActivityStats, ActivityZone, ClubActivity, ClubAthlete, Comment, DetailedActivity,
    DetailedAthlete, DetailedClub, DetailedGear, DetailedSegment, DetailedSegmentEffort,
    ExplorerResponse, Lap, NewActivity, Route, StreamKey, StreamSet, SummaryActivity,
    SummaryAthlete, SummarySegment, Upload, Zones, join_keys,
};
use crate::strava::transport::bearer_client;

/// Page selection for list endpoints.
///
/// Unset values are left out of the query string, upstream then applies its
/// own defaults (page 1, 30 items).
#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Page {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
}

impl Page {
    pub fn new(page: u32, per_page: u32) -> Self {
        Page {
            page: Some(page),
            per_page: Some(per_page),
        }
    }
}

/// Filter of `/athlete/activities`.
#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActivityFilter {
    /// Only activities that started before this epoch timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<i64>,
    /// Only activities that started after this epoch timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
}

#[derive(Serialize)]
struct CommentQuery<'a> {
    page_size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    after_cursor: Option<&'a str>,
}

/// Operations of the Strava API.
///
/// Each method maps to exactly one upstream endpoint and issues exactly one
/// request. This trait abstracts the HTTP operations for easier testing with mocks.
#[automock]
pub trait StravaApi {
    /// `GET /athlete`
    async fn get_athlete(&self) -> Result<DetailedAthlete, StravaError>;
    /// `GET /athletes/{id}`
    async fn get_athlete_by_id(&self, athlete_id: i64) -> Result<DetailedAthlete, StravaError>;
    /// `GET /athletes/{id}/stats`
    async fn get_athlete_stats(&self, athlete_id: i64) -> Result<ActivityStats, StravaError>;
    /// `GET /athlete/zones`
    async fn get_athlete_zones(&self) -> Result<Zones, StravaError>;
    /// `GET /athlete/activities`
    async fn list_athlete_activities(
        &self,
        filter: ActivityFilter,
    ) -> Result<Vec<SummaryActivity>, StravaError>;
    /// `POST /activities`
    ///
    /// Upstream answers `201 Created`, but any success status is accepted.
    async fn create_activity(
        &self,
        activity: &NewActivity,
    ) -> Result<DetailedActivity, StravaError>;
    /// `GET /activities/{id}`
    async fn get_activity(
        &self,
        activity_id: i64,
        include_all_efforts: bool,
    ) -> Result<DetailedActivity, StravaError>;
    /// `GET /activities/{id}/comments`
    async fn list_activity_comments(
        &self,
        activity_id: i64,
        page_size: u32,
        after_cursor: Option<String>,
    ) -> Result<Vec<Comment>, StravaError>;
    /// `GET /activities/{id}/kudos`
    async fn list_activity_kudoers(
        &self,
        activity_id: i64,
        page: Page,
    ) -> Result<Vec<SummaryAthlete>, StravaError>;
    /// `GET /activities/{id}/laps`
    async fn list_activity_laps(&self, activity_id: i64) -> Result<Vec<Lap>, StravaError>;
    /// `GET /activities/{id}/zones`
    async fn list_activity_zones(&self, activity_id: i64)
    -> Result<Vec<ActivityZone>, StravaError>;
    /// `GET /activities/{id}/streams`
    async fn get_activity_streams(
        &self,
        activity_id: i64,
        keys: &[StreamKey],
    ) -> Result<StreamSet, StravaError>;
    /// `GET /gear/{id}`
    async fn get_gear(&self, gear_id: &str) -> Result<DetailedGear, StravaError>;
    /// `GET /clubs/{id}`
    async fn get_club(&self, club_id: i64) -> Result<DetailedClub, StravaError>;
    /// `GET /clubs/{id}/members`
    async fn list_club_members(
        &self,
        club_id: i64,
        page: Page,
    ) -> Result<Vec<ClubAthlete>, StravaError>;
    /// `GET /clubs/{id}/activities`
    async fn list_club_activities(
        &self,
        club_id: i64,
        page: Page,
    ) -> Result<Vec<ClubActivity>, StravaError>;
    /// `GET /routes/{id}`
    async fn get_route(&self, route_id: i64) -> Result<Route, StravaError>;
    /// `GET /uploads/{id}`
    async fn get_upload(&self, upload_id: i64) -> Result<Upload, StravaError>;
    /// `GET /segments/explore`
    async fn explore_segments(
        &self,
        bounds: [f64; 4],
        activity_type: &str,
        min_cat: u8,
        max_cat: u8,
    ) -> Result<ExplorerResponse, StravaError>;
    /// `GET /segments/{id}`
    async fn get_segment(&self, segment_id: i64) -> Result<DetailedSegment, StravaError>;
    /// `GET /segments/starred`
    async fn list_starred_segments(&self, page: Page)
    -> Result<Vec<SummarySegment>, StravaError>;
    /// `GET /segment_efforts/{id}`
    async fn get_segment_effort(&self, effort_id: i64)
    -> Result<DetailedSegmentEffort, StravaError>;
}

/// HTTP client for the Strava API.
///
/// # Examples
///
/// ```no_run
/// use strava_wrapper::strava::{STRAVA_API_URL, StravaApi, StravaClient, bearer_client};
///
/// # async fn example() -> anyhow::Result<()> {
/// let http = bearer_client("access-token")?;
/// let strava_client = StravaClient::new(STRAVA_API_URL, http);
/// let club = strava_client.get_club(1).await?;
/// println!("Club: {}", club);
/// # Ok(())
/// # }
/// ```
pub struct StravaClient {
    /// Strava API base url, without trailing slash
    url: String,
    /// HTTP client, expected to authenticate every request
    client: Client,
}

impl StravaClient {
    /// Create a new [StravaClient].
    ///
    /// # Arguments
    ///
    /// * `url` - The base URL of the Strava API, usually [`crate::strava::STRAVA_API_URL`].
    /// * `client` - An HTTP client attaching the bearer token, see [`bearer_client`].
    pub fn new(url: &str, client: Client) -> Self {
        StravaClient {
            url: url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Create a new [StravaClient] authenticating with `access_token`.
    pub fn with_token(url: &str, access_token: &str) -> anyhow::Result<Self> {
        Ok(StravaClient::new(url, bearer_client(access_token)?))
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", &self.url, path)
    }

    /// Send `request` and decode its JSON response.
    ///
    /// Any non-success status is an error, the response body is then dropped.
    async fn send<T>(&self, request: RequestBuilder) -> Result<T, StravaError>
    where
        T: DeserializeOwned + Debug,
    {
        let request = request.build()?;
        let method = request.method().clone();
        let url = request.url().clone();
        debug!("request {} {}", &method, &url);

        let response = self.client.execute(request).await?;
        let status = response.status();
        if !status.is_success() {
            warn!("unexpected status from {} {} -> {}", &method, &url, status);
            return Err(StravaError::UnexpectedStatus(status));
        }

        let body = response.text().await?;
        let value: T = serde_json::from_str(&body)?;

        debug!("response from {} {} -> {:?}", &method, &url, &value);

        Ok(value)
    }
}

impl StravaApi for StravaClient {
    async fn get_athlete(&self) -> Result<DetailedAthlete, StravaError> {
        info!("request authenticated athlete");
        let url = self.endpoint("/athlete");
        self.send(self.client.get(&url)).await
    }

    async fn get_athlete_by_id(&self, athlete_id: i64) -> Result<DetailedAthlete, StravaError> {
        info!("request athlete {}", athlete_id);
        let url = self.endpoint(&format!("/athletes/{}", athlete_id));
        self.send(self.client.get(&url)).await
    }

    async fn get_athlete_stats(&self, athlete_id: i64) -> Result<ActivityStats, StravaError> {
        info!("request stats of athlete {}", athlete_id);
        let url = self.endpoint(&format!("/athletes/{}/stats", athlete_id));
        self.send(self.client.get(&url)).await
    }

    async fn get_athlete_zones(&self) -> Result<Zones, StravaError> {
        info!("request zones of authenticated athlete");
        let url = self.endpoint("/athlete/zones");
        self.send(self.client.get(&url)).await
    }

    async fn list_athlete_activities(
        &self,
        filter: ActivityFilter,
    ) -> Result<Vec<SummaryActivity>, StravaError> {
        info!("request activities of authenticated athlete");
        let url = self.endpoint("/athlete/activities");
        self.send(self.client.get(&url).query(&filter)).await
    }

    async fn create_activity(
        &self,
        activity: &NewActivity,
    ) -> Result<DetailedActivity, StravaError> {
        info!("create activity {}", &activity.name);
        let url = self.endpoint("/activities");
        self.send(self.client.post(&url).json(activity)).await
    }

    async fn get_activity(
        &self,
        activity_id: i64,
        include_all_efforts: bool,
    ) -> Result<DetailedActivity, StravaError> {
        info!("request activity {}", activity_id);
        let url = self.endpoint(&format!("/activities/{}", activity_id));
        let mut request = self.client.get(&url);
        if include_all_efforts {
            request = request.query(&[("include_all_efforts", "true")]);
        }
        self.send(request).await
    }

    async fn list_activity_comments(
        &self,
        activity_id: i64,
        page_size: u32,
        after_cursor: Option<String>,
    ) -> Result<Vec<Comment>, StravaError> {
        info!("request comments of activity {}", activity_id);
        let url = self.endpoint(&format!("/activities/{}/comments", activity_id));
        let query = CommentQuery {
            page_size,
            after_cursor: after_cursor.as_deref(),
        };
        self.send(self.client.get(&url).query(&query)).await
    }

    async fn list_activity_kudoers(
        &self,
        activity_id: i64,
        page: Page,
    ) -> Result<Vec<SummaryAthlete>, StravaError> {
        info!("request kudoers of activity {}", activity_id);
        let url = self.endpoint(&format!("/activities/{}/kudos", activity_id));
        self.send(self.client.get(&url).query(&page)).await
    }

    async fn list_activity_laps(&self, activity_id: i64) -> Result<Vec<Lap>, StravaError> {
        info!("request laps of activity {}", activity_id);
        let url = self.endpoint(&format!("/activities/{}/laps", activity_id));
        self.send(self.client.get(&url)).await
    }

    async fn list_activity_zones(
        &self,
        activity_id: i64,
    ) -> Result<Vec<ActivityZone>, StravaError> {
        info!("request zones of activity {}", activity_id);
        let url = self.endpoint(&format!("/activities/{}/zones", activity_id));
        self.send(self.client.get(&url)).await
    }

    /// Streams are always requested keyed by type so they decode into a
    /// [`StreamSet`].
    async fn get_activity_streams(
        &self,
        activity_id: i64,
        keys: &[StreamKey],
    ) -> Result<StreamSet, StravaError> {
        info!("request streams of activity {}", activity_id);
        let url = self.endpoint(&format!("/activities/{}/streams", activity_id));
        let keys = join_keys(keys);
        let query = [("keys", keys.as_str()), ("key_by_type", "true")];
        self.send(self.client.get(&url).query(&query)).await
    }

    async fn get_gear(&self, gear_id: &str) -> Result<DetailedGear, StravaError> {
        info!("request gear {}", gear_id);
        let url = self.endpoint(&format!("/gear/{}", gear_id));
        self.send(self.client.get(&url)).await
    }

    async fn get_club(&self, club_id: i64) -> Result<DetailedClub, StravaError> {
        info!("request club {}", club_id);
        let url = self.endpoint(&format!("/clubs/{}", club_id));
        self.send(self.client.get(&url)).await
    }

    async fn list_club_members(
        &self,
        club_id: i64,
        page: Page,
    ) -> Result<Vec<ClubAthlete>, StravaError> {
        info!("request members of club {}", club_id);
        let url = self.endpoint(&format!("/clubs/{}/members", club_id));
        self.send(self.client.get(&url).query(&page)).await
    }

    async fn list_club_activities(
        &self,
        club_id: i64,
        page: Page,
    ) -> Result<Vec<ClubActivity>, StravaError> {
        info!("request activities of club {}", club_id);
        let url = self.endpoint(&format!("/clubs/{}/activities", club_id));
        self.send(self.client.get(&url).query(&page)).await
    }

    async fn get_route(&self, route_id: i64) -> Result<Route, StravaError> {
        info!("request route {}", route_id);
        let url = self.endpoint(&format!("/routes/{}", route_id));
        self.send(self.client.get(&url)).await
    }

    async fn get_upload(&self, upload_id: i64) -> Result<Upload, StravaError> {
        info!("request upload {}", upload_id);
        let url = self.endpoint(&format!("/uploads/{}", upload_id));
        self.send(self.client.get(&url)).await
    }

    /// `bounds` is `[south-west latitude, south-west longitude, north-east
    /// latitude, north-east longitude]`.
    async fn explore_segments(
        &self,
        bounds: [f64; 4],
        activity_type: &str,
        min_cat: u8,
        max_cat: u8,
    ) -> Result<ExplorerResponse, StravaError> {
        info!("explore {} segments in {:?}", activity_type, bounds);
        let url = self.endpoint("/segments/explore");
        let bounds = bounds
            .iter()
            .map(f64::to_string)
            .collect::<Vec<String>>()
            .join(",");
        let query = [
            ("bounds", bounds),
            ("activity_type", activity_type.to_string()),
            ("min_cat", min_cat.to_string()),
            ("max_cat", max_cat.to_string()),
        ];
        self.send(self.client.get(&url).query(&query)).await
    }

    async fn get_segment(&self, segment_id: i64) -> Result<DetailedSegment, StravaError> {
        info!("request segment {}", segment_id);
        let url = self.endpoint(&format!("/segments/{}", segment_id));
        self.send(self.client.get(&url)).await
    }

    async fn list_starred_segments(
        &self,
        page: Page,
    ) -> Result<Vec<SummarySegment>, StravaError> {
        info!("request starred segments");
        let url = self.endpoint("/segments/starred");
        self.send(self.client.get(&url).query(&page)).await
    }

    async fn get_segment_effort(
        &self,
        effort_id: i64,
    ) -> Result<DetailedSegmentEffort, StravaError> {
        info!("request segment effort {}", effort_id);
        let url = self.endpoint(&format!("/segment_efforts/{}", effort_id));
        self.send(self.client.get(&url)).await
    }
}
