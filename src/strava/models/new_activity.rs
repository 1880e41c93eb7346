//! Request body of `POST /activities`.

use serde::{Serialize, Serializer};

/// A manually entered activity to create.
///
/// Optional values are left out of the request body when they hold their
/// zero value: empty `activity_type` or `description`, a `distance` that is
/// not positive, and `trainer`/`commute` set to `false`.
///
/// # Examples
///
/// ```
/// use strava_wrapper::strava::NewActivity;
///
/// let activity = NewActivity::new("Morning Ride", "Ride", "2025-08-12T07:00:00Z", 3600)
///     .with_distance(25_000.0)
///     .with_commute(true);
/// let body = serde_json::to_value(&activity).unwrap();
/// assert_eq!(body["commute"], 1);
/// assert!(body.get("description").is_none());
/// ```
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct NewActivity {
    pub name: String,
    /// Deprecated upstream in favor of `sport_type`.
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub activity_type: String,
    pub sport_type: String,
    /// ISO 8601 local start time.
    pub start_date_local: String,
    /// Elapsed time in seconds.
    pub elapsed_time: u64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Distance in meters.
    #[serde(skip_serializing_if = "is_not_positive")]
    pub distance: f64,
    /// Set to mark the activity as done on a trainer.
    #[serde(skip_serializing_if = "is_unset", serialize_with = "as_flag")]
    pub trainer: bool,
    /// Set to mark the activity as a commute.
    #[serde(skip_serializing_if = "is_unset", serialize_with = "as_flag")]
    pub commute: bool,
}

fn is_not_positive(value: &f64) -> bool {
    *value <= 0.0
}

fn is_unset(value: &bool) -> bool {
    !*value
}

// Upstream documents both flags as integers.
fn as_flag<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u8(u8::from(*value))
}

impl NewActivity {
    /// Create a [NewActivity] with its required values.
    pub fn new(name: &str, sport_type: &str, start_date_local: &str, elapsed_time: u64) -> Self {
        NewActivity {
            name: name.to_string(),
            sport_type: sport_type.to_string(),
            start_date_local: start_date_local.to_string(),
            elapsed_time,
            ..Default::default()
        }
    }

    pub fn with_activity_type(mut self, activity_type: &str) -> Self {
        self.activity_type = activity_type.to_string();
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn with_distance(mut self, distance: f64) -> Self {
        self.distance = distance;
        self
    }

    pub fn with_trainer(mut self, trainer: bool) -> Self {
        self.trainer = trainer;
        self
    }

    pub fn with_commute(mut self, commute: bool) -> Self {
        self.commute = commute;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_required_fields_only() {
        let activity = NewActivity::new("Lunch Run", "Run", "2025-08-12T12:00:00Z", 1800);

        assert_eq!(
            serde_json::to_value(&activity).unwrap(),
            json!({
                "name": "Lunch Run",
                "sport_type": "Run",
                "start_date_local": "2025-08-12T12:00:00Z",
                "elapsed_time": 1800
            })
        );
    }

    #[test]
    fn test_all_fields() {
        let activity = NewActivity::new("Morning Ride", "Ride", "2025-08-12T07:00:00Z", 3600)
            .with_activity_type("Ride")
            .with_description("Easy spin")
            .with_distance(25000.5)
            .with_trainer(true)
            .with_commute(true);

        assert_eq!(
            serde_json::to_value(&activity).unwrap(),
            json!({
                "name": "Morning Ride",
                "type": "Ride",
                "sport_type": "Ride",
                "start_date_local": "2025-08-12T07:00:00Z",
                "elapsed_time": 3600,
                "description": "Easy spin",
                "distance": 25000.5,
                "trainer": 1,
                "commute": 1
            })
        );
    }

    #[test]
    fn test_zero_values_are_omitted() {
        let activity = NewActivity::new("Swim", "Swim", "2025-08-12T07:00:00Z", 600)
            .with_description("")
            .with_distance(0.0)
            .with_trainer(false)
            .with_commute(false);

        let body = serde_json::to_value(&activity).unwrap();

        assert!(body.get("type").is_none());
        assert!(body.get("description").is_none());
        assert!(body.get("distance").is_none());
        assert!(body.get("trainer").is_none());
        assert!(body.get("commute").is_none());
    }

    #[test]
    fn test_negative_distance_is_omitted() {
        let activity =
            NewActivity::new("Walk", "Walk", "2025-08-12T07:00:00Z", 600).with_distance(-5.0);

        let body = serde_json::to_value(&activity).unwrap();

        assert!(body.get("distance").is_none());
    }
}
