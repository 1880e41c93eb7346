//! Typed records mirroring the Strava v3 JSON resources.
//!
//! Every record defaults the fields missing from a payload. Detailed
//! representations embed their summary counterpart with `#[serde(flatten)]`,
//! so the JSON stays flat while the summary fields are shared. Upstream also
//! sends explicit `null` for some values, those decode to the default too.

mod activity;
mod athlete;
mod club;
mod gear;
mod new_activity;
mod route;
mod segment;
mod stream;

pub use crate::strava::models::activity::{
    ActivityZone, Comment, DetailedActivity, Lap, LatLng, MetaActivity, PhotosSummary,
    PhotosSummaryPrimary, PolylineMap, Split, SummaryActivity, TimedZoneRange,
};
pub use crate::strava::models::athlete::{
    ActivityStats, ActivityTotal, DetailedAthlete, HeartRateZoneRanges, PowerZoneRanges,
    SummaryAthlete, ZoneRange, ZoneRanges, Zones,
};
pub use crate::strava::models::club::{ClubActivity, ClubAthlete, DetailedClub, SummaryClub};
pub use crate::strava::models::gear::{DetailedGear, SummaryGear};
pub use crate::strava::models::new_activity::NewActivity;
pub use crate::strava::models::route::{Route, Upload};
pub use crate::strava::models::segment::{
    DetailedSegment, DetailedSegmentEffort, ExplorerResponse, ExplorerSegment, SummarySegment,
    SummarySegmentEffort,
};
pub use crate::strava::models::stream::{Stream, StreamKey, StreamSet, join_keys};

use serde::{Deserialize, Deserializer};

/// Decodes `null` as the default value of `T`.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
