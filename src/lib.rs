//! Typed client for the Strava v3 REST API.
//!
//! # Modules
//!
//! - [`strava`] - Resource client, records and errors
//! - [`config`] - YAML and environment configuration of the command line tool
//! - [`report`] - Aggregation of the resources requested on the command line
//! - [`output`] - JSON or debug rendering of the fetched resources

pub mod config;
pub mod output;
pub mod report;
pub mod strava;
