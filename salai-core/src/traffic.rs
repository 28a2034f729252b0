//! Time-of-day traffic estimation
//!
//! A deliberately simple model: severity is a pure function of the hour
//! of departure, applied as a multiplicative delay over free-flow
//! travel time at [`BASE_SPEED_KMH`].

use std::fmt;

use chrono::{DateTime, TimeZone, Timelike};
use serde::Serialize;

use crate::geometry::path_distance_km;
use crate::routing::Route;
use crate::BASE_SPEED_KMH;

/// Qualitative congestion level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TrafficLevel {
    Light,
    Moderate,
    Heavy,
}

impl TrafficLevel {
    /// Severity bucket for an hour of day (0-23)
    pub fn for_hour(hour: u32) -> Self {
        match hour {
            // Morning and evening rush
            7..=9 | 17..=19 => Self::Heavy,
            // Late night
            23 | 0..=5 => Self::Light,
            _ => Self::Moderate,
        }
    }

    /// Multiplicative penalty over free-flow travel time
    pub fn delay_factor(self) -> f64 {
        match self {
            Self::Heavy => 1.5,
            Self::Light => 1.1,
            Self::Moderate => 1.2,
        }
    }
}

impl fmt::Display for TrafficLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Light => "Light",
            Self::Moderate => "Moderate",
            Self::Heavy => "Heavy",
        };
        write!(f, "{label}")
    }
}

/// Travel estimate for a single route, derived per request and never
/// persisted.
#[derive(Debug, Clone, Serialize)]
pub struct TrafficEstimate {
    #[serde(rename = "traffic_level")]
    pub level: TrafficLevel,
    pub delay_factor: f64,
    #[serde(rename = "estimated_time_minutes")]
    pub estimated_minutes: f64,
    #[serde(rename = "total_distance_km")]
    pub distance_km: f64,
}

/// Estimates travel conditions along a route departing at `at`.
///
/// Distance is the sum of pairwise haversine distances between route
/// points; routes with fewer than two points estimate to zero.
/// Distance and minutes are rounded to one decimal for presentation.
pub fn predict<Tz: TimeZone>(route: &Route, at: &DateTime<Tz>) -> TrafficEstimate {
    let level = TrafficLevel::for_hour(at.hour());
    let delay_factor = level.delay_factor();

    let distance_km = path_distance_km(route.points());
    let estimated_minutes = distance_km / BASE_SPEED_KMH * delay_factor * 60.0;

    TrafficEstimate {
        level,
        delay_factor,
        estimated_minutes: round1(estimated_minutes),
        distance_km: round1(distance_km),
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
