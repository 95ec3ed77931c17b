//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//!Viewport span estimation

use std::f64::consts;

/// Equatorial radius of the spherical earth approximation (WGS84 semi-major axis)
pub const EARTH_RADIUS: f64 = 6378137.0;

/// Geographic extent in degrees
#[derive(PartialEq, Clone, Debug)]
pub struct Extent {
    pub minx: f64,
    pub miny: f64,
    pub maxx: f64,
    pub maxy: f64,
}

impl Extent {
    /// Latitude of the extent center
    pub fn center_lat(&self) -> f64 {
        self.miny + (self.maxy - self.miny) / 2.0
    }
}

/// Ground distance in meters spanned west to east at the given latitude.
///
/// The earth is treated as a sphere and longitude convergence is accounted
/// for with the cosine of the center latitude, matching a Web Mercator view.
pub fn span_meters(center_lat_deg: f64, west_lng_deg: f64, east_lng_deg: f64) -> f64 {
    // length of a half world arc at the center latitude
    let half_world_meters = EARTH_RADIUS * consts::PI * center_lat_deg.to_radians().cos();
    half_world_meters * (east_lng_deg - west_lng_deg) / 180.0
}

/// Span of the full east-west extent of a viewport
pub fn extent_span_meters(extent: &Extent) -> f64 {
    span_meters(extent.center_lat(), extent.minx, extent.maxx)
}
