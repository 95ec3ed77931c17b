//! A library for map scale bar calculations
//!
//! ## Selecting a scale
//!
//! ```rust
//! use scale_bar::{best_scale, ScaleOptions};
//!
//! let scale = best_scale(100000.0, 1000, &ScaleOptions::default()).unwrap();
//! assert_eq!(scale.unit.meters, 10000.0);
//! assert_eq!(scale.num_units, 2);
//! assert!(scale.total_width_px < 240.0);
//! ```
//!
//! ## Estimating the viewport span
//!
//! ```rust
//! use scale_bar::{extent_span_meters, Extent};
//!
//! let viewport = Extent {
//!     minx: -1.0,
//!     miny: 50.5,
//!     maxx: 1.0,
//!     maxy: 51.5,
//! };
//! let meters = extent_span_meters(&viewport);
//! assert!(meters > 0.0);
//! ```

mod scale;
mod span;
#[cfg(test)]
mod scale_test;

pub use scale::{
    best_scale, possible_scales, possible_units, CandidateScale, CandidateUnit, ScaleOptions,
    POSSIBLE_DIVISIONS, POSSIBLE_UNIT_COUNTS,
};
pub use span::{extent_span_meters, span_meters, Extent, EARTH_RADIUS};
