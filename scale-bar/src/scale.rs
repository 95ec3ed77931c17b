//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//!Scale bar selection

use std::cmp::Ordering;

/// Unit divisors applied to each power of ten, in preference order
pub const POSSIBLE_DIVISIONS: [f64; 4] = [1.0, 0.5, 0.25, 0.2];

/// Segment counts of the full bar, in preference order
pub const POSSIBLE_UNIT_COUNTS: [u8; 4] = [3, 5, 2, 4];

/// Tunables for scale selection
#[derive(PartialEq, Clone, Debug)]
pub struct ScaleOptions {
    /// Minimum pixel width below which a unit segment is illegible
    pub min_unit_width_px: f64,
    /// Maximum total pixel width of the whole scale bar
    pub max_units_width_px: f64,
}

impl Default for ScaleOptions {
    fn default() -> ScaleOptions {
        ScaleOptions {
            min_unit_width_px: 30.0,
            max_units_width_px: 240.0,
        }
    }
}

/// A round unit value and the pixel width it would occupy on the map
#[derive(PartialEq, Clone, Debug)]
pub struct CandidateUnit {
    /// Unit length in meters, a power of ten times one of `POSSIBLE_DIVISIONS`
    pub meters: f64,
    /// Pixel width of one unit segment
    pub width_px: f64,
    /// Divisor the unit was generated from
    pub division: f64,
    /// Preference rank of the divisor (higher = more preferred)
    pub score: f64,
}

/// A unit repeated a small number of times, scored for the final ranking
#[derive(PartialEq, Clone, Debug)]
pub struct CandidateScale {
    pub unit: CandidateUnit,
    /// Number of repeated unit segments
    pub num_units: u8,
    /// Pixel width of the full bar
    pub total_width_px: f64,
    /// Combined divisor, segment count and width utilization rank
    pub score: f64,
}

/// Round units small enough to fit the map and wide enough to stay legible,
/// largest unit first.
///
/// Decreasing the unit size monotonically decreases its pixel width, so
/// generation stops at the first unit below `min_unit_width_px`. The result
/// is empty when even the largest candidate is too narrow.
pub fn possible_units(
    max_meters: f64,
    min_unit_width_px: f64,
    map_width_px: f64,
) -> Vec<CandidateUnit> {
    // number of decimal digits of the viewport span
    let mut exp: i32 = 1;
    while 10f64.powi(exp) <= max_meters.floor() {
        exp += 1;
    }

    let mut units = Vec::new();
    for i in (1..=exp).rev() {
        let unit_meters_pow = 10f64.powi(i);
        for (j, &division) in POSSIBLE_DIVISIONS.iter().enumerate() {
            let unit_meters = unit_meters_pow * division;
            let unit_px = map_width_px * (unit_meters / max_meters);
            if unit_px < min_unit_width_px {
                return units;
            }
            units.push(CandidateUnit {
                meters: unit_meters,
                width_px: unit_px,
                division,
                score: (POSSIBLE_DIVISIONS.len() - j) as f64,
            });
        }
    }
    units
}

/// All unit/count combinations within the total width budget, scored
pub fn possible_scales(units: &[CandidateUnit], max_units_width_px: f64) -> Vec<CandidateScale> {
    let mut scales = Vec::new();
    for (i, &num_units) in POSSIBLE_UNIT_COUNTS.iter().enumerate() {
        let num_units_score = (POSSIBLE_UNIT_COUNTS.len() - i) as f64 * 0.5;
        for unit in units {
            let total_width_px = unit.width_px * num_units as f64;
            if total_width_px < max_units_width_px {
                // reward combinations using more of the available width
                let total_width_score =
                    (1.0 - (max_units_width_px - total_width_px) / max_units_width_px) * 3.0;
                let mut score = unit.score + num_units_score + total_width_score;
                // penalty when the unit/count association looks weird
                if is_awkward_pairing(unit.division, num_units) {
                    score -= 2.0;
                }
                scales.push(CandidateScale {
                    unit: unit.clone(),
                    num_units,
                    total_width_px,
                    score,
                });
            }
        }
    }
    scales
}

// Empirically tuned exclusion list, not derived from the scoring formula
fn is_awkward_pairing(division: f64, num_units: u8) -> bool {
    (division == 0.25 && num_units == 3)
        || (division == 0.5 && num_units == 3)
        || (division == 0.25 && num_units == 5)
}

/// Highest-scoring scale for the given span, or `None` when no legible unit
/// exists or no combination fits the width budget.
pub fn best_scale(
    max_meters: f64,
    map_width_px: u32,
    options: &ScaleOptions,
) -> Option<CandidateScale> {
    let units = possible_units(max_meters, options.min_unit_width_px, map_width_px as f64);
    let mut scales = possible_scales(&units, options.max_units_width_px);
    // stable sort, the first candidate in enumeration order wins ties
    scales.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    scales.into_iter().next()
}
