//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::scale::{
    best_scale, possible_scales, possible_units, CandidateUnit, ScaleOptions,
};
use crate::span::{extent_span_meters, span_meters, Extent, EARTH_RADIUS};
use std::f64::consts;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_default_options() {
    let options = ScaleOptions::default();
    assert_eq!(options.min_unit_width_px, 30.0);
    assert_eq!(options.max_units_width_px, 240.0);
}

#[test]
fn test_possible_units() {
    // 100 km viewport on a 1000 px wide map
    let units = possible_units(100000.0, 30.0, 1000.0);
    assert_eq!(units.len(), 10);

    // largest unit first
    assert_eq!(units[0].meters, 1000000.0);
    assert_eq!(units[0].division, 1.0);
    assert_eq!(units[0].score, 4.0);
    assert!(close(units[0].width_px, 10000.0));

    // divisor preference rank repeats for every power of ten
    assert_eq!(units[1].meters, 500000.0);
    assert_eq!(units[1].score, 3.0);
    assert_eq!(units[3].meters, 200000.0);
    assert_eq!(units[3].score, 1.0);
    assert_eq!(units[4].meters, 100000.0);
    assert_eq!(units[4].score, 4.0);

    // generation stops at the first unit below the minimum width (2.5 km
    // would be 25 px), nothing smaller is emitted
    assert_eq!(units[9].meters, 5000.0);
    assert!(close(units[9].width_px, 50.0));
    assert!(units.iter().all(|u| u.width_px >= 30.0));
}

#[test]
fn test_possible_units_small_span() {
    let units = possible_units(500.0, 30.0, 800.0);
    assert_eq!(units.len(), 8);
    assert_eq!(units[0].meters, 1000.0);
    assert!(close(units[0].width_px, 1600.0));
    assert_eq!(units[7].meters, 20.0);
    assert!(close(units[7].width_px, 32.0));
}

#[test]
fn test_possible_units_empty() {
    // even the largest candidate unit is below the minimum width
    let units = possible_units(999999.0, 30.0, 10.0);
    assert!(units.is_empty());
}

#[test]
fn test_possible_scales() {
    let unit = CandidateUnit {
        meters: 100.0,
        width_px: 60.0,
        division: 1.0,
        score: 4.0,
    };
    let scales = possible_scales(&[unit], 240.0);

    // 5 segments (300 px) and 4 segments (exactly 240 px) exceed the budget
    assert_eq!(scales.len(), 2);
    assert_eq!(scales[0].num_units, 3);
    assert!(close(scales[0].total_width_px, 180.0));
    assert!(close(scales[0].score, 4.0 + 2.0 + 2.25));
    assert_eq!(scales[1].num_units, 2);
    assert!(close(scales[1].total_width_px, 120.0));
    assert!(close(scales[1].score, 4.0 + 1.0 + 1.5));
}

#[test]
fn test_awkward_pairing_penalty() {
    let quarter = CandidateUnit {
        meters: 25.0,
        width_px: 40.0,
        division: 0.25,
        score: 2.0,
    };
    let scales = possible_scales(&[quarter], 240.0);
    assert_eq!(scales.len(), 4);
    let score_of = |n: u8| scales.iter().find(|s| s.num_units == n).unwrap().score;
    // 3 and 5 quarter units read badly and lose exactly 2 points
    assert!(close(score_of(3), 2.0 + 2.0 + 1.5 - 2.0));
    assert!(close(score_of(5), 2.0 + 1.5 + 2.5 - 2.0));
    assert!(close(score_of(2), 2.0 + 1.0 + 1.0));
    assert!(close(score_of(4), 2.0 + 0.5 + 2.0));

    let half = CandidateUnit {
        meters: 50.0,
        width_px: 40.0,
        division: 0.5,
        score: 3.0,
    };
    let scales = possible_scales(&[half], 240.0);
    let score_of = |n: u8| scales.iter().find(|s| s.num_units == n).unwrap().score;
    assert!(close(score_of(3), 3.0 + 2.0 + 1.5 - 2.0));
    // 5 half units are a fine pairing
    assert!(close(score_of(5), 3.0 + 1.5 + 2.5));

    let full = CandidateUnit {
        meters: 100.0,
        width_px: 40.0,
        division: 1.0,
        score: 4.0,
    };
    let scales = possible_scales(&[full], 240.0);
    let score_of = |n: u8| scales.iter().find(|s| s.num_units == n).unwrap().score;
    assert!(close(score_of(3), 4.0 + 2.0 + 1.5));
    assert!(close(score_of(5), 4.0 + 1.5 + 2.5));
}

#[test]
fn test_preference_ordering() {
    // equal total width, count 3 ranks above count 4
    let a = CandidateUnit {
        meters: 100.0,
        width_px: 40.0,
        division: 1.0,
        score: 4.0,
    };
    let b = CandidateUnit {
        meters: 100.0,
        width_px: 30.0,
        division: 1.0,
        score: 4.0,
    };
    let scales = possible_scales(&[a, b], 240.0);
    let three = scales
        .iter()
        .find(|s| s.num_units == 3 && close(s.total_width_px, 120.0))
        .unwrap();
    let four = scales
        .iter()
        .find(|s| s.num_units == 4 && close(s.total_width_px, 120.0))
        .unwrap();
    assert!(three.score > four.score);

    // equal width and count, divisor 1 ranks above divisor 0.2
    let full = CandidateUnit {
        meters: 200.0,
        width_px: 40.0,
        division: 1.0,
        score: 4.0,
    };
    let fifth = CandidateUnit {
        meters: 200.0,
        width_px: 40.0,
        division: 0.2,
        score: 1.0,
    };
    let scales = possible_scales(&[full, fifth], 240.0);
    let two_full = scales
        .iter()
        .find(|s| s.num_units == 2 && s.unit.division == 1.0)
        .unwrap();
    let two_fifth = scales
        .iter()
        .find(|s| s.num_units == 2 && s.unit.division == 0.2)
        .unwrap();
    assert!(two_full.score > two_fifth.score);
}

#[test]
fn test_select_100km_viewport() {
    let scale = best_scale(100000.0, 1000, &ScaleOptions::default()).unwrap();
    assert_eq!(scale.unit.meters, 10000.0);
    assert_eq!(scale.num_units, 2);
    assert!(close(scale.total_width_px, 200.0));
    assert!(close(scale.score, 7.5));
}

#[test]
fn test_select_stays_in_meter_range() {
    let scale = best_scale(500.0, 800, &ScaleOptions::default()).unwrap();
    assert_eq!(scale.unit.meters, 50.0);
    assert_eq!(scale.num_units, 2);
    assert!(close(scale.total_width_px, 160.0));
    assert!(scale.unit.meters < 1000.0);
}

#[test]
fn test_select_none_when_unit_illegible() {
    let options = ScaleOptions {
        min_unit_width_px: 20000.0,
        max_units_width_px: 240.0,
    };
    assert_eq!(best_scale(100000.0, 1000, &options), None);
}

#[test]
fn test_select_none_when_budget_too_small() {
    // the narrowest legible unit is 50 px, so any bar is at least 100 px wide
    let options = ScaleOptions {
        min_unit_width_px: 30.0,
        max_units_width_px: 50.0,
    };
    assert_eq!(best_scale(100000.0, 1000, &options), None);
}

#[test]
fn test_select_is_deterministic() {
    let a = best_scale(34567.0, 777, &ScaleOptions::default());
    let b = best_scale(34567.0, 777, &ScaleOptions::default());
    assert!(a.is_some());
    assert_eq!(a, b);
}

#[test]
fn test_selection_invariants() {
    let options = ScaleOptions::default();
    let spans = [
        137.0, 999.0, 5300.0, 72000.0, 250000.0, 3600000.0, 40075017.0,
    ];
    for &max_meters in spans.iter() {
        for &width in [320u32, 800, 1024, 1920].iter() {
            if let Some(scale) = best_scale(max_meters, width, &options) {
                assert!(scale.total_width_px < options.max_units_width_px);
                assert!(scale.unit.width_px >= options.min_unit_width_px);
                assert!([2, 3, 4, 5].contains(&scale.num_units));
                assert!(close(
                    scale.total_width_px,
                    scale.unit.width_px * scale.num_units as f64
                ));
            }
        }
    }
}

#[test]
fn test_span_meters() {
    // the full world at the equator is the earth circumference
    let span = span_meters(0.0, -180.0, 180.0);
    assert!(close(span / (2.0 * consts::PI * EARTH_RADIUS), 1.0));

    // longitude convergence halves the span at 60 degrees north
    let equator = span_meters(0.0, 0.0, 1.0);
    let north = span_meters(60.0, 0.0, 1.0);
    assert!(close(north / equator, 0.5));
}

#[test]
fn test_extent_span() {
    let extent = Extent {
        minx: 0.0,
        miny: -0.5,
        maxx: 1.0,
        maxy: 0.5,
    };
    assert!(close(extent.center_lat(), 0.0));
    assert!(close(
        extent_span_meters(&extent),
        EARTH_RADIUS * consts::PI / 180.0
    ));
}
