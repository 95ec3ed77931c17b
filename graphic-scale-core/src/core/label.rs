//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//!Display units and tick labels for the scale widget

/// Metric unit a bar is labelled in
#[derive(PartialEq, Clone, Copy, Debug)]
pub enum DisplayUnit {
    M,
    Km,
}

impl DisplayUnit {
    /// Unit used to label a bar with the given segment length
    pub fn for_meters(unit_meters: f64) -> DisplayUnit {
        if unit_meters < 1000.0 {
            DisplayUnit::M
        } else {
            DisplayUnit::Km
        }
    }
    pub fn abbrev(&self) -> &'static str {
        match *self {
            DisplayUnit::M => "m",
            DisplayUnit::Km => "km",
        }
    }
    /// Length in meters expressed in this unit
    pub fn scaled(&self, meters: f64) -> f64 {
        match *self {
            DisplayUnit::M => meters,
            DisplayUnit::Km => meters / 1000.0,
        }
    }
}

/// Labels along the bar: the zero label, bare intermediate tick values and
/// the last tick carrying the unit suffix.
pub fn tick_labels(unit_meters: f64, num_units: u8) -> Vec<String> {
    let unit = DisplayUnit::for_meters(unit_meters);
    let unit_length = unit.scaled(unit_meters);
    let mut labels = vec![format!("0{}", unit.abbrev())];
    for i in 1..=num_units {
        let value = unit_length * i as f64;
        if i == num_units {
            labels.push(format!("{}{}", value, unit.abbrev()));
        } else {
            labels.push(format!("{}", value));
        }
    }
    labels
}
