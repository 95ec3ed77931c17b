//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//!Scale bar control service

use crate::core::config::{Config, ControlCfg};
use crate::core::label::tick_labels;
use crate::service::map::{MapEvent, ScaleRenderer, ViewportProvider};
use scale_bar::{best_scale, extent_span_meters, CandidateScale, Extent, ScaleOptions};

/// Immutable render model handed to the widget
#[derive(PartialEq, Clone, Debug, Serialize)]
pub struct ScaleBar {
    /// Length of one unit segment in meters
    pub unit_meters: f64,
    /// Pixel width of one unit segment
    pub unit_width_px: f64,
    /// Number of repeated unit segments
    pub num_units: u8,
    /// Pixel width of the full bar
    pub total_width_px: f64,
    /// Tick labels, zero label first, unit suffix on the last
    pub labels: Vec<String>,
}

impl ScaleBar {
    fn from_scale(scale: &CandidateScale) -> ScaleBar {
        ScaleBar {
            unit_meters: scale.unit.meters,
            unit_width_px: scale.unit.width_px,
            num_units: scale.num_units,
            total_width_px: scale.total_width_px,
            labels: tick_labels(scale.unit.meters, scale.num_units),
        }
    }
}

/// Scale bar control
///
/// Recomputes the displayed scale from scratch on every host notification.
/// The widget owns all view state and is only ever handed a fresh `ScaleBar`
/// or told to clear.
#[derive(Clone, Debug)]
pub struct ScaleControl {
    pub options: ScaleOptions,
    pub update_when_idle: bool,
}

impl ScaleControl {
    /// True for notifications this control recomputes on
    pub fn update_on(&self, event: MapEvent) -> bool {
        match event {
            MapEvent::Ready => true,
            MapEvent::Move => !self.update_when_idle,
            MapEvent::MoveEnd => self.update_when_idle,
        }
    }
    /// Scale bar for a viewport span already expressed in meters
    pub fn scale_bar_for_span(&self, max_meters: f64, map_width_px: u32) -> Option<ScaleBar> {
        let scale = best_scale(max_meters, map_width_px, &self.options);
        debug!(
            "span {:.0} m in {} px -> {:?}",
            max_meters, map_width_px, scale
        );
        scale.map(|s| ScaleBar::from_scale(&s))
    }
    /// Scale bar for the given viewport, or `None` when no legible unit fits
    /// the width budget
    pub fn scale_bar(&self, bounds: &Extent, map_width_px: u32) -> Option<ScaleBar> {
        let max_meters = extent_span_meters(bounds);
        self.scale_bar_for_span(max_meters, map_width_px)
    }
    /// Recompute and update the widget. A zero-width viewport is skipped,
    /// an infeasible scale clears the widget.
    pub fn refresh<M, R>(&self, map: &M, renderer: &mut R)
    where
        M: ViewportProvider,
        R: ScaleRenderer,
    {
        let width = map.width_px();
        if width == 0 {
            return;
        }
        match self.scale_bar(&map.bounds(), width) {
            Some(bar) => renderer.render(&bar),
            None => renderer.clear(),
        }
    }
    pub fn handle_event<M, R>(&self, event: MapEvent, map: &M, renderer: &mut R)
    where
        M: ViewportProvider,
        R: ScaleRenderer,
    {
        if self.update_on(event) {
            self.refresh(map, renderer);
        }
    }
}

impl<'a> Config<'a, ControlCfg> for ScaleControl {
    fn from_config(cfg: &ControlCfg) -> Result<Self, String> {
        if cfg.min_unit_width <= 0.0 || cfg.max_units_width <= 0.0 {
            return Err("Control widths must be positive".to_string());
        }
        Ok(ScaleControl {
            options: ScaleOptions {
                min_unit_width_px: cfg.min_unit_width,
                max_units_width_px: cfg.max_units_width,
            },
            update_when_idle: cfg.update_when_idle,
        })
    }
    fn gen_config() -> String {
        let toml = r#"
[control]
# Minimum pixel width of one unit segment
min_unit_width = 30.0
# Maximum total pixel width of the scale bar
max_units_width = 240.0
# Recompute when movement settles instead of on every move
update_when_idle = false
"#;
        toml.to_string()
    }
    fn gen_runtime_config(&self) -> String {
        format!(
            r#"
[control]
min_unit_width = {}
max_units_width = {}
update_when_idle = {}
"#,
            self.options.min_unit_width_px, self.options.max_units_width_px, self.update_when_idle
        )
    }
}
