//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//!Host map collaborators

use crate::service::control::ScaleBar;
use scale_bar::Extent;

/// Notifications emitted by the host map
#[derive(PartialEq, Clone, Copy, Debug)]
pub enum MapEvent {
    /// Fired once when the map can first report valid geometry
    Ready,
    /// Fired on every incremental viewport movement
    Move,
    /// Fired when viewport movement settles
    MoveEnd,
}

/// Current viewport geometry, supplied by the host map
pub trait ViewportProvider {
    /// Geographic bounds of the visible map, in degrees
    fn bounds(&self) -> Extent;
    /// Pixel width of the map viewport
    fn width_px(&self) -> u32;
}

/// On-screen widget fed by the scale control
pub trait ScaleRenderer {
    fn render(&mut self, bar: &ScaleBar);
    /// Hide the widget, there is no scale to show
    fn clear(&mut self);
}

/// Renderer discarding all updates
pub struct NullRenderer;

impl ScaleRenderer for NullRenderer {
    fn render(&mut self, _bar: &ScaleBar) {}
    fn clear(&mut self) {}
}
