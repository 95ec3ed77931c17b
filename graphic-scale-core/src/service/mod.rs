//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

pub mod control;
pub mod map;

pub use self::control::{ScaleBar, ScaleControl};
pub use self::map::{MapEvent, NullRenderer, ScaleRenderer, ViewportProvider};
