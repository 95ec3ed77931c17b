//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

pub mod config;
pub mod label;

pub use self::config::{
    parse_config, read_config, ApplicationCfg, Config, ControlCfg, DEFAULT_CONFIG,
};
