//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

#[macro_use]
extern crate clap;
#[macro_use]
extern crate log;

use clap::{App, AppSettings, ArgMatches, SubCommand};
use dotenv::dotenv;
use env_logger::Builder;
use graphic_scale_core::core::{parse_config, read_config, ApplicationCfg, Config, DEFAULT_CONFIG};
use graphic_scale_core::service::{ScaleBar, ScaleControl};
use log::Record;
use scale_bar::Extent;
use std::env;
use std::io::Write;
use std::process;
use time;

fn init_logger(args: &ArgMatches<'_>) {
    let mut builder = Builder::new();
    builder.format(|buf, record: &Record<'_>| {
        let t = time::now();
        writeln!(
            buf,
            "{}.{:03} {} {}",
            time::strftime("%Y-%m-%d %H:%M:%S", &t).unwrap(),
            t.tm_nsec / 1000_000,
            record.level(),
            record.args()
        )
    });

    let rust_log_env = env::var("RUST_LOG");
    let rust_log = if args.value_of("loglevel").is_none() && rust_log_env.is_ok() {
        rust_log_env.as_ref().unwrap()
    } else {
        args.value_of("loglevel").unwrap_or("info")
    };
    builder.parse_filters(rust_log);

    builder.init();
}

fn config_from_args(args: &ArgMatches<'_>) -> ApplicationCfg {
    if let Some(cfgpath) = args.value_of("config") {
        info!("Reading configuration from '{}'", cfgpath);
        for argname in vec!["min-unit-width", "max-units-width"] {
            if args.value_of(argname).is_some() {
                warn!("Ignoring argument `{}`", argname);
            }
        }
        read_config(cfgpath).unwrap_or_else(|err| {
            println!("Error reading configuration - {} ", err);
            process::exit(1)
        })
    } else {
        let mut config: ApplicationCfg = parse_config(DEFAULT_CONFIG.to_string(), "").unwrap();
        if let Some(width) = args.value_of("min-unit-width") {
            config.control.min_unit_width = width
                .parse()
                .expect("Error parsing 'min-unit-width' as float value");
        }
        if let Some(width) = args.value_of("max-units-width") {
            config.control.max_units_width = width
                .parse()
                .expect("Error parsing 'max-units-width' as float value");
        }
        config
    }
}

fn control_from_args(args: &ArgMatches<'_>) -> ScaleControl {
    let config = config_from_args(args);
    ScaleControl::from_config(&config.control).unwrap_or_else(|err| {
        println!("Error reading configuration - {} ", err);
        process::exit(1)
    })
}

fn print_bar(bar: &ScaleBar) {
    println!(
        "{} x {} m, unit {:.1} px, total {:.1} px",
        bar.num_units, bar.unit_meters, bar.unit_width_px, bar.total_width_px
    );
    println!("ticks: {}", bar.labels.join(" "));
}

fn select(args: &ArgMatches<'_>) {
    let control = control_from_args(args);
    let bounds = args
        .value_of("bounds")
        .map(|numlist| {
            let arr: Vec<f64> = numlist
                .split(",")
                .map(|v| {
                    v.parse()
                        .expect("Error parsing 'bounds' as list of float values")
                })
                .collect();
            Extent {
                minx: arr[0],
                miny: arr[1],
                maxx: arr[2],
                maxy: arr[3],
            }
        })
        .expect("Missing 'bounds' list");
    let width = args
        .value_of("width")
        .expect("Missing 'width'")
        .parse::<u32>()
        .expect("Error parsing 'width' as integer value");
    let json = args.value_of("json").map_or(false, |s| {
        s.parse::<bool>()
            .expect("Error parsing 'json' as boolean value")
    });

    match control.scale_bar(&bounds, width) {
        Some(bar) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&bar).unwrap());
            } else {
                print_bar(&bar);
            }
        }
        None => println!("No scale fits the current viewport"),
    }
}

fn sweep(args: &ArgMatches<'_>) {
    let control = control_from_args(args);
    let lat: f64 = args.value_of("lat").map_or(0.0, |s| {
        s.parse().expect("Error parsing 'lat' as float value")
    });
    let width = args
        .value_of("width")
        .unwrap_or("1000")
        .parse::<u32>()
        .expect("Error parsing 'width' as integer value");
    let minzoom = args.value_of("minzoom").map_or(0, |s| {
        s.parse::<u8>()
            .expect("Error parsing 'minzoom' as integer value")
    });
    let maxzoom = args.value_of("maxzoom").map_or(22, |s| {
        s.parse::<u8>()
            .expect("Error parsing 'maxzoom' as integer value")
    });

    // Web Mercator pixel width at zoom 0, for a 256x256 tile
    const PIXEL_WIDTH_Z0: f64 = 156543.0339280410;
    for zoom in minzoom..=maxzoom {
        let resolution = PIXEL_WIDTH_Z0 * lat.to_radians().cos() / (zoom as f64).exp2();
        let max_meters = resolution * width as f64;
        match control.scale_bar_for_span(max_meters, width) {
            Some(bar) => println!(
                "z{:<2} {:>14.1} m  {} x {} m ({:.1} px)",
                zoom, max_meters, bar.num_units, bar.unit_meters, bar.total_width_px
            ),
            None => println!("z{:<2} {:>14.1} m  -", zoom, max_meters),
        }
    }
}

fn main() {
    dotenv().ok();
    let mut app = App::new("graphic_scale")
        .version(crate_version!())
        .author("Pirmin Kalberer <pka@sourcepole.ch>")
        .about("map scale bar selection for metric distance rulers")
        .subcommand(
            SubCommand::with_name("select")
                .setting(AppSettings::AllowLeadingHyphen)
                .args_from_usage(
                    "--bounds=<minx,miny,maxx,maxy> 'Geographic bounds of the viewport in degrees'
                         --width=<PIXELS> 'Pixel width of the viewport'
                         --loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'
                         --min-unit-width=[PIXELS] 'Minimum pixel width of one unit segment'
                         --max-units-width=[PIXELS] 'Maximum total pixel width of the scale bar'
                         --json=[true|false] 'Print the scale bar as JSON'
                         -c, --config=[FILE] 'Load from custom config file'",
                )
                .about("Select the best scale bar for a viewport"),
        )
        .subcommand(
            SubCommand::with_name("sweep")
                .setting(AppSettings::AllowLeadingHyphen)
                .args_from_usage(
                    "--lat=[DEGREES] 'Latitude of the viewport center (Default: 0)'
                         --width=[PIXELS] 'Pixel width of the viewport (Default: 1000)'
                         --minzoom=[LEVEL] 'Minimum zoom level'
                         --maxzoom=[LEVEL] 'Maximum zoom level'
                         --loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'
                         --min-unit-width=[PIXELS] 'Minimum pixel width of one unit segment'
                         --max-units-width=[PIXELS] 'Maximum total pixel width of the scale bar'
                         -c, --config=[FILE] 'Load from custom config file'",
                )
                .about("Print the selected scale for each Web Mercator zoom level"),
        )
        .subcommand(
            SubCommand::with_name("genconfig")
                .args_from_usage(
                    "--loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'
                         --min-unit-width=[PIXELS] 'Minimum pixel width of one unit segment'
                         --max-units-width=[PIXELS] 'Maximum total pixel width of the scale bar'",
                )
                .about("Generate configuration template"),
        );

    match app.get_matches_from_safe_borrow(env::args()) {
        //app.get_matches() prohibits later call of app.print_help()
        Result::Err(e) => {
            println!("{}", e);
        }
        Result::Ok(matches) => match matches.subcommand() {
            ("select", Some(sub_m)) => {
                init_logger(sub_m);
                select(sub_m);
            }
            ("sweep", Some(sub_m)) => {
                init_logger(sub_m);
                sweep(sub_m);
            }
            ("genconfig", Some(sub_m)) => {
                init_logger(sub_m);
                println!("{}", control_from_args(sub_m).gen_runtime_config());
            }
            _ => {
                let _ = app.print_help();
                println!("");
            }
        },
    }
}
