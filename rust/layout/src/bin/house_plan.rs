// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! CLI tool: generate a house plan layout from house parameters
//!
//! Usage:
//!   house-plan [options]

use house_plan_layout::{
    find_preset, generate_house_plan, presets, HouseParameters, HouseStyle, LayoutConfig,
};
use std::env;
use std::fs;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Default)]
struct CliOptions {
    params: HouseParameters,
    json: bool,
    output: Option<String>,
    list_presets: bool,
    help: bool,
}

fn parse_args(args: &[String]) -> Result<CliOptions, String> {
    let mut options = CliOptions::default();

    let mut i = 0;
    while i < args.len() {
        let flag = args[i].as_str();
        let mut value = || {
            i += 1;
            args.get(i)
                .cloned()
                .ok_or_else(|| format!("Missing value for {}", flag))
        };
        match flag {
            "--preset" => {
                let name = value()?;
                options.params = find_preset(&name).map_err(|e| e.to_string())?.parameters;
            }
            "--area" => options.params.total_area = parse_number(flag, &value()?)?,
            "--bedrooms" => options.params.bedrooms = parse_number(flag, &value()?)?,
            "--bathrooms" => options.params.bathrooms = parse_number(flag, &value()?)?,
            "--floors" => options.params.floors = parse_number(flag, &value()?)?,
            "--style" => {
                options.params.style = value()?
                    .parse::<HouseStyle>()
                    .map_err(|e| e.to_string())?
            }
            "--garage" => options.params.has_garage = true,
            "--no-garage" => options.params.has_garage = false,
            "--garden" => options.params.has_garden = true,
            "--no-garden" => options.params.has_garden = false,
            "--json" => options.json = true,
            "--output" => options.output = Some(value()?),
            "--list-presets" => options.list_presets = true,
            "-h" | "--help" => options.help = true,
            other => return Err(format!("Unknown option: {}", other)),
        }
        i += 1;
    }

    Ok(options)
}

fn parse_number<T: std::str::FromStr>(flag: &str, raw: &str) -> Result<T, String> {
    raw.trim()
        .parse()
        .map_err(|_| format!("Invalid value for {}: {}", flag, raw))
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("Error: {}", message);
            print_usage();
            std::process::exit(1);
        }
    };

    if options.help {
        print_usage();
        return;
    }

    if options.list_presets {
        for preset in presets() {
            let p = &preset.parameters;
            println!(
                "{:<22} {:>5} sq ft  {} bed  {} bath  {}",
                preset.slug(),
                p.total_area,
                p.bedrooms,
                p.bathrooms,
                p.style.display_name()
            );
        }
        return;
    }

    let config = LayoutConfig::from_env();
    let plan = generate_house_plan(&options.params, &config).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    if options.json || options.output.is_some() {
        let json = plan.to_json().unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        });
        match &options.output {
            Some(path) => {
                if let Err(e) = fs::write(path, json) {
                    eprintln!("Error: Cannot write '{}': {}", path, e);
                    std::process::exit(1);
                }
                tracing::info!(path = %path, rooms = plan.rooms.len(), "wrote house plan");
            }
            None => println!("{}", json),
        }
        return;
    }

    println!("=== House Plan Details ===");
    for line in plan.summary_lines() {
        println!("  {}", line);
    }
    println!();
    println!(
        "Footprint: {:.1}' × {:.1}' (scale {:.4})",
        plan.footprint.width, plan.footprint.length, plan.footprint.scale
    );
    println!("Rooms:");
    for label in plan.labels() {
        println!("  {:<18} {:>14}  {:>12}", label.name, label.dimensions, label.area);
    }
}

fn print_usage() {
    println!(
        r#"House Plan Generator
====================

Generates a room layout from house parameters.

USAGE:
  house-plan [OPTIONS]

OPTIONS:
  --preset <name>       Start from a preset (see --list-presets)
  --area <sqft>         Total area in square feet (default: 1500, min 500)
  --bedrooms <n>        Bedrooms, 1-10 (default: 3)
  --bathrooms <n>       Bathrooms, 1-10 (default: 2)
  --floors <n>          Floors, 1-4 (default: 1)
  --style <style>       modern | traditional | contemporary | minimalist
  --garage/--no-garage  Include a garage (default: yes)
  --garden/--no-garden  Include a garden (default: yes)
  --json                Print the plan as JSON
  --output <path>       Write the plan as JSON to a file
  --list-presets        List available presets
  -h, --help            Show this help message

ENVIRONMENT:
  HOUSE_PLAN_REFERENCE_SIZE   Display size of the longer side (default: 20)
  HOUSE_PLAN_ASPECT_RATIO     Footprint width / length (default: 1.333)
  HOUSE_PLAN_WALL_HEIGHT      Unscaled wall height (default: 3)
  RUST_LOG                    Log filter (default: info)"#
    );
}
