//! Bouquet arrangement generator
//!
//! Composes one arrangement and writes it as JSON.
//!
//! Usage:
//!     bouquet [OPTIONS]
//!
//! Options:
//!     -s, --season <SEASON>   spring, summer, autumn or winter (default: spring)
//!     -c, --color <HEX>       Flower color, repeatable (default: season preset, or none)
//!     -n, --count <N>         Number of flowers (default: 15)
//!     --seed <SEED>           Random seed (default: from config, else OS entropy)
//!     --config <PATH>         Bouquet config JSON
//!     -t, --time <SECONDS>    Scene time to animate to before flattening (default: 0)
//!     --instances             Write flattened block instances instead of the arrangement
//!     -o, --output <PATH>     Output file (default: stdout)
//!     -h, --help              Show this help message

use std::env;
use std::path::PathBuf;
use std::time::Instant;

use voxel_bouquet::core::{logging, Result};
use voxel_bouquet::palette::{ArrangementParams, Season};
use voxel_bouquet::scene::{BouquetConfig, SceneManager};
use voxel_bouquet::voxel::Color;

fn print_help() {
    eprintln!("bouquet - Voxel flower arrangement generator");
    eprintln!();
    eprintln!("Usage: bouquet [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("    -s, --season <SEASON>   spring, summer, autumn or winter (default: spring)");
    eprintln!("    -c, --color <HEX>       Flower color, repeatable (default: season preset, or none)");
    eprintln!("    -n, --count <N>         Number of flowers (default: 15)");
    eprintln!("    --seed <SEED>           Random seed (default: from config, else OS entropy)");
    eprintln!("    --config <PATH>         Bouquet config JSON");
    eprintln!("    -t, --time <SECONDS>    Scene time to animate to before flattening (default: 0)");
    eprintln!("    --instances             Write flattened block instances instead of the arrangement");
    eprintln!("    -o, --output <PATH>     Output file (default: stdout)");
    eprintln!("    -h, --help              Show this help message");
    eprintln!();
    eprintln!("Example:");
    eprintln!("    bouquet -s autumn -n 10 -o autumn.json");
    eprintln!("    bouquet -c '#FF6B6B' -c '#9B59B6' --seed 42 --instances -t 2.5");
}

#[derive(Debug)]
struct Args {
    season: Option<Season>,
    colors: Vec<Color>,
    count: usize,
    seed: Option<u64>,
    config: Option<PathBuf>,
    time: f32,
    instances: bool,
    output: Option<PathBuf>,
}

fn next_value(args: &[String], i: &mut usize, name: &str) -> std::result::Result<String, String> {
    *i += 1;
    args.get(*i)
        .cloned()
        .ok_or_else(|| format!("Missing value for {}", name))
}

fn parse_args() -> std::result::Result<Args, String> {
    let args: Vec<String> = env::args().skip(1).collect();

    let mut season: Option<Season> = None;
    let mut colors: Vec<Color> = Vec::new();
    let mut count: usize = 15;
    let mut seed: Option<u64> = None;
    let mut config: Option<PathBuf> = None;
    let mut time: f32 = 0.0;
    let mut instances = false;
    let mut output: Option<PathBuf> = None;

    let mut i = 0;
    while i < args.len() {
        let flag = args[i].clone();
        match flag.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-s" | "--season" => {
                let v = next_value(&args, &mut i, "--season")?;
                season = Some(v.parse::<Season>().map_err(|e| format!("{}", e))?);
            }
            "-c" | "--color" => {
                let v = next_value(&args, &mut i, "--color")?;
                colors.push(Color::from_hex(&v).map_err(|e| format!("{}", e))?);
            }
            "-n" | "--count" => {
                let v = next_value(&args, &mut i, "--count")?;
                count = v.parse().map_err(|_| format!("Invalid count: {}", v))?;
            }
            "--seed" => {
                let v = next_value(&args, &mut i, "--seed")?;
                seed = Some(v.parse().map_err(|_| format!("Invalid seed: {}", v))?);
            }
            "--config" => {
                config = Some(PathBuf::from(next_value(&args, &mut i, "--config")?));
            }
            "-t" | "--time" => {
                let v = next_value(&args, &mut i, "--time")?;
                time = v.parse().map_err(|_| format!("Invalid time: {}", v))?;
            }
            "--instances" => {
                instances = true;
            }
            "-o" | "--output" => {
                output = Some(PathBuf::from(next_value(&args, &mut i, "--output")?));
            }
            other => {
                return Err(format!("Unknown option: {}", other));
            }
        }
        i += 1;
    }

    Ok(Args {
        season,
        colors,
        count,
        seed,
        config,
        time,
        instances,
        output,
    })
}

fn run(args: Args) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => BouquetConfig::load(path)?,
        None => BouquetConfig::default(),
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    let mut params = ArrangementParams::default();
    if let Some(season) = args.season {
        params.select_season(season);
    }
    if !args.colors.is_empty() {
        params.selected_colors = args.colors.clone();
    }
    params.set_flower_count(args.count);

    let start = Instant::now();
    let mut manager = SceneManager::with_params(config, params);

    let json = if args.instances {
        manager.tick(args.time);
        let instances = manager.instances();
        log::info!("Flattened {} block instances at t={}", instances.len(), args.time);
        serde_json::to_string_pretty(&instances)?
    } else {
        serde_json::to_string_pretty(manager.state())?
    };

    log::info!(
        "Generated in {:.2}ms (seed {})",
        start.elapsed().as_secs_f64() * 1000.0,
        manager.seed()
    );

    match &args.output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, json)?;
            log::info!("Wrote {}", path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}

fn main() {
    logging::init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            print_help();
            std::process::exit(1);
        }
    };

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
