//! Sway curve preview
//!
//! Steps a seeded scene on a fixed clock and prints the animated transforms
//! of the arrangement, the first flower and the first heart as CSV.
//!
//! Usage:
//!     sway_preview [FRAMES] [DT] [SEED]

use std::env;

use voxel_bouquet::core::logging;
use voxel_bouquet::core::time::SceneClock;
use voxel_bouquet::scene::{BouquetConfig, SceneManager};

fn parse_or<T: std::str::FromStr>(arg: Option<&String>, default: T, name: &str) -> T {
    match arg {
        Some(s) => match s.parse() {
            Ok(v) => v,
            Err(_) => {
                eprintln!("Invalid {}: {}", name, s);
                std::process::exit(1);
            }
        },
        None => default,
    }
}

fn main() {
    logging::init();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        eprintln!("Usage: sway_preview [FRAMES] [DT] [SEED]");
        eprintln!("    FRAMES  Number of frames (default: 120)");
        eprintln!("    DT      Seconds per frame (default: 0.1)");
        eprintln!("    SEED    Random seed (default: 7)");
        return;
    }

    let frames: u32 = parse_or(args.first(), 120, "frame count");
    let dt: f32 = parse_or(args.get(1), 0.1, "dt");
    let seed: u64 = parse_or(args.get(2), 7, "seed");

    let config = BouquetConfig {
        seed: Some(seed),
        ..Default::default()
    };
    let mut manager = SceneManager::new(config);
    let mut clock = SceneClock::manual();

    let scene = manager.scene();
    let arrangement = scene.arrangement_node();
    let flower = scene.flower_nodes().first().copied();
    let heart = scene.heart_nodes().first().copied();

    println!("t,arrangement_yaw,flower0_pitch,flower0_yaw,flower0_y,heart0_y");
    for _ in 0..frames {
        let t = clock.elapsed_secs();
        manager.tick(t);

        let scene = manager.scene();
        let arrangement_yaw = arrangement
            .and_then(|id| scene.transform(id))
            .map_or(0.0, |tr| tr.rotation.y);
        let (pitch, yaw, y) = flower
            .and_then(|id| scene.transform(id))
            .map_or((0.0, 0.0, 0.0), |tr| (tr.rotation.x, tr.rotation.y, tr.position.y));
        let heart_y = heart
            .and_then(|id| scene.transform(id))
            .map_or(0.0, |tr| tr.position.y);

        println!(
            "{:.3},{:.5},{:.5},{:.5},{:.5},{:.5}",
            t, arrangement_yaw, pitch, yaw, y, heart_y
        );
        clock.advance(dt);
    }

    log::info!("Previewed {} frames at dt={} (seed {})", frames, dt, manager.seed());
}
