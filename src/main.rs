//! Chroma Life CLI - Run headless sessions from JSON configuration.

#[cfg(feature = "dhat-heap")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use chroma_life::{
    compute::GridStats,
    schema::{Placement, Seed, SessionConfig},
    session::Session,
};

fn main() {
    #[cfg(feature = "dhat-heap")]
    let _profiler = dhat::Profiler::new_heap();

    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <config.json> [steps]", args[0]);
        eprintln!();
        eprintln!("Run a Chroma Life session from JSON configuration.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  config.json  Path to session configuration file");
        eprintln!("  steps        Maximum number of generations (default: 500)");
        eprintln!();
        eprintln!("Placements are read from <config>.seed.json when present.");
        eprintln!("Example configuration is generated with --example flag.");
        std::process::exit(1);
    }

    if args[1] == "--example" {
        print_example_config();
        return;
    }

    let config_path = PathBuf::from(&args[1]);
    let steps: u64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(500);

    // Load configuration
    let config = SessionConfig::load(&config_path).unwrap_or_else(|e| {
        eprintln!("Error loading config: {}", e);
        std::process::exit(1);
    });

    // Load or create seed
    let seed_path = config_path.with_extension("seed.json");
    let seed: Seed = if seed_path.exists() {
        let seed_str = fs::read_to_string(&seed_path).unwrap_or_else(|e| {
            eprintln!("Error reading seed file: {}", e);
            std::process::exit(1);
        });
        serde_json::from_str(&seed_str).unwrap_or_else(|e| {
            eprintln!("Error parsing seed: {}", e);
            std::process::exit(1);
        })
    } else {
        Seed::default()
    };

    println!("Chroma Life Session");
    println!("===================");
    println!("Grid: {}x{}", config.cols, config.rows);
    println!("Patterns: {}", config.patterns.len());
    println!("Palette: {} colors", config.palette.len());
    println!("Stability window: {}", config.history_window);
    println!("Max steps: {}", steps);
    println!();

    // Initialize
    let mut session = Session::new(config).unwrap_or_else(|e| {
        eprintln!("Invalid configuration: {}", e);
        std::process::exit(1);
    });

    let placed = session.apply_seed(&seed).unwrap_or_else(|e| {
        eprintln!("Error applying seed: {}", e);
        std::process::exit(1);
    });
    for (placement, summary) in seed.placements.iter().zip(&placed) {
        let label = match placement {
            Placement::Pattern { name, .. } => name.as_str(),
            Placement::Custom { .. } => "custom",
        };
        println!("  Placed {:<24} {} ({} alive)", label, summary.color, summary.alive);
    }

    let initial_stats = GridStats::from_grid(session.grid());
    println!();
    println!("Initial state:");
    print_stats(&initial_stats);
    println!();

    // Run session
    println!("Running session...");
    let start = Instant::now();

    for i in 0..steps {
        let report = session.advance();

        // Print progress every 10%
        if (i + 1) % (steps / 10).max(1) == 0 {
            let elapsed = start.elapsed().as_secs_f32();
            let steps_per_sec = (i + 1) as f32 / elapsed;
            println!(
                "  Step {}/{}: alive={}, high={}, {:.1} steps/s",
                i + 1,
                steps,
                report.alive,
                session.high_score(),
                steps_per_sec
            );
        }

        if report.stable {
            println!("  Stable after {} generations", report.generation);
            break;
        }
    }

    let elapsed = start.elapsed();
    let final_stats = GridStats::from_grid(session.grid());

    println!();
    println!("Final state:");
    print_stats(&final_stats);
    println!();
    println!("Generations: {}", session.generation());
    println!("High score: {}", session.high_score());
    match session.stabilization_generation() {
        Some(generation) => println!("Stabilized at generation {}", generation),
        None => println!("Not stabilized"),
    }
    println!(
        "Time: {:.2}s ({:.1} steps/s)",
        elapsed.as_secs_f32(),
        session.generation() as f32 / elapsed.as_secs_f32()
    );
}

fn print_stats(stats: &GridStats) {
    println!("  Alive cells: {}", stats.alive_cells);
    println!("  Density: {:.4}", stats.density);
    println!("  Components: {}", stats.components);
    println!("  Distinct colors: {}", stats.distinct_colors);
}

fn print_example_config() {
    let mut config = SessionConfig::with_dimensions(64, 96);
    config.random_seed = Some(42);
    let seed = Seed {
        placements: vec![
            Placement::Pattern {
                name: "Glider".to_string(),
                at: Some((10, 10)),
                color: None,
            },
            Placement::Pattern {
                name: "Acorn".to_string(),
                at: None,
                color: None,
            },
            Placement::Custom {
                cells: vec![(70, 40), (71, 40), (72, 40), (72, 39)],
                color: None,
            },
        ],
    };

    println!("// config.json");
    println!(
        "{}",
        serde_json::to_string_pretty(&config).expect("config serializes")
    );
    println!();
    println!("// config.seed.json");
    println!(
        "{}",
        serde_json::to_string_pretty(&seed).expect("seed serializes")
    );
}
