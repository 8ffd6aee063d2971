//! Perft benchmark for profiling with cargo-flamegraph.
//!
//! Usage:
//!   cargo flamegraph --example perft_bench -p checkers_core -- [depth] [layout] [side]
//!
//! Examples:
//!   # Default: depth 8 over the benchmark suite
//!   cargo flamegraph --example perft_bench -p checkers_core
//!
//!   # Custom depth and position, White to move
//!   cargo flamegraph --example perft_bench -p checkers_core -- 9 "W7/8/8/8/3w4/8/6b1/B7" w

use checkers_core::{perft, Board, Color};
use std::env;
use std::time::Instant;

/// Positions covering the opening, a tactical middlegame and a king ending
const TEST_POSITIONS: &[(&str, &str, Color)] = &[
    (
        "Starting position",
        ".w.w.w.w/w.w.w.w./.w.w.w.w/8/8/b.b.b.b./.b.b.b.b/b.b.b.b.",
        Color::Black,
    ),
    (
        "Open centre",
        ".w.w.w.w/w.w...w./.w.w.w.w/4w3/3b4/b.b...b./.b.b.b.b/b.b.b.b.",
        Color::Black,
    ),
    ("Kings ending", "W7/8/8/8/3w4/8/6b1/B7", Color::White),
];

fn main() {
    let args: Vec<String> = env::args().collect();

    let depth: u8 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(8);

    // If a layout is provided, use single position mode
    if let Some(layout) = args.get(2) {
        let side = match args.get(3).map(String::as_str) {
            Some("w") => Color::White,
            _ => Color::Black,
        };
        run_single_position(layout, side, depth);
    } else {
        run_all_positions(depth);
    }
}

fn nodes_per_second(nodes: u64, secs: f64) -> f64 {
    if secs > 0.0 {
        nodes as f64 / secs
    } else {
        0.0
    }
}

fn run_single_position(layout: &str, side: Color, depth: u8) {
    let board = match Board::from_layout(layout) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("{e}");
            return;
        }
    };

    println!("{board}");
    println!("Side to move: {side}");
    println!("Depth: {depth}");
    println!();

    // Warm-up run at lower depth
    if depth > 2 {
        let _ = perft(&board, side, depth - 2);
    }

    let start = Instant::now();
    let nodes = perft(&board, side, depth);
    let elapsed = start.elapsed();

    println!("Nodes: {nodes}");
    println!("Time: {elapsed:.3?}");
    println!("NPS: {:.0}", nodes_per_second(nodes, elapsed.as_secs_f64()));
}

fn run_all_positions(depth: u8) {
    println!("=== Perft Benchmark Suite ===");
    println!("Depth: {depth}");
    println!();

    let mut total_nodes = 0u64;
    let mut total_time = std::time::Duration::ZERO;

    for (name, layout, side) in TEST_POSITIONS {
        let Ok(board) = Board::from_layout(layout) else {
            eprintln!("{name}: bad layout");
            continue;
        };

        print!("{name:.<30}");

        let start = Instant::now();
        let nodes = perft(&board, *side, depth);
        let elapsed = start.elapsed();

        total_nodes += nodes;
        total_time += elapsed;

        let nps = nodes_per_second(nodes, elapsed.as_secs_f64());
        println!(" {nodes:>12} nodes in {elapsed:>8.3?} ({nps:>10.0} nps)");
    }

    println!();
    println!("{:=<70}", "");
    let total_nps = nodes_per_second(total_nodes, total_time.as_secs_f64());
    println!("TOTAL: {total_nodes} nodes in {total_time:.3?} ({total_nps:.0} nps)");
}
