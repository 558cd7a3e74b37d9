//! timing — batch demo for the reachmap pipeline.
//!
//! Samples 30 random agents over a 100×70 field, computes the full
//! time-to-intercept map on all available cores, prints wall-clock timing
//! and a winner summary, and writes the run to `./output/` as CSV.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use reach_core::{sample_population, GridConfig, SampleBounds, SimRng};
use reach_output::{write_run, CsvWriter};
use reach_pipeline::{Field, Pipeline, PipelineObserver};

// ── Constants ─────────────────────────────────────────────────────────────────

const WIDTH:        u32   = 100;
const HEIGHT:       u32   = 70;
const SCALE_FACTOR: u32   = 1;
const AGENT_COUNT:  usize = 30;
const SEED:         u64   = 42;
const OUTPUT_DIR:   &str  = "output";

// ── Progress printing ─────────────────────────────────────────────────────────

struct ProgressPrinter {
    /// Print every `every` collected columns.
    every: usize,
}

impl PipelineObserver for ProgressPrinter {
    fn on_start(&mut self, total: u32) {
        println!("dispatching {total} columns");
    }

    fn on_column(&mut self, _x: u32, completed: usize) {
        if completed % self.every == 0 {
            println!("  {completed} columns collected");
        }
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn winner_summary(field: &Field, agent_count: usize) -> Vec<(u32, usize)> {
    let mut cells_won = vec![0usize; agent_count];
    for (_, _, cell) in field.iter_cells() {
        if !cell.is_unset() {
            cells_won[cell.winner.index()] += 1;
        }
    }
    let mut ranked: Vec<(u32, usize)> = cells_won
        .into_iter()
        .enumerate()
        .map(|(id, won)| (id as u32, won))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}

fn main() -> Result<()> {
    let parallelism = std::thread::available_parallelism()?;
    println!("hardware parallelism: {parallelism}");

    let mut rng = SimRng::new(SEED);
    let agents = sample_population(AGENT_COUNT, &SampleBounds::default(), &mut rng);

    let config = GridConfig {
        width:        WIDTH,
        height:       HEIGHT,
        scale_factor: SCALE_FACTOR,
        workers:      None, // all cores
    };
    let pipeline = Pipeline::new(config)?;
    println!(
        "evaluating {} cells × {} agents on {} workers",
        pipeline.grid().total_cells(),
        agents.len(),
        pipeline.worker_count(),
    );

    let start = Instant::now();
    let field = pipeline.run(&agents, &mut ProgressPrinter { every: 25 })?;
    let elapsed = start.elapsed();
    println!(
        "computed {} cells in {:.1} ms",
        field.iter_cells().count(),
        elapsed.as_secs_f64() * 1_000.0,
    );

    // Top territory holders.
    let ranked = winner_summary(&field, agents.len());
    println!("top agents by cells won:");
    for (id, won) in ranked.iter().take(5) {
        println!("  agent {id}: {won} cells");
    }

    // Persist the run.
    std::fs::create_dir_all(OUTPUT_DIR)?;
    let mut writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    write_run(&mut writer, &agents, &field)?;
    println!("wrote {OUTPUT_DIR}/agents.csv and {OUTPUT_DIR}/cells.csv");

    Ok(())
}
