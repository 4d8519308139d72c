/// Pure Rust compositor benchmarks.
///
/// Uses std::time::Instant for timing, a deterministic LCG PRNG for data generation,
/// and std::hint::black_box to prevent dead-code elimination.
use std::hint::black_box;
use std::time::{Duration, Instant};

use fluxpark_core::grid::{Grid, LandUseGrid, Shape};
use fluxpark_core::{
    Compositor, CompositorConfig, FluxError, ForcingGrids, ProcessRegistry, SimulationState,
    StaticGrids,
};
use tracing::info;

const REPEATS: usize = 7;

/// Simple LCG PRNG for deterministic data generation.
fn lcg(seed: u64) -> impl FnMut() -> f64 {
    let mut state = seed;
    move || {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (state >> 33) as f64 / (1u64 << 31) as f64
    }
}

fn make_grid(shape: Shape, next_f64: &mut impl FnMut() -> f64, lo: f64, hi: f64) -> Grid {
    Grid::from_shape_simple_fn(shape, || lo + next_f64() * (hi - lo))
}

fn make_statics(shape: Shape, seed: u64) -> Result<StaticGrids, FluxError> {
    let mut next_f64 = lcg(seed);
    let landuse = LandUseGrid::from_shape_simple_fn(shape, || match (next_f64() * 20.0) as i32 {
        0 => 16,
        1 => 8,
        code => code,
    });
    let soilm_scp = make_grid(shape, &mut next_f64, 20.0, 60.0);
    let soilm_pwp = soilm_scp.mapv(|scp| scp + 40.0);
    StaticGrids::new(
        make_grid(shape, &mut next_f64, 0.0, 2.0),
        make_grid(shape, &mut next_f64, 0.0, 1.0),
        make_grid(shape, &mut next_f64, 1.0, 3.0),
        landuse,
        make_grid(shape, &mut next_f64, 0.5, 1.0),
        make_grid(shape, &mut next_f64, 0.8, 1.2),
        soilm_scp,
        soilm_pwp,
    )
}

fn make_forcing(shape: Shape, seed: u64) -> Result<ForcingGrids, FluxError> {
    let mut next_f64 = lcg(seed);
    ForcingGrids::new(
        make_grid(shape, &mut next_f64, 0.5, 5.0),
        make_grid(shape, &mut next_f64, 0.0, 10.0),
    )
}

/// Run a closure `REPEATS` times, return the median duration.
fn median_time<F: FnMut()>(mut f: F) -> Duration {
    let mut times: Vec<Duration> = (0..REPEATS)
        .map(|_| {
            let start = Instant::now();
            f();
            start.elapsed()
        })
        .collect();
    times.sort();
    times[REPEATS / 2]
}

fn bench_step(
    registry: &ProcessRegistry,
    sizes: &[usize],
) -> Result<Vec<(&'static str, usize, Duration)>, FluxError> {
    let mut results = Vec::new();

    for &n in sizes {
        let shape = (n, n);
        let statics = make_statics(shape, 42)?;
        let forcing = make_forcing(shape, 7)?;
        let state = SimulationState::zeros(shape);

        for (label, config) in [
            ("sequential", CompositorConfig::sequential()),
            ("parallel", CompositorConfig::default()),
        ] {
            let comp = Compositor::new(registry, config, statics.clone())?;
            info!(
                n,
                parallel = comp.config().parallel,
                models = ?comp.registry(),
                "timing step"
            );

            // Warmup
            black_box(comp.step(&state, &forcing)?);

            let dur = median_time(|| {
                black_box(comp.step(&state, &forcing).ok());
            });
            results.push((label, n, dur));
        }
    }
    Ok(results)
}

fn main() -> Result<(), FluxError> {
    tracing_subscriber::fmt().with_target(false).init();

    let registry = ProcessRegistry::default();

    println!("Pure Rust Compositor Benchmarks");
    println!("============================================================");
    println!("{:<18} {:>6}   {:>12}", "Mode", "N x N", "Median (ms)");
    println!("--------------------------------------------");

    let results = bench_step(&registry, &[100, 500, 1000])?;

    for (mode, n, dur) in &results {
        let ms = dur.as_secs_f64() * 1000.0;
        println!("{:<18} {:>6}      {:>8.2}", mode, n, ms);
    }

    println!("============================================================");
    Ok(())
}
