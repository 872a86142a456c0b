use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};
use std::{path::PathBuf, time::Instant};

use lanetrace::{
    expect,
    math::{point3, Point3, Ray},
    BuildSettings, Geometry, MaterialId, Scene, SceneBuilder, Shape, Sphere,
};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
struct BenchSettings {
    /// Spheres per grid axis.
    grid_size: usize,
    ray_count: usize,
    seed: u64,
    build: BuildSettings,
}

impl Default for BenchSettings {
    fn default() -> Self {
        Self {
            grid_size: 16,
            ray_count: 200_000,
            seed: 1,
            build: BuildSettings::default(),
        }
    }
}

fn setup_logger() -> Result<(), fern::InitError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}][{}:{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.level(),
                record.target(),
                record.line().unwrap_or(0),
                message
            ))
        })
        // .level(log::LevelFilter::Debug)
        .level(log::LevelFilter::Info)
        .chain(std::io::stdout())
        .chain(std::fs::File::create("bench.log")?)
        .apply()?;
    Ok(())
}

fn load_settings() -> BenchSettings {
    match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => {
            let yaml = expect!(std::fs::read_to_string(&path), "Failed to read bench settings");
            expect!(serde_yaml::from_str(&yaml), "Failed to parse bench settings")
        }
        None => BenchSettings::default(),
    }
}

fn sphere_grid(settings: &BenchSettings, rng: &mut Pcg32) -> Scene<f32> {
    let mut builder = SceneBuilder::new();
    let n = settings.grid_size;
    for i in 0..n * n * n {
        let cell = point3((i % n) as f32, ((i / n) % n) as f32, (i / (n * n)) as f32);
        let jitter = point3(
            rng.gen_range(-0.2..0.2),
            rng.gen_range(-0.2..0.2),
            rng.gen_range(-0.2..0.2),
        );
        builder.add_sphere(
            Sphere::new(cell + jitter, rng.gen_range(0.1..0.4)),
            MaterialId((i % 7) as u32),
        );
    }
    expect!(builder.build(&settings.build), "Failed to build scene")
}

fn random_rays(settings: &BenchSettings, rng: &mut Pcg32) -> Vec<Ray<f32>> {
    let extent = settings.grid_size as f32;
    (0..settings.ray_count)
        .map(|_| {
            let o = point3(
                rng.gen_range(-extent..0.0),
                rng.gen_range(-extent..2.0 * extent),
                rng.gen_range(-extent..2.0 * extent),
            );
            let target: Point3<f32> = point3(
                rng.gen_range(0.0..extent),
                rng.gen_range(0.0..extent),
                rng.gen_range(0.0..extent),
            );
            Ray::new(o, target - o)
        })
        .collect()
}

fn report(name: &str, rays: usize, elapsed_ns: u128, hits: usize) {
    let elapsed_ms = (elapsed_ns as f64) * 1e-6;
    let ns_per_ray = (elapsed_ns as f64) / (rays as f64);
    println!(
        "{:<8} took {:8.1} ms total, {:8.1} ns per ray, {} hits",
        name, elapsed_ms, ns_per_ray, hits
    );
}

// Every primitive on its own through the scalar kernels
fn bench_scalar(scene: &Scene<f32>, rays: &[Ray<f32>]) -> Vec<f32> {
    let start = Instant::now();
    let distances = rays
        .iter()
        .map(|ray| {
            scene
                .primitives
                .iter()
                .map(|(_, p)| p.shape.intersect_entrance(ray))
                .fold(f32::INFINITY, f32::min)
        })
        .collect::<Vec<_>>();
    let hits = distances.iter().filter(|d| d.is_finite()).count();
    report("Scalar", rays.len(), start.elapsed().as_nanos(), hits);
    distances
}

fn bench_lanes(scene: &Scene<f32>, rays: &[Ray<f32>]) -> Vec<f32> {
    let start = Instant::now();
    let distances = rays
        .iter()
        .map(|ray| scene.intersect(ray).distance)
        .collect::<Vec<_>>();
    let hits = distances.iter().filter(|d| d.is_finite()).count();
    report("Lanes", rays.len(), start.elapsed().as_nanos(), hits);
    distances
}

fn main() {
    if let Err(why) = setup_logger() {
        panic!("{}", why);
    };

    let settings = load_settings();
    log::info!("Bench settings {:?}", settings);

    let mut rng = Pcg32::seed_from_u64(settings.seed);
    let scene = sphere_grid(&settings, &mut rng);
    let rays = random_rays(&settings, &mut rng);

    if let Geometry::Collection(root) = &scene.root {
        log::info!(
            "{} primitives in {} root nodes",
            scene.primitives.len(),
            root.len()
        );
    }

    let scalar = bench_scalar(&scene, &rays);
    let lanes = bench_lanes(&scene, &rays);

    let mismatches = scalar
        .iter()
        .zip(&lanes)
        .filter(|(s, l)| s != l && (*s - *l).abs() > 1e-4)
        .count();
    if mismatches > 0 {
        log::warn!("{} rays differ between scalar and lane paths", mismatches);
    }
}
