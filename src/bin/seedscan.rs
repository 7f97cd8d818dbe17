//! Seed scanner CLI.
//!
//! Run with: cargo run --bin seedscan -- scan --seed-file seeds.txt \
//!     --chunk-x 6 --chunk-z -3 --signature 77,78,77,75

use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use beta_seedscan::mapgen::{Biome, ClimateGrid, OracleConfig, TerrainOracle};
use beta_seedscan::{load_seeds, Error, ScanRequest, SeedFilter, SeedMatch};

#[derive(Parser)]
#[command(name = "seedscan")]
#[command(about = "Reverse-search beta-era world seeds by terrain height signature")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Filter a seed list against a height signature
    Scan {
        /// One decimal seed per line
        #[arg(long)]
        seed_file: PathBuf,

        #[arg(long, allow_hyphen_values = true)]
        chunk_x: i32,

        #[arg(long, allow_hyphen_values = true)]
        chunk_z: i32,

        /// Consecutive chunks along +x whose slices are concatenated
        #[arg(long, default_value_t = 1)]
        span_chunks_x: u8,

        /// Fixed column to test; every column is scanned when omitted
        #[arg(long)]
        start_x: Option<u8>,

        /// First signature row (the slice covers rows 12..16)
        #[arg(long, default_value_t = 12)]
        start_z: u8,

        /// Comma-separated altitudes, e.g. 77,78,77,75
        #[arg(long)]
        signature: String,

        /// Comma-separated biome names overriding the default rejection set
        #[arg(long)]
        reject_biomes: Option<String>,

        /// Bound of the per-column decoration draws (5 or 6)
        #[arg(long, default_value_t = 5)]
        decoration_bound: u16,

        /// Worker threads; rayon picks when omitted
        #[arg(long)]
        threads: Option<usize>,

        /// Emit matches as JSON lines instead of text
        #[arg(long)]
        json: bool,

        /// Report this x instead of the matched column's world x
        #[arg(long, allow_hyphen_values = true)]
        report_x: Option<i32>,

        /// Report this z instead of the window's world z
        #[arg(long, allow_hyphen_values = true)]
        report_z: Option<i32>,
    },
    /// Print the 16x4 height slice of one seed
    Heights {
        #[arg(long)]
        seed: u64,

        #[arg(long, allow_hyphen_values = true)]
        chunk_x: i32,

        #[arg(long, allow_hyphen_values = true)]
        chunk_z: i32,
    },
}

fn parse_signature(text: &str) -> Result<Vec<u8>, Error> {
    text.split(',')
        .map(|part| {
            let part = part.trim();
            part.parse::<u8>()
                .map_err(|_| Error::SignatureEntry(part.to_string()))
        })
        .collect()
}

fn parse_reject_biomes(text: &str) -> Result<Vec<Biome>, Error> {
    text.split(',')
        .filter(|part| !part.trim().is_empty())
        .map(|part| {
            part.trim()
                .parse::<Biome>()
                .map_err(|()| Error::UnknownBiome(part.trim().to_string()))
        })
        .collect()
}

fn run_scan(
    seed_file: PathBuf,
    request: ScanRequest,
    threads: Option<usize>,
    json: bool,
    report_x: Option<i32>,
    report_z: Option<i32>,
) -> Result<(), Box<dyn std::error::Error>> {
    let filter = SeedFilter::new(request)?;
    let seeds = load_seeds(&seed_file)?;
    println!("Running {} seeds", seeds.len());

    let start = Instant::now();
    let matches = match threads {
        Some(threads) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()?;
            pool.install(|| filter.run(&seeds))
        }
        None => filter.run(&seeds),
    };

    for found in &matches {
        let reported = SeedMatch {
            seed: found.seed,
            world_x: report_x.unwrap_or(found.world_x),
            world_z: report_z.unwrap_or(found.world_z),
        };
        if json {
            println!("{}", serde_json::to_string(&reported)?);
        } else {
            println!(
                "Found seed: {} at x: {} and z: {}",
                reported.seed, reported.world_x, reported.world_z
            );
        }
    }
    println!("{} s", start.elapsed().as_secs_f64());
    Ok(())
}

fn run_heights(seed: u64, chunk_x: i32, chunk_z: i32) {
    let mut oracle = TerrainOracle::new(OracleConfig::default());
    let mut climate = ClimateGrid::default();
    oracle.classify(seed, chunk_x, chunk_z, &mut climate);
    let heights = oracle.slice_heights(seed, chunk_x, chunk_z, &climate);
    for x in 0..16 {
        let row: Vec<String> = (0..4).map(|z| heights[x * 4 + z].to_string()).collect();
        println!("{}", row.join(" "));
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    match Cli::parse().command {
        Command::Scan {
            seed_file,
            chunk_x,
            chunk_z,
            span_chunks_x,
            start_x,
            start_z,
            signature,
            reject_biomes,
            decoration_bound,
            threads,
            json,
            report_x,
            report_z,
        } => {
            let mut request = ScanRequest::new(chunk_x, chunk_z, parse_signature(&signature)?);
            request.span_chunks_x = span_chunks_x;
            request.start_x = start_x;
            request.start_z = start_z;
            request.decoration_bound = decoration_bound;
            if let Some(text) = reject_biomes {
                request.reject_biomes = parse_reject_biomes(&text)?;
            }
            run_scan(seed_file, request, threads, json, report_x, report_z)?;
        }
        Command::Heights {
            seed,
            chunk_x,
            chunk_z,
        } => run_heights(seed, chunk_x, chunk_z),
    }
    Ok(())
}
