//! Seed reverse-search over beta-era terrain heightmaps.
//!
//! Feed a list of candidate world seeds and a short signature of surface
//! altitudes; get back the seeds whose regenerated terrain matches it
//! bit for bit. The deterministic oracle lives in `beta-mapgen`; this crate
//! adds seed-file input, the parallel batch filter, and the CLI.

pub mod error;
pub mod filter;
pub mod seedfile;

pub use beta_mapgen as mapgen;

pub use error::{Error, Result};
pub use filter::{ScanRequest, SeedFilter, SeedMatch, DEFAULT_REJECT_BIOMES};
pub use seedfile::{load_seeds, parse_seeds};
