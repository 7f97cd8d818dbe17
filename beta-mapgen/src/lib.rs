//! Bit-exact reimplementation of the legacy beta-era terrain generator,
//! reduced to what a seed reverse-search needs.
//!
//! Architecture:
//! 1. `rng` - the 48-bit LCG whose draw order is the backbone of everything
//! 2. `octaves` - per-octave offsets and permutation tables
//! 3. `perlin` / `simplex` - the gradient-noise kernels
//! 4. `biome` - climate fields and the 64x64 classifier table
//! 5. `chunk` - voxel layout and the block palette
//! 6. `terrain` - the oracle: column builder, densifier, surface pass
//!
//! Every output is a pure function of `(world_seed, chunk_x, chunk_z)`; the
//! only process-wide data are the read-only classifier and gradient tables.

mod biome_table;

pub mod biome;
pub mod chunk;
pub mod octaves;
pub mod perlin;
pub mod rng;
pub mod simplex;
pub mod terrain;

pub use biome::{biome_lookup, Biome, ClimateGrid, ClimateNoises};
pub use chunk::{GeneratedChunk, BLOCKS_PER_CHUNK, CHUNK_HEIGHT, CHUNK_SIZE, SEA_LEVEL};
pub use octaves::PermTable;
pub use rng::WorldRng;
pub use terrain::{OracleConfig, TerrainNoises, TerrainOracle};
