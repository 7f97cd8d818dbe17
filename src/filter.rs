//! The batch seed filter.
//!
//! For every candidate seed: classify the probed chunk's biomes, bail if any
//! cell lands in the rejection set, compute the four-row height slice, and
//! compare the signature window against it. Seeds are independent, so the
//! batch fans out over a rayon pool; each worker owns one oracle and one
//! climate grid and reuses them for its whole share of the list.

use std::ops::Range;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info};

use beta_mapgen::{Biome, ClimateGrid, OracleConfig, TerrainOracle, CHUNK_SIZE};

use crate::error::{Error, Result};

/// Biomes whose presence anywhere in a probed chunk disqualifies the seed.
/// Matches the legacy hunt: temperate forest terrain only.
pub const DEFAULT_REJECT_BIOMES: [Biome; 7] = [
    Biome::Rainforest,
    Biome::Swampland,
    Biome::Savanna,
    Biome::Taiga,
    Biome::Desert,
    Biome::IceDesert,
    Biome::Tundra,
];

/// What to look for and where.
#[derive(Debug, Clone)]
pub struct ScanRequest {
    /// Anchor chunk.
    pub chunk_x: i32,
    pub chunk_z: i32,
    /// Consecutive chunks along +x whose slices are concatenated before the
    /// column scan. 1 probes the anchor chunk alone.
    pub span_chunks_x: u8,
    /// Column to test, relative to the concatenated window; `None` scans
    /// every column.
    pub start_x: Option<u8>,
    /// First row of the signature window; the slice covers rows 12..16.
    pub start_z: u8,
    /// Expected surface altitudes along +z from `start_z`.
    pub signature: Vec<u8>,
    pub reject_biomes: Vec<Biome>,
    /// Bound of the per-column decoration draws (5 or 6).
    pub decoration_bound: u16,
}

impl ScanRequest {
    pub fn new(chunk_x: i32, chunk_z: i32, signature: Vec<u8>) -> Self {
        Self {
            chunk_x,
            chunk_z,
            span_chunks_x: 1,
            start_x: None,
            start_z: 12,
            signature,
            reject_biomes: DEFAULT_REJECT_BIOMES.to_vec(),
            decoration_bound: 5,
        }
    }

    pub fn validate(&self) -> Result<()> {
        let len = self.signature.len();
        if len == 0 || len > 16 {
            return Err(Error::SignatureLength { len });
        }
        for &altitude in &self.signature {
            if altitude > 128 {
                return Err(Error::SignatureAltitude {
                    value: u32::from(altitude),
                });
            }
        }
        let window_end = self.start_z as usize + len;
        if self.start_z < 12 || window_end > 16 {
            return Err(Error::SignatureWindow {
                start: self.start_z,
                end: window_end,
            });
        }
        if self.span_chunks_x == 0 || self.span_chunks_x > 8 {
            return Err(Error::SpanChunks(self.span_chunks_x));
        }
        let width = self.span_chunks_x as usize * CHUNK_SIZE;
        if let Some(x) = self.start_x {
            if x as usize >= width {
                return Err(Error::StartColumn { x, width });
            }
        }
        if !matches!(self.decoration_bound, 5 | 6) {
            return Err(Error::DecorationBound(self.decoration_bound));
        }
        Ok(())
    }

    fn columns(&self) -> Range<usize> {
        match self.start_x {
            Some(x) => x as usize..x as usize + 1,
            None => 0..self.span_chunks_x as usize * CHUNK_SIZE,
        }
    }
}

/// One emitted match. `world_x` is the column where the signature aligned;
/// `world_z` is the window's first row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeedMatch {
    pub seed: u64,
    pub world_x: i32,
    pub world_z: i32,
}

/// Validated filter, ready to run over seed lists.
pub struct SeedFilter {
    request: ScanRequest,
    cancel: Arc<AtomicBool>,
}

impl SeedFilter {
    pub fn new(request: ScanRequest) -> Result<Self> {
        request.validate()?;
        Ok(Self {
            request,
            cancel: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Flag checked between seeds; set it to stop the batch early.
    pub fn cancel_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.cancel)
    }

    /// Scan the whole list. Matches come back in no particular order.
    pub fn run(&self, seeds: &[u64]) -> Vec<SeedMatch> {
        info!(seeds = seeds.len(), "starting seed scan");
        let scanned = AtomicUsize::new(0);
        let matches: Vec<SeedMatch> = seeds
            .par_iter()
            .map_init(
                || {
                    (
                        TerrainOracle::new(OracleConfig {
                            decoration_bound: self.request.decoration_bound,
                        }),
                        ClimateGrid::default(),
                    )
                },
                |(oracle, climate), &seed| {
                    if self.cancel.load(Ordering::Relaxed) {
                        return Vec::new();
                    }
                    let found = self.scan_seed(oracle, climate, seed);
                    let done = scanned.fetch_add(1, Ordering::Relaxed) + 1;
                    if done % 1000 == 0 {
                        debug!(done, "scan progress");
                    }
                    found
                },
            )
            .flatten()
            .collect();
        info!(matches = matches.len(), "scan complete");
        matches
    }

    /// Scan one seed with caller-provided scratch.
    pub fn scan_seed(
        &self,
        oracle: &mut TerrainOracle,
        climate: &mut ClimateGrid,
        seed: u64,
    ) -> Vec<SeedMatch> {
        let request = &self.request;
        let span = request.span_chunks_x as usize;
        let mut slices: Vec<[u8; CHUNK_SIZE * 4]> = Vec::with_capacity(span);
        for step in 0..span {
            let chunk_x = request.chunk_x + step as i32;
            oracle.classify(seed, chunk_x, request.chunk_z, climate);
            if climate
                .biomes
                .iter()
                .any(|biome| request.reject_biomes.contains(biome))
            {
                return Vec::new();
            }
            slices.push(oracle.slice_heights(seed, chunk_x, request.chunk_z, climate));
        }

        let row = (request.start_z - 12) as usize;
        let mut found = Vec::new();
        for column in request.columns() {
            let slice = &slices[column / CHUNK_SIZE];
            let x = column % CHUNK_SIZE;
            let hit = request
                .signature
                .iter()
                .enumerate()
                .all(|(j, &expected)| slice[x * 4 + row + j] == expected);
            if hit {
                found.push(SeedMatch {
                    seed,
                    world_x: request.chunk_x * 16 + column as i32,
                    world_z: request.chunk_z * 16 + i32::from(request.start_z),
                });
            }
        }
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REFERENCE_SEEDS: [u64; 5] = [
        90389547180974,
        171351315692858,
        189587791856572,
        66697851806768,
        162899168234811,
    ];

    fn reference_request() -> ScanRequest {
        ScanRequest::new(6, -3, vec![77, 78, 77, 75])
    }

    #[test]
    fn reference_seeds_all_match() {
        let filter = SeedFilter::new(reference_request()).unwrap();
        let mut seeds = REFERENCE_SEEDS.to_vec();
        seeds.extend([12345u64, 999_999, 3]);
        let mut matches = filter.run(&seeds);
        matches.sort_by_key(|m| m.seed);
        let mut expected: Vec<SeedMatch> = REFERENCE_SEEDS
            .iter()
            .map(|&seed| SeedMatch {
                seed,
                world_x: 99,
                world_z: -36,
            })
            .collect();
        expected.sort_by_key(|m| m.seed);
        assert_eq!(matches, expected);
    }

    #[test]
    fn fixed_column_scan_only_tests_that_column() {
        let mut request = reference_request();
        request.start_x = Some(3);
        let filter = SeedFilter::new(request).unwrap();
        let matches = filter.run(&[REFERENCE_SEEDS[0]]);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].world_x, 99);

        let mut request = reference_request();
        request.start_x = Some(2);
        let filter = SeedFilter::new(request).unwrap();
        assert!(filter.run(&[REFERENCE_SEEDS[0]]).is_empty());
    }

    #[test]
    fn biome_rejection_skips_seeds() {
        // seed 12345 trips the default rejection set at the anchor chunk; an
        // emptied rejection set lets it through to the height comparison
        let mut request = reference_request();
        request.signature = vec![0, 0, 0, 0];
        request.reject_biomes = Vec::new();
        let open_filter = SeedFilter::new(request).unwrap();
        let default_filter = SeedFilter::new(reference_request()).unwrap();

        let mut oracle = TerrainOracle::new(OracleConfig::default());
        let mut climate = ClimateGrid::default();
        assert!(default_filter
            .scan_seed(&mut oracle, &mut climate, 12345)
            .is_empty());
        // with rejection disabled the seed is actually evaluated; whether it
        // matches depends only on the heights
        let _ = open_filter.scan_seed(&mut oracle, &mut climate, 12345);
    }

    #[test]
    fn cancellation_stops_remaining_seeds() {
        let filter = SeedFilter::new(reference_request()).unwrap();
        filter.cancel_flag().store(true, Ordering::Relaxed);
        assert!(filter.run(&REFERENCE_SEEDS.to_vec()).is_empty());
    }

    #[test]
    fn span_two_chunks_concatenates_columns() {
        // scanning the anchor chunk plus its +x neighbor widens the window
        // to 32 columns; the reference seed still only aligns at column 3
        let mut request = reference_request();
        request.span_chunks_x = 2;
        let filter = SeedFilter::new(request).unwrap();
        let matches = filter.run(&[REFERENCE_SEEDS[0]]);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].world_x, 99);

        // a fixed column in the neighbor chunk is addressable and misses
        let mut request = reference_request();
        request.span_chunks_x = 2;
        request.start_x = Some(19);
        let filter = SeedFilter::new(request).unwrap();
        assert!(filter.run(&[REFERENCE_SEEDS[0]]).is_empty());
    }

    #[test]
    fn validation_catches_bad_requests() {
        let mut request = reference_request();
        request.signature = Vec::new();
        assert!(matches!(
            request.validate(),
            Err(crate::error::Error::SignatureLength { len: 0 })
        ));

        let mut request = reference_request();
        request.signature = vec![200];
        assert!(matches!(
            request.validate(),
            Err(crate::error::Error::SignatureAltitude { .. })
        ));

        let mut request = reference_request();
        request.start_z = 14;
        assert!(matches!(
            request.validate(),
            Err(crate::error::Error::SignatureWindow { .. })
        ));

        let mut request = reference_request();
        request.start_x = Some(16);
        assert!(matches!(
            request.validate(),
            Err(crate::error::Error::StartColumn { .. })
        ));

        let mut request = reference_request();
        request.decoration_bound = 7;
        assert!(matches!(
            request.validate(),
            Err(crate::error::Error::DecorationBound(7))
        ));
    }
}
