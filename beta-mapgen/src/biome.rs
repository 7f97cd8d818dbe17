//! Climate noise and the biome classifier.
//!
//! Three simplex fields (temperature, humidity, precipitation) are blended
//! and sharpened, then a 64x64 table maps the (t, h) pair to a biome. The
//! temperature/humidity grids survive classification because the column
//! builder feeds them back in as its aridity term.

use std::fmt;
use std::str::FromStr;

use crate::biome_table::BIOME_TABLE;
use crate::octaves::{init_octaves, reseed_octaves, PermTable};
use crate::rng::WorldRng;
use crate::simplex::simplex_noise;

pub const BIOME_GRID: usize = 16 * 16;

const TEMPERATURE_SEED_FACTOR: u64 = 9871;
const HUMIDITY_SEED_FACTOR: u64 = 39811;
const PRECIPITATION_SEED_FACTOR: u64 = 543321;

// The climate field offsets are the legacy single-precision constants
// widened to doubles; writing 0.025/0.05 would shift every lattice lookup.
const TEMPERATURE_OFFSET: f64 = 0.02500000037252903;
const HUMIDITY_OFFSET: f64 = 0.05000000074505806;
const PRECIPITATION_OFFSET: f64 = 0.25;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Biome {
    Rainforest,
    Swampland,
    SeasonalForest,
    Forest,
    Savanna,
    Shrubland,
    Taiga,
    Desert,
    Plains,
    IceDesert,
    Tundra,
}

impl Biome {
    pub fn name(self) -> &'static str {
        match self {
            Biome::Rainforest => "Rainforest",
            Biome::Swampland => "Swampland",
            Biome::SeasonalForest => "Seasonal Forest",
            Biome::Forest => "Forest",
            Biome::Savanna => "Savanna",
            Biome::Shrubland => "Shrubland",
            Biome::Taiga => "Taiga",
            Biome::Desert => "Desert",
            Biome::Plains => "Plains",
            Biome::IceDesert => "IceDesert",
            Biome::Tundra => "Tundra",
        }
    }
}

impl fmt::Display for Biome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Biome {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Rainforest" => Ok(Biome::Rainforest),
            "Swampland" => Ok(Biome::Swampland),
            "Seasonal_forest" | "SeasonalForest" | "Seasonal Forest" => Ok(Biome::SeasonalForest),
            "Forest" => Ok(Biome::Forest),
            "Savanna" => Ok(Biome::Savanna),
            "Shrubland" => Ok(Biome::Shrubland),
            "Taiga" => Ok(Biome::Taiga),
            "Desert" => Ok(Biome::Desert),
            "Plains" => Ok(Biome::Plains),
            "IceDesert" => Ok(Biome::IceDesert),
            "Tundra" => Ok(Biome::Tundra),
            _ => Err(()),
        }
    }
}

/// Table lookup for an already-blended (t, h) pair, both clamped to [0, 1].
#[inline]
pub fn biome_lookup(temperature: f64, humidity: f64) -> Biome {
    BIOME_TABLE[(temperature * 63.0) as usize + (humidity * 63.0) as usize * 64]
}

/// The three climate octave sets for one world seed.
pub struct ClimateNoises {
    temperature: [PermTable; 4],
    humidity: [PermTable; 4],
    precipitation: [PermTable; 2],
}

impl ClimateNoises {
    pub fn new(world_seed: u64) -> Self {
        let mut temperature_rng =
            WorldRng::scrambled(world_seed.wrapping_mul(TEMPERATURE_SEED_FACTOR));
        let mut humidity_rng = WorldRng::scrambled(world_seed.wrapping_mul(HUMIDITY_SEED_FACTOR));
        let mut precipitation_rng =
            WorldRng::scrambled(world_seed.wrapping_mul(PRECIPITATION_SEED_FACTOR));
        Self {
            temperature: init_octaves(&mut temperature_rng),
            humidity: init_octaves(&mut humidity_rng),
            precipitation: init_octaves(&mut precipitation_rng),
        }
    }

    pub fn reseed(&mut self, world_seed: u64) {
        let mut rng = WorldRng::scrambled(world_seed.wrapping_mul(TEMPERATURE_SEED_FACTOR));
        reseed_octaves(&mut self.temperature, &mut rng);
        let mut rng = WorldRng::scrambled(world_seed.wrapping_mul(HUMIDITY_SEED_FACTOR));
        reseed_octaves(&mut self.humidity, &mut rng);
        let mut rng = WorldRng::scrambled(world_seed.wrapping_mul(PRECIPITATION_SEED_FACTOR));
        reseed_octaves(&mut self.precipitation, &mut rng);
    }

    /// Classify a 16x16 region anchored at `(chunk_x * 16, chunk_z * 16)`.
    pub fn classify_into(&self, grid: &mut ClimateGrid, chunk_x: i32, chunk_z: i32) {
        let x = f64::from(chunk_x) * 16.0;
        let z = f64::from(chunk_z) * 16.0;
        simplex_noise(
            &mut grid.temperature,
            x,
            z,
            16,
            16,
            TEMPERATURE_OFFSET,
            TEMPERATURE_OFFSET,
            0.25,
            &self.temperature,
        );
        simplex_noise(
            &mut grid.humidity,
            x,
            z,
            16,
            16,
            HUMIDITY_OFFSET,
            HUMIDITY_OFFSET,
            1.0 / 3.0,
            &self.humidity,
        );
        simplex_noise(
            &mut grid.precipitation,
            x,
            z,
            16,
            16,
            PRECIPITATION_OFFSET,
            PRECIPITATION_OFFSET,
            0.58823529411764708,
            &self.precipitation,
        );
        for i in 0..BIOME_GRID {
            let precipitation = grid.precipitation[i] * 1.1 + 0.5;
            let mut temperature =
                (grid.temperature[i] * 0.15 + 0.7) * (1.0 - 0.01) + precipitation * 0.01;
            temperature = 1.0 - (1.0 - temperature) * (1.0 - temperature);
            temperature = temperature.clamp(0.0, 1.0);
            let mut humidity = (grid.humidity[i] * 0.15 + 0.5) * (1.0 - 0.002) + precipitation * 0.002;
            humidity = humidity.clamp(0.0, 1.0);
            grid.temperature[i] = temperature;
            grid.humidity[i] = humidity;
            grid.biomes[i] = biome_lookup(temperature, humidity);
        }
    }
}

/// Per-chunk climate product: blended temperature/humidity plus the biome of
/// every cell, indexed `x * 16 + z`.
pub struct ClimateGrid {
    pub temperature: [f64; BIOME_GRID],
    pub humidity: [f64; BIOME_GRID],
    pub biomes: [Biome; BIOME_GRID],
    precipitation: [f64; BIOME_GRID],
}

impl Default for ClimateGrid {
    fn default() -> Self {
        Self {
            temperature: [0.0; BIOME_GRID],
            humidity: [0.0; BIOME_GRID],
            biomes: [Biome::Plains; BIOME_GRID],
            precipitation: [0.0; BIOME_GRID],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_climate_cells() {
        let noises = ClimateNoises::new(90389547180974);
        let mut grid = ClimateGrid::default();
        noises.classify_into(&mut grid, 6, -3);
        assert_eq!(grid.temperature[0], 0.9132026163119358);
        assert_eq!(grid.humidity[0], 0.3886201145922978);
        assert_eq!(grid.temperature[137], 0.8840983030930865);
        assert_eq!(grid.humidity[137], 0.45174236301101617);
        assert_eq!(grid.biomes[0], Biome::Shrubland);
        assert_eq!(grid.biomes[255], Biome::Forest);
        let forests = grid.biomes.iter().filter(|&&b| b == Biome::Forest).count();
        let shrub = grid.biomes.iter().filter(|&&b| b == Biome::Shrubland).count();
        assert_eq!((forests, shrub), (181, 75));
    }

    #[test]
    fn climate_values_are_clamped() {
        let noises = ClimateNoises::new(0xABCDEF);
        let mut grid = ClimateGrid::default();
        for chunk in -3..3 {
            noises.classify_into(&mut grid, chunk, -chunk * 7);
            for i in 0..BIOME_GRID {
                assert!((0.0..=1.0).contains(&grid.temperature[i]));
                assert!((0.0..=1.0).contains(&grid.humidity[i]));
            }
        }
    }

    #[test]
    fn table_corners() {
        assert_eq!(biome_lookup(0.0, 0.0), Biome::Tundra);
        assert_eq!(biome_lookup(1.0, 1.0), Biome::Rainforest);
    }

    #[test]
    fn reseed_matches_fresh_noises() {
        let fresh = ClimateNoises::new(777);
        let mut reused = ClimateNoises::new(1);
        reused.reseed(777);
        let mut a = ClimateGrid::default();
        let mut b = ClimateGrid::default();
        fresh.classify_into(&mut a, 2, 2);
        reused.classify_into(&mut b, 2, 2);
        assert_eq!(a.temperature, b.temperature);
        assert_eq!(a.biomes, b.biomes);
    }

    #[test]
    fn biome_names_round_trip() {
        for biome in [
            Biome::Rainforest,
            Biome::SeasonalForest,
            Biome::IceDesert,
            Biome::Tundra,
        ] {
            assert_eq!(biome.name().parse::<Biome>(), Ok(biome));
        }
        assert!("Mushroom".parse::<Biome>().is_err());
    }
}
