//! Per-octave permutation tables.
//!
//! Each octave owns three lattice offsets in `[0, 256)` and a 512-byte
//! permutation whose second half mirrors the first, so kernel lookups never
//! have to wrap explicitly. The shuffle consumes the PRNG in the legacy
//! order: three doubles for the offsets, then one bounded draw per slot.

use crate::rng::WorldRng;

/// One octave's offsets and doubled permutation table.
#[derive(Clone)]
pub struct PermTable {
    pub xo: f64,
    pub yo: f64,
    pub zo: f64,
    pub perm: [u8; 512],
}

impl PermTable {
    pub fn generate(rng: &mut WorldRng) -> Self {
        let mut table = Self {
            xo: 0.0,
            yo: 0.0,
            zo: 0.0,
            perm: [0; 512],
        };
        table.reseed(rng);
        table
    }

    /// Rebuild this table in place from the current PRNG position.
    pub fn reseed(&mut self, rng: &mut WorldRng) {
        self.xo = rng.next_double() * 256.0;
        self.yo = rng.next_double() * 256.0;
        self.zo = rng.next_double() * 256.0;
        for i in 0..256 {
            self.perm[i] = i as u8;
        }
        for i in 0..256 {
            // value swap; the legacy XOR swap needed an i != j guard
            let j = (rng.next_int(256 - i as u16) + i as i32) as usize;
            self.perm.swap(i, j);
            self.perm[i + 256] = self.perm[i];
        }
    }
}

/// Build `N` octaves in draw order.
pub fn init_octaves<const N: usize>(rng: &mut WorldRng) -> [PermTable; N] {
    core::array::from_fn(|_| PermTable::generate(rng))
}

/// Reseed an existing octave set in place.
pub fn reseed_octaves(octaves: &mut [PermTable], rng: &mut WorldRng) {
    for table in octaves {
        table.reseed(rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_offsets() {
        let mut rng = WorldRng::scrambled(42);
        let table = PermTable::generate(&mut rng);
        assert_eq!(table.xo, 186.25630208841423);
        assert_eq!(table.yo, 174.90520877052043);
        assert_eq!(table.zo, 79.0321805651609);
        assert_eq!(&table.perm[..8], &[70, 234, 61, 86, 42, 181, 32, 253]);
    }

    #[test]
    fn permutation_is_valid_for_every_octave() {
        let mut rng = WorldRng::scrambled(0xDEAD_BEEF);
        let octaves: [PermTable; 16] = init_octaves(&mut rng);
        for table in &octaves {
            assert!(table.xo >= 0.0 && table.xo < 256.0);
            assert!(table.yo >= 0.0 && table.yo < 256.0);
            assert!(table.zo >= 0.0 && table.zo < 256.0);
            let mut seen = [false; 256];
            for i in 0..256 {
                seen[table.perm[i] as usize] = true;
                assert_eq!(table.perm[i + 256], table.perm[i]);
            }
            assert!(seen.iter().all(|&s| s));
        }
    }

    #[test]
    fn reseed_is_equivalent_to_generate() {
        let mut a = WorldRng::scrambled(9001);
        let mut b = a;
        let fresh = PermTable::generate(&mut a);
        let mut reused = PermTable::generate(&mut WorldRng::scrambled(1));
        reused.reseed(&mut b);
        assert_eq!(fresh.xo, reused.xo);
        assert_eq!(fresh.perm, reused.perm);
        assert_eq!(a.state(), b.state());
    }
}
