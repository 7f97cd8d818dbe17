//! 2D simplex noise for the climate fields.
//!
//! Skew/unskew constants and the twelve projected gradient directions match
//! the legacy generator. The octave driver is peculiar but contractual: the
//! input offsets are divided by 1.5 once, the per-octave frequency is scaled
//! by the caller's amplitude factor, and the per-sample contribution is
//! `70 * 0.55 / diminution` with the diminution halving each octave.

use crate::octaves::PermTable;

const F2: f64 = 0.3660254037844386;
const G2: f64 = 0.21132486540518713;

const GRAD2: [[f64; 2]; 12] = [
    [1.0, 1.0],
    [-1.0, 1.0],
    [1.0, -1.0],
    [-1.0, -1.0],
    [1.0, 0.0],
    [-1.0, 0.0],
    [1.0, 0.0],
    [-1.0, 0.0],
    [0.0, 1.0],
    [0.0, -1.0],
    [0.0, 1.0],
    [0.0, -1.0],
];

#[inline(always)]
fn skew_floor(coord: f64) -> i32 {
    let truncated = coord as i32;
    if coord < f64::from(truncated) {
        truncated - 1
    } else {
        truncated
    }
}

#[inline(always)]
fn corner(t: f64, gi: usize, x: f64, y: f64) -> f64 {
    if t < 0.0 {
        0.0
    } else {
        let t2 = t * t;
        t2 * t2 * (GRAD2[gi][0] * x + GRAD2[gi][1] * y)
    }
}

/// One octave, accumulated into `buffer` (x-major, z fast).
#[allow(clippy::too_many_arguments)]
fn accumulate(
    buffer: &mut [f64],
    x: f64,
    z: f64,
    size_x: usize,
    size_z: usize,
    offset_x: f64,
    offset_z: f64,
    octave_factor: f64,
    table: &PermTable,
) {
    let perm = &table.perm;
    let mut index = 0;
    for cell_x in 0..size_x {
        let xc = (x + cell_x as f64) * offset_x + table.xo;
        for cell_z in 0..size_z {
            let zc = (z + cell_z as f64) * offset_z + table.yo;

            // skew into simplex cell space
            let hairy = (xc + zc) * F2;
            let xs = skew_floor(xc + hairy);
            let zs = skew_floor(zc + hairy);
            let unskew = f64::from(xs + zs) * G2;
            let x0 = xc - (f64::from(xs) - unskew);
            let y0 = zc - (f64::from(zs) - unskew);

            // lower triangle walks x first, upper triangle z first
            let (step_x, step_z) = if x0 > y0 { (1, 0) } else { (0, 1) };

            let x1 = (x0 - step_x as f64) + G2;
            let y1 = (y0 - step_z as f64) + G2;
            let x2 = (x0 - 1.0) + 2.0 * G2;
            let y2 = (y0 - 1.0) + 2.0 * G2;

            let ii = (xs as u32 & 0xFF) as usize;
            let jj = (zs as u32 & 0xFF) as usize;
            let gi0 = (perm[(ii + perm[jj] as usize) & 0xFF] % 12) as usize;
            let gi1 =
                (perm[(ii + step_x + perm[(jj + step_z) & 0xFF] as usize) & 0xFF] % 12) as usize;
            let gi2 = (perm[(ii + 1 + perm[(jj + 1) & 0xFF] as usize) & 0xFF] % 12) as usize;

            let n0 = corner(0.5 - x0 * x0 - y0 * y0, gi0, x0, y0);
            let n1 = corner(0.5 - x1 * x1 - y1 * y1, gi1, x1, y1);
            let n2 = corner(0.5 - x2 * x2 - y2 * y2, gi2, x2, y2);

            buffer[index] += 70.0 * (n0 + n1 + n2) * octave_factor;
            index += 1;
        }
    }
}

/// Multi-octave simplex field with the legacy amplitude schedule.
#[allow(clippy::too_many_arguments)]
pub fn simplex_noise(
    buffer: &mut [f64],
    x: f64,
    z: f64,
    size_x: usize,
    size_z: usize,
    offset_x: f64,
    offset_z: f64,
    amp_factor: f64,
    octaves: &[PermTable],
) {
    let offset_x = offset_x / 1.5;
    let offset_z = offset_z / 1.5;
    buffer[..size_x * size_z].fill(0.0);
    let mut diminution = 1.0;
    let mut amplification = 1.0;
    for table in octaves {
        accumulate(
            buffer,
            x,
            z,
            size_x,
            size_z,
            offset_x * amplification,
            offset_z * amplification,
            0.55 / diminution,
            table,
        );
        amplification *= amp_factor;
        diminution *= 0.5;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::octaves::init_octaves;
    use crate::rng::WorldRng;

    #[test]
    fn deterministic_per_seed() {
        let mut rng = WorldRng::scrambled(1234);
        let octaves: [PermTable; 4] = init_octaves(&mut rng);
        let mut a = [0.0; 256];
        let mut b = [0.0; 256];
        simplex_noise(&mut a, 96.0, -48.0, 16, 16, 0.25, 0.25, 0.25, &octaves);
        simplex_noise(&mut b, 96.0, -48.0, 16, 16, 0.25, 0.25, 0.25, &octaves);
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_diverge() {
        let mut r1 = WorldRng::scrambled(1);
        let mut r2 = WorldRng::scrambled(2);
        let o1: [PermTable; 2] = init_octaves(&mut r1);
        let o2: [PermTable; 2] = init_octaves(&mut r2);
        let mut a = [0.0; 64];
        let mut b = [0.0; 64];
        simplex_noise(&mut a, 0.0, 0.0, 8, 8, 0.25, 0.25, 0.5, &o1);
        simplex_noise(&mut b, 0.0, 0.0, 8, 8, 0.25, 0.25, 0.5, &o2);
        assert_ne!(a, b);
    }

    #[test]
    fn buffer_is_zeroed_before_accumulation() {
        let mut rng = WorldRng::scrambled(55);
        let octaves: [PermTable; 2] = init_octaves(&mut rng);
        let mut once = [0.0; 64];
        simplex_noise(&mut once, 10.0, 20.0, 8, 8, 0.05, 0.05, 0.5, &octaves);
        let mut twice = once;
        simplex_noise(&mut twice, 10.0, 20.0, 8, 8, 0.05, 0.05, 0.5, &octaves);
        assert_eq!(once, twice);
    }
}
