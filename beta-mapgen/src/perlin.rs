//! Classic gradient-noise kernels.
//!
//! Three kernels share one gradient hash: a 2D kernel used for the flat
//! surface/depth fields, the general 3D kernel, and a specialization of the
//! 3D kernel that only evaluates the ten column corners the slice pipeline
//! reads. All three reproduce the legacy generator bit for bit, including
//! its two deliberate oddities:
//!
//! * gradient arms 0xD and 0xF return `-y + z` and `-y - z` (not the textbook
//!   values) — contract, not a bug to fix;
//! * the 3D kernel caches the eight corner gradients keyed on the wrapped y
//!   lattice coordinate alone, so corner products computed with one y
//!   fraction are reused while the walk stays inside the same y cell. Do not
//!   widen the cache key; the summed output depends on it.

use crate::octaves::PermTable;

#[inline(always)]
fn lerp(t: f64, a: f64, b: f64) -> f64 {
    a + t * (b - a)
}

#[inline(always)]
fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[inline(always)]
fn grad(hash: u8, x: f64, y: f64, z: f64) -> f64 {
    match hash & 0xF {
        0x0 => x + y,
        0x1 => -x + y,
        0x2 => x - y,
        0x3 => -x - y,
        0x4 => x + z,
        0x5 => -x + z,
        0x6 => x - z,
        0x7 => -x - z,
        0x8 => y + z,
        0x9 => -y + z,
        0xA => y - z,
        0xB => -y - z,
        0xC => y + x,
        0xD => -y + z,
        0xE => y - x,
        _ => -y - z,
    }
}

#[inline(always)]
fn grad2(hash: u8, x: f64, z: f64) -> f64 {
    grad(hash, x, 0.0, z)
}

/// Integer floor plus wrapped lattice coordinate and fractional remainder.
#[inline(always)]
fn lattice(coord: f64) -> (usize, f64) {
    let mut floor = coord as i32;
    if coord < f64::from(floor) {
        floor -= 1;
    }
    ((floor as u32 & 0xFF) as usize, coord - f64::from(floor))
}

/// One octave of the 2D kernel, accumulated into `buffer` (x-major, z fast).
fn accumulate_flat(
    buffer: &mut [f64],
    x: f64,
    z: f64,
    size_x: usize,
    size_z: usize,
    factor_x: f64,
    factor_z: f64,
    octave_size: f64,
    table: &PermTable,
) {
    let perm = &table.perm;
    let octave_width = 1.0 / octave_size;
    let mut index = 0;
    for cell_x in 0..size_x {
        let (xb, xf) = lattice((x + cell_x as f64) * factor_x + table.xo);
        let fade_x = fade(xf);
        for cell_z in 0..size_z {
            let (zb, zf) = lattice((z + cell_z as f64) * factor_z + table.zo);
            let fade_z = fade(zf);
            let hash = perm[perm[xb] as usize] as usize + zb;
            let hash_off = perm[perm[xb + 1] as usize] as usize + zb;
            let x1 = lerp(
                fade_x,
                grad2(perm[hash], xf, zf),
                grad2(perm[hash_off], xf - 1.0, zf),
            );
            let x2 = lerp(
                fade_x,
                grad2(perm[hash + 1], xf, zf - 1.0),
                grad2(perm[hash_off + 1], xf - 1.0, zf - 1.0),
            );
            buffer[index] += lerp(fade_z, x1, x2) * octave_width;
            index += 1;
        }
    }
}

/// One octave of the general 3D kernel (x-major, then z, y fastest).
#[allow(clippy::too_many_arguments)]
fn accumulate_cube(
    buffer: &mut [f64],
    x: f64,
    y: f64,
    z: f64,
    size_x: usize,
    size_y: usize,
    size_z: usize,
    factor_x: f64,
    factor_y: f64,
    factor_z: f64,
    octave_size: f64,
    table: &PermTable,
) {
    let perm = &table.perm;
    let octave_width = 1.0 / octave_size;
    let mut cached_cell: i32 = -1;
    let mut x1 = 0.0;
    let mut x2 = 0.0;
    let mut xx1 = 0.0;
    let mut xx2 = 0.0;
    let mut index = 0;
    for cell_x in 0..size_x {
        let (xb, xf) = lattice((x + cell_x as f64) * factor_x + table.xo);
        let fade_x = fade(xf);
        for cell_z in 0..size_z {
            let (zb, zf) = lattice((z + cell_z as f64) * factor_z + table.zo);
            let fade_z = fade(zf);
            for cell_y in 0..size_y {
                let (yb, yf) = lattice((y + cell_y as f64) * factor_y + table.yo);
                let fade_y = fade(yf);
                if cell_y == 0 || yb as i32 != cached_cell {
                    cached_cell = yb as i32;
                    let k2 = perm[perm[xb] as usize + yb] as usize + zb;
                    let l2 = perm[perm[xb] as usize + yb + 1] as usize + zb;
                    let k3 = perm[perm[xb + 1] as usize + yb] as usize + zb;
                    let l3 = perm[perm[xb + 1] as usize + yb + 1] as usize + zb;
                    x1 = lerp(
                        fade_x,
                        grad(perm[k2], xf, yf, zf),
                        grad(perm[k3], xf - 1.0, yf, zf),
                    );
                    x2 = lerp(
                        fade_x,
                        grad(perm[l2], xf, yf - 1.0, zf),
                        grad(perm[l3], xf - 1.0, yf - 1.0, zf),
                    );
                    xx1 = lerp(
                        fade_x,
                        grad(perm[k2 + 1], xf, yf, zf - 1.0),
                        grad(perm[k3 + 1], xf - 1.0, yf, zf - 1.0),
                    );
                    xx2 = lerp(
                        fade_x,
                        grad(perm[l2 + 1], xf, yf - 1.0, zf - 1.0),
                        grad(perm[l3 + 1], xf - 1.0, yf - 1.0, zf - 1.0),
                    );
                }
                let y1 = lerp(fade_y, x1, x2);
                let y2 = lerp(fade_y, xx1, xx2);
                buffer[index] += lerp(fade_z, y1, y2) * octave_width;
                index += 1;
            }
        }
    }
}

/// Column corners probed by the slice pipeline: the two z = 3, 4 cells of
/// every x row of the 5x5 grid.
const COLUMN_X: [usize; 10] = [0, 0, 1, 1, 2, 2, 3, 3, 4, 4];
const COLUMN_Z: [usize; 10] = [3, 4, 3, 4, 3, 4, 3, 4, 3, 4];

/// Vertical samples per probed column (cells 0..11 cover the probe band).
pub const COLUMN_SAMPLES: usize = 11;

/// One octave of the 3D kernel restricted to the ten probed columns,
/// emitting 110 contiguous samples. Produces values identical to
/// [`accumulate_cube`] at those coordinates, gradient cache included.
#[allow(clippy::too_many_arguments)]
fn accumulate_columns(
    buffer: &mut [f64],
    x: f64,
    y: f64,
    z: f64,
    factor_x: f64,
    factor_y: f64,
    factor_z: f64,
    octave_size: f64,
    table: &PermTable,
) {
    let perm = &table.perm;
    let octave_width = 1.0 / octave_size;
    let mut cached_cell: i32 = -1;
    let mut x1 = 0.0;
    let mut x2 = 0.0;
    let mut xx1 = 0.0;
    let mut xx2 = 0.0;
    let mut index = 0;
    for corner in 0..10 {
        let (xb, xf) = lattice((x + COLUMN_X[corner] as f64) * factor_x + table.xo);
        let fade_x = fade(xf);
        let (zb, zf) = lattice((z + COLUMN_Z[corner] as f64) * factor_z + table.zo);
        let fade_z = fade(zf);
        for cell_y in 0..COLUMN_SAMPLES {
            let (yb, yf) = lattice((y + cell_y as f64) * factor_y + table.yo);
            let fade_y = fade(yf);
            if cell_y == 0 || yb as i32 != cached_cell {
                cached_cell = yb as i32;
                let k2 = perm[perm[xb] as usize + yb] as usize + zb;
                let l2 = perm[perm[xb] as usize + yb + 1] as usize + zb;
                let k3 = perm[perm[xb + 1] as usize + yb] as usize + zb;
                let l3 = perm[perm[xb + 1] as usize + yb + 1] as usize + zb;
                x1 = lerp(
                    fade_x,
                    grad(perm[k2], xf, yf, zf),
                    grad(perm[k3], xf - 1.0, yf, zf),
                );
                x2 = lerp(
                    fade_x,
                    grad(perm[l2], xf, yf - 1.0, zf),
                    grad(perm[l3], xf - 1.0, yf - 1.0, zf),
                );
                xx1 = lerp(
                    fade_x,
                    grad(perm[k2 + 1], xf, yf, zf - 1.0),
                    grad(perm[k3 + 1], xf - 1.0, yf, zf - 1.0),
                );
                xx2 = lerp(
                    fade_x,
                    grad(perm[l2 + 1], xf, yf - 1.0, zf - 1.0),
                    grad(perm[l3 + 1], xf - 1.0, yf - 1.0, zf - 1.0),
                );
            }
            let y1 = lerp(fade_y, x1, x2);
            let y2 = lerp(fade_y, xx1, xx2);
            buffer[index] += lerp(fade_z, y1, y2) * octave_width;
            index += 1;
        }
    }
}

/// Multi-octave 2D noise: zero the buffer, then sum octaves with frequency
/// and amplitude halving per octave.
pub fn flat_noise(
    buffer: &mut [f64],
    x: f64,
    z: f64,
    size_x: usize,
    size_z: usize,
    factor_x: f64,
    factor_z: f64,
    octaves: &[PermTable],
) {
    buffer[..size_x * size_z].fill(0.0);
    let mut octave_factor = 1.0;
    for table in octaves {
        accumulate_flat(
            buffer,
            x,
            z,
            size_x,
            size_z,
            factor_x * octave_factor,
            factor_z * octave_factor,
            octave_factor,
            table,
        );
        octave_factor /= 2.0;
    }
}

/// Multi-octave 3D noise over a dense box.
#[allow(clippy::too_many_arguments)]
pub fn cube_noise(
    buffer: &mut [f64],
    x: f64,
    y: f64,
    z: f64,
    size_x: usize,
    size_y: usize,
    size_z: usize,
    factor_x: f64,
    factor_y: f64,
    factor_z: f64,
    octaves: &[PermTable],
) {
    buffer[..size_x * size_y * size_z].fill(0.0);
    let mut octave_factor = 1.0;
    for table in octaves {
        accumulate_cube(
            buffer,
            x,
            y,
            z,
            size_x,
            size_y,
            size_z,
            factor_x * octave_factor,
            factor_y * octave_factor,
            factor_z * octave_factor,
            octave_factor,
            table,
        );
        octave_factor /= 2.0;
    }
}

/// Multi-octave 3D noise over the ten probed columns (110 samples).
#[allow(clippy::too_many_arguments)]
pub fn column_noise(
    buffer: &mut [f64; 110],
    x: f64,
    z: f64,
    factor_x: f64,
    factor_y: f64,
    factor_z: f64,
    octaves: &[PermTable],
) {
    buffer.fill(0.0);
    let mut octave_factor = 1.0;
    for table in octaves {
        accumulate_columns(
            buffer,
            x,
            0.0,
            z,
            factor_x * octave_factor,
            factor_y * octave_factor,
            factor_z * octave_factor,
            octave_factor,
            table,
        );
        octave_factor /= 2.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::octaves::init_octaves;
    use crate::rng::WorldRng;

    #[test]
    fn flat_noise_known_values() {
        // scale octaves sit after 16 + 16 + 8 + 4 + 4 tables in the terrain
        // draw order; reproduce that position for the vector.
        let mut rng = WorldRng::scrambled(42);
        let _: [PermTable; 16] = init_octaves(&mut rng);
        let _: [PermTable; 16] = init_octaves(&mut rng);
        let _: [PermTable; 8] = init_octaves(&mut rng);
        let _: [PermTable; 4] = init_octaves(&mut rng);
        let _: [PermTable; 4] = init_octaves(&mut rng);
        let scale: [PermTable; 10] = init_octaves(&mut rng);

        let mut buffer = [0.0; 25];
        flat_noise(&mut buffer, 24.0, -12.0, 5, 5, 1.121, 1.121, &scale);
        assert_eq!(buffer[0], 79.81334696525803);
        assert_eq!(buffer[12], 74.02642545059989);
        assert_eq!(buffer[24], 71.79673106635563);
    }

    #[test]
    fn flat_noise_amplitude_bound() {
        // One octave is bounded by its largest corner product, |±a ± b| < 2,
        // and octave amplitudes double (octave o contributes with weight
        // 2^o), so after n octaves the sum stays within
        // (2 - 2^(1-n)) * 2^n = 2 * (2^n - 1).
        let mut rng = WorldRng::scrambled(31337);
        let octaves: [PermTable; 10] = init_octaves(&mut rng);
        let n = octaves.len() as i32;
        let bound = (2.0 - (2.0f64).powi(1 - n)) * (2.0f64).powi(n);
        let mut buffer = [0.0; 64];
        for chunk in -4..4 {
            flat_noise(&mut buffer, chunk as f64 * 8.0, 13.0, 8, 8, 0.7, 0.7, &octaves);
            for &v in &buffer {
                assert!(v.abs() <= bound, "sample {v} exceeds bound {bound}");
            }
        }
    }

    #[test]
    fn column_kernel_matches_cube_kernel() {
        let mut rng = WorldRng::scrambled(271828);
        let octaves: [PermTable; 8] = init_octaves(&mut rng);
        let freq = 684.412 / 80.0;

        let mut dense = vec![0.0; 5 * 17 * 5];
        cube_noise(
            &mut dense, 24.0, 0.0, -12.0, 5, 17, 5, freq, freq / 2.0, freq, &octaves,
        );
        let mut columns = [0.0; 110];
        column_noise(&mut columns, 24.0, -12.0, freq, freq / 2.0, freq, &octaves);

        for corner in 0..10 {
            let cell = (COLUMN_X[corner] * 5 + COLUMN_Z[corner]) * 17;
            for y in 0..COLUMN_SAMPLES {
                assert_eq!(columns[corner * 11 + y], dense[cell + y]);
            }
        }
    }

    #[test]
    fn gradient_quirk_arms() {
        // 0xD mirrors 0x9 and 0xF mirrors 0xB; the quirk is load-bearing.
        assert_eq!(grad(0xD, 1.0, 2.0, 3.0), grad(0x9, 7.0, 2.0, 3.0));
        assert_eq!(grad(0xF, 1.0, 2.0, 3.0), grad(0xB, 7.0, 2.0, 3.0));
    }
}
