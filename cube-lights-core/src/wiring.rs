//! How a layer of voxels maps onto the TLC5940 chain.
//!
//! Every column of the cube is one TLC5940 output. The refresh driver powers one layer at a time and shifts that
//! layer's grayscale into the chain before latching it.
use crate::cube::Cube;
use crate::dimmer::dim;
use crate::errors::{CubeError, CubeResult};

/// outputs on each TLC5940
pub const TLC5940_CHANNELS: usize = 16;

/// bytes of grayscale data for one TLC5940. 16 channels of 12 bits
pub const TLC5940_GRAYSCALE_BYTES: usize = TLC5940_CHANNELS * 12 / 8;

/// chips needed to drive every column of an `x` by `y` layer
pub const fn tlc5940_count(x: usize, y: usize) -> usize {
    (x * y).div_ceil(TLC5940_CHANNELS)
}

/// row-major. x changes fastest
pub fn channel(x: usize, y: usize, width: usize) -> usize {
    y * width + x
}

pub fn column(n: usize, width: usize) -> (usize, usize) {
    (n % width, n / width)
}

/// Grayscale for every output of a chain of `CHIPS` drivers while layer `z` is lit. Outputs past the last column
/// stay dark.
pub fn layer_grayscale<const X: usize, const Y: usize, const Z: usize, const CHIPS: usize>(
    cube: &Cube<X, Y, Z>,
    z: usize,
) -> Option<[[u16; TLC5940_CHANNELS]; CHIPS]> {
    const {
        assert!(X * Y <= CHIPS * TLC5940_CHANNELS, "not enough TLC5940s for a layer");
    }

    let layer = cube.layer(z)?;

    let mut grayscale = [[0; TLC5940_CHANNELS]; CHIPS];

    for (x, row) in layer.iter().enumerate() {
        for (y, brightness) in row.iter().enumerate() {
            let n = channel(x, y, X);

            grayscale[n / TLC5940_CHANNELS][n % TLC5940_CHANNELS] = dim(*brightness);
        }
    }

    Some(grayscale)
}

/// Pack grayscale into the byte stream for the chain's shift register. The last chip's highest channel goes out
/// first and every value is 12 bits, most significant bit first. Returns the number of bytes written.
pub fn pack_grayscale<const CHIPS: usize>(
    grayscale: &[[u16; TLC5940_CHANNELS]; CHIPS],
    out: &mut [u8],
) -> CubeResult<usize> {
    let needed = CHIPS * TLC5940_GRAYSCALE_BYTES;

    if out.len() < needed {
        return Err(CubeError::BufferTooSmall {
            needed,
            available: out.len(),
        });
    }

    let mut values = grayscale.iter().rev().flat_map(|chip| chip.iter().rev());

    for bytes in out[..needed].chunks_exact_mut(3) {
        // channels always come in pairs, so there is always a second value here
        let hi = values.next().copied().unwrap_or_default() & 0x0FFF;
        let lo = values.next().copied().unwrap_or_default() & 0x0FFF;

        bytes[0] = (hi >> 4) as u8;
        bytes[1] = (((hi & 0x0F) << 4) | (lo >> 8)) as u8;
        bytes[2] = (lo & 0xFF) as u8;
    }

    Ok(needed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube::{BigCube, SmallCube};
    use crate::dimmer::GRAYSCALE_MAX;
    use crate::errors::CubeError;
    use crate::vector::Vector;

    #[test]
    fn test_chip_counts() {
        assert_eq!(tlc5940_count(3, 3), 1);
        assert_eq!(tlc5940_count(4, 4), 1);
        assert_eq!(tlc5940_count(5, 4), 2);
        assert_eq!(tlc5940_count(8, 8), 4);
    }

    #[test]
    fn test_channel_and_column() {
        assert_eq!(channel(0, 0, 3), 0);
        assert_eq!(channel(2, 0, 3), 2);
        assert_eq!(channel(0, 1, 3), 3);
        assert_eq!(channel(2, 2, 3), 8);

        for n in 0..64 {
            let (x, y) = column(n, 8);
            assert_eq!(channel(x, y, 8), n);
        }
    }

    #[test]
    fn test_small_layer() {
        let mut cube = SmallCube::new();
        cube.set(Vector::new(2, 1, 1), 255).unwrap();

        let lit = layer_grayscale::<3, 3, 3, 1>(&cube, 1).unwrap();
        assert_eq!(lit[0][channel(2, 1, 3)], GRAYSCALE_MAX);
        assert_eq!(lit[0].iter().filter(|x| **x > 0).count(), 1);

        let dark = layer_grayscale::<3, 3, 3, 1>(&cube, 0).unwrap();
        assert!(dark[0].iter().all(|x| *x == 0));

        assert!(layer_grayscale::<3, 3, 3, 1>(&cube, 3).is_none());
    }

    #[test]
    fn test_big_layer_spans_chips() {
        let mut cube = BigCube::new();
        cube.set(Vector::new(7, 7, 0), 255).unwrap();

        let grayscale = layer_grayscale::<8, 8, 8, 4>(&cube, 0).unwrap();

        // channel 63 is the last output of the fourth chip
        assert_eq!(grayscale[3][15], GRAYSCALE_MAX);
    }

    #[test]
    fn test_pack() {
        let mut grayscale = [[0; TLC5940_CHANNELS]; 1];
        grayscale[0][15] = 0xABC;
        grayscale[0][14] = 0x123;
        grayscale[0][0] = 0xFFF;

        let mut out = [0u8; TLC5940_GRAYSCALE_BYTES];

        assert_eq!(pack_grayscale(&grayscale, &mut out), Ok(24));
        assert_eq!(out[..3], [0xAB, 0xC1, 0x23]);
        assert!(out[3..22].iter().all(|x| *x == 0));
        // channel 1 then channel 0
        assert_eq!(out[21..], [0x00, 0x0F, 0xFF]);
    }

    #[test]
    fn test_pack_too_small() {
        let grayscale = [[0; TLC5940_CHANNELS]; 2];
        let mut out = [0u8; TLC5940_GRAYSCALE_BYTES];

        assert_eq!(
            pack_grayscale(&grayscale, &mut out),
            Err(CubeError::BufferTooSmall {
                needed: 48,
                available: 24
            })
        );
    }
}
