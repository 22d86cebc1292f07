//! The voxel buffer that animations draw into and the refresh driver scans out.
use itertools::iproduct;

use crate::errors::{CubeError, CubeResult};
use crate::vector::Vector;

/// brightness of every voxel, indexed `[x][y][z]`
#[derive(Clone, Debug, PartialEq)]
pub struct Cube<const X: usize, const Y: usize, const Z: usize> {
    voxels: [[[u8; Z]; Y]; X],
}

/// the original 3x3x3 build with a single TLC5940
pub type SmallCube = Cube<3, 3, 3>;

/// 8x8x8 with four TLC5940s per layer
pub type BigCube = Cube<8, 8, 8>;

impl<const X: usize, const Y: usize, const Z: usize> Default for Cube<X, Y, Z> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const X: usize, const Y: usize, const Z: usize> Cube<X, Y, Z> {
    pub const SIZE: Vector = {
        assert!(X > 0 && Y > 0 && Z > 0, "cube needs at least one voxel");
        assert!(
            X <= i8::MAX as usize && Y <= i8::MAX as usize && Z <= i8::MAX as usize,
            "cube coordinates must fit in an i8"
        );
        Vector::new(X as i8, Y as i8, Z as i8)
    };

    pub const fn new() -> Self {
        // force the size checks for every cube that gets built
        let _ = Self::SIZE;

        Self {
            voxels: [[[0; Z]; Y]; X],
        }
    }

    pub fn contains(v: Vector) -> bool {
        v.is_in_cube::<X, Y, Z>()
    }

    pub fn clear(&mut self) {
        self.fill(0);
    }

    pub fn fill(&mut self, value: u8) {
        for plane in self.voxels.iter_mut() {
            for column in plane.iter_mut() {
                column.fill(value);
            }
        }
    }

    pub fn get(&self, v: Vector) -> Option<u8> {
        let (x, y, z) = v.as_index::<X, Y, Z>()?;

        Some(self.voxels[x][y][z])
    }

    /// out-of-cube writes are rejected and leave the buffer untouched
    pub fn set(&mut self, v: Vector, value: u8) -> CubeResult<()> {
        let (x, y, z) = v.as_index::<X, Y, Z>().ok_or(CubeError::OutOfCube(v))?;

        self.voxels[x][y][z] = value;

        Ok(())
    }

    /// every voxel position. x changes fastest, then y, then z
    pub fn points() -> impl Iterator<Item = Vector> + Clone {
        iproduct!(0..Z, 0..Y, 0..X).map(|(z, y, x)| Vector::new(x as i8, y as i8, z as i8))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Vector, u8)> + '_ {
        Self::points().map(|v| {
            let (x, y, z) = (v.x as usize, v.y as usize, v.z as usize);
            (v, self.voxels[x][y][z])
        })
    }

    /// one horizontal layer as `[x][y]`. the refresh driver lights one of these at a time
    pub fn layer(&self, z: usize) -> Option<[[u8; Y]; X]> {
        if z >= Z {
            return None;
        }

        let mut layer = [[0; Y]; X];

        for (x, plane) in self.voxels.iter().enumerate() {
            for (y, column) in plane.iter().enumerate() {
                layer[x][y] = column[z];
            }
        }

        Some(layer)
    }

    /// number of lit voxels
    pub fn lit(&self) -> usize {
        self.iter().filter(|(_, value)| *value > 0).count()
    }
}

#[cfg(test)]
mod tests {
    use super::{BigCube, SmallCube};
    use crate::errors::CubeError;
    use crate::vector::Vector;

    #[test]
    fn test_set_and_get() {
        let mut cube = SmallCube::new();

        cube.set(Vector::new(2, 1, 0), 200).unwrap();

        assert_eq!(cube.get(Vector::new(2, 1, 0)), Some(200));
        assert_eq!(cube.get(Vector::new(0, 1, 2)), Some(0));
        assert_eq!(cube.lit(), 1);
    }

    #[test]
    fn test_out_of_cube() {
        let mut cube = SmallCube::new();

        let outside = Vector::new(3, 0, 0);

        assert_eq!(cube.set(outside, 255), Err(CubeError::OutOfCube(outside)));
        assert_eq!(cube.get(outside), None);
        assert_eq!(cube.get(Vector::new(-1, 0, 0)), None);
        assert_eq!(cube.lit(), 0);
    }

    #[test]
    fn test_contains() {
        assert!(SmallCube::contains(Vector::ZERO));
        assert!(SmallCube::contains(Vector::new(2, 2, 2)));
        assert!(!SmallCube::contains(Vector::new(2, 3, 2)));
        assert!(!SmallCube::contains(Vector::new(0, 0, -1)));
        assert!(BigCube::contains(Vector::new(7, 7, 7)));
    }

    #[test]
    fn test_points_order() {
        let points: std::vec::Vec<_> = SmallCube::points().collect();

        assert_eq!(points.len(), 27);
        assert_eq!(points[0], Vector::new(0, 0, 0));
        assert_eq!(points[1], Vector::new(1, 0, 0));
        assert_eq!(points[3], Vector::new(0, 1, 0));
        assert_eq!(points[9], Vector::new(0, 0, 1));
        assert_eq!(points[26], Vector::new(2, 2, 2));

        assert_eq!(BigCube::points().count(), 512);
    }

    #[test]
    fn test_fill_clear_and_layer() {
        let mut cube = BigCube::new();

        cube.fill(9);
        assert_eq!(cube.lit(), 512);

        cube.clear();
        cube.set(Vector::new(1, 2, 5), 77).unwrap();

        let layer = cube.layer(5).unwrap();
        assert_eq!(layer[1][2], 77);
        assert_eq!(layer.iter().flatten().filter(|x| **x > 0).count(), 1);

        assert!(cube.layer(4).unwrap().iter().flatten().all(|x| *x == 0));
        assert!(cube.layer(8).is_none());
    }
}
