//! Cube coordinates. Components are small, so 8-bit maths wraps the same way it does on the microcontroller.
use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Copy, Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Vector {
    pub x: i8,
    pub y: i8,
    pub z: i8,
}

impl Vector {
    pub const ZERO: Self = Self::new(0, 0, 0);
    pub const ONE: Self = Self::new(1, 1, 1);

    /// unit steps along each axis. the snakes pick their moves from these
    pub const DIRECTIONS: [Self; 6] = [
        Self::new(-1, 0, 0),
        Self::new(1, 0, 0),
        Self::new(0, -1, 0),
        Self::new(0, 1, 0),
        Self::new(0, 0, -1),
        Self::new(0, 0, 1),
    ];

    pub const fn new(x: i8, y: i8, z: i8) -> Self {
        Self { x, y, z }
    }

    /// dot product. widened so a full 8x8x8 cube can't overflow it. wraps at the extremes like the firmware's int16_t
    pub fn dot(self, other: Self) -> i16 {
        (self.x as i16 * other.x as i16)
            .wrapping_add(self.y as i16 * other.y as i16)
            .wrapping_add(self.z as i16 * other.z as i16)
    }

    pub fn is_in_cube<const X: usize, const Y: usize, const Z: usize>(&self) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.z >= 0
            && (self.x as usize) < X
            && (self.y as usize) < Y
            && (self.z as usize) < Z
    }

    /// array indexes for an in-cube vector
    pub fn as_index<const X: usize, const Y: usize, const Z: usize>(&self) -> Option<(usize, usize, usize)> {
        if self.is_in_cube::<X, Y, Z>() {
            Some((self.x as usize, self.y as usize, self.z as usize))
        } else {
            None
        }
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.x, self.y, self.z)
    }
}

impl Add for Vector {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.x.wrapping_add(rhs.x),
            self.y.wrapping_add(rhs.y),
            self.z.wrapping_add(rhs.z),
        )
    }
}

impl AddAssign for Vector {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Vector {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(
            self.x.wrapping_sub(rhs.x),
            self.y.wrapping_sub(rhs.y),
            self.z.wrapping_sub(rhs.z),
        )
    }
}

impl SubAssign for Vector {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for Vector {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(self.x.wrapping_neg(), self.y.wrapping_neg(), self.z.wrapping_neg())
    }
}

impl Mul<i8> for Vector {
    type Output = Self;

    fn mul(self, m: i8) -> Self {
        Self::new(self.x.wrapping_mul(m), self.y.wrapping_mul(m), self.z.wrapping_mul(m))
    }
}

impl MulAssign<i8> for Vector {
    fn mul_assign(&mut self, m: i8) {
        *self = *self * m;
    }
}

/// truncates toward zero. panics on a zero divisor like integer division does
impl Div<i8> for Vector {
    type Output = Self;

    fn div(self, m: i8) -> Self {
        Self::new(self.x.wrapping_div(m), self.y.wrapping_div(m), self.z.wrapping_div(m))
    }
}

impl DivAssign<i8> for Vector {
    fn div_assign(&mut self, m: i8) {
        *self = *self / m;
    }
}
