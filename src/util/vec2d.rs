use num::traits::{Num, real::Real};
use std::fmt::{Display, Formatter};
use std::ops::Sub;

/// A 2D vector generic over any numeric type.
///
/// Used for station and planet positions on the map plane.
///
/// # Type Parameters
/// * `T` - The functionality for the vector depends on traits implemented by `T`.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Default)]
pub struct Vec2D<T> {
    /// The x-component of the vector.
    x: T,
    /// The y-component of the vector.
    y: T,
}

impl<T: Copy> Vec2D<T> {
    /// Creates a new vector with the given x and y components.
    pub const fn new(x: T, y: T) -> Self { Self { x, y } }

    /// Returns the x-component of the vector.
    pub const fn x(&self) -> T { self.x }

    /// Returns the y-component of the vector.
    pub const fn y(&self) -> T { self.y }
}

impl<T: Real> Vec2D<T> {
    /// Computes the magnitude (absolute value) of the vector.
    pub fn abs(&self) -> T { (self.x.powi(2) + self.y.powi(2)).sqrt() }
}

impl<T: Num> Sub for Vec2D<T> {
    type Output = Vec2D<T>;

    /// Implements the `-` operator for two `Vec2D` objects.
    fn sub(self, rhs: Self) -> Self::Output { Vec2D { x: self.x - rhs.x, y: self.y - rhs.y } }
}

impl<T: Display> Display for Vec2D<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.x, self.y)
    }
}
