//! Math utilities and types
//!
//! Provides the nalgebra types backing the 2D collision geometry. Angles
//! are given in degrees at the public API and converted here.

pub use nalgebra::{Rotation2, Vector2};

/// 2D vector type used for linear algebra
pub type Vec2 = Vector2<f64>;

/// 2D rotation type
pub type Rot2 = Rotation2<f64>;

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f64 = std::f64::consts::PI;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f64 = PI / 180.0;

    /// Radians to degrees conversion factor
    pub const RAD_TO_DEG: f64 = 180.0 / PI;

    /// Tolerance used when a computed quantity is compared against zero
    pub const EPSILON: f64 = 1e-9;
}

/// Math utility functions
pub mod utils {
    use super::{constants, Rot2};

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f64) -> f64 {
        degrees * constants::DEG_TO_RAD
    }

    /// Convert radians to degrees
    pub fn rad_to_deg(radians: f64) -> f64 {
        radians * constants::RAD_TO_DEG
    }

    /// Counter-clockwise rotation by the given angle in degrees
    pub fn rotation_degrees(degrees: f64) -> Rot2 {
        Rot2::new(deg_to_rad(degrees))
    }

    /// Check whether a value is within [`constants::EPSILON`] of zero
    pub fn is_near_zero(value: f64) -> bool {
        value.abs() < constants::EPSILON
    }
}
