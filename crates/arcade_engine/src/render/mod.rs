//! Rendering-facing data owned by game objects

pub mod shape;

pub use shape::{Shape, ShapeError};
