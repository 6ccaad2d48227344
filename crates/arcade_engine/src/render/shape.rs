//! Visual shape handle
//!
//! A [`Shape`] names the frames of an entity's sprite and tracks which one
//! is current. Frames are opaque asset keys resolved by the presentation
//! layer; the engine never loads them.

use crate::physics::collision::Point;
use thiserror::Error;

/// Errors raised by shape frame selection
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    /// Frame index past the end of the frame list
    #[error("Frame {index} out of range for shape with {len} frames")]
    FrameOutOfRange {
        /// Requested frame
        index: usize,
        /// Number of frames
        len: usize,
    },
}

/// Handle to an entity's displayable frames
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    frames: Vec<String>,
    current: usize,
    mirrored: bool,
    offset: Point,
}

impl Default for Shape {
    fn default() -> Self {
        Self::empty()
    }
}

impl Shape {
    /// Shape cycling through `frames`, drawn at `offset` from the entity
    pub fn new(frames: Vec<String>, offset: Point) -> Self {
        Self {
            frames,
            current: 0,
            mirrored: false,
            offset,
        }
    }

    /// Single-frame shape
    pub fn single(frame: impl Into<String>, offset: Point) -> Self {
        Self::new(vec![frame.into()], offset)
    }

    /// Shape with nothing to draw
    pub fn empty() -> Self {
        Self::new(Vec::new(), Point::ORIGIN)
    }

    /// Asset key of the frame to draw, if any
    pub fn current_frame(&self) -> Option<&str> {
        self.frames.get(self.current).map(String::as_str)
    }

    /// Index of the current frame
    pub fn frame_index(&self) -> usize {
        self.current
    }

    /// Number of frames
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Whether the current frame is drawn mirrored
    pub fn is_mirrored(&self) -> bool {
        self.mirrored
    }

    /// Draw offset relative to the entity position
    pub fn offset(&self) -> Point {
        self.offset
    }

    /// Advances to the next frame, wrapping to the first
    pub fn next_frame(&mut self) {
        if !self.frames.is_empty() {
            self.current = (self.current + 1) % self.frames.len();
        }
    }

    /// Jumps to `index`, drawn mirrored or not
    pub fn set_frame(&mut self, index: usize, mirrored: bool) -> Result<(), ShapeError> {
        if index >= self.frames.len() {
            return Err(ShapeError::FrameOutOfRange {
                index,
                len: self.frames.len(),
            });
        }
        self.current = index;
        self.mirrored = mirrored;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walk_cycle() -> Shape {
        Shape::new(
            vec!["walk_0".into(), "walk_1".into(), "walk_2".into()],
            Point::new(-8.0, -8.0),
        )
    }

    #[test]
    fn test_next_frame_wraps() {
        let mut shape = walk_cycle();
        assert_eq!(shape.current_frame(), Some("walk_0"));
        shape.next_frame();
        shape.next_frame();
        assert_eq!(shape.current_frame(), Some("walk_2"));
        shape.next_frame();
        assert_eq!(shape.frame_index(), 0);
    }

    #[test]
    fn test_set_frame() {
        let mut shape = walk_cycle();
        shape.set_frame(1, true).unwrap();
        assert_eq!(shape.current_frame(), Some("walk_1"));
        assert!(shape.is_mirrored());
        assert_eq!(
            shape.set_frame(3, false),
            Err(ShapeError::FrameOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(shape.frame_index(), 1);
    }

    #[test]
    fn test_empty_shape() {
        let mut shape = Shape::empty();
        shape.next_frame();
        assert_eq!(shape.current_frame(), None);
        assert!(shape.set_frame(0, false).is_err());
    }
}
