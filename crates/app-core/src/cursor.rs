use glam::Vec2;

use crate::constants::CURSOR_RADIUS;

/// Shared pointer state: written by the frontend's pointermove handler,
/// read-only to every particle during a tick.
///
/// `position` is `None` until the first pointer event arrives; repulsion
/// treats that as "no repulsion" rather than computing a distance against
/// undefined coordinates.
#[derive(Clone, Copy, Debug)]
pub struct Cursor {
    pub position: Option<Vec2>,
    pub radius: f32,
}

impl Cursor {
    pub fn new(radius: f32) -> Self {
        Self {
            position: None,
            radius,
        }
    }

    #[inline]
    pub fn set(&mut self, position: Vec2) {
        self.position = Some(position);
    }

    #[inline]
    pub fn clear(&mut self) {
        self.position = None;
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new(CURSOR_RADIUS)
    }
}
