/*
 * Viewport Module
 *
 * This module defines the orthographic view bounds of the snowflake and the
 * transformation from world units to nannou's screen space. The bounds keep
 * a square aspect ratio: the shorter window side always spans the full
 * extent and the longer side shows proportionally more.
 */

use nannou::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBounds {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
}

impl ViewBounds {
    pub fn fit(width: f32, height: f32, extent: f32) -> Self {
        // A minimised window reports zero size
        let width = width.max(1.0);
        let height = height.max(1.0);

        if width <= height {
            let aspect = height / width;
            Self {
                left: -extent,
                right: extent,
                bottom: -extent * aspect,
                top: extent * aspect,
            }
        } else {
            let aspect = width / height;
            Self {
                left: -extent * aspect,
                right: extent * aspect,
                bottom: -extent,
                top: extent,
            }
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.top - self.bottom
    }

    // Screen pixels per world unit for the given window
    pub fn scale(&self, window_rect: Rect) -> f32 {
        window_rect.w() / self.width()
    }

    // Convert a point from world space to screen space
    pub fn world_to_screen(&self, point: Point2, window_rect: Rect) -> Point2 {
        let center = pt2((self.left + self.right) / 2.0, (self.bottom + self.top) / 2.0);
        (point - center) * self.scale(window_rect) + window_rect.xy()
    }
}
