/*
 * Debug Information Module
 *
 * This module defines the DebugInfo struct that contains frame metrics and
 * outline statistics displayed in the UI panel and the debug overlay.
 */

use std::time::Duration;

// Debug information to display
#[derive(Debug, Clone, Default)]
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub outline_points: usize,
    pub fan_triangles: usize,
    pub build_time: Duration,
    pub redraws: usize,
}
