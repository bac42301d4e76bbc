/*
 * Koch Snowflake - Module Definitions
 *
 * This file defines the module structure of the snowflake viewer. The
 * fractal geometry (koch, snowflake) and the application state are plain
 * data and usable without a window; the remaining modules drive nannou.
 */

// Re-export key components for easier access
pub use app::{Model, WireframeModel};
pub use koch::{koch_curve, koch_segments, Segment};
pub use params::SnowflakeParams;
pub use snowflake::{build_outline, build_wireframe, BaseTriangle};
pub use state::{Command, Outcome, SnowflakeState};
pub use viewport::ViewBounds;

// Define modules
pub mod app;
pub mod debug;
pub mod input;
pub mod koch;
pub mod params;
pub mod renderer;
pub mod snowflake;
pub mod state;
pub mod ui;
pub mod viewport;

// Constants
pub const DEFAULT_DEPTH: u8 = 4;
pub const MAX_DEPTH: u8 = 5;
pub const VIEW_EXTENT: f32 = 1.5;
pub const WINDOW_SIZE: u32 = 800;
