/*
 * Snowflake Parameters Module
 *
 * This module defines the SnowflakeParams struct that holds the adjustable
 * settings of the viewer: recursion depth, triangle size, stroke weight and
 * the debug overlay toggle. Defaults can be overridden from the environment
 * and the depth can be changed at runtime through the UI. It also provides
 * change detection between UI frames.
 */

use std::env;
use std::ops::RangeInclusive;

use anyhow::{anyhow, bail, Context, Result};

use crate::{DEFAULT_DEPTH, MAX_DEPTH};

pub const DEPTH_ENV: &str = "KOCH_DEPTH";
pub const SIDE_ENV: &str = "KOCH_SIDE";
pub const SHOW_DEBUG_ENV: &str = "KOCH_SHOW_DEBUG";

#[derive(Debug, Clone, PartialEq)]
pub struct SnowflakeParams {
    pub depth: u8,
    pub side_length: f32,
    pub stroke_weight: f32,
    pub show_debug: bool,

    // Internal state for tracking changes
    previous_values: Option<ParamSnapshot>,
}

// A snapshot of parameter values used for change detection
#[derive(Debug, Clone, PartialEq)]
struct ParamSnapshot {
    depth: u8,
    stroke_weight: f32,
    show_debug: bool,
}

impl Default for SnowflakeParams {
    fn default() -> Self {
        Self::interactive()
    }
}

impl SnowflakeParams {
    // Filled snowflake, depth selectable at runtime
    pub fn interactive() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            side_length: 0.9,
            stroke_weight: 2.0,
            show_debug: false,
            previous_values: None,
        }
    }

    // Static blue line drawing
    pub fn wireframe() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            side_length: 0.8,
            stroke_weight: 1.0,
            show_debug: false,
            previous_values: None,
        }
    }

    /// Apply `KOCH_DEPTH`, `KOCH_SIDE` and `KOCH_SHOW_DEBUG` overrides.
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides(|key| env::var(key).ok())
    }

    /// Apply overrides from an arbitrary lookup (the environment in production).
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(DEPTH_ENV) {
            let depth: u8 = raw
                .trim()
                .parse()
                .with_context(|| format!("{DEPTH_ENV}={raw:?} is not a non-negative integer"))?;
            self.depth = depth.min(MAX_DEPTH);
        }

        if let Some(raw) = lookup(SIDE_ENV) {
            let side: f32 = raw
                .trim()
                .parse()
                .with_context(|| format!("{SIDE_ENV}={raw:?} is not a number"))?;
            if !side.is_finite() || side <= 0.0 {
                bail!("{SIDE_ENV} must be a positive finite number, got {side}");
            }
            self.side_length = side;
        }

        if let Some(raw) = lookup(SHOW_DEBUG_ENV) {
            self.show_debug = parse_flag(&raw).with_context(|| format!("invalid {SHOW_DEBUG_ENV}"))?;
        }

        Ok(self)
    }

    // Take a snapshot of current parameter values for change detection
    pub fn take_snapshot(&mut self) {
        self.previous_values = Some(ParamSnapshot {
            depth: self.depth,
            stroke_weight: self.stroke_weight,
            show_debug: self.show_debug,
        });
    }

    // Returns (depth_changed, any_ui_changed) since the last snapshot
    pub fn detect_changes(&self) -> (bool, bool) {
        let Some(prev) = &self.previous_values else {
            return (false, false);
        };

        let depth_changed = self.depth != prev.depth;
        let ui_changed = depth_changed
            || self.stroke_weight != prev.stroke_weight
            || self.show_debug != prev.show_debug;

        (depth_changed, ui_changed)
    }

    // Get parameter ranges for UI sliders
    pub fn get_depth_range() -> RangeInclusive<u8> {
        0..=MAX_DEPTH
    }

    pub fn get_stroke_weight_range() -> RangeInclusive<f32> {
        0.5..=6.0
    }
}

fn parse_flag(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(anyhow!("expected true/false, got {other:?}")),
    }
}
