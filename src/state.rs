/*
 * Snowflake State Module
 *
 * This module owns the current recursion depth and the outline generated
 * for it. The outline is replaced as a whole whenever the depth changes,
 * and every regeneration issues exactly one redraw request.
 */

use std::time::{Duration, Instant};

use nannou::prelude::Point2;

use crate::snowflake;
use crate::MAX_DEPTH;

// A request coming from the keyboard or the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    SetDepth(u8),
    Exit,
}

// What the presentation layer should do after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Redraw,
    Exit,
    Ignored,
}

#[derive(Debug, Clone)]
pub struct SnowflakeState {
    depth: u8,
    side_length: f32,
    outline: Vec<Point2>,
    pending_redraws: usize,
    redraw_requests: usize,
    last_build_time: Duration,
}

impl SnowflakeState {
    pub fn new(depth: u8, side_length: f32) -> Self {
        let mut state = Self {
            depth: depth.min(MAX_DEPTH),
            side_length,
            outline: Vec::new(),
            pending_redraws: 0,
            redraw_requests: 0,
            last_build_time: Duration::ZERO,
        };
        state.regenerate();
        state
    }

    pub fn apply(&mut self, command: Command) -> Outcome {
        match command {
            Command::SetDepth(depth) if depth <= MAX_DEPTH => {
                self.depth = depth;
                self.regenerate();
                log::info!("Recursion depth set to {} ({} outline points)", depth, self.outline.len());
                Outcome::Redraw
            }
            Command::SetDepth(depth) => {
                log::trace!("Ignoring out of range depth {}", depth);
                Outcome::Ignored
            }
            Command::Exit => Outcome::Exit,
        }
    }

    // Rebuild the outline from scratch and request a redraw
    fn regenerate(&mut self) {
        let start = Instant::now();
        self.outline = snowflake::build_outline(self.depth, self.side_length);
        self.last_build_time = start.elapsed();
        log::debug!(
            "Built outline at depth {}: {} points in {:?}",
            self.depth,
            self.outline.len(),
            self.last_build_time
        );

        self.pending_redraws += 1;
        self.redraw_requests += 1;
    }

    /// Consume pending redraw requests, returning whether any were queued.
    pub fn take_redraw(&mut self) -> bool {
        let pending = self.pending_redraws > 0;
        self.pending_redraws = 0;
        pending
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    pub fn side_length(&self) -> f32 {
        self.side_length
    }

    pub fn outline(&self) -> &[Point2] {
        &self.outline
    }

    // Total number of redraw requests issued, including the startup render
    pub fn redraw_requests(&self) -> usize {
        self.redraw_requests
    }

    pub fn last_build_time(&self) -> Duration {
        self.last_build_time
    }
}
