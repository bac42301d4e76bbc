/*
 * Application Module
 *
 * This module defines the application models of the two viewers and wires
 * them into nannou's model/update/view loop.
 *
 * - Model: the interactive viewer (depth keys, control panel, filled view)
 * - WireframeModel: the static viewer, built once at startup
 *
 * Both run with LoopMode::Wait, so frames are only produced in response to
 * window or input events.
 */

use nannou::prelude::*;
use nannou_egui::Egui;

use crate::debug::DebugInfo;
use crate::input;
use crate::koch::Segment;
use crate::params::SnowflakeParams;
use crate::renderer;
use crate::snowflake;
use crate::state::{Command, Outcome, SnowflakeState};
use crate::ui;
use crate::viewport::ViewBounds;
use crate::{VIEW_EXTENT, WINDOW_SIZE};

// Main model for the interactive viewer
pub struct Model {
    pub state: SnowflakeState,
    pub params: SnowflakeParams,
    pub egui: Egui,
    pub debug_info: DebugInfo,
    pub view_bounds: ViewBounds,
}

// Model for the static wireframe viewer
pub struct WireframeModel {
    pub segments: Vec<Segment>,
    pub stroke_weight: f32,
    pub view_bounds: ViewBounds,
}

// Apply environment overrides, keeping the defaults if they are invalid
pub fn load_params(defaults: SnowflakeParams) -> SnowflakeParams {
    match defaults.clone().with_env_overrides() {
        Ok(params) => params,
        Err(err) => {
            log::warn!("Ignoring configuration overrides: {:#}", err);
            defaults
        }
    }
}

// Initialize the interactive model
pub fn model(app: &App) -> Model {
    app.set_loop_mode(LoopMode::Wait);

    let window_id = app
        .new_window()
        .title("Koch Snowflake")
        .size(WINDOW_SIZE, WINDOW_SIZE)
        .view(renderer::view)
        .key_pressed(input::key_pressed)
        .resized(input::resized)
        .raw_event(input::raw_window_event)
        .build()
        .expect("Failed to create window");

    let window = app.window(window_id).expect("Window closed during startup");
    let egui = Egui::from_window(&window);

    let params = load_params(SnowflakeParams::interactive());
    let state = SnowflakeState::new(params.depth, params.side_length);
    log::info!("Starting at depth {} with side length {}", state.depth(), state.side_length());

    let debug_info = DebugInfo {
        outline_points: state.outline().len(),
        fan_triangles: state.outline().len().saturating_sub(1),
        build_time: state.last_build_time(),
        ..DebugInfo::default()
    };

    Model {
        state,
        params,
        egui,
        debug_info,
        view_bounds: ViewBounds::fit(WINDOW_SIZE as f32, WINDOW_SIZE as f32, VIEW_EXTENT),
    }
}

// Update the interactive model
pub fn update(app: &App, model: &mut Model, update: Update) {
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;

    model.egui.set_elapsed_time(update.since_start);
    if let Some(command) = ui::update_ui(&mut model.egui, &mut model.params, &model.state, &model.debug_info) {
        handle_command(app, model, command);
    }

    if model.state.take_redraw() {
        model.debug_info.redraws += 1;
    }
}

// Route a keyboard or UI command through the state and react to the outcome
pub fn handle_command(app: &App, model: &mut Model, command: Command) {
    match model.state.apply(command) {
        Outcome::Redraw => {
            model.params.depth = model.state.depth();
            model.debug_info.outline_points = model.state.outline().len();
            model.debug_info.fan_triangles = model.state.outline().len().saturating_sub(1);
            model.debug_info.build_time = model.state.last_build_time();
        }
        Outcome::Exit => {
            log::info!("Exit requested");
            app.quit();
        }
        Outcome::Ignored => {}
    }
}

// Initialize the static wireframe model
pub fn wireframe_model(app: &App) -> WireframeModel {
    app.set_loop_mode(LoopMode::Wait);

    app.new_window()
        .title("Koch Snowflake")
        .size(WINDOW_SIZE, WINDOW_SIZE)
        .view(renderer::view_wireframe)
        .resized(wireframe_resized)
        .build()
        .expect("Failed to create window");

    let params = load_params(SnowflakeParams::wireframe());
    let segments = snowflake::build_wireframe(params.depth, params.side_length);
    log::info!("Built wireframe at depth {}: {} segments", params.depth, segments.len());

    WireframeModel {
        segments,
        stroke_weight: params.stroke_weight,
        view_bounds: ViewBounds::fit(WINDOW_SIZE as f32, WINDOW_SIZE as f32, VIEW_EXTENT),
    }
}

fn wireframe_resized(_app: &App, model: &mut WireframeModel, size: Vec2) {
    model.view_bounds = ViewBounds::fit(size.x, size.y, VIEW_EXTENT);
}
