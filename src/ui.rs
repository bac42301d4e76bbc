/*
 * UI Module
 *
 * This module contains the egui control panel and the on-canvas debug
 * overlay. The panel mirrors the keyboard: moving the depth slider produces
 * the same command as pressing a digit key.
 */

use nannou_egui::{egui, Egui};

use crate::debug::DebugInfo;
use crate::params::SnowflakeParams;
use crate::state::{Command, SnowflakeState};

// Update the UI and return the command produced by the depth slider, if any
pub fn update_ui(
    egui: &mut Egui,
    params: &mut SnowflakeParams,
    state: &SnowflakeState,
    debug_info: &DebugInfo,
) -> Option<Command> {
    // Take a snapshot of current parameter values for change detection
    params.take_snapshot();

    let ctx = egui.begin_frame();

    egui::Window::new("Snowflake")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.add(egui::Slider::new(&mut params.depth, SnowflakeParams::get_depth_range()).text("Depth"));
            ui.add(
                egui::Slider::new(&mut params.stroke_weight, SnowflakeParams::get_stroke_weight_range())
                    .text("Outline Weight"),
            );
            ui.label("Keys 0-5 set the depth, Esc quits");

            ui.separator();

            ui.label(format!("Outline points: {}", state.outline().len()));
            ui.label(format!("Build time: {:.3} ms", debug_info.build_time.as_secs_f64() * 1000.0));
            ui.checkbox(&mut params.show_debug, "Show Debug Info");
        });

    let (depth_changed, _) = params.detect_changes();
    depth_changed.then_some(Command::SetDepth(params.depth))
}

// Draw debug information on the screen
pub fn draw_debug_info(
    draw: &nannou::Draw,
    debug_info: &DebugInfo,
    window_rect: nannou::geom::Rect,
    depth: u8,
) {
    // Create a background panel in the bottom-left corner
    let margin = 20.0;
    let line_height = 20.0;
    let panel_width = 220.0;
    let panel_height = line_height * 6.0 + margin;
    let panel_x = window_rect.left() + panel_width / 2.0;
    let panel_y = window_rect.bottom() + panel_height / 2.0;

    draw.rect()
        .x_y(panel_x, panel_y)
        .w_h(panel_width, panel_height)
        .color(nannou::color::rgba(0.0, 0.0, 0.0, 0.7));

    let text_x = window_rect.left() + margin;
    let text_y = window_rect.bottom() + panel_height - margin;

    let debug_texts = [
        format!("FPS: {:.1}", debug_info.fps),
        format!("Frame time: {:.2} ms", debug_info.frame_time.as_secs_f64() * 1000.0),
        format!("Depth: {}", depth),
        format!("Outline points: {}", debug_info.outline_points),
        format!("Fan triangles: {}", debug_info.fan_triangles),
        format!("Redraws: {}", debug_info.redraws),
    ];

    for (i, text) in debug_texts.iter().enumerate() {
        let y = text_y - (i as f32 * line_height);

        // Position the text with a fixed offset from the left edge
        draw.text(text)
            .x_y(text_x + 80.0, y)
            .color(nannou::color::WHITE)
            .font_size(14);
    }
}
