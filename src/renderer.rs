/*
 * Renderer Module
 *
 * This module draws the snowflake. The interactive view fills the outline
 * with a fan of triangles around the centre, shaded from a light blue
 * centre to a dark blue rim, then strokes the outline on top. The static
 * view draws the wireframe as a plain blue line list.
 */

use nannou::color::{lin_srgba, LinSrgba};
use nannou::geom::Tri;
use nannou::prelude::*;

use crate::app::{Model, WireframeModel};
use crate::snowflake;
use crate::ui;

fn fill_center_color() -> LinSrgba {
    lin_srgba(0.7, 0.7, 1.0, 1.0)
}

fn fill_edge_color() -> LinSrgba {
    lin_srgba(0.0, 0.0, 1.0, 1.0)
}

// Render the filled snowflake with its outline
pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(WHITE);

    let window_rect = app.window_rect();
    let bounds = &model.view_bounds;

    let outline: Vec<Point2> = model
        .state
        .outline()
        .iter()
        .map(|&p| bounds.world_to_screen(p, window_rect))
        .collect();
    let center = bounds.world_to_screen(pt2(0.0, 0.0), window_rect);

    let tris = snowflake::fan_triangles(center, &outline).into_iter().map(|[a, b, c]| {
        Tri([
            (a.extend(0.0), fill_center_color()),
            (b.extend(0.0), fill_edge_color()),
            (c.extend(0.0), fill_edge_color()),
        ])
    });
    draw.mesh().tris_colored(tris);

    draw.polyline()
        .weight(model.params.stroke_weight)
        .points(outline)
        .color(NAVY);

    if model.params.show_debug {
        ui::draw_debug_info(&draw, &model.debug_info, window_rect, model.state.depth());
    }

    if let Err(err) = draw.to_frame(app, &frame) {
        log::error!("Failed to draw snowflake: {:?}", err);
    }

    // Draw the egui UI
    if let Err(err) = model.egui.draw_to_frame(&frame) {
        log::error!("Failed to draw UI: {:?}", err);
    }
}

// Render the static wireframe
pub fn view_wireframe(app: &App, model: &WireframeModel, frame: Frame) {
    let draw = app.draw();
    draw.background().color(WHITE);

    let window_rect = app.window_rect();
    let bounds = &model.view_bounds;

    for segment in &model.segments {
        draw.line()
            .start(bounds.world_to_screen(segment.start, window_rect))
            .end(bounds.world_to_screen(segment.end, window_rect))
            .weight(model.stroke_weight)
            .color(BLUE);
    }

    if let Err(err) = draw.to_frame(app, &frame) {
        log::error!("Failed to draw wireframe: {:?}", err);
    }
}
