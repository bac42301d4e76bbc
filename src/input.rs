/*
 * Input Module
 *
 * This module handles user input events for the snowflake viewer.
 *
 * Features:
 * - Digit keys 0-5 (top row or numpad) select the recursion depth
 * - Escape quits
 * - Window resizes refit the view bounds
 * - Raw events are forwarded to the egui panel
 */

use nannou::prelude::*;

use crate::app::{self, Model};
use crate::state::Command;
use crate::viewport::ViewBounds;

// Map a key to a viewer command, None for keys with no binding
pub fn command_for_key(key: Key) -> Option<Command> {
    let command = match key {
        Key::Key0 | Key::Numpad0 => Command::SetDepth(0),
        Key::Key1 | Key::Numpad1 => Command::SetDepth(1),
        Key::Key2 | Key::Numpad2 => Command::SetDepth(2),
        Key::Key3 | Key::Numpad3 => Command::SetDepth(3),
        Key::Key4 | Key::Numpad4 => Command::SetDepth(4),
        Key::Key5 | Key::Numpad5 => Command::SetDepth(5),
        Key::Escape => Command::Exit,
        _ => return None,
    };
    Some(command)
}

// Key pressed event handler
pub fn key_pressed(app: &App, model: &mut Model, key: Key) {
    // Let the UI keep keys typed into its widgets
    if model.egui.ctx().wants_keyboard_input() {
        return;
    }

    match command_for_key(key) {
        Some(command) => app::handle_command(app, model, command),
        None => log::trace!("No binding for {:?}", key),
    }
}

// Window resized event handler
pub fn resized(_app: &App, model: &mut Model, size: Vec2) {
    model.view_bounds = ViewBounds::fit(size.x, size.y, crate::VIEW_EXTENT);
    log::debug!("Window resized to {}x{}, view bounds {:?}", size.x, size.y, model.view_bounds);
}

// Handle raw window events for egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_keys_select_depth() {
        let keys = [Key::Key0, Key::Key1, Key::Key2, Key::Key3, Key::Key4, Key::Key5];
        for (depth, key) in keys.into_iter().enumerate() {
            assert_eq!(command_for_key(key), Some(Command::SetDepth(depth as u8)));
        }
        assert_eq!(command_for_key(Key::Numpad3), Some(Command::SetDepth(3)));
    }

    #[test]
    fn escape_exits() {
        assert_eq!(command_for_key(Key::Escape), Some(Command::Exit));
    }

    #[test]
    fn other_keys_are_unbound() {
        for key in [Key::Key6, Key::Key9, Key::Numpad7, Key::A, Key::Space, Key::Return] {
            assert_eq!(command_for_key(key), None);
        }
    }
}
