/*
 * Koch Snowflake Viewer
 *
 * Draws a filled Koch snowflake with a gradient from the centre to the rim.
 * The digit keys 0-5 change the recursion depth and rebuild the outline,
 * Escape quits. Set RUST_LOG=info to follow depth changes.
 */

use koch_snowflake::app;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    nannou::app(app::model).update(app::update).run();
}
