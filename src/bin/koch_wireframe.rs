/*
 * Koch Snowflake Wireframe
 *
 * Draws the Koch snowflake once at a fixed depth as blue line segments on
 * a white background. There is no interaction beyond closing the window.
 */

use koch_snowflake::app;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    nannou::app(app::wireframe_model).run();
}
