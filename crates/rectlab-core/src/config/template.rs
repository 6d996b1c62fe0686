/// Generates the default `config.toml` contents with explanatory comments.
///
/// This is used by `rectlab init` to create a starter config file that
/// users can immediately edit.
pub fn generate_config() -> String {
    r##"# rectlab configuration
# Location: ~/.config/rectlab/config.toml

[output]
# Report format: "text" or "json". The --json flag overrides this.
format = "text"
# List crossing points and shared segments under each intersection.
describe_features = true

[logging]
# Print diagnostic logs to stderr. RUST_LOG overrides these settings.
enabled = false
# Minimum log level: "trace", "debug", "info", "warn", or "error".
level = "info"
"##
    .to_string()
}

/// Generates the starter `scene.toml`: the demo scene with comments.
///
/// Parses to the same rectangles as [`crate::Scene::demo`].
pub fn generate_scene() -> String {
    let mut out = String::from(
        r##"# rectlab scene
# Location: ~/.config/rectlab/scene.toml
#
# Each [[rect]] is an axis-aligned rectangle. The origin is the top-left
# corner and y grows downwards. Names must be unique within the scene.
"##,
    );
    for (group, rects) in crate::scene::DEMO_GROUPS {
        out.push_str(&format!("\n# {group}\n"));
        for (name, x, y, width, height) in *rects {
            out.push_str(&format!(
                "[[rect]]\nname = \"{name}\"\nx = {x}\ny = {y}\nwidth = {width}\nheight = {height}\n\n"
            ));
        }
    }
    out
}

#[cfg(test)]
#[path = "template_tests.rs"]
mod tests;
