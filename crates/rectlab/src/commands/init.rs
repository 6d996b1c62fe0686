use rectlab_core::config;

use super::fail;

/// Creates the default configuration files at `~/.config/rectlab/`.
///
/// Generates `config.toml` and `scene.toml` with comments explaining
/// every option. Existing files are not overwritten.
pub fn execute() {
    let Some(dir) = config::config_dir() else {
        fail("could not determine home directory.");
    };

    if let Err(e) = std::fs::create_dir_all(&dir) {
        fail(format!("could not create {}: {e}", dir.display()));
    }

    write_if_missing(
        &dir.join("config.toml"),
        &config::template::generate_config(),
    );
    write_if_missing(
        &dir.join("scene.toml"),
        &config::template::generate_scene(),
    );

    println!("\nEdit scene.toml to describe your own rectangles, then run `rectlab evaluate`.");
}

/// Writes content to a file only if it doesn't already exist.
fn write_if_missing(path: &std::path::Path, content: &str) {
    if path.exists() {
        println!("Already exists: {}", path.display());
        return;
    }

    match std::fs::write(path, content) {
        Ok(()) => println!("Created {}", path.display()),
        Err(e) => eprintln!("Error: could not write {}: {e}", path.display()),
    }
}
