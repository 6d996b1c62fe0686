use rectlab_core::{Scene, config};

use super::fail;

/// Validates `config.toml` and `scene.toml` in the config directory.
///
/// Missing files are fine (defaults apply); unreadable or invalid ones
/// make the command exit with status 1.
pub fn execute() {
    let (Some(config_path), Some(scene_path)) = (config::config_path(), config::scene_path())
    else {
        fail("could not determine home directory");
    };

    let mut ok = true;

    if !config_path.exists() {
        println!("config: {} not found, using defaults", config_path.display());
    } else {
        match config::try_load_from(&config_path) {
            Ok(_) => println!("config: {} ok", config_path.display()),
            Err(e) => {
                println!("config: {e}");
                ok = false;
            }
        }
    }

    if !scene_path.exists() {
        println!("scene: {} not found", scene_path.display());
    } else {
        match Scene::load(&scene_path) {
            Ok(scene) => println!(
                "scene: {} ok ({} rectangles)",
                scene_path.display(),
                scene.len()
            ),
            Err(e) => {
                println!("scene: {e}");
                ok = false;
            }
        }
    }

    if !ok {
        std::process::exit(1);
    }
}
