use std::path::PathBuf;

use clap::Args;

use rectlab_core::{Scene, config};

/// Where to read a scene from.
#[derive(Args)]
pub struct SceneArgs {
    /// Scene file (defaults to ~/.config/rectlab/scene.toml)
    #[arg(long, value_name = "PATH")]
    scene: Option<PathBuf>,
    /// Use the built-in demo scene
    #[arg(long, conflicts_with = "scene")]
    demo: bool,
}

impl SceneArgs {
    /// Loads the selected scene.
    ///
    /// Falls back to the config directory's `scene.toml` when neither
    /// `--scene` nor `--demo` is given.
    pub fn load(&self) -> Result<Scene, String> {
        if self.demo {
            log::debug!("using the demo scene");
            return Ok(Scene::demo());
        }
        let path = match &self.scene {
            Some(path) => path.clone(),
            None => config::scene_path()
                .filter(|p| p.exists())
                .ok_or("no scene file found; run `rectlab init`, pass --scene, or use --demo")?,
        };
        log::debug!("loading scene from {}", path.display());
        Scene::load(&path).map_err(|e| e.to_string())
    }
}
