use rectlab_core::config::OutputConfig;

use super::fail;
use super::scene::SceneArgs;
use crate::output;

pub fn execute(args: &SceneArgs, out: &OutputConfig) {
    let scene = args.load().unwrap_or_else(|e| fail(e));
    output::emit(out, &scene, output::render_scene);
}
