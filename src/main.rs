use std::path::PathBuf;

use vulkan_shader_walker::compiler::Glslc;
use vulkan_shader_walker::walk;

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    // zero or one positional argument: the root to scan
    let root = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    walk::compile_shader_tree(&root, &Glslc::default())?;

    Ok(())
}
