use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::WalkDir;

use crate::compiler::SpirvCompiler;

/// names ending in `_vk` mark sources meant for the Vulkan renderer
const VULKAN_STEM_SUFFIX: &str = "_vk";

const STAGE_EXTENSIONS: [&str; 2] = ["vert", "frag"];

/// Fatal failures that abort a run. A compile the external compiler
/// rejects is not one of these: it is reported on stdout and the walk
/// moves on.
#[derive(Debug, Error)]
pub enum WalkError {
    /// the root is missing, unreadable, or not a directory
    #[error("failed to read shader root {}", .path.display())]
    UnreadableRoot {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// the compiler process could not be started at all
    #[error("failed to invoke the shader compiler on {}", .path.display())]
    CompilerUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// True for file names like `terrain_vk.vert`: the stem ends in `_vk`
/// and the extension is a compilable stage. The match is exact and
/// case-sensitive, so `terrain_vk.VERT` and `terrain_vk.glsl` miss.
pub fn is_vulkan_shader(file_name: &str) -> bool {
    let path = Path::new(file_name);
    let Some(stem) = path.file_stem().and_then(OsStr::to_str) else {
        return false;
    };
    let Some(extension) = path.extension().and_then(OsStr::to_str) else {
        return false;
    };

    stem.ends_with(VULKAN_STEM_SUFFIX) && STAGE_EXTENSIONS.contains(&extension)
}

/// Walks the tree under `root` and compiles every eligible shader file,
/// in whatever order the filesystem yields them.
///
/// Each source `<file>` compiles to `<file>.spv` in the same directory.
/// Rejected compiles are reported and skipped over; the fatal conditions
/// are an unusable root and a compiler that can't be started.
pub fn compile_shader_tree(root: &Path, compiler: &impl SpirvCompiler) -> Result<(), WalkError> {
    if let Err(source) = fs::read_dir(root) {
        return Err(WalkError::UnreadableRoot {
            path: root.to_path_buf(),
            source,
        });
    }

    log::debug!("scanning {} for vulkan shader sources", root.display());

    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                log::warn!("skipping unreadable entry: {err}");
                continue;
            }
        };

        // classify through symlinks: a link to a shader source compiles,
        // a link to a directory is skipped without being descended into
        if entry.path().is_dir() {
            continue;
        }
        if !entry.file_name().to_str().is_some_and(is_vulkan_shader) {
            continue;
        }

        compile_shader(entry.path(), compiler)?;
    }

    Ok(())
}

/// append `.spv` to the full file name, keeping the stage extension:
/// `foo_vk.vert` maps to `foo_vk.vert.spv`
fn spirv_output_path(input: &Path) -> PathBuf {
    let mut raw = input.as_os_str().to_os_string();
    raw.push(".spv");
    PathBuf::from(raw)
}

/// one compiler invocation; the status line prints before the compiler
/// runs, and a clean exit stays silent beyond it
fn compile_shader(input: &Path, compiler: &impl SpirvCompiler) -> Result<(), WalkError> {
    let output = spirv_output_path(input);

    println!("Compiling: {}", input.display());

    let outcome = compiler
        .compile(input, &output)
        .map_err(|source| WalkError::CompilerUnavailable {
            path: input.to_path_buf(),
            source,
        })?;

    if !outcome.success {
        println!("Failed to compile {}", input.display());
        println!("{}", outcome.stderr);
    }

    println!();

    Ok(())
}
