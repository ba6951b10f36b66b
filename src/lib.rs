//! Batch compiler driver for Vulkan GLSL shaders.
//!
//! Walks a directory tree for sources named `*_vk.vert` or `*_vk.frag`
//! and runs each one through glslc, leaving a `<name>.spv` artifact next
//! to its source.

pub mod compiler;
pub mod walk;
