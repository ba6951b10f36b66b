use std::ffi::OsString;
use std::io;
use std::path::Path;
use std::process::Command;

/// The slice of a compiler run the walker consumes: whether it exited
/// cleanly, and what it wrote to stderr.
#[derive(Debug, Clone)]
pub struct CompileOutput {
    pub success: bool,
    pub stderr: String,
}

/// An external GLSL-to-SPIR-V compiler, invoked once per shader file.
///
/// [`Glslc`] is the real thing; tests substitute an in-memory fake so
/// they don't depend on the Vulkan SDK being installed.
pub trait SpirvCompiler {
    /// Compile `input` into `output`, blocking until the compiler exits.
    ///
    /// Errors only when the compiler process can't be started at all; a
    /// compile the compiler rejects is an `Ok` with `success: false`.
    fn compile(&self, input: &Path, output: &Path) -> io::Result<CompileOutput>;
}

/// Shells out to the glslc binary from the Vulkan SDK.
#[derive(Debug)]
pub struct Glslc {
    program: OsString,
}

impl Glslc {
    /// use a specific executable name or path instead of plain `glslc`
    pub fn with_program(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for Glslc {
    fn default() -> Self {
        Self::with_program("glslc")
    }
}

impl SpirvCompiler for Glslc {
    fn compile(&self, input: &Path, output: &Path) -> io::Result<CompileOutput> {
        let captured = Command::new(&self.program)
            .arg(input)
            .arg("-o")
            .arg(output)
            .output()?;

        Ok(CompileOutput {
            success: captured.status.success(),
            stderr: String::from_utf8_lossy(&captured.stderr).into_owned(),
        })
    }
}
