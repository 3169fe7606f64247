//! OpenGL error queue reporting

use std::fmt;

/// A single entry drained from the `glGetError` queue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlError {
    /// Raw error enum value
    pub code: u32,
    /// Source file that performed the check
    pub file: &'static str,
    /// Source line that performed the check
    pub line: u32,
}

impl GlError {
    /// Symbolic name of the error code
    pub const fn name(&self) -> &'static str {
        gl_error_name(self.code)
    }
}

impl fmt::Display for GlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}: {}", self.name(), self.file, self.line)
    }
}

/// Map a `glGetError` value to its symbolic name
pub const fn gl_error_name(code: u32) -> &'static str {
    match code {
        gl::INVALID_ENUM => "GL_INVALID_ENUM",
        gl::INVALID_VALUE => "GL_INVALID_VALUE",
        gl::INVALID_OPERATION => "GL_INVALID_OPERATION",
        gl::INVALID_FRAMEBUFFER_OPERATION => "GL_INVALID_FRAMEBUFFER_OPERATION",
        gl::OUT_OF_MEMORY => "GL_OUT_OF_MEMORY",
        _ => "UNKNOWN_ERROR",
    }
}

/// Log every drained error at `error` level
pub fn log_gl_errors(errors: &[GlError]) {
    for error in errors {
        log::error!("{error}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_error_names() {
        assert_eq!(gl_error_name(0x0500), "GL_INVALID_ENUM");
        assert_eq!(gl_error_name(0x0501), "GL_INVALID_VALUE");
        assert_eq!(gl_error_name(0x0502), "GL_INVALID_OPERATION");
        assert_eq!(gl_error_name(0x0505), "GL_OUT_OF_MEMORY");
        assert_eq!(gl_error_name(0x0506), "GL_INVALID_FRAMEBUFFER_OPERATION");
    }

    #[test]
    fn test_unknown_error_name() {
        assert_eq!(gl_error_name(0x0503), "UNKNOWN_ERROR");
        assert_eq!(gl_error_name(0xdead), "UNKNOWN_ERROR");
    }

    #[test]
    fn test_display_includes_location() {
        let error = GlError { code: gl::INVALID_VALUE, file: "src/render/window/glfw.rs", line: 42 };
        assert_eq!(error.to_string(), "GL_INVALID_VALUE - src/render/window/glfw.rs: 42");
    }
}
