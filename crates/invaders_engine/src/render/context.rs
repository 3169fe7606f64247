//! OpenGL context request and capability types

use serde::{Deserialize, Serialize};
use std::fmt;

/// OpenGL version as reported by `GL_MAJOR_VERSION` / `GL_MINOR_VERSION`
///
/// Ordering is lexicographic on (major, minor), so `3.3 < 4.1 < 4.6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ContextVersion {
    /// Major version number
    pub major: i32,
    /// Minor version number
    pub minor: i32,
}

impl ContextVersion {
    /// Create a version from its components
    pub const fn new(major: i32, minor: i32) -> Self {
        Self { major, minor }
    }
}

impl fmt::Display for ContextVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Attributes requested from the windowing system before the window is created
///
/// These are hints: the driver may hand back a different context, so the
/// result has to be read back through [`ContextInfo`] rather than assumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextHints {
    /// Requested context version
    pub version: ContextVersion,
    /// Request a core profile (no deprecated fixed-function API)
    pub core_profile: bool,
    /// Request a forward-compatible context
    pub forward_compatible: bool,
}

impl Default for ContextHints {
    fn default() -> Self {
        Self {
            version: ContextVersion::new(3, 3),
            core_profile: true,
            forward_compatible: true,
        }
    }
}

/// Capabilities read back from the active context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextInfo {
    /// Negotiated context version
    pub version: ContextVersion,
    /// `GL_RENDERER` string
    pub renderer: String,
    /// `GL_SHADING_LANGUAGE_VERSION` string
    pub shading_language: String,
}

impl ContextInfo {
    /// Whether the negotiated version satisfies the requested one
    pub fn satisfies(&self, hints: &ContextHints) -> bool {
        self.version >= hints.version
    }

    /// Human-readable report lines, one per capability
    pub fn report_lines(&self) -> [String; 3] {
        [
            format!("Using OpenGL: {}", self.version),
            format!("Renderer used: {}", self.renderer),
            format!("Shading Language: {}", self.shading_language),
        ]
    }
}

/// RGBA color used by `glClearColor`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClearColor {
    /// Red component
    pub r: f32,
    /// Green component
    pub g: f32,
    /// Blue component
    pub b: f32,
    /// Alpha component
    pub a: f32,
}

impl ClearColor {
    /// Opaque red
    pub const RED: Self = Self::new(1.0, 0.0, 0.0, 1.0);

    /// Create a color from its components
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

impl Default for ClearColor {
    fn default() -> Self {
        Self::RED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(major: i32, minor: i32) -> ContextInfo {
        ContextInfo {
            version: ContextVersion::new(major, minor),
            renderer: "llvmpipe (LLVM 17.0.6, 256 bits)".to_string(),
            shading_language: "4.50".to_string(),
        }
    }

    #[test]
    fn test_version_ordering() {
        assert!(ContextVersion::new(3, 3) < ContextVersion::new(4, 1));
        assert!(ContextVersion::new(3, 2) < ContextVersion::new(3, 3));
        assert!(ContextVersion::new(4, 0) > ContextVersion::new(3, 9));
    }

    #[test]
    fn test_default_hints() {
        let hints = ContextHints::default();
        assert_eq!(hints.version, ContextVersion::new(3, 3));
        assert!(hints.core_profile);
        assert!(hints.forward_compatible);
    }

    #[test]
    fn test_satisfies_requested_version() {
        let hints = ContextHints::default();
        assert!(info(3, 3).satisfies(&hints));
        assert!(info(4, 6).satisfies(&hints));
        assert!(!info(3, 1).satisfies(&hints));
        assert!(!info(2, 1).satisfies(&hints));
    }

    #[test]
    fn test_report_lines() {
        let lines = info(4, 5).report_lines();
        assert_eq!(lines[0], "Using OpenGL: 4.5");
        assert_eq!(lines[1], "Renderer used: llvmpipe (LLVM 17.0.6, 256 bits)");
        assert_eq!(lines[2], "Shading Language: 4.50");
    }

    #[test]
    fn test_default_clear_color_is_red() {
        assert_eq!(ClearColor::default(), ClearColor::new(1.0, 0.0, 0.0, 1.0));
    }
}
