//! Backend-agnostic windowing traits
//!
//! The bootstrap sequence only talks to these traits. The production
//! implementation lives in [`super::glfw_backend`]; tests drive a recording
//! implementation instead so that acquisition and teardown order can be
//! checked without a display server.
//!
//! Release is tied to `Drop`: dropping a [`DisplaySurface`] destroys the
//! window and its context, dropping a [`WindowSystem`] shuts the platform
//! layer down. Callers keep the system alive for longer than any surface it
//! created.

use crate::bootstrap::BootstrapError;
use crate::config::WindowConfig;
use crate::render::context::{ClearColor, ContextHints, ContextInfo};
use crate::render::debug::GlError;

/// Process-wide error sink handed to the platform layer
///
/// Receives the platform error code and its description. It is registered
/// once, before the platform starts, and is never unregistered.
pub type ErrorReporter = fn(i32, &str);

/// Entry point into a windowing platform
pub trait Platform {
    /// Initialized platform layer
    type System: WindowSystem;

    /// Register `reporter` and start the platform layer
    ///
    /// The reporter is installed before initialization so failures raised
    /// during startup are already routed to it.
    ///
    /// # Errors
    /// Returns [`BootstrapError::Init`] if the platform layer cannot start.
    fn init(self, reporter: ErrorReporter) -> Result<Self::System, BootstrapError>;
}

/// An initialized windowing subsystem
pub trait WindowSystem {
    /// Window plus rendering context produced by this system
    type Surface: DisplaySurface;

    /// Set the context attributes used by the next window creation
    fn apply_hints(&mut self, hints: &ContextHints);

    /// Create a window and its rendering context
    ///
    /// # Errors
    /// Returns [`BootstrapError::WindowCreation`] if the platform or driver
    /// cannot satisfy the request.
    fn create_window(&mut self, config: &WindowConfig) -> Result<Self::Surface, BootstrapError>;

    /// Process pending platform events, which may request close
    fn poll_events(&mut self);
}

/// A window with an attached rendering context
pub trait DisplaySurface {
    /// Bind the context to the calling thread
    fn make_current(&mut self);

    /// Resolve the graphics API entry points for the current context
    ///
    /// # Errors
    /// Returns [`BootstrapError::ExtensionLoad`] naming the entry points
    /// that could not be resolved.
    fn load_functions(&mut self) -> Result<(), BootstrapError>;

    /// Read back the negotiated context capabilities
    fn context_info(&self) -> ContextInfo;

    /// Drain the graphics API error queue, tagging entries with `file:line`
    fn drain_errors(&self, file: &'static str, line: u32) -> Vec<GlError>;

    /// Set the color used by [`DisplaySurface::clear`]
    fn set_clear_color(&mut self, color: ClearColor);

    /// Clear the color buffer
    fn clear(&mut self);

    /// Present the back buffer
    fn swap_buffers(&mut self);

    /// Whether the user (or the platform) has asked the window to close
    fn should_close(&self) -> bool;
}
