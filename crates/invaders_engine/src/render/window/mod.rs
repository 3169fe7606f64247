//! Window and rendering context management
//!
//! [`backend`] defines the platform seam used by the bootstrap,
//! [`glfw_backend`] implements it with GLFW and the `gl` loader.

pub mod backend;
#[allow(unsafe_code)]
pub mod glfw_backend;

pub use backend::{DisplaySurface, ErrorReporter, Platform, WindowSystem};
pub use glfw_backend::{GlfwPlatform, GlfwSurface, GlfwSystem};
