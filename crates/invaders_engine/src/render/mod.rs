//! Rendering context types and window backends

pub mod context;
pub mod debug;
pub mod window;

pub use context::{ClearColor, ContextHints, ContextInfo, ContextVersion};
pub use debug::{gl_error_name, GlError};
