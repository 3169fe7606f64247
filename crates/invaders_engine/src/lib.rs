//! # Invaders Engine
//!
//! Window and OpenGL context bootstrap for the Space Invaders client.
//!
//! ## Features
//!
//! - **GLFW Windowing**: window creation, context hints and event polling
//! - **OpenGL Loading**: function pointers resolved through the `gl` crate
//! - **Scoped Resources**: window and subsystem released by drop, newest first
//! - **Pluggable Platform**: the bootstrap is generic over [`render::window::Platform`]
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use invaders_engine::prelude::*;
//!
//! fn main() {
//!     foundation::logging::init();
//!
//!     let bootstrap = DisplayBootstrap::new(GlfwPlatform, DisplayConfig::default());
//!     let code = match bootstrap.run() {
//!         Ok(_) => EXIT_SUCCESS,
//!         Err(e) => e.exit_code(),
//!     };
//!     std::process::exit(code);
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod bootstrap;
pub mod config;
pub mod foundation;
pub mod render;

pub use bootstrap::{report_error, BootstrapError, DisplayBootstrap, EXIT_FAILURE, EXIT_SUCCESS};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        bootstrap::{BootstrapError, DisplayBootstrap, EXIT_FAILURE, EXIT_SUCCESS},
        config::{Config, DisplayConfig, WindowConfig},
        foundation::{self, time::FrameStats},
        render::{
            window::{DisplaySurface, GlfwPlatform, Platform, WindowSystem},
            ClearColor, ContextHints, ContextInfo, ContextVersion,
        },
    };
}
