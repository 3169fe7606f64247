//! Display bootstrap
//!
//! Acquires the window and its OpenGL context, runs the clear/present loop
//! until close is requested, and releases everything in reverse order.
//!
//! Acquisition order is fixed: error reporter, windowing subsystem, context
//! hints, window + context, context activation, function loading. Each
//! acquired resource is an owned value, so any early `?` return drops what
//! was already acquired, newest first. The window is therefore always
//! destroyed before the subsystem shuts down.

use crate::config::DisplayConfig;
use crate::foundation::time::{FrameStats, FrameTimer};
use crate::render::debug::log_gl_errors;
use crate::render::window::backend::{DisplaySurface, Platform, WindowSystem};
use std::io::Write;
use thiserror::Error;

/// Process exit status after a normal loop exit
pub const EXIT_SUCCESS: i32 = 0;

/// Process exit status after any initialization failure
pub const EXIT_FAILURE: i32 = -1;

/// Terminal bootstrap failures
#[derive(Error, Debug)]
pub enum BootstrapError {
    /// The platform windowing subsystem could not start
    #[error("Failed to initialize windowing subsystem: {0}")]
    Init(String),

    /// The platform or driver could not provide the requested window/context
    #[error("Failed to create {width}x{height} window \"{title}\"")]
    WindowCreation {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Requested title
        title: String,
    },

    /// Graphics API entry points could not be resolved
    #[error("Error initializing OpenGL function loader. Missing: {}", .0.join(", "))]
    ExtensionLoad(Vec<&'static str>),
}

impl BootstrapError {
    /// Exit status the process should report for this failure
    pub const fn exit_code(&self) -> i32 {
        EXIT_FAILURE
    }
}

/// Process-wide error reporter registered with the windowing platform
pub fn report_error(code: i32, description: &str) {
    log::error!("Error: {description} (code {code:#x})");
}

/// Linear acquire, run, release sequence for one window
pub struct DisplayBootstrap<P: Platform> {
    platform: P,
    config: DisplayConfig,
}

impl<P: Platform> DisplayBootstrap<P> {
    /// Prepare a bootstrap for `platform`; nothing is acquired yet
    pub const fn new(platform: P, config: DisplayConfig) -> Self {
        Self { platform, config }
    }

    /// Run the whole sequence, reporting context capabilities on stdout
    ///
    /// # Errors
    /// Returns the first initialization failure. Everything acquired before
    /// it has been released by the time this returns.
    pub fn run(self) -> Result<FrameStats, BootstrapError> {
        let stdout = std::io::stdout();
        self.run_with_report(&mut stdout.lock())
    }

    /// Run the whole sequence, writing the context report to `report`
    ///
    /// # Errors
    /// See [`DisplayBootstrap::run`].
    pub fn run_with_report<W: Write>(self, report: &mut W) -> Result<FrameStats, BootstrapError> {
        let Self { platform, config } = self;

        log::info!("Initializing windowing subsystem");
        let mut system = platform.init(report_error)?;

        system.apply_hints(&config.context);
        let mut surface = system.create_window(&config.window)?;

        surface.make_current();
        surface.load_functions()?;

        let info = surface.context_info();
        log_gl_errors(&surface.drain_errors(file!(), line!()));

        for line in info.report_lines() {
            if let Err(e) = writeln!(report, "{line}") {
                log::warn!("Failed to write context report: {e}");
                break;
            }
        }
        if !info.satisfies(&config.context) {
            log::warn!(
                "Requested OpenGL {} but the driver provided {}",
                config.context.version,
                info.version
            );
        }

        surface.set_clear_color(config.clear_color);

        log::info!("Entering frame loop");
        let stats = run_frame_loop(&mut system, &mut surface);
        log::info!(
            "Frame loop finished after {} frames ({:.1} fps average)",
            stats.frames,
            stats.average_fps()
        );

        // Window first, then the subsystem that created it.
        drop(surface);
        drop(system);

        Ok(stats)
    }
}

/// Clear, present, poll until the surface reports a close request
fn run_frame_loop<S: WindowSystem>(system: &mut S, surface: &mut S::Surface) -> FrameStats {
    let mut timer = FrameTimer::start();

    while !surface.should_close() {
        surface.clear();
        surface.swap_buffers();
        timer.frame_presented();

        system.poll_events();
    }

    timer.stats()
}
