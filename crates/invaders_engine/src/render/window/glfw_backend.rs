//! Window management using GLFW
//!
//! Provides the OpenGL window, context and function loading used by the
//! bootstrap. GL entry points are resolved through the `gl` crate.

use crate::bootstrap::BootstrapError;
use crate::config::WindowConfig;
use crate::render::context::{ClearColor, ContextHints, ContextInfo, ContextVersion};
use crate::render::debug::GlError;
use crate::render::window::backend::{DisplaySurface, ErrorReporter, Platform, WindowSystem};
use glfw::{Context, OpenGlProfileHint, WindowHint, WindowMode};
use std::ffi::CStr;

/// Upper bound on entries drained per error check
const MAX_DRAINED_ERRORS: usize = 32;

/// The GLFW windowing platform
#[derive(Debug, Default, Clone, Copy)]
pub struct GlfwPlatform;

impl Platform for GlfwPlatform {
    type System = GlfwSystem;

    fn init(self, reporter: ErrorReporter) -> Result<GlfwSystem, BootstrapError> {
        // glfw-rs registers the callback before calling glfwInit.
        let glfw = glfw::init(move |error: glfw::Error, description: String| {
            reporter(error as i32, &description);
        })
        .map_err(|e| BootstrapError::Init(format!("{e:?}")))?;

        log::info!("GLFW {} initialized", glfw::get_version_string());
        Ok(GlfwSystem { glfw })
    }
}

/// Initialized GLFW library
///
/// GLFW terminates when the last `glfw::Glfw` handle is dropped. Windows
/// hold their own handle, so termination never happens under a live window.
pub struct GlfwSystem {
    glfw: glfw::Glfw,
}

impl WindowSystem for GlfwSystem {
    type Surface = GlfwSurface;

    fn apply_hints(&mut self, hints: &ContextHints) {
        let profile = if hints.core_profile {
            OpenGlProfileHint::Core
        } else {
            OpenGlProfileHint::Any
        };
        let major = u32::try_from(hints.version.major).unwrap_or_default();
        let minor = u32::try_from(hints.version.minor).unwrap_or_default();

        self.glfw.window_hint(WindowHint::OpenGlProfile(profile));
        self.glfw.window_hint(WindowHint::ContextVersion(major, minor));
        self.glfw.window_hint(WindowHint::OpenGlForwardCompat(hints.forward_compatible));
        log::debug!("Requested OpenGL {} context (core: {}, forward compatible: {})",
            hints.version, hints.core_profile, hints.forward_compatible);
    }

    fn create_window(&mut self, config: &WindowConfig) -> Result<GlfwSurface, BootstrapError> {
        let (mut window, events) = self
            .glfw
            .create_window(config.width, config.height, &config.title, WindowMode::Windowed)
            .ok_or_else(|| BootstrapError::WindowCreation {
                width: config.width,
                height: config.height,
                title: config.title.clone(),
            })?;

        window.set_close_polling(true);

        log::info!("Created {}x{} window \"{}\"", config.width, config.height, config.title);
        Ok(GlfwSurface { window, events })
    }

    fn poll_events(&mut self) {
        self.glfw.poll_events();
    }
}

impl Drop for GlfwSystem {
    fn drop(&mut self) {
        log::debug!("Shutting down GLFW");
    }
}

/// GLFW window owning an OpenGL context
pub struct GlfwSurface {
    window: glfw::PWindow,
    events: glfw::GlfwReceiver<(f64, glfw::WindowEvent)>,
}

impl DisplaySurface for GlfwSurface {
    fn make_current(&mut self) {
        self.window.make_current();
    }

    fn load_functions(&mut self) -> Result<(), BootstrapError> {
        let window = &mut self.window;
        gl::load_with(|symbol| window.get_proc_address(symbol) as *const _);

        let required = [
            ("glClear", gl::Clear::is_loaded()),
            ("glClearColor", gl::ClearColor::is_loaded()),
            ("glGetError", gl::GetError::is_loaded()),
            ("glGetIntegerv", gl::GetIntegerv::is_loaded()),
            ("glGetString", gl::GetString::is_loaded()),
        ];
        let missing: Vec<&'static str> = required
            .into_iter()
            .filter(|(_, loaded)| !loaded)
            .map(|(name, _)| name)
            .collect();

        if missing.is_empty() {
            log::debug!("OpenGL function pointers loaded");
            Ok(())
        } else {
            Err(BootstrapError::ExtensionLoad(missing))
        }
    }

    fn context_info(&self) -> ContextInfo {
        let mut major = 0;
        let mut minor = 0;
        // SAFETY: called with the context current and functions loaded.
        unsafe {
            gl::GetIntegerv(gl::MAJOR_VERSION, &mut major);
            gl::GetIntegerv(gl::MINOR_VERSION, &mut minor);
        }

        ContextInfo {
            version: ContextVersion::new(major, minor),
            renderer: gl_string(gl::RENDERER),
            shading_language: gl_string(gl::SHADING_LANGUAGE_VERSION),
        }
    }

    fn drain_errors(&self, file: &'static str, line: u32) -> Vec<GlError> {
        let mut errors = Vec::new();
        while errors.len() < MAX_DRAINED_ERRORS {
            // SAFETY: glGetError has no preconditions beyond a current context.
            let code = unsafe { gl::GetError() };
            if code == gl::NO_ERROR {
                break;
            }
            errors.push(GlError { code, file, line });
        }
        errors
    }

    fn set_clear_color(&mut self, color: ClearColor) {
        // SAFETY: plain state setter on the current context.
        unsafe { gl::ClearColor(color.r, color.g, color.b, color.a) };
    }

    fn clear(&mut self) {
        // SAFETY: plain draw call on the current context.
        unsafe { gl::Clear(gl::COLOR_BUFFER_BIT) };
    }

    fn swap_buffers(&mut self) {
        self.window.swap_buffers();
    }

    fn should_close(&self) -> bool {
        // Events are only traced; close is tracked by GLFW's flag.
        for (_, event) in glfw::flush_messages(&self.events) {
            log::trace!("Window event: {event:?}");
        }
        self.window.should_close()
    }
}

impl Drop for GlfwSurface {
    fn drop(&mut self) {
        log::debug!("Destroying window");
    }
}

/// Read a `glGetString` value, tolerating a null return
fn gl_string(name: gl::types::GLenum) -> String {
    // SAFETY: glGetString returns either null or a static NUL-terminated string.
    unsafe {
        let ptr = gl::GetString(name);
        if ptr.is_null() {
            return String::from("<unavailable>");
        }
        CStr::from_ptr(ptr.cast()).to_string_lossy().into_owned()
    }
}
