use anyhow::{Context, Result};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Fullscreen, Window, WindowId};

use sgl_engine::error::native::PLATFORM_ERROR;
use sgl_engine::input::keys::{KEY_ESCAPE, KEY_F11, KEY_R};
use sgl_engine::input::platform::winit::{map_modifiers, translate_key_event};
use sgl_engine::input::{Keyboard, Modifiers};
use sgl_engine::logging::{
    init_logging, Cause, ErrorCallback, Level, Logger, LoggerConfig, LoggingConfig,
};

/// Single-window driver: feeds key events into the keyboard and reacts to
/// typed keys.
struct Studio {
    logger: Logger,
    on_native_error: ErrorCallback,
    keyboard: Keyboard,
    modifiers: Modifiers,
    window: Option<Window>,
}

impl Studio {
    fn new(logger: Logger) -> Self {
        Self {
            on_native_error: logger.error_callback(),
            keyboard: Keyboard::glfw().with_logger(logger.clone()),
            logger,
            modifiers: Modifiers::default(),
            window: None,
        }
    }

    fn typed(&self, code: u32) -> bool {
        self.keyboard.was_typed(code).unwrap_or(false)
    }

    fn react_to_keys(&self, event_loop: &ActiveEventLoop) {
        let Some(window) = &self.window else {
            return;
        };

        if self.typed(KEY_ESCAPE) {
            self.logger.info("escape typed, closing");
            event_loop.exit();
        } else if self.typed(KEY_F11) {
            let fullscreen = match window.fullscreen() {
                Some(_) => None,
                None => Some(Fullscreen::Borderless(None)),
            };
            self.logger.info(format!("fullscreen: {}", fullscreen.is_some()));
            window.set_fullscreen(fullscreen);
        } else if self.typed(KEY_R) {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for Studio {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title("SGL Studio")
            .with_inner_size(LogicalSize::new(800.0, 600.0));

        match event_loop.create_window(attrs) {
            Ok(window) => {
                log::debug!("window created: {:?}", window.id());
                self.window = Some(window);
            }
            Err(e) => {
                (self.on_native_error)(PLATFORM_ERROR, &e.to_string());
                event_loop.exit();
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        event_loop.set_control_flow(ControlFlow::Wait);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::ModifiersChanged(m) => {
                self.modifiers = map_modifiers(m.state());
            }

            WindowEvent::KeyboardInput { event, .. } => {
                let Some(key) = translate_key_event(&event, self.modifiers) else {
                    return;
                };
                if let Err(e) = self.keyboard.apply(key) {
                    self.logger
                        .log_with_cause(Cause::new(e), Level::Warning, "key event rejected");
                    return;
                }
                self.react_to_keys(event_loop);
            }

            _ => {}
        }
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let logger = Logger::new(LoggerConfig::named("Main Logger")).context("failed to start logger")?;
    logger.install_panic_hook();
    logger.info("Started SGL Studio");

    let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
    let mut studio = Studio::new(logger.clone());

    let result = event_loop
        .run_app(&mut studio)
        .context("winit event loop terminated with error");

    logger.info("SGL Studio closed");
    logger.shutdown();
    result
}
