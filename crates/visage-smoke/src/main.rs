//! Manual smoke test: one window, one fill, one circle. `q`, Escape or closing
//! the window quits.

use anyhow::{Context, Result};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use visage_graphics::canvas::Canvas;
use visage_graphics::device::Renderer;
use visage_graphics::logging::{LoggingConfig, init_logging};
use visage_graphics::paint::Color;

/// Window configuration for the smoke run.
#[derive(Debug, Clone)]
struct SmokeConfig {
    title: String,
    width: u32,
    height: u32,
}

impl Default for SmokeConfig {
    fn default() -> Self {
        Self {
            title: "visage smoke".to_string(),
            width: 800,
            height: 600,
        }
    }
}

struct Smoke {
    config: SmokeConfig,
    window: Option<Window>,
    canvas: Canvas,
}

impl Smoke {
    fn new(config: SmokeConfig) -> Self {
        Self {
            config,
            window: None,
            canvas: Canvas::new(),
        }
    }

    fn open(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(LogicalSize::new(self.config.width, self.config.height))
            .with_resizable(false);
        let window = event_loop.create_window(attrs).context("failed to create window")?;

        let renderer = Renderer::instance();
        renderer.check_initialization(Some(&window));
        if !renderer.supported() {
            log::warn!(
                "renderer unsupported: {}",
                renderer.error_message().unwrap_or("unknown error")
            );
        }

        let size = window.inner_size();
        self.canvas
            .pair_to_window_handle(&window, size.width, size.height)
            .context("failed to pair canvas to window")?;
        self.canvas.set_dpi_scale(window.scale_factor() as f32);
        log::info!(
            "canvas paired ({}x{}) via {}",
            size.width,
            size.height,
            self.canvas.backend_name()
        );

        window.request_redraw();
        self.window = Some(window);
        Ok(())
    }

    fn draw(&mut self) {
        let canvas = &mut self.canvas;
        let (w, h) = (canvas.width() as f32, canvas.height() as f32);

        canvas.set_color(Color::from_argb(0xff000066));
        canvas.fill(0.0, 0.0, w, h);
        canvas.set_color(Color::from_argb(0xff00ffff));
        canvas.circle(340.0, 240.0, 120.0);

        if let Err(e) = canvas.submit(0) {
            log::error!("submit failed: {e}");
        }
    }
}

fn is_quit_key(event: &KeyEvent) -> bool {
    event.state == ElementState::Pressed
        && matches!(
            event.physical_key,
            PhysicalKey::Code(KeyCode::KeyQ | KeyCode::Escape)
        )
}

impl ApplicationHandler for Smoke {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.open(event_loop) {
            log::error!("{e:#}");
            event_loop.exit();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput { event, .. } if is_quit_key(&event) => event_loop.exit(),
            WindowEvent::Resized(size) => {
                self.canvas.set_dimensions(size.width, size.height);
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            WindowEvent::RedrawRequested => self.draw(),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        event_loop.set_control_flow(ControlFlow::Wait);
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
    let mut app = Smoke::new(SmokeConfig::default());
    event_loop
        .run_app(&mut app)
        .context("winit event loop terminated with error")?;

    log::info!("smoke run finished after {} frames", app.canvas.frame_count());
    Ok(())
}
