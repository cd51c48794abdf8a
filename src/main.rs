use std::time::{Duration, Instant};

use anyhow::{Error, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use winit::{
    dpi::LogicalSize,
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop, EventLoopWindowTarget},
    window::{Window, WindowBuilder},
};

use sort_viz::config::{Config, FPS, WINDOW_SIZE};
use sort_viz::controller::{Controller, Flow};
use sort_viz::input::{self, Intent};
use sort_viz::renderer::Renderer;
use sort_viz::scene::{self, Layout};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::parse();
    tracing::info!(?config, "starting");
    pollster::block_on(run(config))
}

async fn run(config: Config) -> Result<()> {
    let mut controller = Controller::new(config)?;

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Sorting Algorithm Visualization")
        .with_inner_size(LogicalSize::new(WINDOW_SIZE, WINDOW_SIZE))
        .with_resizable(false)
        .build(&event_loop)?;

    // The surface borrows the window for the whole run; there is only one
    let window: &'static Window = Box::leak(Box::new(window));

    let mut renderer = Renderer::new(window).await?;
    let layout = Layout::default();
    let frame_interval = Duration::from_secs(1) / FPS;
    let mut next_frame = Instant::now();
    let mut exit = ExitStatus::default();
    let status = &mut exit;

    let outcome = event_loop.run(move |event, target| match event {
        Event::WindowEvent { event, .. } => {
            // Keys go straight to the controller so Space never presses a focused button
            if !matches!(event, WindowEvent::KeyboardInput { .. }) {
                renderer.on_window_event(&event);
            }
            match event {
                WindowEvent::CloseRequested => {
                    dispatch(&mut controller, Intent::Quit, status, target);
                }
                WindowEvent::Resized(size) => renderer.resize(size),
                WindowEvent::KeyboardInput { event, .. } => {
                    if let Some(intent) = input::from_key_event(&event) {
                        dispatch(&mut controller, intent, status, target);
                    }
                }
                WindowEvent::RedrawRequested => {
                    controller.tick(Instant::now());
                    let scene = scene::compose(&controller.view(), &layout);
                    let speed = controller.ui().speed;
                    match renderer.render(&scene, speed) {
                        Ok(widgets) => {
                            for intent in input::from_widgets(widgets, speed) {
                                dispatch(&mut controller, intent, status, target);
                            }
                        }
                        Err(err) => {
                            tracing::error!("Render error: {err:?}");
                            status.fail(err);
                            target.exit();
                        }
                    }
                }
                _ => {}
            }
        }
        Event::AboutToWait => {
            let now = Instant::now();
            if now >= next_frame {
                window.request_redraw();
                next_frame = now + frame_interval;
            }
            target.set_control_flow(ControlFlow::WaitUntil(next_frame));
        }
        _ => {}
    });
    outcome?;
    exit.into_result()
}

/// Why the event loop stopped. The first fatal error wins and becomes the
/// process result.
#[derive(Debug, Default)]
struct ExitStatus {
    error: Option<Error>,
}

impl ExitStatus {
    fn fail(&mut self, err: impl Into<Error>) {
        if self.error.is_none() {
            self.error = Some(err.into());
        }
    }

    fn into_result(self) -> Result<()> {
        self.error.map_or(Ok(()), Err)
    }
}

fn dispatch(
    controller: &mut Controller,
    intent: Intent,
    status: &mut ExitStatus,
    target: &EventLoopWindowTarget<()>,
) {
    match controller.apply(intent) {
        Ok(Flow::Continue) => {}
        Ok(Flow::Quit) => target.exit(),
        Err(err) => {
            tracing::error!("Configuration error: {err}");
            status.fail(err);
            target.exit();
        }
    }
}
