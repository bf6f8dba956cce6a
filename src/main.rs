use anyhow::{anyhow, Context, Result};
use boids::prelude::*;
use clap::{Parser, ValueEnum};
use log::{error, info};
use std::path::PathBuf;
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

#[derive(Parser, Debug)]
#[command(name = "boids", version, about = "2D flocking simulation")]
struct Args {
    /// JSON config file; missing keys use defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the spawn seed
    #[arg(short, long)]
    seed: Option<u64>,

    /// Override the neighbor read policy
    #[arg(short, long, value_enum)]
    policy: Option<Policy>,

    /// Run without a window
    #[arg(long)]
    headless: bool,

    /// Ticks to run in headless mode
    #[arg(long, default_value_t = 1000)]
    ticks: u64,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Policy {
    Live,
    Snapshot,
}

impl From<Policy> for NeighborPolicy {
    fn from(policy: Policy) -> Self {
        match policy {
            Policy::Live => NeighborPolicy::Live,
            Policy::Snapshot => NeighborPolicy::Snapshot,
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let mut config = match &args.config {
        Some(path) => SwarmConfig::from_path(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => SwarmConfig::default(),
    };
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if let Some(policy) = args.policy {
        config = config.with_neighbor_policy(policy.into());
    }

    let swarm = Swarm::new(config).context("building swarm")?;

    if args.headless {
        run_headless(swarm, args.ticks);
        return Ok(());
    }

    let event_loop = EventLoop::new().map_err(|e| anyhow!("creating event loop: {e}"))?;
    event_loop.set_control_flow(ControlFlow::Poll);
    let mut app = App::new(swarm);
    event_loop
        .run_app(&mut app)
        .map_err(|e| anyhow!("running event loop: {e}"))?;
    Ok(())
}

fn run_headless(mut swarm: Swarm, ticks: u64) {
    let mut time = Time::new();
    for _ in 0..ticks {
        swarm.tick();
        if time.update() {
            log_census(&swarm, time.fps());
        }
    }
    info!("finished {} ticks in {:.2?}", swarm.ticks(), time.elapsed());
    log_census(&swarm, time.fps());
}

fn log_census(swarm: &Swarm, fps: f32) {
    info!(
        "tick {}: {} agents, {:.0} ticks/s, colors {:?}",
        swarm.ticks(),
        swarm.len(),
        fps,
        swarm.color_counts()
    );
}

struct App {
    window: Option<Window>,
    swarm: Swarm,
    controls: Controls,
    time: Time,
}

impl App {
    fn new(swarm: Swarm) -> Self {
        let controls = Controls::new(swarm.config().width, swarm.config().height);
        Self {
            window: None,
            swarm,
            controls,
            time: Time::new(),
        }
    }

    fn refresh_title(&self) {
        if let Some(window) = &self.window {
            window.set_title(&format!(
                "boids - {} agents - {:.0} fps",
                self.swarm.len(),
                self.time.fps()
            ));
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let config = self.swarm.config();
        let attrs = Window::default_attributes()
            .with_title("boids")
            .with_inner_size(winit::dpi::LogicalSize::new(config.width, config.height));
        match event_loop.create_window(attrs) {
            Ok(window) => {
                let size = window.inner_size();
                self.controls.set_window_size(size.width, size.height);
                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => {
                error!("failed to create window: {e}");
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        if let Some(command) = self.controls.handle_event(&event) {
            command.apply(&mut self.swarm);
        }

        match event {
            WindowEvent::CloseRequested => {
                log_census(&self.swarm, self.time.fps());
                event_loop.exit();
            }
            WindowEvent::RedrawRequested => {
                self.swarm.tick();
                if self.time.update() {
                    self.refresh_title();
                }
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }
}
