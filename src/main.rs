//! Terminal sandbox runner (default binary).
//!
//! Drives the fixed-rate frame loop: drain terminal input, advance the world
//! one tick, render, then sleep out the rest of the tick. Rendering goes
//! through a framebuffer renderer with crossterm as the backend.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event;

use tui_sandbox::core::World;
use tui_sandbox::engine::FrameLoop;
use tui_sandbox::input::{route_event, EventQueue, HeldKeyTracker, Routed};
use tui_sandbox::term::{FrameBuffer, SandboxView, TerminalRenderer, Viewport};
use tui_sandbox::types::{LoopState, DEFAULT_KEY_RELEASE_TIMEOUT_MS, TICK_MS};

/// Held keys on terminals that report releases only expire after this long.
const RELEASE_REPORTING_TIMEOUT_MS: u32 = 2_000;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// World seed (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file; filter with RUST_LOG (default: info)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Release a held movement key after this many ms without a repeat
    #[arg(long, default_value_t = DEFAULT_KEY_RELEASE_TIMEOUT_MS)]
    key_release_ms: u32,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_deref())?;

    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("starting tui-sandbox with seed {}", seed);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, seed, args.key_release_ms);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        log::error!("sandbox exited with error: {:#}", err);
    }
    result
}

fn init_logging(path: Option<&Path>) -> Result<()> {
    // stderr would draw over the alternate screen, so logs only go to a file.
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, seed: u64, key_release_ms: u32) -> Result<()> {
    let mut frame_loop = FrameLoop::new(World::new(seed));
    let view = SandboxView::default();

    let release_timeout = if term.key_release_events() {
        key_release_ms.max(RELEASE_REPORTING_TIMEOUT_MS)
    } else {
        key_release_ms
    };
    let mut held = HeldKeyTracker::new().with_key_release_timeout_ms(release_timeout);
    let mut queue = EventQueue::new();

    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut layout = view.layout(Viewport::new(w, h));
    let mut fb = FrameBuffer::new(w, h);
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        let tick_start = Instant::now();

        // Input: everything that arrived since the last tick.
        while event::poll(Duration::ZERO)? {
            if route_event(event::read()?, &mut held, &mut queue, &layout) == Routed::Resized {
                term.invalidate();
            }
        }

        // Update.
        if frame_loop.tick(queue.drain(), held.held()) == LoopState::Stopped {
            return Ok(());
        }

        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        layout = view.render_into(
            frame_loop.world(),
            frame_loop.view(),
            Viewport::new(w, h),
            &mut fb,
        );
        term.draw_swap(&mut fb)?;

        // Best-effort pacing: no catch-up when a tick runs long.
        if let Some(rest) = tick_duration.checked_sub(tick_start.elapsed()) {
            std::thread::sleep(rest);
        }
    }
}
