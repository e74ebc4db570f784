//! Terminal water sort runner (default binary).
//!
//! It uses crossterm for input and the framebuffer renderer from
//! `water_sort::term`. Logs go to a file, never to the terminal in use.

use std::fs::File;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use log::{debug, info};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use water_sort::core::{generate_level, EventSink, GameEvent, GameSession, SimpleRng};
use water_sort::input::{handle_key_event, should_quit, InputHandler};
use water_sort::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use water_sort::types::Season;

#[derive(Parser, Debug)]
#[command(name = "water-sort", about = "Water sort puzzle for the terminal")]
struct Args {
    /// Color theme: spring, summer, fall or winter
    #[arg(short, long, default_value = "spring", value_parser = parse_season, env = "WATER_SORT_SEASON")]
    season: Season,

    /// Level to start on (1-based)
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..), env = "WATER_SORT_LEVEL")]
    level: u32,

    /// Seed for level generation; taken from the clock when omitted
    #[arg(long, env = "WATER_SORT_SEED")]
    seed: Option<u32>,

    /// Print the generated level as JSON and exit
    #[arg(long, env = "WATER_SORT_DUMP")]
    dump: bool,

    /// Log file path
    #[arg(long, default_value = "water-sort.log", env = "WATER_SORT_LOG_FILE")]
    log_file: String,

    /// Log level: off, error, warn, info, debug, trace
    #[arg(long, default_value = "info", env = "WATER_SORT_LOG_LEVEL")]
    log_level: LevelFilter,
}

fn parse_season(s: &str) -> Result<Season, String> {
    Season::from_str(s).ok_or_else(|| format!("unknown season '{}'", s))
}

/// Writes session events to the log.
struct LogSink;

impl EventSink for LogSink {
    fn on_event(&mut self, event: &GameEvent) {
        match event {
            GameEvent::LevelWon { .. } | GameEvent::LevelLost | GameEvent::LevelStarted { .. } => {
                info!("{:?}", event)
            }
            _ => debug!("{:?}", event),
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(args.log_level, log_config, log_file);
    }

    let seed = args.seed.unwrap_or_else(clock_seed);
    let level_index = args.level - 1;
    info!(
        "water-sort starting: season={} level={} seed={}",
        args.season.as_str(),
        args.level,
        seed
    );

    if args.dump {
        let mut rng = SimpleRng::new(seed);
        let level = generate_level(level_index, &args.season.palette(), &mut rng);
        let json = serde_json::to_string_pretty(&level).context("serialize level")?;
        println!("{}", json);
        return Ok(());
    }

    let mut session = GameSession::new(args.season, level_index, SimpleRng::new(seed));

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session);

    // Always try to restore terminal state.
    let _ = term.exit();
    info!("water-sort exiting");
    result
}

fn run(term: &mut TerminalRenderer, session: &mut GameSession) -> Result<()> {
    let view = GameView::default();
    let mut input = InputHandler::new(session.board().len());
    let mut sink = LogSink;
    let mut fb = FrameBuffer::new(0, 0);

    session.drain_events(&mut sink);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(
            &session.snapshot(),
            Some(input.cursor()),
            Viewport::new(w, h),
            &mut fb,
        );
        term.draw_swap(&mut fb)?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key).and_then(|a| input.handle(a)) {
                    session.apply_action(action);
                    input.set_tube_count(session.board().len());
                }
                session.drain_events(&mut sink);
            }
            Event::Resize(..) => term.invalidate(),
            _ => {}
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}
