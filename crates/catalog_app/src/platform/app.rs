use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;

use anyhow::Context;
use catalog_core::{update, CatalogState, Msg};
use catalog_engine::ClientSettings;
use catalog_logging::{catalog_debug, catalog_info};
use clap::Parser;
use log::LevelFilter;

use super::args::Args;
use super::effects::EffectRunner;
use super::ui::input::{self, Command, HELP};
use super::ui::render;

/// Everything the main loop reacts to: user input and engine completions.
#[derive(Debug)]
pub enum AppEvent {
    Msg(Msg),
    Help,
    Quit,
    Invalid(String),
}

impl From<Command> for AppEvent {
    fn from(command: Command) -> Self {
        match command {
            Command::Dispatch(msg) => AppEvent::Msg(msg),
            Command::Help => AppEvent::Help,
            Command::Quit => AppEvent::Quit,
            Command::Invalid(reason) => AppEvent::Invalid(reason),
        }
    }
}

pub fn run_app() -> anyhow::Result<()> {
    let args = Args::parse();
    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    catalog_logging::initialize(args.log.into(), level);

    let settings = ClientSettings::with_base_url(args.base_url.trim());
    catalog_info!("catalog starting against {}", settings.base_url);

    let (event_tx, event_rx) = mpsc::channel::<AppEvent>();
    let runner = EffectRunner::new(&settings, event_tx.clone())
        .with_context(|| format!("could not start client for {}", settings.base_url))?;

    spawn_input_reader(event_tx.clone());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "Product catalog at {}. Type 'help' for commands.", settings.base_url)?;

    let mut state = CatalogState::new();
    let _ = event_tx.send(AppEvent::Msg(Msg::LoadRequested));

    while let Ok(event) = event_rx.recv() {
        match event {
            AppEvent::Msg(msg) => {
                catalog_debug!("msg {:?}", msg);
                let (next, effects) = update(state, msg);
                state = next;
                runner.enqueue(effects);
                if state.consume_dirty() {
                    writeln!(out)?;
                    for line in render::render(&state.view()) {
                        writeln!(out, "{line}")?;
                    }
                }
            }
            AppEvent::Help => writeln!(out, "{HELP}")?,
            AppEvent::Invalid(reason) => writeln!(out, "! {reason}")?,
            AppEvent::Quit => break,
        }
        out.flush()?;
    }

    catalog_info!("catalog exiting");
    Ok(())
}

fn spawn_input_reader(event_tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if event_tx.send(input::parse_command(&line).into()).is_err() {
                return;
            }
        }
        let _ = event_tx.send(AppEvent::Quit);
    });
}
