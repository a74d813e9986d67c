//! Line-oriented host for driving the engine without a terminal UI
//!
//! One command per input line; every command that may change the game is
//! answered with a JSON snapshot on its own line. The host drives gravity
//! explicitly with `tick`.

use crate::game::{Command, Game};
use std::io::{self, BufRead, Write};
use tracing::{debug, warn};

/// A parsed input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    Start,
    Restart,
    Pause,
    Tick,
    Input(Command),
    Snapshot,
    Quit,
}

impl Request {
    pub fn parse(line: &str) -> Option<Request> {
        let request = match line.trim().to_ascii_lowercase().as_str() {
            "start" => Request::Start,
            "restart" => Request::Restart,
            "pause" => Request::Pause,
            "tick" => Request::Tick,
            "left" => Request::Input(Command::MoveLeft),
            "right" => Request::Input(Command::MoveRight),
            "down" => Request::Input(Command::SoftDrop),
            "rotate" => Request::Input(Command::Rotate),
            "snapshot" => Request::Snapshot,
            "quit" | "exit" => Request::Quit,
            _ => return None,
        };
        Some(request)
    }
}

/// Serve requests from `input` until EOF or `quit`
pub fn run<R: BufRead, W: Write>(game: &mut Game, input: R, mut output: W) -> io::Result<()> {
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let Some(request) = Request::parse(&line) else {
            warn!("Unknown headless command: {:?}", line.trim());
            continue;
        };
        debug!("Headless request {:?}", request);

        match request {
            Request::Quit => break,
            Request::Start | Request::Restart if !game.accepts_start() => {
                debug!("Ignoring {:?} during a game in progress", request);
            }
            Request::Start => game.start(),
            Request::Restart => game.restart(),
            Request::Pause => game.toggle_pause(),
            Request::Tick => {
                game.tick();
            }
            Request::Input(command) => {
                game.handle_input(command);
            }
            Request::Snapshot => {}
        }

        serde_json::to_writer(&mut output, &game.snapshot())?;
        writeln!(output)?;
    }
    output.flush()
}
