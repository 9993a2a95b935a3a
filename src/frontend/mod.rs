//! Line-oriented text front-end. It reads commands from the input stream,
//! turns `hover`/`click` into session events and prints the canvas so that a
//! terminal (or a test harness) can stand in for a graphical board.
//!
//! [`Frontend::run`] is the main loop: it stops on `quit` or at the end of
//! input. Malformed commands are reported on the output stream and skipped.

use std::io::{BufRead, Write};

use itertools::Itertools;

use crate::chess::core::Square;
use crate::chess::game::Game;
use crate::frontend::command::Command;
use crate::interface::render::Canvas;
use crate::interface::session::{Event, InteractionState, Session};

mod command;

/// Connects a [`Session`] rendering to a [`Canvas`] with the I/O streams.
pub struct Frontend<R: BufRead, W: Write> {
    session: Session<Canvas>,
    input: R,
    output: W,
    quiet: bool,
}

impl<R: BufRead, W: Write> Frontend<R, W> {
    /// Starts a session on the given game.
    #[must_use]
    pub fn new(game: Game, input: R, output: W) -> Self {
        Self {
            session: Session::new(game, Canvas::new()),
            input,
            output,
            quiet: false,
        }
    }

    /// Whether to skip printing the board after every event.
    #[must_use]
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn session(&self) -> &Session<Canvas> {
        &self.session
    }

    /// Executes commands until `quit` or the end of input.
    ///
    /// # Errors
    ///
    /// Only I/O failures are returned; invalid commands are reported as
    /// `error: <reason>` lines and the loop continues.
    pub fn run(&mut self) -> anyhow::Result<()> {
        loop {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }
            if line.trim().is_empty() {
                continue;
            }
            let result = match Command::parse(&line) {
                Ok(Command::Quit) => break,
                Ok(command) => self.execute(command),
                Err(e) => Err(e),
            };
            if let Err(e) = result {
                log::debug!("rejected {:?}: {e:#}", line.trim());
                writeln!(self.output, "error: {e:#}")?;
            }
            self.output.flush()?;
        }
        self.output.flush()?;
        Ok(())
    }

    fn execute(&mut self, command: Command) -> anyhow::Result<()> {
        match command {
            Command::Hover(square) => self.handle_event(Event::Hover(square))?,
            Command::Click(square) => self.handle_event(Event::Click(square))?,
            Command::Display => self.print_board()?,
            Command::State => self.handle_state()?,
            Command::Rays(square) => self.handle_rays(square)?,
            Command::Pieces => self.handle_pieces()?,
            Command::SetPosition(position) => self.handle_position(&position)?,
            Command::Version => writeln!(self.output, "kibitz {}", crate::version())?,
            Command::Quit => unreachable!("quit is handled by the main loop"),
            Command::Unknown(input) => anyhow::bail!("unknown command: {input}"),
        }
        Ok(())
    }

    fn handle_event(&mut self, event: Event) -> anyhow::Result<()> {
        self.session.handle(event);
        if !self.quiet {
            self.print_board()?;
        }
        Ok(())
    }

    fn print_board(&mut self) -> anyhow::Result<()> {
        write!(
            self.output,
            "{}",
            self.session.renderer().render(self.session.game())
        )?;
        Ok(())
    }

    fn handle_state(&mut self) -> anyhow::Result<()> {
        match self.session.state() {
            InteractionState::Idle => writeln!(self.output, "idle")?,
            InteractionState::PieceSelected(id) => {
                let piece = self.session.game().piece(id);
                writeln!(
                    self.output,
                    "selected {} at {}",
                    piece.key(),
                    piece.position()
                )?;
            },
        }
        Ok(())
    }

    fn handle_rays(&mut self, square: Square) -> anyhow::Result<()> {
        let Some(piece) = self.session.game().piece_at(square) else {
            anyhow::bail!("no piece on {square}");
        };
        for ray in piece.rays() {
            if ray.is_empty() {
                writeln!(self.output, "-")?;
            } else {
                writeln!(self.output, "{}", ray.iter().join(" "))?;
            }
        }
        Ok(())
    }

    fn handle_pieces(&mut self) -> anyhow::Result<()> {
        for (_, piece) in self.session.game().pieces() {
            writeln!(self.output, "{piece}")?;
        }
        Ok(())
    }

    fn handle_position(&mut self, position: &str) -> anyhow::Result<()> {
        let game = Game::try_from(position)?;
        log::debug!("new position: {game}");
        self.session = Session::new(game, Canvas::new());
        if !self.quiet {
            self.print_board()?;
        }
        Ok(())
    }
}
