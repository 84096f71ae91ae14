use std::io::{self, BufRead, Write};

use sapper_core::{GameSession, MoveOutcome, Visibility};

use crate::command::Command;
use crate::render::BoardText;

const HELP: &str = "A valid move would look like this:\n4 5\nWhere the first number and the second \
                    number are the coordinates (x and y) of your move. Both have to point at a \
                    hidden cell on the board.";
const INVALID: &str = "Invalid move. Please insert a valid move. You can also get help by \
                       pressing 'h' or 'q' to end the game.";

/// How a game driven to completion ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Ending {
    Won,
    Lost,
    Quit,
}

/// Read-evaluate-print loop feeding parsed moves into a [`GameSession`].
pub(crate) struct Driver<R, W> {
    session: GameSession,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Driver<R, W> {
    pub fn new(session: GameSession, input: R, output: W) -> Self {
        Self {
            session,
            input,
            output,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn run(&mut self) -> io::Result<Ending> {
        writeln!(self.output, "WELCOME TO MINESWEEPER!\n")?;

        loop {
            self.print_board(Visibility::Player)?;

            let Some(coords) = self.request_move()? else {
                writeln!(self.output, "Ending game ...")?;
                return Ok(Ending::Quit);
            };

            let outcome = self.session.apply_move(coords);
            if !self.session.is_finished() {
                continue;
            }

            self.print_board(Visibility::Everything)?;
            return if outcome == MoveOutcome::HitMine {
                writeln!(self.output, "\nG A M E  O V E R ...")?;
                Ok(Ending::Lost)
            } else {
                writeln!(self.output, "\nCongrats! You finished the game :)")?;
                Ok(Ending::Won)
            };
        }
    }

    /// Prompts until a playable move arrives; `None` on quit or end of input.
    fn request_move(&mut self) -> io::Result<Option<sapper_core::Coord2>> {
        let mut line = String::new();
        loop {
            write!(self.output, "Please make your move -> ")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                log::debug!("Input closed");
                return Ok(None);
            }

            match line.parse::<Command>() {
                Ok(Command::Help) => {
                    writeln!(self.output, "{HELP}")?;
                    continue;
                }
                Ok(Command::Quit) => return Ok(None),
                Ok(Command::Reveal(coords)) if self.session.validate_move(coords) => {
                    return Ok(Some(coords));
                }
                Ok(Command::Reveal(coords)) => {
                    log::debug!("Rejected move at {:?}", coords);
                }
                Err(err) => {
                    log::debug!("Rejected input {:?}: {}", line.trim_end(), err);
                }
            }
            writeln!(self.output, "{INVALID}")?;
        }
    }

    fn print_board(&mut self, visibility: Visibility) -> io::Result<()> {
        let snapshot = self.session.snapshot(visibility);
        let text = BoardText::new(&snapshot).with_exploded(self.session.triggered_mine());
        write!(self.output, "{text}")
    }
}
