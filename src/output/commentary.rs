//! Commentary log
//!
//! One line per game listing every guess, e.g. `crane: lares,trace,crane,`.

use crate::game::GameRecord;
use std::io::{self, Write};

pub struct CommentaryLog<W: Write> {
    writer: W,
}

impl<W: Write> CommentaryLog<W> {
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Append one game
    ///
    /// # Errors
    /// Whatever the underlying writer reports.
    pub fn record(&mut self, game: &GameRecord) -> io::Result<()> {
        write!(self.writer, "{}: ", game.answer)?;
        for guess in game.guesses() {
            write!(self.writer, "{guess},")?;
        }
        writeln!(self.writer)
    }

    /// Append every game in order and flush
    ///
    /// # Errors
    /// Whatever the underlying writer reports.
    pub fn record_all<'a>(&mut self, games: impl IntoIterator<Item = &'a GameRecord>) -> io::Result<()> {
        for game in games {
            self.record(game)?;
        }
        self.writer.flush()
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}
