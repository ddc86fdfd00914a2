//! Interactive menu loop.

use std::io::{self, BufRead, Write};

use dispatch_core::{Action, Dispatcher};
use tracing::debug;

use crate::menu::{self, Choice, ParseError};
use crate::render;

/// Drives a dispatcher from line-based input until the user quits or the
/// input ends.
pub struct Session<R, W> {
    dispatcher: Dispatcher,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(dispatcher: Dispatcher, input: R, output: W) -> Self {
        Session {
            dispatcher,
            input,
            output,
        }
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Show state and menu, read a choice, act; repeat.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.output, "{}", render::render_state(&self.dispatcher))?;
            write!(self.output, "\n{}", render::MENU)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                debug!("input closed");
                writeln!(self.output, "\n{}", render::FAREWELL)?;
                return Ok(());
            }

            match menu::parse_choice(&line) {
                Ok(Choice::Quit) => {
                    writeln!(self.output, "\n{}", render::FAREWELL)?;
                    return Ok(());
                }
                Ok(Choice::Act(action)) => {
                    for message in self.perform(action) {
                        writeln!(self.output, "\n{message}")?;
                    }
                }
                Err(err) => {
                    if let ParseError::NotANumber = err {
                        debug!(input = line.trim(), "discarding non-numeric input");
                    }
                    writeln!(self.output, "\n{}", render::INVALID_CHOICE)?;
                }
            }
        }
    }

    fn perform(&mut self, action: Action) -> Vec<String> {
        let report = match action {
            Action::Play => self.dispatcher.play(),
            Action::Reserve => self.dispatcher.reserve(),
            Action::UseReserved => self.dispatcher.use_reserved(),
            Action::Swap => self.dispatcher.swap(),
            Action::Invert => self.dispatcher.invert(),
            Action::Undo => return vec![render::render_undo(&self.dispatcher.undo())],
        };
        render::render_report(&report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dispatch_core::Piece;

    fn run_script(seed: &[&str], script: &str) -> (Dispatcher, String) {
        let mut dispatcher = Dispatcher::new();
        dispatcher.seed(seed.iter().copied());
        let mut output = Vec::new();
        let mut session = Session::new(dispatcher, script.as_bytes(), &mut output);
        session.run().unwrap();
        let dispatcher = session.dispatcher().clone();
        (dispatcher, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_play_then_quit() {
        let (d, out) = run_script(&["I", "J", "L"], "1\n0\n");
        assert_eq!(d.stack().peek_top(), Ok(&Piece::new("I")));
        assert_eq!(d.queue().len(), 2);
        assert!(out.contains("PIECE PLAYED: 'I'. Added to the stack."));
        assert!(out.contains("Reserve stack (in play):  [ I <- Top ]"));
        assert!(out.ends_with(&format!("{}\n", render::FAREWELL)));
    }

    #[test]
    fn test_undo_through_menu() {
        let (d, out) = run_script(&["I", "J", "L"], "1\n5\n0\n");
        assert_eq!(d.queue().len(), 3);
        assert!(d.stack().is_empty());
        assert!(out.contains("Last move (play) undone."));
    }

    #[test]
    fn test_bad_input_reprompts() {
        let (d, out) = run_script(&["T"], "hello\n9\n2\n0\n");
        assert!(d.queue().is_empty());
        assert_eq!(out.matches(render::INVALID_CHOICE).count(), 2);
        assert!(out.contains("PIECE RESERVED/DISCARDED: 'T'"));
    }

    #[test]
    fn test_eof_ends_session() {
        let (d, out) = run_script(&["O"], "6\n");
        assert_eq!(d.stack().len(), 1);
        assert!(out.contains("INVERSION COMPLETE"));
        assert!(out.contains(render::FAREWELL));
    }
}
