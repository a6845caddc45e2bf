use crate::player::Player;
use lib::janggi::{Move, Position};
use std::io::{self, BufRead, BufReader, ErrorKind, Lines, Read, Write};
use std::{cell::RefCell, fmt::Display, rc::Rc};
use tracing::{instrument, warn};

#[derive(Debug)]
struct Io<W: Write, R: Read> {
    writer: W,
    reader: Lines<BufReader<R>>,
}

impl<W: Write, R: Read> Io<W, R> {
    #[instrument(level = "trace", skip(self), ret, err)]
    fn recv(&mut self) -> io::Result<String> {
        self.reader.next().ok_or(ErrorKind::UnexpectedEof)?
    }

    #[instrument(level = "trace", skip(self, msg), err, fields(%msg))]
    fn send<T: Display>(&mut self, msg: T) -> io::Result<()> {
        writeln!(&mut self.writer, "{}", msg)?;
        self.writer.flush()
    }
}

/// A [`Player`] that reads moves typed on a terminal.
///
/// Clones share the same underlying streams, so a single terminal may play both sides.
#[derive(Debug)]
pub struct Terminal<W: Write, R: Read> {
    io: Rc<RefCell<Io<W, R>>>,
}

impl<W: Write, R: Read> Clone for Terminal<W, R> {
    fn clone(&self) -> Self {
        Terminal {
            io: self.io.clone(),
        }
    }
}

impl<W: Write, R: Read> Terminal<W, R> {
    pub fn new(writer: W, reader: R) -> Self {
        Terminal {
            io: Rc::new(RefCell::new(Io {
                writer,
                reader: BufReader::new(reader).lines(),
            })),
        }
    }
}

impl<W: Write, R: Read> Player for Terminal<W, R> {
    type Error = io::Error;

    /// Prints the [`Position`] and reads lines until one of them parses as a [`Move`].
    #[instrument(level = "debug", skip(self, pos), ret, err, fields(turn = %pos.turn()))]
    fn play(&mut self, pos: &Position) -> Result<Move, Self::Error> {
        let mut io = self.io.borrow_mut();
        io.send(pos)?;

        loop {
            let line = io.recv()?;
            match line.parse() {
                Ok(m) => break Ok(m),
                Err(e) => {
                    warn!(%line, "{}", e);
                    io.send(format_args!("`{}` is not a move, try e.g. `a7a6`", line.trim()))?;
                }
            }
        }
    }
}
