use core::fmt;
use std::io::{self, Write};

use serde::Serialize;

/// The pair of answers produced by a puzzle.
#[derive(Serialize)]
struct Answers<A, B> {
    one: A,
    two: B,
}

pub(crate) struct Output<O> {
    out: O,
    kind: OutputKind,
}

#[derive(Debug, Clone, Copy)]
pub(crate) enum OutputKind {
    Json,
    Normal,
}

impl<O> Output<O>
where
    O: Write,
{
    pub(crate) fn new(out: O, kind: OutputKind) -> Self {
        Self { out, kind }
    }

    pub(crate) fn error(&mut self, m: impl fmt::Display) -> io::Result<()> {
        self.message(MessageKind::Error, m)
    }

    pub(crate) fn answers<A, B>(&mut self, one: A, two: B) -> io::Result<()>
    where
        A: fmt::Display + Serialize,
        B: fmt::Display + Serialize,
    {
        match &self.kind {
            OutputKind::Json => {
                self.json(&Line {
                    ty: LineType::Answers,
                    data: Answers { one, two },
                })?;
            }
            OutputKind::Normal => {
                writeln!(self.out, "Part one: {one}")?;
                writeln!(self.out, "Part two: {two}")?;
            }
        }

        Ok(())
    }

    fn message(&mut self, kind: MessageKind, m: impl fmt::Display) -> io::Result<()> {
        match &self.kind {
            OutputKind::Json => {
                self.json(&Line {
                    ty: LineType::Message,
                    data: Message {
                        kind,
                        output: m.to_string(),
                    },
                })?;
            }
            OutputKind::Normal => {
                writeln!(self.out, "{kind}: {m}")?;
            }
        }

        Ok(())
    }

    fn json<T>(&mut self, m: &T) -> io::Result<()>
    where
        T: Serialize,
    {
        serde_json::to_writer(&mut self.out, m)?;
        writeln!(self.out)?;
        Ok(())
    }
}

/// A single line of JSON output.
#[derive(Serialize)]
struct Line<T> {
    #[serde(rename = "type")]
    ty: LineType,
    data: T,
}

#[derive(Serialize)]
#[serde(rename_all = "kebab-case")]
enum LineType {
    Message,
    Answers,
}

#[derive(Serialize)]
struct Message {
    kind: MessageKind,
    output: String,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "kebab-case")]
enum MessageKind {
    Error,
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageKind::Error => write!(f, "error"),
        }
    }
}
