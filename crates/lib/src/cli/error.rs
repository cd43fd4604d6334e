use core::fmt;
use core::ops::Range;

use crate::input::{IStr, IStrError, NL};

/// Associate an error with the position in the input it refers to.
///
/// The error chain is searched for an [IStrError]; errors without one are
/// reported at the start of the input.
pub fn error_context(path: &str, data: IStr, error: anyhow::Error) -> anyhow::Error {
    let span = find_range(&error);
    let pos = pos_from(data.as_data(), span);

    error.context(ErrorContext {
        path: path.into(),
        pos,
    })
}

/// A line and column combination, zero-based.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LineCol {
    line: usize,
    column: usize,
}

impl LineCol {
    pub(crate) const EMPTY: Self = Self::new(0, 0);

    pub(crate) const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

/// Need to be able to unwrap an error fully in case it's threaded through
/// multiple layers of processing.
fn find_range(error: &anyhow::Error) -> Range<usize> {
    for e in error.chain() {
        if let Some(e) = e.downcast_ref::<IStrError>() {
            return e.span();
        }
    }

    0..0
}

/// Get the input position based on the given span.
pub(crate) fn pos_from(data: &[u8], span: Range<usize>) -> LineCol {
    let Some(before) = data.get(..span.start) else {
        return LineCol::EMPTY;
    };

    let line = memchr::memchr_iter(NL, before).count();
    let start = memchr::memrchr(NL, before).map_or(0, |n| n + 1);
    LineCol::new(line, span.start - start)
}

/// Various forms of input errors.
#[derive(Debug)]
struct ErrorContext {
    path: Box<str>,
    pos: LineCol,
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{path}:{pos}", path = self.path, pos = self.pos)
    }
}

#[cfg(test)]
mod tests {
    use super::{error_context, pos_from, LineCol};
    use crate::input::{IStr, IStrError};

    #[test]
    fn test_pos_from() {
        let data = b"ab\ncd\n\nef";
        assert_eq!(pos_from(data, 0..1), LineCol::new(0, 0));
        assert_eq!(pos_from(data, 4..5), LineCol::new(1, 1));
        assert_eq!(pos_from(data, 7..9), LineCol::new(3, 0));
        assert_eq!(pos_from(data, 40..41), LineCol::EMPTY);
    }

    #[test]
    fn test_error_context() {
        let input = IStr::new(b"Game 1: 3 blue\nGame 2: x red\n", 0);
        let error = IStrError::condition(23..24, "bad", None);
        let error = anyhow::Error::from(error).context("parsing game");
        let error = error_context("inputs/d02.txt", input, error);
        assert_eq!(error.to_string(), "inputs/d02.txt:2:9");
    }
}
