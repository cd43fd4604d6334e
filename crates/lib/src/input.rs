//! Input parser.

mod error;

use core::mem;
use core::ops::Range;
use std::str::from_utf8;

use bstr::BStr;

pub use self::error::{Custom, ErrorKind, IStrError};

pub(self) type Result<T> = std::result::Result<T, IStrError>;

pub(crate) const NL: u8 = b'\n';

/// Helper to parse input.
///
/// An `IStr` is a window into input data which stays alive for the remainder
/// of the process. The `index` is the absolute offset of the window into the
/// original input, so any error raised on a sub-slice can be mapped back to a
/// line and column.
#[derive(Debug, Clone, Copy)]
pub struct IStr {
    /// The data being parsed.
    data: &'static [u8],
    /// Absolute offset of `data` into the original input.
    index: usize,
}

impl IStr {
    /// Construct a new input processor.
    #[inline]
    pub fn new(data: &'static [u8], index: usize) -> Self {
        Self { data, index }
    }

    /// Access index of input string.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The absolute span covered by the remaining input.
    #[inline]
    pub fn span(&self) -> Range<usize> {
        self.index..self.index.saturating_add(self.data.len())
    }

    /// Test if input is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the length of the current input.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Get input being processed.
    #[inline]
    pub fn as_data(&self) -> &'static [u8] {
        self.data
    }

    /// Get remaining binary string of the input.
    #[inline]
    pub fn as_bstr(&self) -> &'static BStr {
        BStr::new(self.data)
    }

    /// Get the remaining input as a string, erroring if it's not valid UTF-8.
    #[inline]
    pub fn as_str(&self) -> Result<&'static str> {
        match from_utf8(self.data) {
            Ok(string) => Ok(string),
            Err(..) => Err(IStrError::new(self.span(), ErrorKind::NotUtf8)),
        }
    }

    /// Parse the next value as T.
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn next<T>(&mut self) -> Result<T>
    where
        T: FromInput,
    {
        T::from_input(self)
    }

    /// Split the remaining input into lines.
    ///
    /// A trailing newline does not produce an empty last line, and a `\r`
    /// preceding a newline is not part of the line.
    pub fn lines(mut self) -> Vec<IStr> {
        let mut lines = Vec::new();

        while let Some(mut line) = self.split_once(NL) {
            line.trim_cr();
            lines.push(line);
        }

        lines
    }

    /// Split on every occurrence of `delim`.
    ///
    /// Behaves like [`str::split`]: the iterator always yields at least one
    /// element, even if the input is empty.
    #[inline]
    pub fn split_str(self, delim: &'static str) -> SplitStr {
        SplitStr {
            rest: self,
            delim,
            done: false,
        }
    }

    /// Split exactly once on the first occurrence of `delim`, erroring if it
    /// is not present.
    pub fn split_pair(self, delim: &'static str) -> Result<(IStr, IStr)> {
        let Some(at) = memchr::memmem::find(self.data, delim.as_bytes()) else {
            return Err(IStrError::new(
                self.span(),
                ErrorKind::ExpectedDelimiter(delim),
            ));
        };

        let head = self.slice(0..at);
        let tail = self.slice(at.saturating_add(delim.len())..self.data.len());

        match (head, tail) {
            (Some(head), Some(tail)) => Ok((head, tail)),
            _ => Err(IStrError::new(self.span(), ErrorKind::UnexpectedEof)),
        }
    }

    fn split_once_at<T>(&mut self, find: T, len: usize) -> Option<IStr>
    where
        T: FnOnce(&[u8]) -> Option<usize>,
    {
        if self.data.is_empty() {
            return None;
        }

        let Some(at) = find(self.data) else {
            let index = self.index;
            self.index = self.index.saturating_add(self.data.len());
            let data = mem::take(&mut self.data);
            return Some(IStr::new(data, index));
        };

        let data = self.data.get(..at)?;
        let index = self.index;
        self.advance(at.checked_add(len)?);
        Some(IStr::new(data, index))
    }

    /// Split once at the given byte or until the end of string, returning the
    /// new IStr associated with the split.
    #[inline]
    fn split_once(&mut self, b: u8) -> Option<IStr> {
        self.split_once_at(|data| memchr::memchr(b, data), 1)
    }

    /// Strip a single trailing carriage return.
    #[inline]
    fn trim_cr(&mut self) {
        if let [rest @ .., b'\r'] = self.data {
            self.data = rest;
        }
    }

    #[inline]
    fn advance(&mut self, n: usize) {
        let n = n.min(self.data.len());
        self.data = self.data.get(n..).unwrap_or_default();
        self.index = self.index.saturating_add(n);
    }

    /// Construct a sub-range.
    #[inline]
    fn slice(&self, range: Range<usize>) -> Option<IStr> {
        let index = self.index.checked_add(range.start)?;

        Some(Self {
            data: self.data.get(range)?,
            index,
        })
    }
}

/// Iterator returned by [`IStr::split_str`].
pub struct SplitStr {
    rest: IStr,
    delim: &'static str,
    done: bool,
}

impl Iterator for SplitStr {
    type Item = IStr;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let delim = self.delim.as_bytes();

        let Some(at) = memchr::memmem::find(self.rest.data, delim) else {
            self.done = true;
            let rest = self.rest;
            self.rest.advance(rest.len());
            return Some(rest);
        };

        let head = self.rest.slice(0..at)?;
        self.rest.advance(at.saturating_add(delim.len()));
        Some(head)
    }
}

/// A value that can be parsed from input.
pub trait FromInput: Sized {
    /// Custom error kind to use.
    #[inline]
    fn error_kind() -> ErrorKind {
        ErrorKind::UnexpectedEof
    }

    /// Try to parse a value, returning `None` if there is nothing to parse.
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>>;

    /// Parse a value from a given input.
    #[inline]
    fn from_input(p: &mut IStr) -> Result<Self> {
        let index = p.index;

        let Some(value) = Self::try_from_input(p)? else {
            return Err(IStrError::new(index..p.index, Self::error_kind()));
        };

        Ok(value)
    }
}

/// Unsigned decimal spanning the whole of the input. Signs and surrounding
/// whitespace are rejected.
impl FromInput for u64 {
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        if p.is_empty() {
            return Ok(None);
        }

        let string = p.as_str()?;
        let error = || IStrError::new(p.span(), ErrorKind::NotInteger(string));

        if !string.bytes().all(|b| b.is_ascii_digit()) {
            return Err(error());
        }

        let Ok(n) = str::parse(string) else {
            return Err(error());
        };

        p.advance(string.len());
        Ok(Some(n))
    }
}

impl FromInput for &str {
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let string = p.as_str()?;
        p.advance(string.len());
        Ok(Some(string))
    }
}
