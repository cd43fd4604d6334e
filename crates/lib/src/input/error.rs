use core::fmt;
use core::ops::Range;

use bstr::BStr;

macro_rules! bails {
    ($vis:vis enum $name:ident { $($variant:ident($ty:ty)),* $(,)? }) => {
        #[derive(Debug, Clone, Copy)]
        $vis enum $name {
            $($variant($ty),)*
        }

        $(
            impl From<$ty> for $name {
                #[inline]
                fn from(value: $ty) -> $name {
                    $name::$variant(value)
                }
            }
        )*
    }
}

bails! {
    pub enum Custom {
        BStr(&'static BStr),
    }
}

impl fmt::Display for Custom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Custom::BStr(string) => write!(f, "{string:?}"),
        }
    }
}

#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
    NotInteger(&'static str),
    NotUtf8,
    ExpectedDelimiter(&'static str),
    UnexpectedEof,
    Condition(&'static str, Option<Custom>),
    Boxed(anyhow::Error),
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::NotInteger(n) => write!(f, "not an integer or integer overflow `{n}`"),
            ErrorKind::NotUtf8 => write!(f, "not utf-8"),
            ErrorKind::ExpectedDelimiter(delim) => write!(f, "expected delimiter {delim:?}"),
            ErrorKind::UnexpectedEof => write!(f, "unexpected eof"),
            ErrorKind::Condition(condition, custom) => {
                if let Some(custom) = custom {
                    write!(f, "condition `{condition}` failed: {custom}")
                } else {
                    write!(f, "condition `{condition}` failed")
                }
            }
            ErrorKind::Boxed(e) => write!(f, "{e}"),
        }
    }
}

/// Error raised through string processing.
#[derive(Debug)]
pub struct IStrError {
    pub(crate) span: Range<usize>,
    pub(crate) kind: ErrorKind,
}

impl IStrError {
    /// Construct a new input error.
    #[inline]
    pub fn new(span: Range<usize>, kind: ErrorKind) -> Self {
        Self { span, kind }
    }

    /// Construct an error for a failed condition over the given span.
    #[inline]
    pub fn condition(span: Range<usize>, condition: &'static str, custom: Option<Custom>) -> Self {
        Self::new(span, ErrorKind::Condition(condition, custom))
    }

    /// The span of input this error refers to.
    #[inline]
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    #[inline]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl fmt::Display for IStrError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (at {:?})", self.kind, self.span)
    }
}

impl std::error::Error for IStrError {}
