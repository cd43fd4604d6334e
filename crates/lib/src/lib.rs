pub mod cli;
#[doc(hidden)]
pub mod env;
pub mod input;
mod macros;

#[doc(hidden)]
pub mod macro_support {
    pub use anyhow::Error;
    pub use log;
}

pub mod prelude {
    //! Helper prelude with useful imports.
    pub use crate::input::{Custom, ErrorKind, FromInput, IStr, IStrError};
    pub use anyhow::{anyhow, bail, ensure, Context, Result};
    pub use bstr::{BStr, ByteSlice};
}
