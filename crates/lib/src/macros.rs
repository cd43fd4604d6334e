/// Helper macro to build an input processor.
///
/// The block converts an already parsed value into `$out`, and any error it
/// returns is attached to the span of the input that was consumed.
#[macro_export]
macro_rules! from_input {
    (|$value:ident: $ty:ty| -> $out:ident $block:block) => {
        impl $crate::input::FromInput for $out {
            #[inline]
            fn try_from_input(
                p: &mut $crate::input::IStr,
            ) -> core::result::Result<Option<Self>, $crate::input::IStrError> {
                let original = *p;

                let Some(value) = <$ty as $crate::input::FromInput>::try_from_input(p)? else {
                    return Ok(None);
                };

                match (|$value: $ty| -> core::result::Result<$out, $crate::macro_support::Error> {
                    $block
                })(value)
                {
                    Ok(value) => Ok(Some(value)),
                    Err(e) => {
                        let span = original.index()..p.index();
                        *p = original;
                        Err($crate::input::IStrError::new(
                            span,
                            $crate::input::ErrorKind::Boxed(e),
                        ))
                    }
                }
            }
        }
    };
}

/// Prepare an input processor.
///
/// Resolves the default input path relative to the manifest of the crate
/// invoking the macro.
#[macro_export]
macro_rules! input {
    ($opts:expr, $path:literal) => {
        $crate::env::input(
            &$opts,
            concat!("inputs/", $path),
            concat!(env!("CARGO_MANIFEST_DIR"), "/inputs/", $path),
        )?
    };
}

/// Generate the `main` function of a puzzle.
///
/// The solver receives the whole input and returns both answers.
#[macro_export]
macro_rules! entry {
    (input = $path:literal, $solve:path) => {
        fn main() -> $crate::prelude::Result<()> {
            let opts = $crate::cli::Opts::parse()?;
            let (input, path) = $crate::input!(opts, $path);
            $crate::cli::run(&opts, &path, input, $solve)
        }
    };
}

#[macro_export]
macro_rules! timeit {
    ($($tt:tt)*) => {{
        let start = std::time::Instant::now();
        let out = { $($tt)* };
        let d = std::time::Instant::now().duration_since(start);
        $crate::macro_support::log::debug!("time: {d:?}");
        out
    }}
}
