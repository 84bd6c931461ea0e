// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Wrap the given `block` or `stmt` so that it returns a `Result<()>`. It is just
/// syntactic sugar that helps having to write `Ok(())` repeatedly at the end of each
/// function. Here's an example.
///
/// ```
/// use jump_nav::{CommonResult, RgbValue, throws};
///
/// fn check_colors(inputs: &[&str]) -> CommonResult<()> {
///     throws!({
///         for input in inputs {
///             RgbValue::try_from_hex_color(input)?;
///         }
///     });
/// }
///
/// assert!(check_colors(&["#1a8cff", "#000000"]).is_ok());
/// assert!(check_colors(&["#1a8cf"]).is_err());
/// ```
#[macro_export]
macro_rules! throws {
    ($it: block) => {{
        $it
        return Ok(())
    }};
    ($it: stmt) => {{
        $it
        return Ok(())
    }};
}

/// Syntactic sugar for `Ok(())` or `Ok(value)`.
#[macro_export]
macro_rules! ok {
    // No args.
    () => {
        Ok(())
    };
    // With arg.
    ($value:expr) => {
        Ok($value)
    };
}

/// Drop in replacement for `assert_eq!` that prints a colorized diff when the two sides
/// don't match. Only used from tests, which is why `pretty_assertions` is a
/// dev-dependency.
#[macro_export]
macro_rules! assert_eq2 {
    ($($params:tt)*) => {
        pretty_assertions::assert_eq!($($params)*)
    };
}
