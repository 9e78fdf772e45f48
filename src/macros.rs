/// Compose a pattern from string literals interleaved with `{value}` blocks.
///
/// Values are anything that converts into a [`Piece`](crate::Piece): a
/// `&Pattern`, a string, or a number. A missing literal between two values,
/// or at either end, is the empty fragment.
///
/// ```
/// use regcomp::pattern;
///
/// let digit = pattern!(r"\d").unwrap();
/// let hex = pattern!("/[" {&digit} "a-f]+/i").unwrap();
/// assert_eq!(hex.to_string(), r"/[\da-f]+/i");
///
/// let pair = pattern!({&digit} {&digit}).unwrap();
/// assert_eq!(pair.source(), r"\d\d");
/// ```
#[macro_export]
macro_rules! pattern {
    () => {
        $crate::compose(&[], &[])
    };
    ($($first:literal)? $({ $value:expr } $($rest:literal)?)* $(,)?) => {
        $crate::Template::new($crate::__fragment!($($first)?))
            $(.push($value, $crate::__fragment!($($rest)?)))*
            .build()
    };
}

/// Like [`pattern!`], but the result always carries unicode mode.
#[macro_export]
macro_rules! upattern {
    () => {
        $crate::compose_unicode(&[], &[])
    };
    ($($first:literal)? $({ $value:expr } $($rest:literal)?)* $(,)?) => {
        $crate::Template::new($crate::__fragment!($($first)?))
            $(.push($value, $crate::__fragment!($($rest)?)))*
            .build_unicode()
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __fragment {
    () => {
        ""
    };
    ($fragment:literal) => {
        $fragment
    };
}
