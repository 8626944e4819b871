/// Lazily compile a regex literal once per call site.
///
/// The pattern is a string literal, so a compile failure is a bug in this
/// crate rather than bad input.
#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}
