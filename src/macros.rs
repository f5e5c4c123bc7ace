// src/macros.rs

/// String shorthand: `s!()` is an empty `String`, `s!(x)` is `String::from(x)`.
#[macro_export]
macro_rules! s {
    () => {
        ::std::string::String::new()
    };
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

/// Concatenate string-ish pieces into one `String`.
/// Used for URI building: `join!(base, "/pub/", id)`.
#[macro_export]
macro_rules! join {
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut out = ::std::string::String::from($first);
        $(
            out.push_str($rest);
        )+
        out
    }};
}

/// Lazily compiled CSS selector, parsed once per process.
///
/// ```ignore
/// static LLISTA: LazyLock<Selector> = selector!("p.llista");
/// ```
#[macro_export]
macro_rules! selector {
    ($css:literal) => {
        ::std::sync::LazyLock::new(|| {
            ::scraper::Selector::parse($css).expect(concat!("invalid selector: ", $css))
        })
    };
}

/// Lazily compiled regex, built once per process.
#[macro_export]
macro_rules! regex {
    ($re:literal) => {
        ::std::sync::LazyLock::new(|| {
            ::regex::Regex::new($re).expect(concat!("invalid regex: ", $re))
        })
    };
}
