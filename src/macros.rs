// src/macros.rs

/// `String` shorthand: `s!()` is empty, `s!(x)` is `String::from(x)`.
#[macro_export]
macro_rules! s {
    () => {
        ::std::string::String::new()
    };
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

/// Concatenate string slices into one exactly-sized `String`.
/// Used for cache file names (`<stem>.<ext>`).
#[macro_export]
macro_rules! join {
    ($($part:expr),+ $(,)?) => {{
        let parts: &[&str] = &[$($part),+];
        parts.concat()
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn join_accepts_owned_and_borrowed_parts() {
        let stem = s!("abc");
        assert_eq!(join!(&stem, ".", "jpg"), "abc.jpg");
        assert_eq!(join!("solo"), "solo");
        assert_eq!(s!(), "");
    }
}
