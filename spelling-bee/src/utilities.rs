use std::io::{self, Write};
use std::str::FromStr;

pub fn input(prompt: &str) -> io::Result<String> {
    let mut line = String::new();
    print!("{prompt}");
    io::stdout().flush()?;
    io::stdin().read_line(&mut line)?;
    Ok(line)
}

/// Parses the next argument, `None` when it is missing or malformed.
pub fn next_arg<'a, T: FromStr>(parts: &mut impl Iterator<Item = &'a str>) -> Option<T> {
    parts.next().and_then(|part| part.parse().ok())
}

/// Parses the next argument, falling back to `default` only when it is
/// absent. A malformed argument yields `None`.
pub fn optional_arg<'a, T: FromStr>(
    parts: &mut impl Iterator<Item = &'a str>,
    default: T,
) -> Option<T> {
    match parts.next() {
        Some(part) => part.parse().ok(),
        None => Some(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_arg_parses_in_order() {
        let mut parts = "12 x".split_ascii_whitespace();
        assert_eq!(next_arg::<usize>(&mut parts), Some(12));
        assert_eq!(next_arg::<usize>(&mut parts), None);
        assert_eq!(next_arg::<usize>(&mut parts), None);
    }

    #[test]
    fn optional_arg_defaults_only_when_absent() {
        let mut parts = "9 abc".split_ascii_whitespace();
        assert_eq!(optional_arg(&mut parts, 8u32), Some(9));
        assert_eq!(optional_arg(&mut parts, 8u32), None);
        assert_eq!(optional_arg(&mut parts, 8u32), Some(8));
    }
}
