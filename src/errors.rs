use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

static COLOR_DISABLED: AtomicBool = AtomicBool::new(false);

/// Turns off ANSI colours in error messages for the rest of the process.
pub fn disable_color() {
    COLOR_DISABLED.store(true, Ordering::Relaxed);
}

/// Errors that can occur during decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The input contains a byte that is not part of the encoding
    InvalidCharacter { byte: u8, position: usize },
    /// Padding is missing, misplaced or too long
    InvalidPadding { position: usize },
    /// The final block holds a symbol count that cannot encode whole bytes
    InvalidLength { actual: usize, hint: String },
    /// The caller-provided output buffer cannot hold the decoded data
    BufferTooSmall(BufferTooSmall),
}

impl DecodeError {
    pub fn invalid_character(byte: u8, position: usize) -> Self {
        DecodeError::InvalidCharacter { byte, position }
    }

    pub fn invalid_length(actual: usize, hint: impl Into<String>) -> Self {
        DecodeError::InvalidLength {
            actual,
            hint: hint.into(),
        }
    }
}

/// Quoted for printable ASCII, hex otherwise.
struct DisplayByte(u8);

impl fmt::Display for DisplayByte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_ascii_graphic() || self.0 == b' ' {
            write!(f, "'{}'", char::from(self.0))
        } else {
            write!(f, "0x{:02x}", self.0)
        }
    }
}

fn write_error(f: &mut fmt::Formatter<'_>, message: fmt::Arguments<'_>) -> fmt::Result {
    if should_use_color() {
        write!(f, "\x1b[1;31merror:\x1b[0m {}", message)
    } else {
        write!(f, "error: {}", message)
    }
}

fn write_hint(f: &mut fmt::Formatter<'_>, message: fmt::Arguments<'_>) -> fmt::Result {
    if should_use_color() {
        write!(f, "\n\n\x1b[1;36mhint:\x1b[0m {}", message)
    } else {
        write!(f, "\n\nhint: {}", message)
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::InvalidCharacter { byte, position } => {
                write_error(
                    f,
                    format_args!(
                        "invalid character {} at position {}",
                        DisplayByte(*byte),
                        position
                    ),
                )?;
                write_hint(
                    f,
                    format_args!("input may use a different alphabet or carry stray bytes"),
                )
            }
            DecodeError::InvalidPadding { position } => {
                write_error(f, format_args!("invalid padding at position {}", position))?;
                write_hint(
                    f,
                    format_args!("check for missing or incorrect '=' characters at end of input"),
                )
            }
            DecodeError::InvalidLength { actual, hint } => {
                write_error(
                    f,
                    format_args!(
                        "invalid length for decode: final block has {} symbol{}",
                        actual,
                        if *actual == 1 { "" } else { "s" }
                    ),
                )?;
                write_hint(f, format_args!("{}", hint))
            }
            DecodeError::BufferTooSmall(inner) => fmt::Display::fmt(inner, f),
        }
    }
}

impl std::error::Error for DecodeError {}

impl From<BufferTooSmall> for DecodeError {
    fn from(err: BufferTooSmall) -> Self {
        DecodeError::BufferTooSmall(err)
    }
}

/// A caller-provided output buffer is shorter than the size bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferTooSmall {
    pub needed: usize,
    pub available: usize,
}

impl fmt::Display for BufferTooSmall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_error(
            f,
            format_args!(
                "output buffer too small: need {} bytes, have {}",
                self.needed, self.available
            ),
        )
    }
}

impl std::error::Error for BufferTooSmall {}

/// Check if colored output should be used
fn should_use_color() -> bool {
    if COLOR_DISABLED.load(Ordering::Relaxed) {
        return false;
    }

    // Respect NO_COLOR environment variable
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    // Check if stderr is a terminal
    use std::io::IsTerminal;
    std::io::stderr().is_terminal()
}

/// Error when an encoding name is not registered
#[derive(Debug)]
pub struct EncodingNotFoundError {
    pub name: String,
    pub suggestion: Option<String>,
}

impl EncodingNotFoundError {
    pub fn new(name: impl Into<String>, suggestion: Option<String>) -> Self {
        Self {
            name: name.into(),
            suggestion,
        }
    }
}

impl fmt::Display for EncodingNotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_error(f, format_args!("encoding '{}' not found", self.name))?;

        if let Some(suggestion) = &self.suggestion {
            write_hint(f, format_args!("did you mean '{}'?", suggestion))?;
            write!(f, "\n      ")?;
        } else {
            write!(f, "\n\n")?;
        }

        if should_use_color() {
            write!(
                f,
                "run \x1b[1m`base-block config list`\x1b[0m to see all encodings"
            )
        } else {
            write!(f, "run `base-block config list` to see all encodings")
        }
    }
}

impl std::error::Error for EncodingNotFoundError {}

/// Calculate Levenshtein distance between two strings
fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let len2 = s2.chars().count();
    if s1.is_empty() {
        return len2;
    }
    if len2 == 0 {
        return s1.chars().count();
    }

    let mut prev_row: Vec<usize> = (0..=len2).collect();
    let mut curr_row = vec![0; len2 + 1];

    for (i, c1) in s1.chars().enumerate() {
        curr_row[0] = i + 1;

        for (j, c2) in s2.chars().enumerate() {
            let cost = usize::from(c1 != c2);
            curr_row[j + 1] = (curr_row[j] + 1)
                .min(prev_row[j + 1] + 1)
                .min(prev_row[j] + cost);
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[len2]
}

/// Find the closest registered encoding name, if any is close enough
pub fn find_closest_encoding<'a, I>(name: &str, available: I) -> Option<String>
where
    I: IntoIterator<Item = &'a str>,
{
    // 1-2 character typos for short names, up to 3 for longer ones
    let threshold = if name.len() < 5 { 2 } else { 3 };

    available
        .into_iter()
        .map(|candidate| (levenshtein_distance(name, candidate), candidate))
        .filter(|(distance, _)| *distance <= threshold)
        .min_by(|(da, a), (db, b)| da.cmp(db).then_with(|| a.cmp(b)))
        .map(|(_, candidate)| candidate.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(levenshtein_distance("base64", "base64"), 0);
        assert_eq!(levenshtein_distance("base64", "base32"), 2);
        assert_eq!(levenshtein_distance("bas64", "base64"), 1);
        assert_eq!(levenshtein_distance("", "base64"), 6);
    }

    #[test]
    fn test_find_closest_encoding() {
        let names = ["base64", "base64url", "base32", "hex"];

        assert_eq!(
            find_closest_encoding("bas64", names),
            Some("base64".to_string())
        );
        assert_eq!(
            find_closest_encoding("base64ulr", names),
            Some("base64url".to_string())
        );
        assert_eq!(find_closest_encoding("hex_radix", names), None);
    }

    #[test]
    fn test_error_display_no_color() {
        disable_color();

        let err = DecodeError::invalid_character(b'_', 12);
        let display = err.to_string();
        assert!(display.contains("invalid character '_' at position 12"));
        assert!(display.contains("hint:"));

        let err = DecodeError::invalid_character(0xc3, 4);
        assert!(err.to_string().contains("0xc3"));
        assert!(!err.to_string().contains('\x1b'));
    }

    #[test]
    fn test_invalid_length_error() {
        disable_color();

        let err = DecodeError::invalid_length(1, "a single base64 symbol cannot encode a byte");
        let display = err.to_string();
        assert!(display.contains("invalid length"));
        assert!(display.contains("1 symbol"));
        assert!(display.contains("cannot encode a byte"));
    }

    #[test]
    fn test_buffer_too_small_error() {
        disable_color();

        let err: DecodeError = BufferTooSmall {
            needed: 9,
            available: 4,
        }
        .into();
        assert!(err.to_string().contains("need 9 bytes, have 4"));
    }

    #[test]
    fn test_encoding_not_found_error() {
        disable_color();

        let err = EncodingNotFoundError::new("bas64", Some("base64".to_string()));
        let display = err.to_string();

        assert!(display.contains("encoding 'bas64' not found"));
        assert!(display.contains("did you mean 'base64'?"));
        assert!(display.contains("base-block config list"));
    }
}
