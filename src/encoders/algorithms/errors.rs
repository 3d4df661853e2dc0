use std::fmt;
use std::io;

/// Errors that can occur during decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The input contains a byte that is not a symbol of the alphabet
    InvalidCharacter { byte: u8, position: usize },
}

impl DecodeError {
    /// Create an InvalidCharacter error for the byte at `position`
    pub fn invalid_character(byte: u8, position: usize) -> Self {
        DecodeError::InvalidCharacter { byte, position }
    }

    /// Moves the reported position forward by `offset`.
    ///
    /// Window decoders report positions relative to their window; the stream
    /// decoder rebases them onto the whole input.
    pub fn shifted(self, offset: usize) -> Self {
        match self {
            DecodeError::InvalidCharacter { byte, position } => DecodeError::InvalidCharacter {
                byte,
                position: position + offset,
            },
        }
    }

    /// Byte offset of the offending symbol.
    pub fn position(&self) -> usize {
        match self {
            DecodeError::InvalidCharacter { position, .. } => *position,
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let use_color = should_use_color();

        match self {
            DecodeError::InvalidCharacter { byte, position } => {
                if use_color {
                    writeln!(
                        f,
                        "\x1b[1;31merror:\x1b[0m invalid character '{}' at position {}",
                        describe_byte(*byte),
                        position
                    )?;
                } else {
                    writeln!(
                        f,
                        "error: invalid character '{}' at position {}",
                        describe_byte(*byte),
                        position
                    )?;
                }

                if use_color {
                    write!(
                        f,
                        "\x1b[1;36mhint:\x1b[0m input must only contain symbols of the selected alphabet"
                    )
                } else {
                    write!(
                        f,
                        "hint: input must only contain symbols of the selected alphabet"
                    )
                }
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// Errors raised while building a digit alphabet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlphabetError {
    /// Fewer than two symbols
    TooShort { len: usize },
    /// More than 256 symbols
    TooLong { len: usize },
    /// A symbol appears twice
    Duplicate { byte: u8, position: usize },
}

impl fmt::Display for AlphabetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlphabetError::TooShort { len } => {
                write!(f, "alphabet needs at least 2 symbols, got {}", len)
            }
            AlphabetError::TooLong { len } => {
                write!(f, "alphabet holds at most 256 symbols, got {}", len)
            }
            AlphabetError::Duplicate { byte, position } => write!(
                f,
                "duplicate symbol '{}' at position {}",
                describe_byte(*byte),
                position
            ),
        }
    }
}

impl std::error::Error for AlphabetError {}

/// Errors raised while resolving an algorithm name into a codec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlgorithmError {
    /// Not a built-in name and too short to be a literal alphabet
    InvalidName { name: String },
    /// Literal or configured alphabet is malformed
    Alphabet { name: String, source: AlphabetError },
    /// Registry entry asks for padding on an alphabet that has no padded framing
    UnsupportedPadding { name: String },
}

impl fmt::Display for AlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlgorithmError::InvalidName { name } => write!(f, "{}: Invalid algorithm", name),
            AlgorithmError::Alphabet { name, source } => write!(f, "{}: {}", name, source),
            AlgorithmError::UnsupportedPadding { name } => write!(
                f,
                "{}: padding is only supported for the RFC 4648 base64 alphabet",
                name
            ),
        }
    }
}

impl std::error::Error for AlgorithmError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AlgorithmError::Alphabet { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Errors from the streaming encoder and decoder.
#[derive(Debug)]
pub enum StreamError {
    /// Reading the source or writing the sink failed
    Io(io::Error),
    /// The encoded input is not valid for the codec
    Decode(DecodeError),
    /// Window size is zero or not a multiple of the codec's group
    Window { window: usize, group: usize },
}

impl fmt::Display for StreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamError::Io(e) => write!(f, "{}", e),
            StreamError::Decode(e) => write!(f, "{}", e),
            StreamError::Window { window, group } => write!(
                f,
                "window of {} is not a non-zero multiple of the group size {}",
                window, group
            ),
        }
    }
}

impl std::error::Error for StreamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StreamError::Io(e) => Some(e),
            StreamError::Decode(e) => Some(e),
            StreamError::Window { .. } => None,
        }
    }
}

impl From<io::Error> for StreamError {
    fn from(e: io::Error) -> Self {
        StreamError::Io(e)
    }
}

impl From<DecodeError> for StreamError {
    fn from(e: DecodeError) -> Self {
        StreamError::Decode(e)
    }
}

/// Printable form of a symbol byte: itself when it is visible ASCII, an escape otherwise.
pub fn describe_byte(byte: u8) -> String {
    std::ascii::escape_default(byte).to_string()
}

/// Check if colored output should be used
fn should_use_color() -> bool {
    // Respect NO_COLOR environment variable
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stderr is a terminal
    use std::io::IsTerminal;
    std::io::stderr().is_terminal()
}
