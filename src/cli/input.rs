use basex::{AlgorithmError, StreamError};
use std::fmt;
use std::fs::{self, File};
use std::io::{self, Read, StdinLock};
use std::path::{Path, PathBuf};

/// Errors surfaced by the `basex` binary.
#[derive(Debug)]
pub enum CliError {
    /// Input file missing, not a regular file, or unreadable
    FileAccess { path: PathBuf, reason: String },
    /// Unknown or malformed `-a` argument
    Algorithm(AlgorithmError),
    /// Built-in algorithm table failed to parse
    Config(toml::de::Error),
    /// Reading, writing or decoding failed mid-stream
    Stream(StreamError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileAccess { path, reason } => {
                write!(f, "basex: {}: {}", path.display(), reason)
            }
            CliError::Algorithm(e) => write!(f, "basex: {}", e),
            CliError::Config(e) => write!(f, "basex: algorithms.toml: {}", e),
            // Decode errors carry their own "error:" prefix and hint
            CliError::Stream(StreamError::Decode(e)) => write!(f, "{}", e),
            CliError::Stream(e) => write!(f, "basex: {}", e),
        }
    }
}

impl std::error::Error for CliError {}

impl From<AlgorithmError> for CliError {
    fn from(e: AlgorithmError) -> Self {
        CliError::Algorithm(e)
    }
}

impl From<toml::de::Error> for CliError {
    fn from(e: toml::de::Error) -> Self {
        CliError::Config(e)
    }
}

impl From<StreamError> for CliError {
    fn from(e: StreamError) -> Self {
        CliError::Stream(e)
    }
}

/// A read-once input source: standard input or a regular file.
pub enum Input {
    Stdin(StdinLock<'static>),
    File(File),
}

impl Read for Input {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Input::Stdin(stdin) => stdin.read(buf),
            Input::File(file) => file.read(buf),
        }
    }
}

/// Opens the named input; `None` and `-` select standard input.
pub fn open(path: Option<&Path>) -> Result<Input, CliError> {
    let path = match path {
        Some(path) if path != Path::new("-") => path,
        _ => return Ok(Input::Stdin(io::stdin().lock())),
    };

    let metadata = fs::metadata(path).map_err(|e| file_access(path, &e))?;
    if !metadata.is_file() {
        return Err(CliError::FileAccess {
            path: path.to_path_buf(),
            reason: "No such file".to_string(),
        });
    }

    let file = File::open(path).map_err(|e| file_access(path, &e))?;
    log::debug!("reading {} ({} bytes)", path.display(), metadata.len());
    Ok(Input::File(file))
}

fn file_access(path: &Path, error: &io::Error) -> CliError {
    let reason = match error.kind() {
        io::ErrorKind::NotFound => "No such file".to_string(),
        io::ErrorKind::PermissionDenied => "Permission denied".to_string(),
        _ => error.to_string(),
    };
    CliError::FileAccess {
        path: path.to_path_buf(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file() {
        let path = Path::new("/nonexistent/basex-input");
        let err = open(Some(path)).err().unwrap();
        assert_eq!(err.to_string(), "basex: /nonexistent/basex-input: No such file");
    }

    #[test]
    fn test_directory_is_not_a_file() {
        let dir = std::env::temp_dir();
        let err = open(Some(dir.as_path())).err().unwrap();
        assert!(err.to_string().ends_with(": No such file"));
    }

    #[test]
    fn test_permission_denied() {
        let path = Path::new("/root/secret.bin");
        let err = file_access(path, &io::Error::from(io::ErrorKind::PermissionDenied));
        assert_eq!(err.to_string(), "basex: /root/secret.bin: Permission denied");
    }

    #[test]
    fn test_other_io_errors_keep_their_message() {
        let path = Path::new("input.bin");
        let err = file_access(path, &io::Error::other("device busy"));
        assert_eq!(err.to_string(), "basex: input.bin: device busy");
    }

    #[test]
    fn test_dash_is_stdin() {
        assert!(matches!(open(Some(Path::new("-"))), Ok(Input::Stdin(_))));
        assert!(matches!(open(None), Ok(Input::Stdin(_))));
    }

    #[test]
    fn test_invalid_algorithm_message() {
        let err = CliError::from(AlgorithmError::InvalidName {
            name: "x".to_string(),
        });
        assert_eq!(err.to_string(), "basex: x: Invalid algorithm");
    }
}
