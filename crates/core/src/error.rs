use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("cannot split in more than one way")]
    ConfigurationConflict,

    #[error("invalid number of lines: ‘{}’", _0)]
    InvalidLineCount(i64),

    #[error("invalid number of bytes: ‘{}’", _0)]
    InvalidByteSpec(String),

    #[error("invalid number of chunks: ‘{}’", _0)]
    InvalidDivisionSpec(String),

    #[error("invalid threshold value {} for {} {}", .value, .available, .unit)]
    InvalidThreshold {
        unit: &'static str,
        value: u64,
        available: usize,
    },

    #[error("invalid suffix length: ‘{}’", _0)]
    InvalidSuffixLength(usize),

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },
}

impl Error {
    pub fn invalid_threshold(unit: &'static str, value: u64, available: usize) -> Self {
        Self::InvalidThreshold {
            unit,
            value,
            available,
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflict_message() {
        assert_eq!(
            Error::ConfigurationConflict.to_string(),
            "cannot split in more than one way"
        );
    }

    #[test]
    fn test_line_count_message() {
        assert_eq!(
            Error::InvalidLineCount(-1).to_string(),
            "invalid number of lines: ‘-1’"
        );
    }

    #[test]
    fn test_byte_spec_message() {
        assert_eq!(
            Error::InvalidByteSpec("10AA".to_string()).to_string(),
            "invalid number of bytes: ‘10AA’"
        );
    }

    #[test]
    fn test_threshold_message() {
        let err = Error::invalid_threshold("lines", 20, 10);
        assert_eq!(err.to_string(), "invalid threshold value 20 for 10 lines");
    }

    #[test]
    fn test_io_error_message() {
        let err = Error::io_error(
            "input".to_string(),
            "/missing".to_string(),
            std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        );
        let message = err.to_string();
        assert!(message.contains("input"));
        assert!(message.contains("`/missing`"));
        assert!(message.contains("not found"));
    }
}
