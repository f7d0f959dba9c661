use miette::Diagnostic;
use thiserror::Error;

/// Main error type for swatch operations
#[derive(Error, Diagnostic, Debug)]
pub enum SwatchError {
    #[error("IO error: {0}")]
    #[diagnostic(code(swatch::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(swatch::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Format error: {message}")]
    #[diagnostic(code(swatch::format))]
    Format {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(swatch::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Image error: {message}")]
    #[diagnostic(code(swatch::image))]
    Image { message: String },
}

impl SwatchError {
    /// True for malformed colour text (bad hex, bad buffer shape).
    pub fn is_format(&self) -> bool {
        matches!(self, SwatchError::Format { .. })
    }
}

pub type Result<T> = std::result::Result<T, SwatchError>;
