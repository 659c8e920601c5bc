use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParserError {
    #[error("The file's magic value does not match the expectation {magic}")]
    InvalidMagicValue { magic: u32 },

    #[error("The file is violating the expected format, because: {reason}")]
    FormatError { reason: &'static str },

    #[error("Missing mandatory {0} chunk")]
    MissingChunk(&'static str),

    #[error("Unsupported {format} version {version}")]
    UnsupportedVersion { format: &'static str, version: u32 },

    /// Represents an empty source, e.g. a zero length blob handed to a reader.
    #[error("Source contains no data")]
    EmptySource,

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IOError(#[from] std::io::Error),

    #[error(transparent)]
    StringConversationError(#[from] std::ffi::IntoStringError),

    #[error(transparent)]
    UTF8ConversationError(#[from] std::string::FromUtf8Error),

    #[error("Malformed xml: {0}")]
    XmlError(#[from] quick_xml::de::DeError),
}

pub mod common;
pub mod model;
pub mod package;
pub mod set;
pub mod tables;
