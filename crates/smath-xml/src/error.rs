use thiserror::Error;

#[derive(Debug, Error)]
pub enum WriteError {
    /// Writing to the destination failed. The underlying error is passed through
    /// unchanged.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("xml error: {0}")]
    Xml(#[from] quick_xml::Error),
    #[error("serialized document is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
