use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("error in HTTP I/O: {0}")]
    HttpIo(#[from] ureq::Error),
    #[error("error from upstream: {message}")]
    Upstream { message: String },
    #[error("malformed response: {message}")]
    Decode { message: String },
    #[error("{message}")]
    Generic { message: String },
}

pub type SourceResult<T> = Result<T, SourceError>;

/// Where the list of installable Java versions comes from.
///
/// The dispatch core only ever needs this one capability; endpoint layout,
/// authentication, and response decoding live entirely in the implementation.
pub trait RemoteVersionSource {
    /// Fetch the available version identifiers, in the order the source
    /// reports them.
    fn fetch_available(&self) -> SourceResult<Vec<String>>;
}
