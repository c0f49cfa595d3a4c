use thiserror::Error;

pub type GalleryResult<T> = std::result::Result<T, GalleryError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GalleryError {
    /// Bad form input, meant to be shown inline to the user.
    #[error("{0}")]
    Validation(String),

    #[error("Failed to fetch albums: {0}")]
    Fetch(String),

    #[error("Please sign in first")]
    AuthRequired,

    #[error("Album {0} is not loaded")]
    AlbumNotFound(u64),

    #[error("User persistence error: {0}")]
    Persistence(String),
}

impl GalleryError {
    pub fn validation<T: Into<String>>(message: T) -> Self {
        GalleryError::Validation(message.into())
    }
}
