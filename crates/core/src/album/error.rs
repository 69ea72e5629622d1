use thiserror::Error;

/// Reasons an album is rejected before it is written.
///
/// Variants are listed in the order `validate_album` checks them.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AlbumError {
    #[error("Missing Artist")]
    MissingArtist,
    #[error("Missing Title")]
    MissingTitle,
    #[error("Missing Price")]
    MissingPrice,
}
