mod error;
mod mock_data;
mod operations;
mod requests;
mod types;

pub use error::AlbumError;
pub use mock_data::sample_albums;
pub use operations::{is_missing_price, validate_album};
pub use requests::CreateAlbumRequest;
pub use types::Album;
