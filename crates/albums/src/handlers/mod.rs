pub mod albums;
pub mod error;
pub mod health;
pub mod sample_data;

pub use error::AppError;
