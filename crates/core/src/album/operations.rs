use super::error::AlbumError;
use super::types::Album;

/// Validates an album before it is created.
///
/// Checks run in a fixed order and the first failure wins:
/// artist, then title, then price.
pub fn validate_album(album: &Album) -> Result<(), AlbumError> {
    if album.artist.is_empty() {
        return Err(AlbumError::MissingArtist);
    }
    if album.title.is_empty() {
        return Err(AlbumError::MissingTitle);
    }
    if is_missing_price(album.price) {
        return Err(AlbumError::MissingPrice);
    }
    Ok(())
}

/// A price of zero is indistinguishable from an omitted field, so anything
/// that is not strictly positive counts as missing. NaN is missing too.
pub fn is_missing_price(price: f64) -> bool {
    price.is_nan() || price <= 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn album(title: &str, artist: &str, price: f64) -> Album {
        Album::new(title, artist, price)
    }

    #[test]
    fn test_valid_album() {
        assert_eq!(validate_album(&album("Test", "Test", 9.99)), Ok(()));
    }

    #[test]
    fn test_missing_artist() {
        assert_eq!(
            validate_album(&album("Test", "", 9.99)),
            Err(AlbumError::MissingArtist)
        );
    }

    #[test]
    fn test_missing_title() {
        assert_eq!(
            validate_album(&album("", "Test", 9.99)),
            Err(AlbumError::MissingTitle)
        );
    }

    #[test]
    fn test_zero_price_is_missing() {
        assert_eq!(
            validate_album(&album("Test", "Test", 0.0)),
            Err(AlbumError::MissingPrice)
        );
    }

    #[test]
    fn test_negative_and_nan_prices_are_missing() {
        assert_eq!(
            validate_album(&album("Test", "Test", -1.0)),
            Err(AlbumError::MissingPrice)
        );
        assert_eq!(
            validate_album(&album("Test", "Test", f64::NAN)),
            Err(AlbumError::MissingPrice)
        );
    }

    #[test]
    fn test_artist_checked_before_title_and_price() {
        assert_eq!(
            validate_album(&album("", "", 0.0)),
            Err(AlbumError::MissingArtist)
        );
    }

    #[test]
    fn test_title_checked_before_price() {
        assert_eq!(
            validate_album(&album("", "Test", 0.0)),
            Err(AlbumError::MissingTitle)
        );
    }

    #[test]
    fn test_whitespace_is_not_missing() {
        // Only the empty string counts as missing.
        assert_eq!(validate_album(&album(" ", " ", 1.0)), Ok(()));
    }
}
