//! Starter catalog used to seed a freshly provisioned table.

use super::types::Album;

const CATALOG: &[(&str, &str, f64)] = &[
    ("Blue Train", "John Coltrane", 56.99),
    ("Jeru", "Gerry Mulligan", 17.99),
    ("Sarah Vaughan and Clifford Brown", "Sarah Vaughan", 39.99),
    ("Kind of Blue", "Miles Davis", 45.99),
    ("A Love Supreme", "John Coltrane", 59.99),
    ("Time Out", "The Dave Brubeck Quartet", 29.99),
    ("Giant Steps", "John Coltrane", 44.99),
    ("The Shape of Jazz to Come", "Ornette Coleman", 23.99),
    ("Out to Lunch!", "Eric Dolphy", 37.99),
    ("Mingus Ah Um", "Charles Mingus", 34.99),
    ("Getz/Gilberto", "Stan Getz & João Gilberto", 28.99),
    ("Moanin'", "Art Blakey & The Jazz Messengers", 31.99),
    ("Speak No Evil", "Wayne Shorter", 39.99),
    ("Somethin' Else", "Cannonball Adderley", 36.99),
    ("The Black Saint and the Sinner Lady", "Charles Mingus", 48.99),
];

/// Returns the fixed starter catalog, each album with a fresh ID.
///
/// # Example
///
/// ```
/// use albums_core::album::{sample_albums, validate_album};
///
/// let albums = sample_albums();
/// assert_eq!(albums.len(), 15);
/// assert!(albums.iter().all(|a| validate_album(a).is_ok()));
/// ```
pub fn sample_albums() -> Vec<Album> {
    CATALOG
        .iter()
        .map(|(title, artist, price)| Album::new(*title, *artist, *price))
        .collect()
}
