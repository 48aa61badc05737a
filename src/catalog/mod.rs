//! Catalog pipeline: load, verify images, sort, filter.

pub mod filter;
pub mod loader;
pub mod model;
pub mod sort;
pub mod verify;

pub use filter::{CatalogView, SectionView};
pub use loader::{http_client, load_catalog};
pub use model::{Brand, Catalog, Listing, SlideDirection};
pub use verify::verify_images;

use tracing::{debug, warn};

use crate::error::{Result, ShowroomError};

/// Run the full catalog pipeline: load the document, verify images
/// against `verify_url` when one is configured, and sort the result.
///
/// A rejected verification batch is logged and the unverified images
/// are kept; transport and parse failures during verification abort.
pub async fn prepare_catalog(
    client: &reqwest::Client,
    source: &str,
    verify_url: Option<&str>,
) -> Result<Catalog> {
    let mut catalog = load_catalog(client, source).await?;

    match verify_url {
        Some(url) => match verify_images(client, url, &mut catalog).await {
            Ok(()) => {}
            Err(ShowroomError::RemoteValidation(message)) => {
                warn!("Image check rejected the batch, keeping unverified images: {message}");
            }
            Err(e) => return Err(e),
        },
        None => {
            debug!("No image check endpoint configured, skipping verification");
        }
    }

    sort::sort_catalog(&mut catalog);
    Ok(catalog)
}
