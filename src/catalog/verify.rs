//! Image verification
//!
//! The full catalog's image sets are submitted to the configured
//! endpoint in one POST. The reply is either a filtered list of sets,
//! positionally matched to the submission, or an `{"error": ...}`
//! object. A rejection is soft: the caller keeps the unverified images.
//! A reply with the wrong number of sets is a hard parse error since
//! positional matching would assign images to the wrong listings.

use serde::Deserialize;
use tracing::info;

use crate::catalog::model::Catalog;
use crate::error::{Result, ShowroomError};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum VerifyReply {
    Failure { error: String },
    Sets(Vec<Vec<String>>),
}

/// Image sets in catalog traversal order, one per listing.
pub fn collect_image_sets(catalog: &Catalog) -> Vec<Vec<String>> {
    catalog
        .listings()
        .map(|listing| listing.images().to_vec())
        .collect()
}

/// Replace every listing's images with the verified sets, in the same
/// traversal order as [`collect_image_sets`].
pub fn apply_image_sets(catalog: &mut Catalog, sets: Vec<Vec<String>>) -> Result<()> {
    if sets.len() != catalog.listing_count() {
        return Err(ShowroomError::Parse(format!(
            "image check replied with {} sets for {} listings",
            sets.len(),
            catalog.listing_count()
        )));
    }
    for (listing, images) in catalog.listings_mut().zip(sets) {
        listing.set_images(images);
    }
    Ok(())
}

/// Submit all image sets for verification and apply the filtered reply.
///
/// Returns [`ShowroomError::RemoteValidation`] when the endpoint
/// rejects the batch; the catalog is left unmodified in that case.
pub async fn verify_images(
    client: &reqwest::Client,
    url: &str,
    catalog: &mut Catalog,
) -> Result<()> {
    let sets = collect_image_sets(catalog);
    let submitted: usize = sets.iter().map(Vec::len).sum();

    let response = client.post(url).json(&sets).send().await?;
    if !response.status().is_success() {
        return Err(ShowroomError::Transport {
            status: response.status().as_u16(),
            url: url.to_string(),
        });
    }

    let body = response.text().await?;
    let reply: VerifyReply = serde_json::from_str(&body)
        .map_err(|e| ShowroomError::Parse(format!("{url}: {e}")))?;

    match reply {
        VerifyReply::Failure { error } => Err(ShowroomError::RemoteValidation(error)),
        VerifyReply::Sets(sets) => {
            let kept: usize = sets.iter().map(Vec::len).sum();
            apply_image_sets(catalog, sets)?;
            info!(submitted, kept, "Image check applied");
            Ok(())
        }
    }
}
