//! Catalog loading
//!
//! Fetches the catalog document from an http(s) URL or a local file and
//! decodes it into a [`Catalog`]. One attempt, no retries: a failure
//! here aborts the whole pipeline.

use std::time::Duration;
use tracing::info;

use crate::catalog::model::{Catalog, RawCatalog};
use crate::error::{Result, ShowroomError};

/// Build the HTTP client shared by catalog fetch and image check.
pub fn http_client(timeout: Duration) -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .user_agent(concat!("showroom/", env!("CARGO_PKG_VERSION")))
        .timeout(timeout)
        .build()?;
    Ok(client)
}

/// Load and decode the catalog from `source`.
pub async fn load_catalog(client: &reqwest::Client, source: &str) -> Result<Catalog> {
    let body = if is_url(source) {
        fetch_document(client, source).await?
    } else {
        std::fs::read_to_string(source)?
    };

    let catalog = parse_catalog(source, &body)?;
    info!(
        brands = catalog.brands.len(),
        listings = catalog.listing_count(),
        "Catalog loaded"
    );
    Ok(catalog)
}

fn is_url(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

async fn fetch_document(client: &reqwest::Client, url: &str) -> Result<String> {
    let response = client.get(url).send().await?;
    if !response.status().is_success() {
        return Err(ShowroomError::Transport {
            status: response.status().as_u16(),
            url: url.to_string(),
        });
    }
    Ok(response.text().await?)
}

fn parse_catalog(source: &str, body: &str) -> Result<Catalog> {
    let raw: RawCatalog = serde_json::from_str(body)
        .map_err(|e| ShowroomError::Parse(format!("{source}: {e}")))?;
    Ok(Catalog::from_raw(raw))
}

#[cfg(test)]
mod loader_tests {
    use super::*;

    fn sample_document() -> &'static str {
        r#"
        {
            "key1": {
                "brand": "Fiat",
                "logo": "img/fiat.png",
                "cars": [
                    {
                        "name": "Panda",
                        "brandAndName": "Fiat Panda",
                        "parameter": {
                            "rate": 35.0,
                            "path": "cars/fiat-panda",
                            "availability": true,
                            "image": ["panda.jpg"]
                        }
                    }
                ]
            }
        }
        "#
    }

    #[test]
    fn test_parse_catalog() {
        let catalog = parse_catalog("car-data.json", sample_document()).unwrap();
        assert_eq!(catalog.brands.len(), 1);
        assert_eq!(catalog.brands[0].name, "Fiat");
        assert_eq!(catalog.brands[0].listings[0].full_name, "Fiat Panda");
    }

    #[test]
    fn test_parse_catalog_rejects_malformed_document() {
        let result = parse_catalog("car-data.json", "{ not valid json");
        match result {
            Err(ShowroomError::Parse(message)) => {
                assert!(message.starts_with("car-data.json:"));
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_catalog_rejects_wrong_shape() {
        let result = parse_catalog("car-data.json", r#"[1, 2, 3]"#);
        assert!(matches!(result, Err(ShowroomError::Parse(_))));
    }

    #[test]
    fn test_url_detection() {
        assert!(is_url("https://example.com/car-data.json"));
        assert!(is_url("http://localhost:8000/car-data.json"));
        assert!(!is_url("car-data.json"));
        assert!(!is_url("./data/car-data.json"));
    }
}
