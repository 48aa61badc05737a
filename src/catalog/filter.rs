//! Search filtering
//!
//! Matching is case- and whitespace-insensitive: the query and every
//! derived listing field are lowercased with all whitespace removed
//! before a substring check. A view holds indices into the catalog, so
//! filtering never copies or mutates listings.

use crate::catalog::model::{Catalog, Listing};

/// Lowercase `text` and strip all whitespace.
fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// The searchable fields derived from a listing: name, brand, both
/// concatenations of the two, and the full name.
fn search_fields(listing: &Listing) -> [String; 5] {
    let name = normalize(&listing.name);
    let brand = normalize(&listing.brand);
    let brand_name = format!("{brand}{name}");
    let name_brand = format!("{name}{brand}");
    [name, brand, brand_name, name_brand, normalize(&listing.full_name)]
}

fn listing_matches(listing: &Listing, needle: &str) -> bool {
    search_fields(listing)
        .iter()
        .any(|field| field.contains(needle))
}

/// A brand section of the view: catalog indices only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionView {
    /// Index into `catalog.brands`.
    pub brand: usize,
    /// Indices into that brand's listings.
    pub listings: Vec<usize>,
}

/// The subset of the catalog currently on screen.
#[derive(Debug, Clone, Default)]
pub struct CatalogView {
    pub sections: Vec<SectionView>,
}

impl CatalogView {
    /// Every brand and listing, including brands without cars.
    pub fn full(catalog: &Catalog) -> Self {
        let sections = catalog
            .brands
            .iter()
            .enumerate()
            .map(|(brand, b)| SectionView {
                brand,
                listings: (0..b.listings.len()).collect(),
            })
            .collect();
        Self { sections }
    }

    /// Brands whose listings match `query`. Brands left without a
    /// single match are dropped, so an empty query still hides brands
    /// that have no cars at all.
    pub fn filtered(catalog: &Catalog, query: &str) -> Self {
        let needle = normalize(query);
        let sections = catalog
            .brands
            .iter()
            .enumerate()
            .filter_map(|(brand, b)| {
                let listings: Vec<usize> = b
                    .listings
                    .iter()
                    .enumerate()
                    .filter(|(_, listing)| listing_matches(listing, &needle))
                    .map(|(row, _)| row)
                    .collect();
                if listings.is_empty() {
                    None
                } else {
                    Some(SectionView { brand, listings })
                }
            })
            .collect();
        Self { sections }
    }

    pub fn is_empty(&self) -> bool {
        self.sections.iter().all(|s| s.listings.is_empty())
    }

    pub fn listing_count(&self) -> usize {
        self.sections.iter().map(|s| s.listings.len()).sum()
    }

    /// Map a view position to catalog indices.
    pub fn resolve(&self, section: usize, row: usize) -> Option<(usize, usize)> {
        let section = self.sections.get(section)?;
        let listing = *section.listings.get(row)?;
        Some((section.brand, listing))
    }
}

#[cfg(test)]
mod filter_tests {
    use super::*;
    use crate::catalog::model::RawCatalog;

    fn sample_catalog() -> Catalog {
        let raw: RawCatalog = serde_json::from_str(
            r#"
            {
                "key1": {
                    "brand": "Audi",
                    "logo": "img/audi.png",
                    "cars": [
                        {
                            "name": "A3 Sportback",
                            "brandAndName": "Audi A3 Sportback",
                            "parameter": {
                                "rate": 99.5,
                                "path": "cars/audi-a3",
                                "availability": true,
                                "image": ["a3.jpg"]
                            }
                        },
                        {
                            "name": "Q5",
                            "brandAndName": "Audi Q5",
                            "parameter": {
                                "rate": 150.0,
                                "path": "cars/audi-q5",
                                "availability": true,
                                "image": []
                            }
                        }
                    ]
                },
                "key2": {
                    "brand": "BMW",
                    "logo": "img/bmw.png",
                    "cars": [
                        {
                            "name": "Serie 1",
                            "brandAndName": "BMW Serie 1",
                            "parameter": {
                                "rate": 120.0,
                                "path": "cars/bmw-serie-1",
                                "availability": false,
                                "image": []
                            }
                        }
                    ]
                },
                "key3": {
                    "brand": "Lancia",
                    "logo": "img/lancia.png",
                    "cars": []
                }
            }
            "#,
        )
        .unwrap();
        Catalog::from_raw(raw)
    }

    #[test]
    fn test_normalize_strips_case_and_whitespace() {
        assert_eq!(normalize("  Audi A3\tSportback "), "audia3sportback");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_match_on_each_derived_field() {
        let catalog = sample_catalog();
        let a3 = &catalog.brands[0].listings[0];

        for query in ["a3 sport", "AUDI", "audia3", "a3 sportbackaudi", "Audi A3 Sportback"] {
            assert!(
                listing_matches(a3, &normalize(query)),
                "query {query:?} should match"
            );
        }
        assert!(!listing_matches(a3, &normalize("serie")));
    }

    #[test]
    fn test_full_view_keeps_carless_brands() {
        let catalog = sample_catalog();
        let view = CatalogView::full(&catalog);
        assert_eq!(view.sections.len(), 3);
        assert_eq!(view.listing_count(), 3);
        assert_eq!(view.sections[2].brand, 2);
        assert!(view.sections[2].listings.is_empty());
    }

    #[test]
    fn test_filtered_view_drops_brands_without_matches() {
        let catalog = sample_catalog();

        let view = CatalogView::filtered(&catalog, "serie");
        assert_eq!(view.sections.len(), 1);
        assert_eq!(view.sections[0].brand, 1);
        assert_eq!(view.sections[0].listings, vec![0]);

        // An empty query matches every listing but still hides Lancia,
        // which has no cars to match with.
        let view = CatalogView::filtered(&catalog, "");
        assert_eq!(view.sections.len(), 2);
        assert_eq!(view.listing_count(), 3);
    }

    #[test]
    fn test_filtered_view_can_be_empty() {
        let catalog = sample_catalog();
        let view = CatalogView::filtered(&catalog, "tesla");
        assert!(view.is_empty());
        assert_eq!(view.listing_count(), 0);
    }

    #[test]
    fn test_resolve_maps_view_positions_to_catalog() {
        let catalog = sample_catalog();
        let view = CatalogView::filtered(&catalog, "q5");

        assert_eq!(view.resolve(0, 0), Some((0, 1)));
        assert_eq!(view.resolve(0, 1), None);
        assert_eq!(view.resolve(1, 0), None);
    }
}
