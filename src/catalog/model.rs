//! Catalog data model
//!
//! Wire types mirror the catalog document exactly and are converted
//! into [`Catalog`] / [`Brand`] / [`Listing`] for everything past the
//! loader. Slider position lives on the listing so it survives
//! re-renders but resets with the view.

use serde::Deserialize;
use std::collections::BTreeMap;

/// Catalog document as fetched: brand entries keyed by an opaque id.
pub type RawCatalog = BTreeMap<String, RawBrand>;

#[derive(Debug, Clone, Deserialize)]
pub struct RawBrand {
    pub brand: String,
    pub logo: String,
    pub cars: Vec<RawCar>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCar {
    pub name: String,
    pub brand_and_name: String,
    pub parameter: RawCarParameter,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawCarParameter {
    pub rate: f64,
    pub path: String,
    pub availability: bool,
    pub image: Vec<String>,
}

/// Direction of a slider step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideDirection {
    Backward,
    Forward,
}

/// A single car offer with its image slider state.
#[derive(Debug, Clone)]
pub struct Listing {
    pub name: String,
    pub full_name: String,
    pub brand: String,
    pub rate: f64,
    pub path: String,
    pub available: bool,
    images: Vec<String>,
    slide: usize,
    max_slide: usize,
}

impl Listing {
    fn from_raw(brand: &str, car: RawCar) -> Self {
        let RawCar {
            name,
            brand_and_name,
            parameter,
        } = car;
        let max_slide = parameter.image.len().saturating_sub(1);
        Self {
            name,
            full_name: brand_and_name,
            brand: brand.to_string(),
            rate: parameter.rate,
            path: parameter.path,
            available: parameter.availability,
            images: parameter.image,
            slide: 0,
            max_slide,
        }
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn has_images(&self) -> bool {
        !self.images.is_empty()
    }

    /// Index of the currently shown image. Meaningless without images.
    pub fn slide(&self) -> usize {
        self.slide
    }

    pub fn max_slide(&self) -> usize {
        self.max_slide
    }

    /// Replace the image set, e.g. after verification trimmed it.
    /// Keeps the slide position in bounds.
    pub fn set_images(&mut self, images: Vec<String>) {
        self.max_slide = images.len().saturating_sub(1);
        self.images = images;
        if self.slide > self.max_slide {
            self.slide = 0;
        }
    }

    pub fn current_image(&self) -> Option<&str> {
        self.images.get(self.slide).map(String::as_str)
    }

    /// Step the slider one image, wrapping at both ends. Listings
    /// without images ignore the step.
    pub fn advance_slide(&mut self, direction: SlideDirection) {
        if self.images.is_empty() {
            return;
        }
        self.slide = match direction {
            SlideDirection::Forward => {
                if self.slide >= self.max_slide {
                    0
                } else {
                    self.slide + 1
                }
            }
            SlideDirection::Backward => {
                if self.slide == 0 {
                    self.max_slide
                } else {
                    self.slide - 1
                }
            }
        };
    }

    pub fn reset_slide(&mut self) {
        self.slide = 0;
    }
}

/// A brand section: header data plus its listings.
#[derive(Debug, Clone)]
pub struct Brand {
    pub name: String,
    pub logo: String,
    pub listings: Vec<Listing>,
}

impl Brand {
    fn from_raw(raw: RawBrand) -> Self {
        let RawBrand { brand, logo, cars } = raw;
        let listings = cars
            .into_iter()
            .map(|car| Listing::from_raw(&brand, car))
            .collect();
        Self {
            name: brand,
            logo,
            listings,
        }
    }
}

/// The full normalized catalog.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub brands: Vec<Brand>,
}

impl Catalog {
    pub fn from_raw(raw: RawCatalog) -> Self {
        let brands = raw.into_values().map(Brand::from_raw).collect();
        Self { brands }
    }

    pub fn listing_count(&self) -> usize {
        self.brands.iter().map(|b| b.listings.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.brands.iter().all(|b| b.listings.is_empty())
    }

    /// All listings in brand order, then listing order within a brand.
    /// The image check relies on this order staying identical between
    /// the collect and apply passes.
    pub fn listings(&self) -> impl Iterator<Item = &Listing> {
        self.brands.iter().flat_map(|b| b.listings.iter())
    }

    pub fn listings_mut(&mut self) -> impl Iterator<Item = &mut Listing> {
        self.brands.iter_mut().flat_map(|b| b.listings.iter_mut())
    }
}

#[cfg(test)]
mod model_tests {
    use super::*;

    fn sample_catalog_json() -> &'static str {
        r#"
        {
            "key1": {
                "brand": "Audi",
                "logo": "img/audi.png",
                "cars": [
                    {
                        "name": "A3",
                        "brandAndName": "Audi A3",
                        "parameter": {
                            "rate": 99.5,
                            "path": "cars/audi-a3",
                            "availability": true,
                            "image": ["a3-front.jpg", "a3-side.jpg", "a3-rear.jpg"]
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
            }
        }
        "#
    }

    fn sample_catalog() -> Catalog {
        let raw: RawCatalog = serde_json::from_str(sample_catalog_json()).unwrap();
        Catalog::from_raw(raw)
    }

    #[test]
    fn test_conversion_from_document() {
        let catalog = sample_catalog();
        assert_eq!(catalog.brands.len(), 2);
        assert_eq!(catalog.listing_count(), 2);

        let audi = &catalog.brands[0];
        assert_eq!(audi.name, "Audi");
        assert_eq!(audi.logo, "img/audi.png");

        let a3 = &audi.listings[0];
        assert_eq!(a3.name, "A3");
        assert_eq!(a3.full_name, "Audi A3");
        assert_eq!(a3.brand, "Audi");
        assert_eq!(a3.rate, 99.5);
        assert!(a3.available);
        assert_eq!(a3.images().len(), 3);
        assert_eq!(a3.slide(), 0);
        assert_eq!(a3.max_slide(), 2);
        assert_eq!(a3.current_image(), Some("a3-front.jpg"));
    }

    #[test]
    fn test_slider_wraps_forward_and_backward() {
        let mut catalog = sample_catalog();
        let a3 = &mut catalog.brands[0].listings[0];

        a3.advance_slide(SlideDirection::Backward);
        assert_eq!(a3.slide(), 2);
        a3.advance_slide(SlideDirection::Forward);
        assert_eq!(a3.slide(), 0);
        a3.advance_slide(SlideDirection::Forward);
        assert_eq!(a3.slide(), 1);
        assert_eq!(a3.current_image(), Some("a3-side.jpg"));
    }

    #[test]
    fn test_slider_ignores_empty_image_set() {
        let mut catalog = sample_catalog();
        let serie1 = &mut catalog.brands[1].listings[0];

        assert!(!serie1.has_images());
        serie1.advance_slide(SlideDirection::Forward);
        assert_eq!(serie1.slide(), 0);
        serie1.advance_slide(SlideDirection::Backward);
        assert_eq!(serie1.slide(), 0);
        assert_eq!(serie1.current_image(), None);
    }

    #[test]
    fn test_set_images_keeps_slide_in_bounds() {
        let mut catalog = sample_catalog();
        let a3 = &mut catalog.brands[0].listings[0];

        a3.advance_slide(SlideDirection::Backward);
        assert_eq!(a3.slide(), 2);

        a3.set_images(vec!["a3-front.jpg".to_string()]);
        assert_eq!(a3.max_slide(), 0);
        assert_eq!(a3.slide(), 0);

        a3.set_images(Vec::new());
        assert!(!a3.has_images());
        assert_eq!(a3.current_image(), None);
    }

    #[test]
    fn test_traversal_order_is_stable() {
        let catalog = sample_catalog();
        let names: Vec<&str> = catalog.listings().map(|l| l.full_name.as_str()).collect();
        assert_eq!(names, vec!["Audi A3", "BMW Serie 1"]);
    }
}
