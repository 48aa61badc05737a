//! Catalog ordering
//!
//! Brands sort by name and listings by full name, case-insensitively.
//! Both sorts are stable so entries with equal keys keep their decode
//! order.

use crate::catalog::model::Catalog;

pub fn sort_catalog(catalog: &mut Catalog) {
    catalog
        .brands
        .sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    for brand in &mut catalog.brands {
        brand
            .listings
            .sort_by(|a, b| a.full_name.to_lowercase().cmp(&b.full_name.to_lowercase()));
    }
}
