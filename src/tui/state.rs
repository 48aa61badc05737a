//! Browser state
//!
//! The screen is a flat list of rows rebuilt from the current view:
//! one header row per brand section, plus that brand's listing rows
//! when the section is expanded. All navigation works on row indices;
//! slider steps resolve through the view back to catalog listings.

use std::collections::HashSet;
use tui_input::Input;

use crate::catalog::{Brand, Catalog, CatalogView, Listing, SlideDirection};

/// Identity of one screen row within the current view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowId {
    Brand { section: usize },
    Listing { section: usize, row: usize },
}

pub struct BrowserState {
    pub catalog: Catalog,
    pub view: CatalogView,
    pub search_input: Input,
    /// Catalog brand indices of expanded sections.
    pub expanded: HashSet<usize>,
    pub selected: usize,
    rows: Vec<RowId>,
}

impl BrowserState {
    pub fn new(catalog: Catalog) -> Self {
        let mut state = Self {
            view: CatalogView::default(),
            catalog,
            search_input: Input::default(),
            expanded: HashSet::new(),
            selected: 0,
            rows: Vec::new(),
        };
        state.install_view(CatalogView::full(&state.catalog));
        state
    }

    /// Re-filter the catalog with the current query and install the
    /// resulting view.
    pub fn apply_search(&mut self) {
        let query = self.search_input.value().to_string();
        let view = CatalogView::filtered(&self.catalog, &query);
        self.install_view(view);
    }

    pub fn set_query(&mut self, query: &str) {
        self.search_input = Input::new(query.to_string());
        self.apply_search();
    }

    pub fn clear_query(&mut self) {
        self.search_input = Input::default();
        self.apply_search();
    }

    pub fn query(&self) -> &str {
        self.search_input.value()
    }

    /// Installing a view starts a fresh screen: sliders rewind to the
    /// first image, sections collapse and the cursor moves to the top.
    fn install_view(&mut self, view: CatalogView) {
        for section in &view.sections {
            for &row in &section.listings {
                if let Some(listing) = self
                    .catalog
                    .brands
                    .get_mut(section.brand)
                    .and_then(|b| b.listings.get_mut(row))
                {
                    listing.reset_slide();
                }
            }
        }
        self.view = view;
        self.expanded.clear();
        self.selected = 0;
        self.rebuild_rows();
    }

    fn rebuild_rows(&mut self) {
        self.rows.clear();
        for (section, s) in self.view.sections.iter().enumerate() {
            self.rows.push(RowId::Brand { section });
            if self.expanded.contains(&s.brand) {
                for row in 0..s.listings.len() {
                    self.rows.push(RowId::Listing { section, row });
                }
            }
        }
        if self.selected >= self.rows.len() {
            self.selected = self.rows.len().saturating_sub(1);
        }
    }

    pub fn rows(&self) -> &[RowId] {
        &self.rows
    }

    pub fn selected_row(&self) -> Option<RowId> {
        self.rows.get(self.selected).copied()
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.selected < self.rows.len().saturating_sub(1) {
            self.selected += 1;
        }
    }

    /// Expand or collapse the selected brand section. Listing rows
    /// ignore the toggle.
    pub fn toggle_expanded(&mut self) {
        if let Some(RowId::Brand { section }) = self.selected_row() {
            if let Some(s) = self.view.sections.get(section) {
                let brand = s.brand;
                if !self.expanded.remove(&brand) {
                    self.expanded.insert(brand);
                }
                self.rebuild_rows();
            }
        }
    }

    /// Step the selected listing's slider. Resolution goes through the
    /// view, so the step lands on the listing actually on screen.
    pub fn slide(&mut self, direction: SlideDirection) {
        if let Some(RowId::Listing { section, row }) = self.selected_row() {
            if let Some((brand, listing)) = self.view.resolve(section, row) {
                if let Some(listing) = self
                    .catalog
                    .brands
                    .get_mut(brand)
                    .and_then(|b| b.listings.get_mut(listing))
                {
                    listing.advance_slide(direction);
                }
            }
        }
    }

    pub fn is_expanded(&self, section: usize) -> bool {
        self.view
            .sections
            .get(section)
            .map(|s| self.expanded.contains(&s.brand))
            .unwrap_or(false)
    }

    pub fn section_brand(&self, section: usize) -> Option<&Brand> {
        let s = self.view.sections.get(section)?;
        self.catalog.brands.get(s.brand)
    }

    pub fn listing(&self, section: usize, row: usize) -> Option<&Listing> {
        let (brand, listing) = self.view.resolve(section, row)?;
        self.catalog.brands.get(brand)?.listings.get(listing)
    }
}
