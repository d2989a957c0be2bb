use crate::domain::model::{Book, CatalogLane};
use crate::domain::ports::ImageSource;
use serde::Serialize;
use std::collections::HashSet;
use url::Url;

/// Lanes in display order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Catalog<B = Book> {
    lanes: Vec<CatalogLane<B>>,
}

impl<B> Catalog<B> {
    pub fn new(lanes: Vec<CatalogLane<B>>) -> Self {
        Self { lanes }
    }

    pub fn lanes(&self) -> &[CatalogLane<B>] {
        &self.lanes
    }

    /// 第一個標題相符的 lane
    pub fn lane(&self, title: &str) -> Option<&CatalogLane<B>> {
        self.lanes.iter().find(|lane| lane.title() == title)
    }

    pub fn book_count(&self) -> usize {
        self.lanes.iter().map(CatalogLane::len).sum()
    }
}

impl<B: ImageSource> Catalog<B> {
    /// Union of every lane's image URLs.
    pub fn image_urls(&self) -> HashSet<Url> {
        self.lanes.iter().flat_map(CatalogLane::image_urls).collect()
    }
}
