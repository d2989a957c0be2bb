use crate::domain::ports::ImageSource;
use crate::utils::error::Result;
use crate::utils::validation::validate_required_field;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub identifier: String,
    pub title: String,
    #[serde(default)]
    pub authors: Vec<String>,
    /// 封面圖
    pub image_url: Option<Url>,
    pub thumbnail_url: Option<Url>,
    pub updated: Option<DateTime<Utc>>,
}

impl Book {
    pub fn new(identifier: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            title: title.into(),
            authors: Vec::new(),
            image_url: None,
            thumbnail_url: None,
            updated: None,
        }
    }

    pub fn with_image_url(mut self, url: Url) -> Self {
        self.image_url = Some(url);
        self
    }

    pub fn with_thumbnail_url(mut self, url: Url) -> Self {
        self.thumbnail_url = Some(url);
        self
    }
}

impl ImageSource for Book {
    // Cover first, thumbnail when the feed only carries the small image.
    fn image_url(&self) -> Option<Url> {
        self.image_url
            .as_ref()
            .or(self.thumbnail_url.as_ref())
            .cloned()
    }
}

/// Link to the full listing behind a lane ("see more").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubsectionLink {
    pub title: Option<String>,
    pub url: Url,
}

impl SubsectionLink {
    pub fn new(url: Url) -> Self {
        Self { title: None, url }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// A titled, ordered group of books shown together in a catalog.
///
/// All fields are fixed at construction. Book order is the display order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogLane<B = Book> {
    books: Vec<B>,
    subsection_link: Option<SubsectionLink>,
    title: String,
}

impl<B> CatalogLane<B> {
    pub fn new(books: Vec<B>, subsection_link: Option<SubsectionLink>, title: impl Into<String>) -> Self {
        Self {
            books,
            subsection_link,
            title: title.into(),
        }
    }

    /// Builds a lane from inputs that may be missing.
    ///
    /// A missing `books` list or `title` is an `InvalidArgument` error. An
    /// empty list or an empty title is accepted.
    pub fn try_new(
        books: Option<Vec<B>>,
        subsection_link: Option<SubsectionLink>,
        title: Option<String>,
    ) -> Result<Self> {
        let books = validate_required_field("books", books)?;
        let title = validate_required_field("title", title)?;
        Ok(Self::new(books, subsection_link, title))
    }

    pub fn books(&self) -> &[B] {
        &self.books
    }

    pub fn subsection_link(&self) -> Option<&SubsectionLink> {
        self.subsection_link.as_ref()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn has_subsection(&self) -> bool {
        self.subsection_link.is_some()
    }
}

impl<B: ImageSource> CatalogLane<B> {
    /// Distinct image URLs of the lane's books. Books without one are skipped.
    pub fn image_urls(&self) -> HashSet<Url> {
        self.books.iter().filter_map(|book| book.image_url()).collect()
    }
}
