use crate::core::catalog::Catalog;
use crate::domain::model::{Book, CatalogLane, SubsectionLink};
use crate::utils::error::{LaneError, Result};
use crate::utils::validation::{resolve_href, validate_required_field};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use url::Url;

/// Lanes as they appear in a JSON or TOML document, before validation.
///
/// Every field is optional here so that a missing `title` or `books` list
/// reaches [`CatalogLane::try_new`] and is reported as `InvalidArgument`
/// instead of a generic parse error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LaneDocument {
    #[serde(default)]
    pub lanes: Vec<RawLane>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawLane {
    pub title: Option<String>,
    pub books: Option<Vec<RawBook>>,
    pub subsection: Option<RawSubsectionLink>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawBook {
    pub identifier: Option<String>,
    pub title: Option<String>,
    #[serde(default)]
    pub authors: Vec<String>,
    pub image: Option<String>,
    pub thumbnail: Option<String>,
    pub updated: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawSubsectionLink {
    pub title: Option<String>,
    pub href: Option<String>,
}

impl LaneDocument {
    /// 從檔案載入，依副檔名判斷格式
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(&content),
            Some("toml") => Self::from_toml_str(&content),
            other => Err(LaneError::invalid_argument(
                "input",
                format!(
                    "Unsupported document extension: {}. Expected .json or .toml",
                    other.unwrap_or("<none>")
                ),
            )),
        }
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Validates every lane and resolves relative hrefs against `base`.
    pub fn into_catalog(self, base: Option<&Url>) -> Result<Catalog> {
        let lanes = self
            .lanes
            .into_iter()
            .enumerate()
            .map(|(index, raw)| raw.into_lane(index, base))
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!("Built catalog with {} lanes", lanes.len());
        Ok(Catalog::new(lanes))
    }
}

impl RawLane {
    fn into_lane(self, index: usize, base: Option<&Url>) -> Result<CatalogLane> {
        let subsection = self
            .subsection
            .map(|link| link.into_link(index, base))
            .transpose()?;

        let books = self
            .books
            .map(|books| {
                books
                    .into_iter()
                    .enumerate()
                    .map(|(position, book)| book.into_book(index, position, base))
                    .collect::<Result<Vec<_>>>()
            })
            .transpose()?;

        let lane = CatalogLane::try_new(books, subsection, self.title).map_err(|e| match e {
            LaneError::InvalidArgument { field, reason } => LaneError::InvalidArgument {
                field: format!("lanes[{}].{}", index, field),
                reason,
            },
            other => other,
        })?;

        tracing::debug!(
            "Lane {} `{}`: {} books, subsection: {}",
            index,
            lane.title(),
            lane.len(),
            lane.has_subsection()
        );
        Ok(lane)
    }
}

impl RawBook {
    fn into_book(self, lane: usize, position: usize, base: Option<&Url>) -> Result<Book> {
        let field = format!("lanes[{}].books[{}].identifier", lane, position);
        let identifier = validate_required_field(&field, self.identifier)?;

        let image_url = optional_href(self.image.as_deref(), base, &identifier);
        let thumbnail_url = optional_href(self.thumbnail.as_deref(), base, &identifier);

        Ok(Book {
            title: self.title.unwrap_or_default(),
            identifier,
            authors: self.authors,
            image_url,
            thumbnail_url,
            updated: self.updated,
        })
    }
}

impl RawSubsectionLink {
    fn into_link(self, lane: usize, base: Option<&Url>) -> Result<SubsectionLink> {
        let field = format!("lanes[{}].subsection.href", lane);
        let href = validate_required_field(&field, self.href)?;
        let url = resolve_href(&href, base)
            .map_err(|e| LaneError::invalid_argument(field, format!("Invalid URL `{}`: {}", href, e)))?;

        Ok(SubsectionLink {
            title: self.title,
            url,
        })
    }
}

// Unparseable book images are dropped, not fatal.
fn optional_href(href: Option<&str>, base: Option<&Url>, identifier: &str) -> Option<Url> {
    let href = href?;
    match resolve_href(href, base) {
        Ok(url) => Some(url),
        Err(e) => {
            tracing::warn!("Skipping image `{}` of book {}: {}", href, identifier, e);
            None
        }
    }
}
