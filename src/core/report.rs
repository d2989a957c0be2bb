use crate::core::catalog::Catalog;
use crate::utils::error::Result;
use serde::Serialize;
use std::fmt::Write;
use url::Url;

#[derive(Debug, Serialize)]
struct LaneSummary<'a> {
    title: &'a str,
    books: usize,
    subsection: Option<&'a str>,
    image_urls: Vec<String>,
}

#[derive(Debug, Serialize)]
struct CatalogSummary<'a> {
    lanes: Vec<LaneSummary<'a>>,
    image_urls: Vec<String>,
}

// HashSet order is unspecified; sort for stable output.
fn sorted(urls: impl IntoIterator<Item = Url>) -> Vec<String> {
    let mut urls: Vec<String> = urls.into_iter().map(String::from).collect();
    urls.sort();
    urls
}

fn summarize(catalog: &Catalog) -> CatalogSummary<'_> {
    let lanes = catalog
        .lanes()
        .iter()
        .map(|lane| LaneSummary {
            title: lane.title(),
            books: lane.len(),
            subsection: lane.subsection_link().map(|link| link.url.as_str()),
            image_urls: sorted(lane.image_urls()),
        })
        .collect();

    CatalogSummary {
        lanes,
        image_urls: sorted(catalog.image_urls()),
    }
}

pub fn render_text(catalog: &Catalog, images_only: bool) -> String {
    let summary = summarize(catalog);
    let mut out = String::new();

    if images_only {
        for url in &summary.image_urls {
            let _ = writeln!(out, "{}", url);
        }
        return out;
    }

    for lane in &summary.lanes {
        let title = if lane.title.is_empty() { "(untitled)" } else { lane.title };
        let _ = writeln!(out, "{} ({} books)", title, lane.books);
        if let Some(link) = lane.subsection {
            let _ = writeln!(out, "  more: {}", link);
        }
        for url in &lane.image_urls {
            let _ = writeln!(out, "  image: {}", url);
        }
    }
    let _ = writeln!(
        out,
        "{} lanes, {} books, {} distinct images",
        summary.lanes.len(),
        catalog.book_count(),
        summary.image_urls.len()
    );
    out
}

pub fn render_json(catalog: &Catalog, images_only: bool) -> Result<String> {
    let summary = summarize(catalog);
    let json = if images_only {
        serde_json::to_string_pretty(&summary.image_urls)?
    } else {
        serde_json::to_string_pretty(&summary)?
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Book, CatalogLane, SubsectionLink};

    fn catalog() -> Catalog {
        let b = Book::new("b", "B").with_image_url(Url::parse("https://covers.example.com/b.jpg").unwrap());
        let a = Book::new("a", "A").with_image_url(Url::parse("https://covers.example.com/a.jpg").unwrap());
        Catalog::new(vec![CatalogLane::new(
            vec![b, a, Book::new("c", "C")],
            Some(SubsectionLink::new(Url::parse("https://catalog.example.com/more").unwrap())),
            "Featured",
        )])
    }

    #[test]
    fn test_render_text() {
        let text = render_text(&catalog(), false);
        assert!(text.starts_with("Featured (3 books)\n"));
        assert!(text.contains("  more: https://catalog.example.com/more\n"));
        let a = text.find("a.jpg").unwrap();
        let b = text.find("b.jpg").unwrap();
        assert!(a < b);
        assert!(text.ends_with("1 lanes, 3 books, 2 distinct images\n"));
    }

    #[test]
    fn test_render_images_only() {
        let text = render_text(&catalog(), true);
        assert_eq!(
            text,
            "https://covers.example.com/a.jpg\nhttps://covers.example.com/b.jpg\n"
        );
    }

    #[test]
    fn test_render_json() {
        let json = render_json(&catalog(), false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["lanes"][0]["title"], "Featured");
        assert_eq!(value["lanes"][0]["books"], 3);
        assert_eq!(value["image_urls"].as_array().unwrap().len(), 2);

        let images: Vec<String> = serde_json::from_str(&render_json(&catalog(), true).unwrap()).unwrap();
        assert_eq!(images.len(), 2);
    }
}
