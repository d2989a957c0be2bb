use crate::utils::error::{LaneError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// 必填欄位：`None` 視為缺少，回傳 `InvalidArgument`
pub fn validate_required_field<T>(field_name: &str, value: Option<T>) -> Result<T> {
    value.ok_or_else(|| {
        LaneError::invalid_argument(field_name, format!("{} is required", field_name))
    })
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<Url> {
    if url_str.trim().is_empty() {
        return Err(LaneError::invalid_argument(field_name, "URL cannot be empty"));
    }

    let url = Url::parse(url_str).map_err(|e| {
        LaneError::invalid_argument(field_name, format!("Invalid URL format: {}", e))
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(LaneError::invalid_argument(
            field_name,
            format!("Unsupported URL scheme: {}", scheme),
        )),
    }
}

/// 解析 href，相對路徑以 `base` 為基準
pub fn resolve_href(href: &str, base: Option<&Url>) -> std::result::Result<Url, url::ParseError> {
    match base {
        Some(base) => base.join(href),
        None => Url::parse(href),
    }
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(LaneError::ConfigError {
            message: format!(
                "{}: unsupported value `{}`. Valid values: {}",
                field_name,
                value,
                allowed.join(", ")
            ),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required_field() {
        assert_eq!(validate_required_field("title", Some("Fiction")).unwrap(), "Fiction");

        let err = validate_required_field::<String>("title", None).unwrap_err();
        assert!(matches!(err, LaneError::InvalidArgument { ref field, .. } if field == "title"));
    }

    #[test]
    fn test_validate_url() {
        assert!(validate_url("base_url", "https://example.com").is_ok());
        assert!(validate_url("base_url", "http://example.com/feed").is_ok());
        assert!(validate_url("base_url", "").is_err());
        assert!(validate_url("base_url", "not a url").is_err());
        assert!(validate_url("base_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_resolve_href() {
        let base = Url::parse("https://library.example.org/catalog/groups/").unwrap();
        let resolved = resolve_href("../covers/1.jpg", Some(&base)).unwrap();
        assert_eq!(resolved.as_str(), "https://library.example.org/catalog/covers/1.jpg");

        let absolute = resolve_href("https://cdn.example.com/2.png", Some(&base)).unwrap();
        assert_eq!(absolute.host_str(), Some("cdn.example.com"));

        assert!(resolve_href("covers/1.jpg", None).is_err());
    }

    #[test]
    fn test_validate_one_of() {
        assert!(validate_one_of("output.format", "json", &["text", "json"]).is_ok());
        assert!(validate_one_of("output.format", "csv", &["text", "json"]).is_err());
    }
}
