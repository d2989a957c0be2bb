use url::Url;

/// Anything a lane can collect a cover image from.
///
/// `None` covers both "this item has no image" and "the image could not be
/// determined"; callers skip the item either way.
pub trait ImageSource {
    fn image_url(&self) -> Option<Url>;
}

impl<T: ImageSource + ?Sized> ImageSource for &T {
    fn image_url(&self) -> Option<Url> {
        (**self).image_url()
    }
}

impl<T: ImageSource + ?Sized> ImageSource for std::sync::Arc<T> {
    fn image_url(&self) -> Option<Url> {
        (**self).image_url()
    }
}
