pub mod catalog;
pub mod document;
pub mod report;

pub use crate::domain::model::{Book, CatalogLane, SubsectionLink};
pub use crate::domain::ports::ImageSource;
pub use crate::utils::error::Result;
