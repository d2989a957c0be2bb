pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::{OutputFormat, TomlConfig};

pub use crate::core::{catalog::Catalog, document::LaneDocument};
pub use crate::domain::model::{Book, CatalogLane, SubsectionLink};
pub use crate::domain::ports::ImageSource;
pub use crate::utils::error::{LaneError, Result};
