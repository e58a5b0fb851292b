pub mod consts;
pub mod errors;
pub mod utils;
pub mod reader;
pub mod header;
pub mod table;
pub mod catalog;
pub mod cache;
pub mod layout;
pub mod builder;
pub mod config;
pub mod translator;

#[doc(hidden)]
pub mod fixtures;

pub use builder::CatalogBuilder;
pub use catalog::{Catalog, CatalogKey};
pub use config::{CacheConfig, TranslatorConfig};
pub use errors::{MoError, Result};
pub use header::MoHeader;
pub use reader::BinaryReader;
pub use translator::{Gettext, Translator};
