pub mod catalog;
pub mod providers;
pub mod resolver;

pub use catalog::CatalogStore;
pub use resolver::{resolve, TitleMatch};
