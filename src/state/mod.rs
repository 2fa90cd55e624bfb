mod cache;
mod selections;

pub use cache::CatalogCache;
pub use selections::SelectionStore;
