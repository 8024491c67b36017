pub mod state;
pub mod widget;

pub use widget::ProductCatalogList;
