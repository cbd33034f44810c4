pub mod sort_column;
pub mod sort_order;

pub use sort_column::SortColumn;
pub use sort_order::SortOrder;
