pub mod page_header;
pub mod table;

pub use page_header::PageHeader;
