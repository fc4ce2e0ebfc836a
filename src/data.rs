pub mod directory;
pub mod records_filter;
pub mod student;
pub mod summary;
