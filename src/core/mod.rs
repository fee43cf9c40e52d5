pub mod backup;
pub mod log;
pub mod store;
pub mod summary;
