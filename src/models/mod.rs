pub mod bulk;
pub mod clock;
pub mod record;
pub mod summary;
