pub mod auth_record;

pub use auth_record::{AuthRecord, RecordParseError, Role};
