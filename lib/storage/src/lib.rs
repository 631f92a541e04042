pub mod store;
pub mod source;

pub use store::{DataStore, FetchTicket};
pub use source::{DataSource, FetchError, FileSource, HttpSource, StaticSource, DOCTORS_PATH};
