pub mod document;
pub mod file;
pub mod http;
pub mod registry;
pub mod traits;

pub use file::JsonFileSource;
pub use http::HttpSource;
pub use registry::SourceRegistry;
pub use traits::ContentSource;
