pub mod fields;
pub mod post;
pub mod record;
pub mod source;

pub use post::{Post, ResolvedRecord};
pub use record::RawContentRecord;
pub use source::SourceKind;
