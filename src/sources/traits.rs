use crate::domain::{RawContentRecord, SourceKind};
use crate::errors::BlogResult;

#[cfg_attr(test, mockall::automock)]
pub trait ContentSource: Send + Sync {
    /// Identifies this source type
    fn kind(&self) -> SourceKind;

    /// Check if this source can read the given location
    fn can_handle(&self, location: &str) -> bool;

    /// Fetch the current list of raw content records
    fn fetch_records(&self, location: &str) -> BlogResult<Vec<RawContentRecord>>;
}

impl<T: ContentSource + ?Sized> ContentSource for &T {
    fn kind(&self) -> SourceKind {
        (**self).kind()
    }

    fn can_handle(&self, location: &str) -> bool {
        (**self).can_handle(location)
    }

    fn fetch_records(&self, location: &str) -> BlogResult<Vec<RawContentRecord>> {
        (**self).fetch_records(location)
    }
}
