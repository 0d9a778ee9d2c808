extern crate std;
use std::format;
use std::string::ToString;

use crate::probing::TableError;

#[test]
fn test_display() {
    assert_eq!(
        TableError::InvalidKey(-3).to_string(),
        "invalid key -3: keys must be non-negative"
    );
    assert_eq!(TableError::CapacityExceeded.to_string(), "table is at capacity");
    assert_eq!(TableError::KeyNotFound(42).to_string(), "key 42 not found");
}

#[test]
fn test_error_trait_object() {
    let err: &dyn core::error::Error = &TableError::CapacityExceeded;
    assert!(err.source().is_none());
    assert!(!format!("{err}").is_empty());
}
