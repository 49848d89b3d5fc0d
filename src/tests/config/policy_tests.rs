//! Tests for output policies.

use crate::config::{FileExistsPolicy, RecordOrder};

#[test]
fn file_exists_policy_maps_append_flag() {
    assert_eq!(FileExistsPolicy::from_append_flag(true), FileExistsPolicy::Append);
    assert_eq!(FileExistsPolicy::from_append_flag(false), FileExistsPolicy::Overwrite);
    assert_eq!(FileExistsPolicy::default(), FileExistsPolicy::Overwrite);
}

#[test]
fn record_order_defaults_to_sorted() {
    assert_eq!(RecordOrder::default(), RecordOrder::Sorted);
}
