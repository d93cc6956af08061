//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

/// Canonical trees hold `Or` only at the root.
pub(crate) fn or_below_root() -> ! {
    panic!("canonical tree has an `Or` below the root (normalization must lift every `Or`)")
}
