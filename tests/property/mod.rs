//! Property-based tests for manifest parsing invariants
