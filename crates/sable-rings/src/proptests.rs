//! Property-based tests for the rational field.
