//! Property-based tests for hierarchy intersection and composition

mod intersection;
