//! Canned quiz definitions for examples and tests.

pub mod fitness;

// Re-export the fitness funnel
pub use fitness::fitness_funnel;
