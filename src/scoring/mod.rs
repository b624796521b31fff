// Scoring: turns gathered URL facts into a trust score, verdict and rationale.
//
// Everything here is pure: no I/O, no clock reads except the creation
// metadata stamped by `engine::score`.

pub mod domain_age;
pub mod engine;
pub mod summary;
pub mod trust;
