// Candidate generation: fixed pools plus the randomized record builder.
// Every draw goes through an injected `Rng`; nothing here touches a global RNG.

pub mod generator;
pub mod pools;

pub use generator::{baseline_bias, email_for, overall_bias, CandidateGenerator};
