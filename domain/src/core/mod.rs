//! Core domain concepts shared across all subdomains.
//!
//! - [`question::Question`]: a validated multiple-choice word problem
//! - [`error::DomainError`]: domain-level errors
//! - [`validation::ConfigIssue`]: structured configuration problems

pub mod error;
pub mod question;
pub mod validation;
