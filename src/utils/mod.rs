//! Utility functions for code generation and input validation.
//!
//! - [`code_generator`] - Random short code generation and requested-code validation
//! - [`target_validator`] - Target URL syntax checks

pub mod code_generator;
pub mod target_validator;
