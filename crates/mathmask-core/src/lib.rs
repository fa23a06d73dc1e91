//! Mathmask Core
//!
//! This crate provides the equation rules, the replacement engine, and
//! error definitions for mathmask.
//!
//! # Overview
//!
//! The core crate contains:
//! - [`EquationKind`] - The three recognized span kinds and their patterns
//! - [`replace_equations`] - Replace every span with a placeholder
//! - [`Replacer`], [`ReplaceStats`] - A configurable pass with per-kind counts
//! - [`MathmaskError`] - Error types

pub mod error;
pub mod replace;
pub mod rules;

pub use error::{MathmaskError, Result};
pub use replace::{
    replace_equations, replace_equations_default, ReplaceStats, Replacer, DEFAULT_PLACEHOLDER,
};
pub use rules::EquationKind;
