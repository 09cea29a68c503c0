//! # calc
//!
//! A compiler and stack machine for assignment statements of the form
//! `variable = expression`. Expressions combine real number constants,
//! variables, the four arithmetic operators, and parentheses.
//!
//! A line of source passes through three stages: [`lang::lex`] splits
//! it into tokens, [`lang::check_assignment`] validates the shape, and
//! [`mach::generate`] emits instructions for the [`mach::Runtime`] to
//! execute against a variable [`mach::Store`].

pub mod lang;
pub mod mach;
pub mod term;
