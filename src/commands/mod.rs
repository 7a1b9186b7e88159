//! Command implementations for the nscert CLI

pub mod bundle;
pub mod check;
pub mod completions;
pub mod configure;
pub mod provision;
pub mod tools;
pub mod version;
