//! Utility modules

pub mod build_env;
pub mod constants;
