//! Utility modules for common functionality
//!
//! This module provides logging and naming helpers used throughout the crate.

pub mod logger;
pub mod tag_utils;
pub(crate) mod string_utils;
