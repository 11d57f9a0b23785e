//! Impact tracker - monitors how AI affects industries
//!
//! This library fetches articles, extracts their text, and maintains a
//! markdown report of classified entries grouped by month and industry.

pub mod article;
pub mod cli;
pub mod config;
pub mod error;
pub mod report;
pub mod utils;
