//! Browser-facing services: wallet provider, local storage, data sources

pub mod portfolio;
pub mod storage;
pub mod wallet;
