//! mindnav-storage
//!
//! S3 persistence for quiz results and AI reports. Thin wrapper around the
//! AWS S3 SDK; the object layout comes from `mindnav_core::s3_keys`.

pub mod config;
pub mod error;
pub mod objects;
pub mod results;
