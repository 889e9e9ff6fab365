//! steady-storage
//!
//! S3 operations behind the hosted data/storage contract: JSON row documents
//! under table-style prefixes, media blobs, and presigned URLs.

pub mod client;
pub mod error;
pub mod objects;
pub mod rows;
