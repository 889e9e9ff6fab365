//! Typed row documents.
//!
//! Every table row is one JSON document under a table-style prefix (see
//! `steady_core::storage_keys`). Mutations that race — the completion check
//! and a relapse hitting the same goal — go through the If-Match variant so
//! the losing writer observes `PreconditionFailed` instead of clobbering.

use aws_sdk_s3::Client;
use serde::{de::DeserializeOwned, Serialize};

use crate::error::StorageError;
use crate::objects;

/// Load a row and its ETag.
pub async fn load_row<T: DeserializeOwned>(
    client: &Client,
    bucket: &str,
    key: &str,
) -> Result<(T, String), StorageError> {
    let output = objects::get_object(client, bucket, key).await?;
    let value: T = serde_json::from_slice(&output.body)?;
    let etag = output.etag.unwrap_or_default();
    Ok((value, etag))
}

/// Save a row unconditionally. Returns the new ETag.
pub async fn save_row<T: Serialize>(
    client: &Client,
    bucket: &str,
    key: &str,
    value: &T,
) -> Result<String, StorageError> {
    let body = serde_json::to_vec_pretty(value)?;
    objects::put_object(client, bucket, key, body, Some("application/json")).await
}

/// Save a row only if it is unchanged since it was loaded (ETag If-Match).
pub async fn save_row_if_match<T: Serialize>(
    client: &Client,
    bucket: &str,
    key: &str,
    value: &T,
    expected_etag: &str,
) -> Result<String, StorageError> {
    let body = serde_json::to_vec_pretty(value)?;
    objects::put_object_if_match(
        client,
        bucket,
        key,
        body,
        Some("application/json"),
        expected_etag,
    )
    .await
}

/// Load every row under a table prefix.
///
/// Listings here are per-user prefixes with at most a few hundred rows, so
/// a sequential scan is fine.
pub async fn list_rows<T: DeserializeOwned>(
    client: &Client,
    bucket: &str,
    prefix: &str,
) -> Result<Vec<T>, StorageError> {
    let keys = objects::list_objects(client, bucket, prefix).await?;

    let mut rows = Vec::with_capacity(keys.len());
    for key in &keys {
        let output = objects::get_object(client, bucket, key).await?;
        rows.push(serde_json::from_slice(&output.body)?);
    }

    Ok(rows)
}
