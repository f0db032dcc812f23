//! Domain-level persistence for quiz results and reports.
//!
//! The platform reads back two strings per result — the raw analysis text
//! and the summary line. Parsed sections are recomputed from the raw text
//! on render, never persisted.

use aws_sdk_s3::Client;
use tracing::info;
use uuid::Uuid;

use mindnav_core::models::score::QuizResult;
use mindnav_core::models::transaction::AnalysisTransaction;
use mindnav_core::s3_keys;

use crate::error::StorageError;
use crate::objects;

/// Store a scored quiz result as JSON.
pub async fn put_quiz_result(
    client: &Client,
    bucket: &str,
    result: &QuizResult,
) -> Result<(), StorageError> {
    let body = serde_json::to_vec_pretty(result)?;
    objects::put_object(client, bucket, &result.s3_key, body, "application/json").await?;

    info!(result_id = %result.id, key = %result.s3_key, "stored quiz result");
    Ok(())
}

/// Load a quiz result by ID.
pub async fn get_quiz_result(
    client: &Client,
    bucket: &str,
    id: Uuid,
) -> Result<QuizResult, StorageError> {
    let key = s3_keys::quiz_result(id);
    let bytes = objects::get_object(client, bucket, &key).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Store the raw analysis text and the summary line for a result.
pub async fn put_report_texts(
    client: &Client,
    bucket: &str,
    result_id: Uuid,
    analysis: &str,
    summary: &str,
) -> Result<(), StorageError> {
    objects::put_object(
        client,
        bucket,
        &s3_keys::report_analysis(result_id),
        analysis.as_bytes().to_vec(),
        "text/markdown",
    )
    .await?;
    objects::put_object(
        client,
        bucket,
        &s3_keys::report_summary(result_id),
        summary.as_bytes().to_vec(),
        "text/plain",
    )
    .await?;

    info!(
        result_id = %result_id,
        analysis_len = analysis.len(),
        "stored report texts"
    );
    Ok(())
}

/// Load the raw analysis text for a result.
pub async fn get_report_analysis(
    client: &Client,
    bucket: &str,
    result_id: Uuid,
) -> Result<String, StorageError> {
    let bytes = objects::get_object(client, bucket, &s3_keys::report_analysis(result_id)).await?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Store the analysis transaction record.
pub async fn put_transaction(
    client: &Client,
    bucket: &str,
    transaction: &AnalysisTransaction,
) -> Result<(), StorageError> {
    let body = serde_json::to_vec_pretty(transaction)?;
    objects::put_object(client, bucket, &transaction.s3_key, body, "application/json").await?;

    info!(transaction_id = %transaction.id, "stored analysis transaction");
    Ok(())
}

/// List stored quiz result keys.
pub async fn list_quiz_results(client: &Client, bucket: &str) -> Result<Vec<String>, StorageError> {
    objects::list_keys(client, bucket, s3_keys::RESULTS_PREFIX).await
}

/// Delete a quiz result and everything derived from it.
pub async fn delete_quiz_result(
    client: &Client,
    bucket: &str,
    id: Uuid,
) -> Result<(), StorageError> {
    objects::delete_object(client, bucket, &s3_keys::quiz_result(id)).await?;
    for key in objects::list_keys(client, bucket, &s3_keys::report_prefix(id)).await? {
        objects::delete_object(client, bucket, &key).await?;
    }

    info!(result_id = %id, "deleted quiz result");
    Ok(())
}
