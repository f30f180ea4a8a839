//! Axum route handlers for document upload, extraction and analysis.

use axum::{
    extract::{Multipart, State},
    Json,
};
use tracing::debug;

use crate::analysis::pipeline::{
    analyze_documents, extract_documents, BatchAnalysis, ExtractionBatch, UploadedDocument,
};
use crate::errors::AppError;
use crate::state::AppState;

/// Collects every multipart part that carries a file name.
/// Parts without one (plain form fields) are ignored.
pub async fn read_uploads(mut multipart: Multipart) -> Result<Vec<UploadedDocument>, AppError> {
    let mut documents = Vec::new();

    while let Some(field) = multipart.next_field().await? {
        let Some(file_name) = field.file_name().map(str::to_string) else {
            debug!("Ignoring multipart field {:?} without a file name", field.name());
            continue;
        };
        let bytes = field.bytes().await?;
        documents.push(UploadedDocument { file_name, bytes });
    }

    if documents.is_empty() {
        return Err(AppError::Validation(
            "Upload at least one file (pdf, docx, xlsx or txt)".to_string(),
        ));
    }

    Ok(documents)
}

/// POST /api/v1/analyses
///
/// Runs the full pipeline over every uploaded file. Files that cannot be
/// extracted are listed under `skipped`; failed model calls yield degraded records.
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<BatchAnalysis>, AppError> {
    let documents = read_uploads(multipart).await?;
    let batch = analyze_documents(state.generator.as_ref(), &documents).await;
    Ok(Json(batch))
}

/// POST /api/v1/extractions
///
/// Extraction only. Clients use the returned texts as chat context.
pub async fn handle_extract(multipart: Multipart) -> Result<Json<ExtractionBatch>, AppError> {
    let documents = read_uploads(multipart).await?;
    Ok(Json(extract_documents(&documents).await))
}
