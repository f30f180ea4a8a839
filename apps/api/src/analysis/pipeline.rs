//! Analysis pipeline — extract → prompt → model → parse → score, one file at a time.
//!
//! Recovery happens per file and never aborts the batch:
//! - extraction failure: file skipped, reported in `skipped`
//! - model failure or empty response: degraded record

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::analysis::prompts::build_analysis_prompt;
use crate::analysis::record::AnalysisRecord;
use crate::analysis::summary::BatchSummary;
use crate::extraction::{extract_text, ExtractError};
use crate::llm_client::TextGenerator;

/// One uploaded file as received from the client.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub file_name: String,
    pub bytes: Bytes,
}

/// A file that produced no record, with the reason shown to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedFile {
    pub file_name: String,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchAnalysis {
    pub batch_id: Uuid,
    pub records: Vec<AnalysisRecord>,
    pub skipped: Vec<SkippedFile>,
    pub summary: BatchSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedDocument {
    pub file_name: String,
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExtractionBatch {
    pub documents: Vec<ExtractedDocument>,
    pub skipped: Vec<SkippedFile>,
}

/// Analyzes one document's text. Always yields a record; failures degrade it.
pub async fn analyze_text(
    generator: &dyn TextGenerator,
    text: &str,
    file_name: &str,
) -> AnalysisRecord {
    let prompt = build_analysis_prompt(text);

    match generator.generate(&prompt).await {
        Ok(output) => {
            let record = AnalysisRecord::from_model_output(file_name, &output);
            info!(
                "Analyzed {file_name}: risk_score={} quote_ready={}",
                record.risk_score, record.quote_ready
            );
            record
        }
        Err(e) => {
            warn!("AI analysis failed for {file_name}: {e}");
            AnalysisRecord::failed(file_name)
        }
    }
}

/// Runs the (blocking) extraction for one upload on the blocking thread pool.
async fn extract_upload(doc: &UploadedDocument) -> Result<String, ExtractError> {
    let file_name = doc.file_name.clone();
    let bytes = doc.bytes.clone();
    tokio::task::spawn_blocking(move || extract_text(&file_name, &bytes))
        .await
        .unwrap_or_else(|e| Err(ExtractError::Interrupted(e.to_string())))
}

/// Extracts every document, keeping the texts and reporting the failures.
pub async fn extract_documents(documents: &[UploadedDocument]) -> ExtractionBatch {
    let mut extracted = Vec::with_capacity(documents.len());
    let mut skipped = Vec::new();

    for doc in documents {
        match extract_upload(doc).await {
            Ok(text) => extracted.push(ExtractedDocument {
                file_name: doc.file_name.clone(),
                text,
            }),
            Err(e) => {
                warn!("Skipping {}: {e}", doc.file_name);
                skipped.push(SkippedFile {
                    file_name: doc.file_name.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    ExtractionBatch {
        documents: extracted,
        skipped,
    }
}

/// Runs the full pipeline over a batch, strictly sequentially.
///
/// Every input file ends up in exactly one of `records` or `skipped`.
pub async fn analyze_documents(
    generator: &dyn TextGenerator,
    documents: &[UploadedDocument],
) -> BatchAnalysis {
    let batch_id = Uuid::new_v4();
    info!("Batch {batch_id}: processing {} file(s)", documents.len());

    let mut records = Vec::with_capacity(documents.len());
    let mut skipped = Vec::new();

    for doc in documents {
        let text = match extract_upload(doc).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Skipping {}: {e}", doc.file_name);
                skipped.push(SkippedFile {
                    file_name: doc.file_name.clone(),
                    reason: e.to_string(),
                });
                continue;
            }
        };
        records.push(analyze_text(generator, &text, &doc.file_name).await);
    }

    let summary = BatchSummary::from_records(&records);
    info!(
        "Batch {batch_id}: {} analyzed, {} skipped, {} quote-ready",
        summary.files_analyzed,
        skipped.len(),
        summary.quote_ready_count
    );

    BatchAnalysis {
        batch_id,
        records,
        skipped,
        summary,
    }
}
