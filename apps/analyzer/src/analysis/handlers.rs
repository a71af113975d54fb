//! Axum route handlers for the analysis API.

use axum::{
    extract::{Multipart, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::{field, info, Span};
use uuid::Uuid;

use crate::analysis::{analyze_document, AnalysisView};
use crate::errors::AppError;
use crate::extraction::{DocumentFormat, UploadedDocument};
use crate::report::{render_pdf, REPORT_FILE_NAME, REPORT_MIME_TYPE};
use crate::state::AppState;

/// Multipart field carrying the resume.
pub const UPLOAD_FIELD: &str = "file";

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub file_name: String,
    pub format: Option<DocumentFormat>,
    /// `null` when the upload produced no text (unsupported or empty document).
    pub analysis: Option<AnalysisView>,
}

/// POST /api/v1/analyze
///
/// Extracts skills and missing sections from the uploaded resume.
#[tracing::instrument(skip_all, fields(request_id = %Uuid::new_v4(), file_name = field::Empty))]
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let document = read_upload(multipart).await?;
    Span::current().record("file_name", document.file_name.as_str());

    let file_name = document.file_name.clone();
    let format = document.format();
    let tagger = state.tagger.clone();

    let analysis = tokio::task::spawn_blocking(move || analyze_document(&document, tagger.as_ref()))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("analysis task failed: {e}")))??;

    Ok(Json(AnalyzeResponse {
        file_name,
        format,
        analysis: analysis.map(AnalysisView::from),
    }))
}

/// POST /api/v1/analyze/report
///
/// Same pipeline, returned as a downloadable PDF summary.
#[tracing::instrument(skip_all, fields(request_id = %Uuid::new_v4(), file_name = field::Empty))]
pub async fn handle_report(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Response, AppError> {
    let document = read_upload(multipart).await?;
    Span::current().record("file_name", document.file_name.as_str());

    let tagger = state.tagger.clone();
    let pdf = tokio::task::spawn_blocking(move || -> Result<Option<Vec<u8>>, AppError> {
        match analyze_document(&document, tagger.as_ref())? {
            Some(analysis) => Ok(Some(render_pdf(&analysis.report())?)),
            None => Ok(None),
        }
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("report task failed: {e}")))??;

    let pdf = pdf.ok_or_else(|| {
        AppError::UnprocessableEntity(
            "No text could be extracted; upload a .pdf or .docx resume".to_string(),
        )
    })?;
    info!(bytes = pdf.len(), "Report rendered");

    Ok((
        [
            (header::CONTENT_TYPE, REPORT_MIME_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{REPORT_FILE_NAME}\""),
            ),
        ],
        pdf,
    )
        .into_response())
}

/// Pulls the `file` part out of the form. Other parts are ignored.
async fn read_upload(mut multipart: Multipart) -> Result<UploadedDocument, AppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let file_name = field
            .file_name()
            .filter(|name| !name.is_empty())
            .map(str::to_owned)
            .ok_or_else(|| AppError::Validation("the upload has no file name".to_string()))?;
        let content = field.bytes().await?;
        return Ok(UploadedDocument::new(file_name, content));
    }
    Err(AppError::Validation(format!(
        "multipart field '{UPLOAD_FIELD}' is required"
    )))
}
