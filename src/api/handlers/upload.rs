use crate::{
    api::{AppState, responses::UploadResponse},
    core::upload,
    errors::{Error, Result},
};
use axum::{
    Json,
    extract::{Multipart, State, multipart::MultipartRejection},
};
use tracing::instrument;

/// Multipart field holding the image
pub const FILE_FIELD: &str = "file";

/// `POST /admin/upload`
///
/// Stores the `file` field of a multipart body and returns its public URL.
/// Neither the type nor the size of the file is checked.
#[instrument(skip_all)]
pub async fn upload_image(
    State(state): State<AppState>,
    multipart: std::result::Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>> {
    let mut multipart = multipart.map_err(|_| Error::validation("no file"))?;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| Error::validation(e.to_string()))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let original_name = field.file_name().unwrap_or_default().to_string();
        let bytes = field.bytes().await.map_err(|e| Error::Upload {
            message: e.to_string(),
        })?;

        let stored =
            upload::store_upload(&state.settings.upload_dir, &original_name, &bytes).await?;
        return Ok(Json(UploadResponse { url: stored.url }));
    }

    Err(Error::validation("no file"))
}
