use reqwest::Client;
use serde::Deserialize;
use std::future::Future;
use std::time::Duration;

use crate::config::Config;
use crate::utils::api_error::ApiError;

const UPLOAD_TIMEOUT: Duration = Duration::from_secs(30);
const DELETE_TIMEOUT: Duration = Duration::from_secs(10);
const MAX_ATTEMPTS: u32 = 2;

#[derive(Debug, Clone, Deserialize)]
pub struct UploadResult {
    pub url: String,
    pub file_id: String,
    /// Reported by the vault for video files only.
    #[serde(default)]
    pub duration: Option<f64>,
}

/// HTTP client for the media vault. Every remote call is bounded by a
/// timeout and retried once; exhaustion surfaces as a dependency error,
/// never a hang.
#[derive(Clone)]
pub struct StorageService {
    config: Config,
    client: Client,
}

impl StorageService {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    pub async fn upload(&self, data: Vec<u8>, file_name: &str) -> Result<UploadResult, ApiError> {
        with_retry("media vault upload", UPLOAD_TIMEOUT, || {
            self.try_upload(data.clone(), file_name)
        })
        .await
        .map_err(|e| {
            tracing::error!("media vault upload failed: {e}");
            ApiError::Dependency("Media upload failed".to_string())
        })
    }

    pub async fn delete(&self, file_id: &str) -> Result<(), ApiError> {
        with_retry("media vault delete", DELETE_TIMEOUT, || {
            self.try_delete(file_id)
        })
        .await
        .map_err(|e| {
            tracing::error!("media vault delete failed: {e}");
            ApiError::Dependency("Media delete failed".to_string())
        })
    }

    async fn try_upload(&self, data: Vec<u8>, file_name: &str) -> Result<UploadResult, String> {
        let part = reqwest::multipart::Part::bytes(data).file_name(file_name.to_string());

        let form = reqwest::multipart::Form::new()
            .part("file", part)
            .text("fileName", file_name.to_string())
            .text("useUniqueFileName", "true");

        let response = self
            .client
            .post(&self.config.storage_upload_url)
            .basic_auth(&self.config.storage_private_key, None::<&str>)
            .multipart(form)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(format!("vault returned {status}: {error_text}"));
        }

        response
            .json::<UploadResult>()
            .await
            .map_err(|e| e.to_string())
    }

    async fn try_delete(&self, file_id: &str) -> Result<(), String> {
        let url = format!("{}/files/{}", self.config.storage_api_url, file_id);

        let response = self
            .client
            .delete(&url)
            .basic_auth(&self.config.storage_private_key, None::<&str>)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(format!("vault returned {status}: {error_text}"));
        }

        Ok(())
    }
}

/// Run `op` up to MAX_ATTEMPTS times, each bounded by `timeout`.
async fn with_retry<T, F, Fut>(op_name: &str, timeout: Duration, mut op: F) -> Result<T, String>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, String>>,
{
    let mut last_err = String::new();
    for attempt in 1..=MAX_ATTEMPTS {
        match tokio::time::timeout(timeout, op()).await {
            Ok(Ok(value)) => return Ok(value),
            Ok(Err(e)) => last_err = e,
            Err(_) => last_err = format!("timed out after {}s", timeout.as_secs()),
        }
        if attempt < MAX_ATTEMPTS {
            tracing::warn!("{op_name} attempt {attempt} failed: {last_err}, retrying");
        }
    }
    Err(last_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[tokio::test]
    async fn retry_recovers_from_a_single_failure() {
        let calls = AtomicU32::new(0);
        let result = with_retry("op", Duration::from_secs(1), || {
            let n = calls.fetch_add(1, Ordering::SeqCst);
            async move {
                if n == 0 {
                    Err("boom".to_string())
                } else {
                    Ok(42)
                }
            }
        })
        .await;
        assert_eq!(result, Ok(42));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn retry_gives_up_after_max_attempts() {
        let calls = AtomicU32::new(0);
        let result: Result<(), String> = with_retry("op", Duration::from_secs(1), || {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err("down".to_string()) }
        })
        .await;
        assert_eq!(result, Err("down".to_string()));
        assert_eq!(calls.load(Ordering::SeqCst), MAX_ATTEMPTS);
    }
}
