//! HTTP client for the exam-listing backend.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;

use examcal_core::{ExamRecord, MonthBucket};

/// HTTP client for the exam-listing backend.
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

/// Error body the backend returns on non-success statuses.
#[derive(Deserialize)]
struct ErrorResponse {
    detail: String,
}

/// Aggregate counts from GET /api/stats.
#[derive(Debug, Deserialize)]
pub struct ExamStats {
    pub total_exams: i64,
    pub upcoming_exams: i64,
    pub this_month_exams: i64,
    /// Upcoming exam count per conducting body
    pub body_stats: HashMap<String, i64>,
}

impl BackendClient {
    pub fn new(base_url: &str) -> Self {
        BackendClient {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// GET /exams/month/:year/:month
    ///
    /// One month bucket's exams, optionally narrowed to one conducting
    /// body. Any non-success status is an error; the caller decides
    /// whether that fails the whole operation or just this bucket.
    pub async fn month_exams(
        &self,
        bucket: MonthBucket,
        category: Option<&str>,
    ) -> Result<Vec<ExamRecord>> {
        let mut request = self.http.get(format!(
            "{}/exams/month/{}/{}",
            self.base_url, bucket.year, bucket.month
        ));

        if let Some(body) = category {
            request = request.query(&[("conducting_body", body)]);
        }

        let resp = request
            .send()
            .await
            .with_context(|| format!("Failed to fetch exams for {}", bucket))?;

        let status = resp.status();
        if !status.is_success() {
            anyhow::bail!("Backend returned {} for {}: {}", status, bucket, error_detail(resp).await);
        }

        Ok(resp.json().await?)
    }

    /// GET /api/exams/search
    pub async fn search_exams(
        &self,
        query: Option<&str>,
        category: Option<&str>,
        days: Option<u32>,
    ) -> Result<Vec<ExamRecord>> {
        let mut request = self
            .http
            .get(format!("{}/api/exams/search", self.base_url));

        if let Some(q) = query {
            request = request.query(&[("q", q)]);
        }
        if let Some(body) = category {
            request = request.query(&[("conducting_body", body)]);
        }
        if let Some(days) = days {
            request = request.query(&[("days", days.to_string().as_str())]);
        }

        let resp = request
            .send()
            .await
            .context("Failed to connect to backend")?;

        let status = resp.status();
        if !status.is_success() {
            anyhow::bail!("Backend returned {}: {}", status, error_detail(resp).await);
        }

        Ok(resp.json().await?)
    }

    /// GET /api/stats
    pub async fn stats(&self) -> Result<ExamStats> {
        let resp = self
            .http
            .get(format!("{}/api/stats", self.base_url))
            .send()
            .await
            .context("Failed to connect to backend")?;

        let status = resp.status();
        if !status.is_success() {
            anyhow::bail!("Backend returned {}: {}", status, error_detail(resp).await);
        }

        Ok(resp.json().await?)
    }
}

/// Pull the human-readable detail out of an error response, falling
/// back to the raw body when it is not the expected JSON shape.
async fn error_detail(resp: reqwest::Response) -> String {
    match resp.text().await {
        Ok(body) => match serde_json::from_str::<ErrorResponse>(&body) {
            Ok(err) => err.detail,
            Err(_) => body,
        },
        Err(_) => String::from("(no response body)"),
    }
}
