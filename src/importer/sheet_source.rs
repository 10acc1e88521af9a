// ==========================================
// 门诊诊室排班系统 - 表格数据源实现
// ==========================================
// 支持: HTTP 共享链接 / 本地 xlsx 文件
// 红线: 获取失败原样上抛，不重试
// ==========================================

use crate::importer::error::FetchError;
use crate::importer::importer_trait::SpreadsheetSource;
use async_trait::async_trait;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, instrument};

// ==========================================
// HttpSpreadsheetSource - 共享链接获取
// ==========================================
pub struct HttpSpreadsheetSource {
    client: reqwest::Client,
    url: String,
}

impl HttpSpreadsheetSource {
    /// # 参数
    /// - url: 表格下载链接
    /// - timeout: 请求超时
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::ClientBuild(e.to_string()))?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl SpreadsheetSource for HttpSpreadsheetSource {
    #[instrument(skip(self), fields(url = %self.url))]
    async fn fetch_spreadsheet(&self) -> Result<Vec<u8>, FetchError> {
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await?;
        debug!(size = bytes.len(), "表格下载完成");
        Ok(bytes.to_vec())
    }

    fn describe(&self) -> String {
        format!("http:{}", self.url)
    }
}

// ==========================================
// FileSpreadsheetSource - 本地文件读取
// ==========================================
pub struct FileSpreadsheetSource {
    path: PathBuf,
}

impl FileSpreadsheetSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SpreadsheetSource for FileSpreadsheetSource {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn fetch_spreadsheet(&self) -> Result<Vec<u8>, FetchError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| FetchError::Io {
                path: self.path.clone(),
                source,
            })?;
        debug!(size = bytes.len(), "表格文件读取完成");
        Ok(bytes)
    }

    fn describe(&self) -> String {
        format!("file:{}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_file_source_reads_bytes() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"PK\x03\x04fake").unwrap();

        let source = FileSpreadsheetSource::new(temp_file.path());
        let bytes = source.fetch_spreadsheet().await.unwrap();
        assert_eq!(bytes, b"PK\x03\x04fake".to_vec());
    }

    #[tokio::test]
    async fn test_file_source_missing_file() {
        let source = FileSpreadsheetSource::new("non_existent_schedule.xlsx");
        let err = source.fetch_spreadsheet().await.unwrap_err();
        assert!(matches!(err, FetchError::Io { .. }));
    }

    #[test]
    fn test_http_source_describe() {
        let source =
            HttpSpreadsheetSource::new("http://localhost/sheet.xlsx", Duration::from_secs(5))
                .unwrap();
        assert_eq!(source.describe(), "http:http://localhost/sheet.xlsx");
    }
}
