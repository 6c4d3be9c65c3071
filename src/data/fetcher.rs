//! Sheet Fetcher Module
//! Downloads the published spreadsheet as CSV text over HTTP.

use reqwest::blocking::Client;
use reqwest::{StatusCode, Url};
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Invalid sheet URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Sheet request returned status {0}")]
    Status(StatusCode),
}

/// Anything that can hand back the raw sheet text.
pub trait SheetSource: Send + Sync {
    fn fetch(&self) -> Result<String, FetchError>;
}

/// Fetches the sheet from a fixed URL with a blocking reqwest client.
pub struct HttpSheetSource {
    client: Client,
    url: String,
    cache_bust: bool,
}

impl HttpSheetSource {
    pub fn new(url: &str, cache_bust: bool, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.to_string(),
            cache_bust,
        })
    }

    /// Request URL, with a `t=<unix millis>` parameter when cache busting.
    fn request_url(&self) -> Result<Url, FetchError> {
        let mut url = Url::parse(&self.url).map_err(|e| FetchError::InvalidUrl {
            url: self.url.clone(),
            reason: e.to_string(),
        })?;

        if self.cache_bust {
            let millis = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis())
                .unwrap_or_default();
            url.query_pairs_mut().append_pair("t", &millis.to_string());
        }

        Ok(url)
    }
}

impl SheetSource for HttpSheetSource {
    fn fetch(&self) -> Result<String, FetchError> {
        let url = self.request_url()?;
        debug!(%url, "requesting sheet");

        let response = self.client.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        Ok(response.text()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::sync::mpsc::channel;
    use std::thread;

    /// Serve exactly one HTTP response and report the request line.
    fn serve_once(status_line: &str, body: &str) -> (String, std::sync::mpsc::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: text/csv\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        let (tx, rx) = channel();

        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut buf = [0u8; 4096];
            let n = stream.read(&mut buf).unwrap();
            let request = String::from_utf8_lossy(&buf[..n]).to_string();
            let request_line = request.lines().next().unwrap_or_default().to_string();
            let _ = tx.send(request_line);
            stream.write_all(response.as_bytes()).unwrap();
        });

        (format!("http://{}/pub?output=csv", addr), rx)
    }

    #[test]
    fn returns_body_on_success() {
        let (url, rx) = serve_once("200 OK", "TEAM,FIRST,SECOND,THIRD,POINTS\nRed,1,2,3,4");
        let source = HttpSheetSource::new(&url, true, Duration::from_secs(5)).unwrap();

        let body = source.fetch().unwrap();
        assert!(body.starts_with("TEAM,"));

        let request_line = rx.recv().unwrap();
        assert!(request_line.starts_with("GET /pub?output=csv&t="));
    }

    #[test]
    fn non_success_status_is_an_error() {
        let (url, _rx) = serve_once("500 Internal Server Error", "boom");
        let source = HttpSheetSource::new(&url, false, Duration::from_secs(5)).unwrap();

        match source.fetch() {
            Err(FetchError::Status(status)) => assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR),
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[test]
    fn cache_bust_can_be_disabled() {
        let source =
            HttpSheetSource::new("https://example.com/pub?output=csv", false, Duration::from_secs(1))
                .unwrap();
        assert_eq!(
            source.request_url().unwrap().as_str(),
            "https://example.com/pub?output=csv"
        );
    }

    #[test]
    fn rejects_malformed_url() {
        let source = HttpSheetSource::new("not a url", true, Duration::from_secs(1)).unwrap();
        assert!(matches!(source.request_url(), Err(FetchError::InvalidUrl { .. })));
    }
}
