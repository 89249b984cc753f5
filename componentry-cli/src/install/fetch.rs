//! Registry file download
//!
//! Files are fetched one at a time from the raw-content host and written
//! verbatim under `{target_dir}/{item}/`. A failed file is reported and the
//! remaining files are still fetched.

use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::catalog::Manifest;
use crate::error::FetchError;
use crate::{ui, OutputFormat};

/// Retrieves the raw bytes behind a URL
#[cfg_attr(test, mockall::automock)]
pub trait Fetch {
    /// GET `url` and return the response body
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-2xx status or an unreadable body.
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

/// Blocking HTTP client for the registry
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    agent: ureq::Agent,
}

impl HttpFetcher {
    /// Create a client, optionally bounding each request by `timeout`
    #[must_use]
    pub fn new(timeout: Option<Duration>) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(timeout)
            .build()
            .into();
        Self { agent }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        tracing::debug!(url, "fetching registry file");

        let response = self.agent.get(url).call().map_err(|e| FetchError::Network {
            url: url.to_string(),
            message: e.to_string(),
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let mut body = response.into_body();
        body.read_to_vec().map_err(|source| FetchError::Body {
            url: url.to_string(),
            source,
        })
    }
}

/// Outcome of one manifest file
#[derive(Debug)]
pub struct FileOutcome {
    /// File name from the manifest
    pub name: &'static str,
    /// Destination path
    pub path: PathBuf,
    /// Bytes written, or why the file was not written
    pub result: Result<usize, FetchError>,
}

impl FileOutcome {
    /// Whether the file is on disk
    #[must_use]
    pub const fn is_written(&self) -> bool {
        self.result.is_ok()
    }
}

/// Fetch every file of `manifest` that applies to `format` into `item_dir`
///
/// `url_for` maps a manifest source path to its full URL.
pub fn fetch_files(
    fetcher: &dyn Fetch,
    manifest: &Manifest,
    format: OutputFormat,
    item_dir: &Path,
    url_for: impl Fn(&str) -> String,
) -> Vec<FileOutcome> {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("  {spinner:.green} {msg}") {
        spinner.set_style(style);
    }
    spinner.enable_steady_tick(Duration::from_millis(100));

    let outcomes = manifest
        .files_for(format)
        .map(|file| {
            spinner.set_message(format!("Fetching {}", file.name));
            let path = item_dir.join(file.name);
            let result = fetch_one(fetcher, &url_for(file.source), item_dir, &path);
            spinner.suspend(|| match &result {
                Ok(_) => ui::success(path.display()),
                Err(e) => ui::warning(e),
            });
            FileOutcome {
                name: file.name,
                path,
                result,
            }
        })
        .collect();

    spinner.finish_and_clear();
    outcomes
}

fn fetch_one(
    fetcher: &dyn Fetch,
    url: &str,
    item_dir: &Path,
    path: &Path,
) -> Result<usize, FetchError> {
    let write_error = |source| FetchError::Write {
        path: path.to_path_buf(),
        source,
    };

    fs::create_dir_all(item_dir).map_err(write_error)?;
    let content = fetcher.fetch(url)?;
    fs::write(path, &content).map_err(write_error)?;

    tracing::debug!(path = %path.display(), bytes = content.len(), "wrote registry file");
    Ok(content.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::ItemKind;
    use tempfile::TempDir;

    fn button() -> &'static Manifest {
        Catalog::builtin()
            .lookup(ItemKind::Component, "button")
            .unwrap()
    }

    const BUTTON_TSX: &str = "https://registry.test/components/button/Button.tsx";
    const BUTTON_JSX: &str = "https://registry.test/components/button/Button.jsx";
    const BUTTON_CSS: &str = "https://registry.test/components/button/button-animations.css";

    fn url_for(source: &str) -> String {
        format!("https://registry.test/{source}")
    }

    #[test]
    fn test_writes_only_requested_format() {
        let dir = TempDir::new().unwrap();
        let item_dir = dir.path().join("src/components/button");

        let mut fetcher = MockFetch::new();
        fetcher
            .expect_fetch()
            .withf(|url: &str| url == BUTTON_TSX)
            .times(1)
            .returning(|_| Ok(b"export default function Button() {}".to_vec()));
        fetcher
            .expect_fetch()
            .withf(|url: &str| url == BUTTON_CSS)
            .times(1)
            .returning(|_| Ok(b".btn {}".to_vec()));

        let outcomes = fetch_files(&fetcher, button(), OutputFormat::Typed, &item_dir, url_for);

        assert_eq!(outcomes.len(), 2);
        assert!(outcomes.iter().all(FileOutcome::is_written));
        assert_eq!(
            fs::read(item_dir.join("Button.tsx")).unwrap(),
            b"export default function Button() {}"
        );
        assert_eq!(fs::read(item_dir.join("button-animations.css")).unwrap(), b".btn {}");
        assert!(!item_dir.join("Button.jsx").exists());
    }

    #[test]
    fn test_failed_file_does_not_stop_the_rest() {
        let dir = TempDir::new().unwrap();
        let item_dir = dir.path().join("button");

        let mut fetcher = MockFetch::new();
        fetcher
            .expect_fetch()
            .withf(|url: &str| url == BUTTON_JSX)
            .returning(|url| {
                Err(FetchError::Status {
                    url: url.to_string(),
                    status: 404,
                })
            });
        fetcher
            .expect_fetch()
            .withf(|url: &str| url == BUTTON_CSS)
            .returning(|_| Ok(b".btn {}".to_vec()));

        let outcomes = fetch_files(&fetcher, button(), OutputFormat::Untyped, &item_dir, url_for);

        assert_eq!(outcomes.len(), 2);
        assert!(matches!(
            outcomes[0].result,
            Err(FetchError::Status { status: 404, .. })
        ));
        assert!(!item_dir.join("Button.jsx").exists());
        assert!(outcomes[1].is_written());
        assert!(item_dir.join("button-animations.css").exists());
    }

    #[test]
    fn test_write_error_is_reported_per_file() {
        let dir = TempDir::new().unwrap();
        // A file where the item directory should be makes every write fail.
        let item_dir = dir.path().join("button");
        fs::write(&item_dir, "not a directory").unwrap();

        let mut fetcher = MockFetch::new();
        fetcher.expect_fetch().never();

        let outcomes = fetch_files(&fetcher, button(), OutputFormat::Typed, &item_dir, url_for);
        assert_eq!(outcomes.len(), 2);
        assert!(outcomes
            .iter()
            .all(|outcome| matches!(outcome.result, Err(FetchError::Write { .. }))));
    }

    #[test]
    fn test_existing_files_are_overwritten() {
        let dir = TempDir::new().unwrap();
        let item_dir = dir.path().join("button");
        fs::create_dir_all(&item_dir).unwrap();
        fs::write(item_dir.join("Button.tsx"), "old").unwrap();

        let mut fetcher = MockFetch::new();
        fetcher.expect_fetch().returning(|_| Ok(b"new".to_vec()));

        fetch_files(&fetcher, button(), OutputFormat::Typed, &item_dir, url_for);
        assert_eq!(fs::read_to_string(item_dir.join("Button.tsx")).unwrap(), "new");
    }

    mod http {
        use super::*;
        use std::io::{Read, Write};
        use std::net::TcpListener;
        use std::thread;

        /// Answer a single request with `response` and return a URL pointing at it
        fn serve_once(response: &'static str) -> String {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            let addr = listener.local_addr().unwrap();
            thread::spawn(move || {
                if let Ok((mut stream, _)) = listener.accept() {
                    let mut request = [0_u8; 4096];
                    let _ = stream.read(&mut request);
                    let _ = stream.write_all(response.as_bytes());
                }
            });
            format!("http://{addr}/components/button/Button.tsx")
        }

        #[test]
        fn test_success_returns_body() {
            let url = serve_once(
                "HTTP/1.1 200 OK\r\nContent-Length: 5\r\nConnection: close\r\n\r\nhello",
            );

            let body = HttpFetcher::default().fetch(&url).unwrap();
            assert_eq!(body, b"hello");
        }

        #[test]
        fn test_not_found_maps_to_status() {
            let url = serve_once(
                "HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
            );

            let error = HttpFetcher::default().fetch(&url).unwrap_err();
            assert!(matches!(error, FetchError::Status { status: 404, .. }));
            assert!(error.to_string().contains(&url));
        }

        #[test]
        fn test_refused_connection_maps_to_network() {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            let addr = listener.local_addr().unwrap();
            drop(listener);
            let url = format!("http://{addr}/components/button/Button.tsx");

            let error = HttpFetcher::new(Some(Duration::from_secs(5)))
                .fetch(&url)
                .unwrap_err();
            assert!(matches!(error, FetchError::Network { .. }));
        }
    }
}
