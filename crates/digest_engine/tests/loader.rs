use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use digest_engine::{
    DigestLoader, FailureKind, FetchError, FetchMetadata, FetchOutput, FetchSettings, Fetcher,
    LoaderSettings, ReqwestFetcher,
};
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const DIGEST: &str = r#"{"dates":["2024-01-02","2024-01-01"],"tabs":{"youtube":{"days":{}}}}"#;

/// Replays canned results and counts how often it was asked.
struct ScriptedFetcher {
    calls: AtomicUsize,
    script: Mutex<VecDeque<Result<FetchOutput, FetchError>>>,
}

impl ScriptedFetcher {
    fn new(script: Vec<Result<FetchOutput, FetchError>>) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            script: Mutex::new(script.into()),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl Fetcher for ScriptedFetcher {
    async fn fetch(&self, url: &Url) -> Result<FetchOutput, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(FetchError::new(FailureKind::Network, format!("no script for {url}"))))
    }
}

fn body(text: &str) -> Result<FetchOutput, FetchError> {
    Ok(FetchOutput {
        bytes: text.as_bytes().to_vec(),
        metadata: FetchMetadata {
            url: "http://test/data/digest.json".to_string(),
            final_url: "http://test/data/digest.json".to_string(),
            content_type: Some("application/json".to_string()),
            byte_len: text.len() as u64,
        },
    })
}

fn status(code: u16) -> Result<FetchOutput, FetchError> {
    Err(FetchError::new(FailureKind::HttpStatus(code), code.to_string()))
}

fn page() -> Url {
    Url::parse("http://test/").unwrap()
}

fn fast() -> LoaderSettings {
    LoaderSettings {
        retry_delay: Duration::from_millis(5),
        ..LoaderSettings::default()
    }
}

#[test]
fn default_settings_match_hosted_layout() {
    let settings = LoaderSettings::default();
    assert_eq!(settings.data_path, "data/digest.json");
    assert_eq!(settings.retry_delay, Duration::from_millis(800));
}

#[tokio::test]
async fn first_success_does_not_retry() {
    let fetcher = ScriptedFetcher::new(vec![body(DIGEST)]);
    let loader = DigestLoader::new(fetcher.clone(), &page(), fast()).unwrap();

    let doc = loader.load().await.expect("loads");
    assert_eq!(doc.first_date(), Some("2024-01-02"));
    assert_eq!(fetcher.calls(), 1);
}

#[tokio::test]
async fn one_failure_is_retried_once() {
    let fetcher = ScriptedFetcher::new(vec![status(503), body(DIGEST)]);
    let loader = DigestLoader::new(fetcher.clone(), &page(), fast()).unwrap();

    let doc = loader.load().await.expect("second attempt succeeds");
    assert_eq!(doc.dates.len(), 2);
    assert_eq!(fetcher.calls(), 2);
}

#[tokio::test]
async fn two_failures_give_up_after_exactly_one_retry() {
    let fetcher = ScriptedFetcher::new(vec![status(500), status(404), body(DIGEST)]);
    let loader = DigestLoader::new(fetcher.clone(), &page(), fast()).unwrap();

    let err = loader.load().await.unwrap_err();
    assert_eq!(err.attempts, 2);
    assert_eq!(err.last.kind, FailureKind::HttpStatus(404));
    assert_eq!(fetcher.calls(), 2);
}

#[tokio::test]
async fn undecodable_body_counts_as_failed_attempt() {
    let fetcher = ScriptedFetcher::new(vec![body("<html>"), body(r#"{"dates":[]}"#)]);
    let loader = DigestLoader::new(fetcher.clone(), &page(), fast()).unwrap();

    let err = loader.load().await.unwrap_err();
    assert_eq!(err.last.kind, FailureKind::Decode);
    assert!(err.last.message.contains("tabs"));
    assert_eq!(fetcher.calls(), 2);
}

#[tokio::test(start_paused = true)]
async fn retry_waits_for_the_configured_delay() {
    let fetcher = ScriptedFetcher::new(vec![status(502), body(DIGEST)]);
    let loader = DigestLoader::new(fetcher.clone(), &page(), LoaderSettings::default()).unwrap();

    let started = tokio::time::Instant::now();
    loader.load().await.expect("loads on retry");
    assert!(started.elapsed() >= Duration::from_millis(800));
}

#[test]
fn loader_resolves_data_path_against_page() {
    let fetcher = ScriptedFetcher::new(Vec::new());
    let page = Url::parse("https://example.github.io/ai-digest/").unwrap();
    let loader = DigestLoader::new(fetcher, &page, LoaderSettings::default()).unwrap();
    assert_eq!(
        loader.url().as_str(),
        "https://example.github.io/ai-digest/data/digest.json"
    );
}

#[tokio::test]
async fn loader_over_http_retries_once_then_fails() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/site/data/digest.json"))
        .respond_with(ResponseTemplate::new(404))
        .expect(2)
        .mount(&server)
        .await;

    let fetcher = Arc::new(ReqwestFetcher::new(FetchSettings::default()).unwrap());
    let page = Url::parse(&format!("{}/site/", server.uri())).unwrap();
    let loader = DigestLoader::new(fetcher, &page, fast()).unwrap();

    let err = loader.load().await.unwrap_err();
    assert_eq!(err.last.kind, FailureKind::HttpStatus(404));
    server.verify().await;
}

#[tokio::test]
async fn loader_over_http_decodes_document() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data/digest.json"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(DIGEST, "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = Arc::new(ReqwestFetcher::new(FetchSettings::default()).unwrap());
    let page = Url::parse(&server.uri()).unwrap();
    let loader = DigestLoader::new(fetcher, &page, fast()).unwrap();

    let doc = loader.load().await.expect("loads");
    assert_eq!(doc.dates, vec!["2024-01-02", "2024-01-01"]);
}
