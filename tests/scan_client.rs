use std::sync::Mutex;

use screener::{col, Query, Screener, ScreenerConfig, ScreenerError, Transport};
use serde_json::{json, Value};

/// Records every request and answers with a canned reply.
struct MockTransport {
    reply: Mutex<Option<screener::Result<Value>>>,
    seen: Mutex<Vec<(String, Vec<(String, String)>, Value)>>,
}

impl MockTransport {
    fn replying(reply: screener::Result<Value>) -> Self {
        Self { reply: Mutex::new(Some(reply)), seen: Mutex::new(Vec::new()) }
    }
}

impl Transport for MockTransport {
    async fn post_json(&self, url: &str, headers: &[(String, String)], body: String) -> screener::Result<Value> {
        let body: Value = serde_json::from_str(&body).expect("body is JSON");
        self.seen.lock().unwrap().push((url.to_string(), headers.to_vec(), body));
        self.reply.lock().unwrap().take().expect("one reply per mock")
    }
}

fn config() -> ScreenerConfig {
    let mut config = ScreenerConfig::default();
    config.base_url = "http://scanner.test".to_string();
    config.cookies.insert("sessionid".to_string(), "abc".to_string());
    config
}

#[tokio::test]
async fn scan_posts_document_and_maps_rows() {
    let transport = MockTransport::replying(Ok(json!({
        "totalCount": 1,
        "data": [{"s": "NASDAQ:AAPL", "d": [150.2, 9000000]}]
    })));
    let screener = Screener::with_transport(config(), transport);

    let mut q = Query::new();
    q.set_markets(["america", "canada"])
        .select(["close", "volume"])
        .where_([col("close").gt(100)])
        .limit(1);
    let result = screener.scan(&q).await.unwrap();

    assert_eq!(result.total_count, 1);
    assert_eq!(
        serde_json::to_value(&result.data[0]).unwrap(),
        json!({"symbol": "NASDAQ:AAPL", "close": 150.2, "volume": 9000000})
    );

    let seen = screener.transport().seen.lock().unwrap();
    let (url, headers, body) = &seen[0];
    assert_eq!(url, "http://scanner.test/america/scan");
    assert!(headers.contains(&("cookie".to_string(), "sessionid=abc".to_string())));
    assert_eq!(body["markets"], json!(["america", "canada"]));
    assert_eq!(body["range"], json!([0, 1]));
    assert_eq!(body["filter"][0]["operation"], "greater");
}

#[tokio::test]
async fn raw_scan_returns_document_untouched() {
    let doc = json!({"totalCount": 0, "data": [], "extra": true});
    let screener = Screener::with_transport(config(), MockTransport::replying(Ok(doc.clone())));
    assert_eq!(screener.scan_raw(&Query::new()).await.unwrap(), doc);
}

#[tokio::test]
async fn transport_failure_propagates() {
    let failure = Err(ScreenerError::Transport { status: 400, text: "Bad Request".to_string() });
    let screener = Screener::with_transport(config(), MockTransport::replying(failure));
    let err = screener.scan(&Query::new()).await.unwrap_err();
    match err {
        ScreenerError::Transport { status, text } => {
            assert_eq!(status, 400);
            assert_eq!(text, "Bad Request");
        }
        other => panic!("unexpected error {other}"),
    }
}

#[tokio::test]
async fn unexpected_shape_is_malformed() {
    let screener = Screener::with_transport(config(), MockTransport::replying(Ok(json!({"error": "unknown field"}))));
    let err = screener.scan(&Query::new()).await.unwrap_err();
    assert!(matches!(err, ScreenerError::MalformedResponse(_)));
}

#[tokio::test]
async fn copies_run_concurrently() {
    let mut base = Query::new();
    base.select(["close"]);
    let mut gainers = base.copy();
    gainers.order_by("change", false, false);
    let mut losers = base.copy();
    losers.order_by("change", true, false);

    let reply = || Ok(json!({"totalCount": 0, "data": []}));
    let a = Screener::with_transport(config(), MockTransport::replying(reply()));
    let b = Screener::with_transport(config(), MockTransport::replying(reply()));
    let (ra, rb) = tokio::join!(a.scan(&gainers), b.scan(&losers));
    assert!(ra.is_ok() && rb.is_ok());
    assert_eq!(base.sort().sort_by, "name");
    assert_eq!(a.transport().seen.lock().unwrap()[0].2["sort"]["sortOrder"], "desc");
    assert_eq!(b.transport().seen.lock().unwrap()[0].2["sort"]["sortOrder"], "asc");
}
