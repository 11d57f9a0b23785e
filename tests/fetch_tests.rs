//! Fetcher tests against a loopback HTTP server.

mod cli_helpers;

use chrono::NaiveDate;
use cli_helpers::serve_once;
use impact_tracker::article::{extract_article, ArticleFetcher, ArticleRecord, Classification};
use impact_tracker::config::FetchSettings;
use impact_tracker::error::TrackerError;

fn local_settings() -> FetchSettings {
    FetchSettings {
        use_system_proxy: false,
        ..FetchSettings::default()
    }
}

#[test]
fn fetch_sends_browser_user_agent() {
    let (url, server) = serve_once("HTTP/1.1 200 OK", "<p>ok</p>");
    let fetcher = ArticleFetcher::new(&local_settings()).unwrap();

    let body = fetcher.fetch(&url).expect("fetch succeeds");
    assert_eq!(body, "<p>ok</p>");

    let request = server.join().unwrap().to_lowercase();
    assert!(request.starts_with("get /article"));
    assert!(request.contains("user-agent: mozilla/5.0 (windows nt 10.0; win64; x64) applewebkit/537.36"));
}

#[test]
fn non_success_status_is_an_error() {
    let (url, server) = serve_once("HTTP/1.1 500 Internal Server Error", "boom");
    let fetcher = ArticleFetcher::new(&local_settings()).unwrap();

    let err = fetcher.fetch(&url).unwrap_err();
    assert!(err.to_string().contains("500"));
    server.join().unwrap();
}

#[test]
fn empty_body_is_an_error() {
    let (url, server) = serve_once("HTTP/1.1 200 OK", "");
    let fetcher = ArticleFetcher::new(&local_settings()).unwrap();

    let err = fetcher.fetch(&url).unwrap_err();
    assert!(matches!(err.downcast_ref::<TrackerError>(), Some(TrackerError::FetchError(_))));
    assert!(err.to_string().contains("empty body"));
    server.join().unwrap();
}

#[test]
fn long_article_is_cut_to_content_limit() {
    let paragraph = "人工智能正在改变行业。".repeat(50);
    let html = format!("<h1>长文</h1>{}", format!("<p>{}</p>", paragraph).repeat(5));
    let (url, server) = serve_once("HTTP/1.1 200 OK", &html);
    let settings = local_settings();
    let fetcher = ArticleFetcher::new(&settings).unwrap();

    let body = fetcher.fetch(&url).unwrap();
    server.join().unwrap();

    let article = extract_article(&body);
    assert!(article.content.chars().count() > 1000);

    let date = NaiveDate::from_ymd_opt(2026, 2, 10).unwrap();
    let record = ArticleRecord::new(&url, date, article, settings.content_limit, Classification::default());
    assert_eq!(record.title, "长文");
    assert_eq!(record.content.chars().count(), 1000);
}
