//! Integration tests for the batch runner used by the CLI.

use std::io::Write;

use site_origin::{run_detection, Bucket, Config, LogFormat, LogLevel};
use tempfile::NamedTempFile;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn write_urls_to_file(lines: &[String]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    for line in lines {
        writeln!(file, "{line}").expect("Failed to write URL");
    }
    file.flush().expect("Failed to flush file");
    file
}

fn test_config(file: Option<std::path::PathBuf>, urls: Vec<String>) -> Config {
    Config {
        urls,
        file,
        log_level: LogLevel::Error,
        log_format: LogFormat::Plain,
        max_concurrency: 4,
        timeout_seconds: 5,
        script_timeout_seconds: 2,
        no_script_fetch: false,
        user_agent: "site_origin_test/1.0".to_string(),
    }
}

fn parse_lines(out: &[u8]) -> Vec<serde_json::Value> {
    String::from_utf8(out.to_vec())
        .expect("output is UTF-8")
        .lines()
        .map(|line| serde_json::from_str(line).expect("each line is a JSON object"))
        .collect()
}

#[tokio::test]
async fn test_run_from_file_writes_one_line_per_url() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wix"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("server", "Pepyaka/1.19.10")
                .set_body_string(r#"<html><body><div id="SITE_CONTAINER"></div></body></html>"#),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/plain"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html><body>hello</body></html>"))
        .mount(&server)
        .await;

    let file = write_urls_to_file(&[
        "# two live pages and one bad line".to_string(),
        format!("{}/wix", server.uri()),
        String::new(),
        format!("{}/plain", server.uri()),
        "mailto://nobody".to_string(),
    ]);

    let mut out = Vec::new();
    let report = run_detection(test_config(Some(file.path().to_path_buf()), Vec::new()), &mut out)
        .await
        .expect("run succeeds");

    assert_eq!(report.total_urls, 3);
    assert_eq!(report.fetch_errors, 1);
    let count = |bucket: Bucket| {
        report
            .by_bucket
            .iter()
            .find(|(b, _)| *b == bucket)
            .map_or(0, |(_, n)| *n)
    };
    assert_eq!(count(Bucket::PlatformAssisted), 1);
    assert_eq!(count(Bucket::NoAiSignals), 1);
    assert_eq!(count(Bucket::Unknown), 1);

    let lines = parse_lines(&out);
    assert_eq!(lines.len(), 3);
    let wix = lines
        .iter()
        .find(|v| v["url"].as_str().is_some_and(|u| u.ends_with("/wix")))
        .expect("wix result present");
    assert_eq!(wix["bucket"], "platform-assisted");
    assert_eq!(wix["platform"], "Wix");
    assert_eq!(wix["platform_score"], 15);
    assert!(wix["platform_signals"]
        .as_array()
        .is_some_and(|signals| signals.iter().any(|s| s["category"] == "http_header")));
    assert!(wix["platform_scores"].as_array().is_some_and(|t| t.len() > 1));
}

#[tokio::test]
async fn test_run_combines_arguments_and_file() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
        .mount(&server)
        .await;

    let file = write_urls_to_file(&[format!("{}/from-file", server.uri())]);
    let config = test_config(
        Some(file.path().to_path_buf()),
        vec![format!("{}/from-arg", server.uri())],
    );

    let mut out = Vec::new();
    let report = run_detection(config, &mut out).await.expect("run succeeds");
    assert_eq!(report.total_urls, 2);
    assert_eq!(report.fetch_errors, 0);
    assert_eq!(parse_lines(&out).len(), 2);
}

#[tokio::test]
async fn test_run_with_missing_file_fails() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = test_config(Some(dir.path().join("nope.txt")), Vec::new());
    let err = run_detection(config, Vec::new())
        .await
        .expect_err("missing input file is an error");
    assert!(format!("{err:#}").contains("Failed to open input file"));
}
