//! Batch input loading.

use std::path::Path;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};

/// Keeps a line if it is neither blank nor a `#` comment.
fn url_line(line: &str) -> Option<String> {
    let trimmed = line.trim();
    (!trimmed.is_empty() && !trimmed.starts_with('#')).then(|| trimmed.to_string())
}

/// Reads URLs from a file, one per line; `-` reads stdin.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read.
pub(crate) async fn read_url_file(path: &Path) -> Result<Vec<String>> {
    let mut urls = Vec::new();
    if path.as_os_str() == "-" {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
            urls.extend(url_line(&line));
        }
    } else {
        let file = tokio::fs::File::open(path)
            .await
            .with_context(|| format!("Failed to open input file {}", path.display()))?;
        let mut lines = BufReader::new(file).lines();
        while let Some(line) = lines
            .next_line()
            .await
            .with_context(|| format!("Failed to read input file {}", path.display()))?
        {
            urls.extend(url_line(&line));
        }
    }
    Ok(urls)
}

/// Collects positional URLs followed by the contents of `file`, if given.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub async fn collect_urls(args: &[String], file: Option<&Path>) -> Result<Vec<String>> {
    let mut urls: Vec<String> = args.iter().filter_map(|a| url_line(a)).collect();
    if let Some(path) = file {
        let from_file = read_url_file(path).await?;
        log::info!("Read {} URL(s) from {}", from_file.len(), path.display());
        urls.extend(from_file);
    }
    Ok(urls)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_url_line_skips_blank_and_comments() {
        assert_eq!(url_line("  example.com \r"), Some("example.com".to_string()));
        assert_eq!(url_line(""), None);
        assert_eq!(url_line("   "), None);
        assert_eq!(url_line("# staging sites"), None);
    }

    #[tokio::test]
    async fn test_read_url_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# sites to check").unwrap();
        writeln!(file, "example.com").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "  https://demo.webflow.io  ").unwrap();
        file.flush().unwrap();

        let urls = read_url_file(file.path()).await.unwrap();
        assert_eq!(urls, vec!["example.com", "https://demo.webflow.io"]);
    }

    #[tokio::test]
    async fn test_read_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_url_file(&dir.path().join("missing.txt")).await.unwrap_err();
        assert!(err.to_string().contains("Failed to open input file"));
    }

    #[tokio::test]
    async fn test_collect_urls_args_then_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "from-file.com").unwrap();
        file.flush().unwrap();

        let urls = collect_urls(&["from-arg.com".to_string()], Some(file.path()))
            .await
            .unwrap();
        assert_eq!(urls, vec!["from-arg.com", "from-file.com"]);
    }
}
