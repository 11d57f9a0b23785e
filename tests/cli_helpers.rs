#![allow(dead_code)]

use anyhow::{bail, Result};
use assert_cmd::cargo;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::thread::{self, JoinHandle};
use tempfile::TempDir;

pub const EDUCATION_ENTRY: &str = r#"{"date":"2026-02-10","industry":"教育培训","impact_type":"自动化","summary":"AI改变了教学方式","url":"http://x"}"#;

pub fn setup_workdir() -> TempDir {
    TempDir::new().expect("failed to create temp workdir")
}

pub fn readme_path(dir: &TempDir) -> PathBuf {
    dir.path().join("README.md")
}

/// Command for one of the crate binaries, isolated from the user's config,
/// proxies and report overrides, running inside `dir`.
pub fn base_cmd(bin: &str, dir: &TempDir) -> Command {
    let mut cmd = match bin {
        "fetch_article" => Command::new(cargo::cargo_bin!("fetch_article")),
        _ => Command::new(cargo::cargo_bin!("update_readme")),
    };
    cmd.current_dir(dir.path());
    cmd.env("HOME", dir.path());
    cmd.env("XDG_CONFIG_HOME", dir.path().join(".config"));
    for var in [
        "IMPACT_TRACKER_CONFIG",
        "IMPACT_TRACKER_README",
        "HTTP_PROXY",
        "HTTPS_PROXY",
        "ALL_PROXY",
        "http_proxy",
        "https_proxy",
        "all_proxy",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

pub fn run_update(dir: &TempDir, json: &str) -> Result<Output> {
    let output = base_cmd("update_readme", dir).arg(json).output()?;
    if !output.status.success() {
        bail!(
            "update_readme failed\nstdout: {}\nstderr: {}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
    }
    Ok(output)
}

pub fn read_report(path: &Path) -> String {
    std::fs::read_to_string(path).expect("report should exist")
}

pub fn entry_json(date: &str, industry: &str, summary: &str) -> String {
    serde_json::json!({
        "date": date,
        "industry": industry,
        "impact_type": "自动化",
        "summary": summary,
        "url": "http://x",
    })
    .to_string()
}

/// Serve a single HTTP response on a loopback port. The join handle yields
/// the raw request text.
pub fn serve_once(status_line: &str, body: &str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
    let addr = listener.local_addr().expect("local addr");
    let response = format!(
        "{}\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status_line,
        body.len(),
        body
    );
    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept");
        let mut buf = [0u8; 8192];
        let n = stream.read(&mut buf).expect("read request");
        stream.write_all(response.as_bytes()).expect("write response");
        let _ = stream.flush();
        String::from_utf8_lossy(&buf[..n]).to_string()
    });
    (format!("http://{}/article", addr), handle)
}
