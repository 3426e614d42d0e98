use std::fs;
use std::thread;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;
use tiny_http::{Header, Response, Server};

/// Command with the ambient credential environment stripped, so tests
/// only see what they pass themselves.
fn kuaizhan_cmd() -> Command {
    let mut cmd = Command::cargo_bin("kuaizhan").unwrap();
    cmd.env_remove("KUAIZHAN_APP_KEY");
    cmd.env_remove("KUAIZHAN_APP_SECRET");
    cmd.env_remove("KUAIZHAN_BASE_URL");
    cmd
}

// --- argument parsing ---

#[test]
fn test_help_lists_commands() {
    kuaizhan_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("create-site"))
        .stdout(predicate::str::contains("upload"))
        .stdout(predicate::str::contains("self-update"));
}

#[test]
fn test_upload_requires_site_ids() {
    kuaizhan_cmd()
        .args(["upload", "-s", "https://example.com", "-n", "Landing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--site-ids"));
}

#[test]
fn test_delete_page_rejects_non_numeric_ids() {
    kuaizhan_cmd()
        .args(["delete-page", "-i", "12,abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

// --- credential resolution ---

#[test]
fn test_missing_credentials_guidance() {
    let tmp = TempDir::new().unwrap();
    kuaizhan_cmd()
        .arg("list")
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("KUAIZHAN_APP_KEY"));
}

#[test]
fn test_partial_config_names_missing_secret() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("kuaizhan.toml"), "app_key = \"k\"\n").unwrap();
    kuaizhan_cmd()
        .arg("list")
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("KUAIZHAN_APP_SECRET"));
}

#[test]
fn test_explicit_config_must_exist() {
    let tmp = TempDir::new().unwrap();
    kuaizhan_cmd()
        .args(["--config", "absent.toml", "list"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}

// --- end to end against a local server ---

#[test]
fn test_publish_page_end_to_end() {
    let server = Server::http("127.0.0.1:0").unwrap();
    let port = server.server_addr().to_ip().unwrap().port();

    // publish-page makes two calls: site first, then the page.
    let handle = thread::spawn(move || {
        for _ in 0..2 {
            let request = server.recv().unwrap();
            let reply = if request.url().starts_with("/tbk/publishSite") {
                r#"{"code":200,"msg":"OK","data":{"url":"https://demo.kuaizhan.com"}}"#
            } else {
                r#"{"code":200,"msg":"OK","data":{"url":"https://demo.kuaizhan.com/9"}}"#
            };
            let header = Header::from_bytes("Content-Type", "application/json").unwrap();
            request
                .respond(
                    Response::from_string(reply)
                        .with_status_code(200)
                        .with_header(header),
                )
                .unwrap();
        }
    });

    kuaizhan_cmd()
        .args([
            "--app-key",
            "k",
            "--app-secret",
            "s",
            "--base-url",
            &format!("http://127.0.0.1:{port}"),
            "publish-page",
            "--site-id",
            "1",
            "--page-id",
            "9",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("https://demo.kuaizhan.com/9"));

    handle.join().unwrap();
}

#[test]
fn test_list_reports_bad_site_and_continues() {
    let server = Server::http("127.0.0.1:0").unwrap();
    let port = server.server_addr().to_ip().unwrap().port();

    // list fetches the id roster, then info and pages per site. Site 6's
    // info call fails; only that site is skipped.
    let handle = thread::spawn(move || {
        for _ in 0..4 {
            let mut request = server.recv().unwrap();
            let mut body = String::new();
            request.as_reader().read_to_string(&mut body).unwrap();
            let reply = if request.url().starts_with("/tbk/getSiteIds") {
                r#"{"code":200,"msg":"OK","data":{"siteIds":[5,6]}}"#
            } else if request.url().starts_with("/tbk/getPageName") {
                r#"{"code":200,"msg":"OK","data":[{"pageId":9,"title":"Home"}]}"#
            } else if body.contains("siteId=6") {
                r#"{"code":404,"msg":"site archived"}"#
            } else {
                r#"{"code":200,"msg":"OK","data":{"siteId":"5","siteName":"Shop","siteType":"FAST","domain":"shop.kuaizhan.com","packageName":"exclusive","packageRemainingDays":42}}"#
            };
            let header = Header::from_bytes("Content-Type", "application/json").unwrap();
            request
                .respond(
                    Response::from_string(reply)
                        .with_status_code(200)
                        .with_header(header),
                )
                .unwrap();
        }
    });

    kuaizhan_cmd()
        .args([
            "--app-key",
            "k",
            "--app-secret",
            "s",
            "--base-url",
            &format!("http://127.0.0.1:{port}"),
            "list",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 sites"))
        .stdout(predicate::str::contains("shop.kuaizhan.com"))
        .stdout(predicate::str::contains("Home"))
        .stderr(predicate::str::contains("site archived"));

    handle.join().unwrap();
}
