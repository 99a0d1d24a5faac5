//! End-to-end HTTP tests: a real server on an ephemeral port, a raw
//! HTTP/1.1 client over `TcpStream`.

use std::io::{Read, Write};
use std::net::TcpStream;
use std::sync::OnceLock;
use std::thread;

use panchanga::Settings;
use panchanga_cli::server::AstroServer;

fn server_port() -> u16 {
    static PORT: OnceLock<u16> = OnceLock::new();
    *PORT.get_or_init(|| {
        let _ = panchanga::init(Settings::default());
        let server = AstroServer::bind("127.0.0.1:0").unwrap();
        let port = server.port().unwrap();
        thread::spawn(move || server.run());
        port
    })
}

fn get(path_and_query: &str) -> (u16, String) {
    let mut stream = TcpStream::connect(("127.0.0.1", server_port())).unwrap();
    write!(
        stream,
        "GET {path_and_query} HTTP/1.1\r\nHost: 127.0.0.1\r\nConnection: close\r\n\r\n"
    )
    .unwrap();
    let mut raw = String::new();
    stream.read_to_string(&mut raw).unwrap();

    let status: u16 = raw
        .split_whitespace()
        .nth(1)
        .expect("status line")
        .parse()
        .expect("numeric status");
    let body = raw.split("\r\n\r\n").nth(1).unwrap_or("").to_string();
    (status, body)
}

const DELHI_QUERY: &str = "/astro?year=2000&month=1&day=1&hour=0&lat=28.6139&lon=77.2090";

#[test]
fn astro_success_has_all_keys() {
    let (status, body) = get(DELHI_QUERY);
    assert_eq!(status, 200, "body = {body}");

    let v: serde_json::Value = serde_json::from_str(&body).unwrap();
    let obj = v.as_object().unwrap();
    assert_eq!(obj.len(), 9);
    for key in [
        "lagna", "moon", "tithi", "masa", "var", "yoga", "karana", "sunrise", "sunset",
    ] {
        assert!(obj.contains_key(key), "missing key {key}");
    }
    assert!(v["lagna"]["rashi"].is_string());
    assert!(v["moon"]["pada"].is_number());
}

#[test]
fn missing_parameter_is_400_with_detail() {
    let (status, body) = get("/astro?month=1&day=1&hour=0&lat=28.6139&lon=77.2090");
    assert_eq!(status, 400);
    let v: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert!(v["detail"].as_str().unwrap().contains("year"));
}

#[test]
fn malformed_parameter_is_400() {
    let (status, _) = get("/astro?year=2000&month=1&day=1&hour=noon&lat=0&lon=0");
    assert_eq!(status, 400);
}

#[test]
fn polar_sunrise_is_400_not_500() {
    let (status, body) = get("/astro?year=2000&month=1&day=1&hour=0&lat=89.9&lon=0");
    assert_eq!(status, 400, "body = {body}");
    let v: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert!(v["detail"].as_str().unwrap().contains("Sunrise/Sunset"));
}

#[test]
fn out_of_window_year_is_400() {
    let (status, _) = get("/astro?year=9999&month=1&day=1&hour=0&lat=0&lon=0");
    assert_eq!(status, 400);
}

#[test]
fn unknown_path_is_404() {
    let (status, body) = get("/nope");
    assert_eq!(status, 404);
    assert!(body.contains("Not Found"));
}
