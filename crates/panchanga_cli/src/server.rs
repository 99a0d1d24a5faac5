//! Synchronous HTTP endpoint over `tiny_http`.
//!
//! One route: `GET /astro`. Each request is a bounded sequence of
//! closed-form computations, so requests are served one at a time off
//! the accept loop; there is no shared mutable state to coordinate.

use panchanga::{CivilMoment, GeoPoint, PanchangError, compute};
use thiserror::Error;
use tiny_http::{Method, Request, Response};

use crate::query::parse_astro_query;

/// Server startup failures.
#[derive(Debug, Error)]
pub enum ServeError {
    #[error("failed to bind {addr}: {detail}")]
    Bind { addr: String, detail: String },
}

/// The `/astro` HTTP server.
pub struct AstroServer {
    inner: tiny_http::Server,
}

impl AstroServer {
    /// Bind to an address (use port 0 for an ephemeral port).
    pub fn bind(addr: &str) -> Result<Self, ServeError> {
        let inner = tiny_http::Server::http(addr).map_err(|e| ServeError::Bind {
            addr: addr.to_string(),
            detail: e.to_string(),
        })?;
        Ok(Self { inner })
    }

    /// The port actually bound, if listening on an IP socket.
    pub fn port(&self) -> Option<u16> {
        self.inner.server_addr().to_ip().map(|a| a.port())
    }

    /// Serve requests forever.
    pub fn run(&self) {
        loop {
            match self.inner.recv() {
                Ok(request) => handle_request(request),
                Err(e) => tracing::warn!("accept error: {e}"),
            }
        }
    }
}

/// Bind and serve forever.
pub fn serve(addr: &str) -> Result<(), ServeError> {
    let server = AstroServer::bind(addr)?;
    tracing::info!(%addr, "serving /astro");
    server.run();
    Ok(())
}

fn handle_request(request: Request) {
    let method = request.method().clone();
    let url = request.url().to_string();
    let (status, body) = route(&method, &url);
    tracing::info!(%method, %url, status, "request");

    let response = Response::from_string(body)
        .with_status_code(status)
        .with_header(json_header());
    if let Err(e) = request.respond(response) {
        tracing::warn!("failed to send response: {e}");
    }
}

fn json_header() -> tiny_http::Header {
    tiny_http::Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..])
        .expect("static header")
}

/// Route a request to a status code and JSON body.
pub fn route(method: &Method, url: &str) -> (u16, String) {
    if *method != Method::Get {
        return (405, detail_body("Method Not Allowed"));
    }
    let (path, raw_query) = url.split_once('?').unwrap_or((url, ""));
    match path {
        "/astro" => astro_response(raw_query),
        _ => (404, detail_body("Not Found")),
    }
}

fn astro_response(raw_query: &str) -> (u16, String) {
    let q = match parse_astro_query(raw_query) {
        Ok(q) => q,
        Err(e) => return (400, detail_body(&e.to_string())),
    };

    let moment = CivilMoment::new(q.year, q.month, q.day, q.hour);
    let point = GeoPoint::new(q.lat, q.lon);
    match compute(&moment, &point) {
        Ok(panchang) => match serde_json::to_string(&panchang) {
            Ok(body) => (200, body),
            Err(e) => (500, detail_body(&format!("Internal server error: {e}"))),
        },
        Err(e @ PanchangError::Calculation { .. }) => (400, detail_body(&e.to_string())),
        Err(e) => (500, detail_body(&format!("Internal server error: {e}"))),
    }
}

fn detail_body(msg: &str) -> String {
    serde_json::json!({ "detail": msg }).to_string()
}
