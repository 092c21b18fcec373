use std::io::Cursor;
use tiny_http::{Header, Method, Request, Response, StatusCode};

use crate::state::SharedState;
use crate::handlers;

// ---------------------------------------------------------------------------
// Response helpers
// ---------------------------------------------------------------------------

fn response(status: u16, content_type: &[u8], body: Vec<u8>) -> Response<Cursor<Vec<u8>>> {
    let len = body.len();
    Response::new(
        StatusCode(status),
        vec![Header::from_bytes(b"Content-Type", content_type).unwrap()],
        Cursor::new(body),
        Some(len),
        None,
    )
}

pub fn html_response(body: String) -> Response<Cursor<Vec<u8>>> {
    response(200, b"text/html; charset=utf-8", body.into_bytes())
}

pub fn json_response(body: String) -> Response<Cursor<Vec<u8>>> {
    response(200, b"application/json", body.into_bytes())
}

pub fn text_response(status: u16, body: &str) -> Response<Cursor<Vec<u8>>> {
    response(status, b"text/plain; charset=utf-8", body.as_bytes().to_vec())
}

pub fn not_found() -> Response<Cursor<Vec<u8>>> {
    text_response(404, "404 Not Found")
}

// ---------------------------------------------------------------------------
// Request dispatcher
// ---------------------------------------------------------------------------

/// Dispatches incoming requests to the appropriate handler and responds.
pub fn dispatch(mut request: Request, state: SharedState) {
    let method = request.method().clone();
    let url    = request.url().to_owned();
    let path   = url.split('?').next().unwrap_or("").to_owned();

    let response = match (method, path.as_str()) {
        (Method::Get,  "/")        => handlers::page::handle_get(state),
        (Method::Post, "/draw")    => handlers::draw::handle_draw(&mut request, state),
        (Method::Post, "/predict") => handlers::draw::handle_predict(state),
        (Method::Post, "/clear")   => handlers::draw::handle_clear(state),
        _ => not_found(),
    };

    let _ = request.respond(response);
}
