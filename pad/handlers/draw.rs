use std::io::Cursor;
use tiny_http::{Request, Response};

use log::{debug, info, warn};

use crate::routes::{json_response, text_response};
use crate::state::SharedState;
use crate::util::form::{form_get, parse_form, parse_pixels};

// ---------------------------------------------------------------------------
// POST /draw
// ---------------------------------------------------------------------------

/// Stores the captured grid as the pending drawing.
pub fn handle_draw(request: &mut Request, state: SharedState) -> Response<Cursor<Vec<u8>>> {
    let mut body = String::new();
    if let Err(e) = request.as_reader().read_to_string(&mut body) {
        return text_response(400, &format!("unreadable body: {e}"));
    }

    let pairs = parse_form(&body);
    let pixels = match parse_pixels(form_get(&pairs, "pixels").unwrap_or("")) {
        Ok(p) => p,
        Err(e) => return text_response(400, &e),
    };

    let mut st = match state.lock() {
        Ok(st) => st,
        Err(_) => return text_response(500, "pad state unavailable"),
    };
    match st.session.submit(pixels) {
        Ok(()) => {
            debug!("drawing captured");
            text_response(200, "ok")
        }
        Err(e) => {
            warn!("rejected drawing: {e}");
            text_response(400, &e.to_string())
        }
    }
}

// ---------------------------------------------------------------------------
// POST /predict
// ---------------------------------------------------------------------------

/// Classifies the pending drawing, if any, and returns the session to idle.
pub fn handle_predict(state: SharedState) -> Response<Cursor<Vec<u8>>> {
    let mut st = match state.lock() {
        Ok(st) => st,
        Err(_) => return text_response(500, "pad state unavailable"),
    };
    match st.session.take_prediction() {
        None => text_response(409, "Nothing drawn yet."),
        Some(Err(e)) => text_response(500, &e.to_string()),
        Some(Ok(prediction)) => {
            info!("recognised digit {}", prediction.digit);
            match serde_json::to_string(&prediction) {
                Ok(body) => json_response(body),
                Err(e) => text_response(500, &e.to_string()),
            }
        }
    }
}

// ---------------------------------------------------------------------------
// POST /clear
// ---------------------------------------------------------------------------

pub fn handle_clear(state: SharedState) -> Response<Cursor<Vec<u8>>> {
    match state.lock() {
        Ok(mut st) => {
            st.session.clear();
            text_response(200, "ok")
        }
        Err(_) => text_response(500, "pad state unavailable"),
    }
}
