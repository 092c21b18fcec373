use std::io::Cursor;
use tiny_http::Response;

use crate::routes::{html_response, text_response};
use crate::state::SharedState;

// The page is embedded at compile time so the binary runs from any directory.
const TEMPLATE: &str = include_str!("../assets/pad.html");

// ---------------------------------------------------------------------------
// GET /
// ---------------------------------------------------------------------------

pub fn handle_get(state: SharedState) -> Response<Cursor<Vec<u8>>> {
    let image_size = match state.lock() {
        Ok(st) => st.image_size,
        Err(_) => return text_response(500, "pad state unavailable"),
    };
    html_response(render_page(image_size))
}

fn render_page(image_size: u32) -> String {
    TEMPLATE.replace("{{IMAGE_SIZE}}", &image_size.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_carries_grid_size() {
        let page = render_page(28);
        assert!(page.contains("const GRID = 28;"));
        assert!(!page.contains("{{"));
    }
}
