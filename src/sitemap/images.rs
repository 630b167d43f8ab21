//! Image discovery in rendered page data.
//!
//! Page data is arbitrary JSON produced by rendering page content, and
//! nested components commonly carry their own images, so every object in
//! the tree is inspected:
//!
//! ```json
//! {
//!   "images": ["/a.png", "/b.png"],     ← collected first
//!   "blocks": [
//!     { "image": "/c.png" }             ← then nested ones
//!   ]
//! }
//! ```
//!
//! The walk is depth-first pre-order with children in document order, so
//! outer fields precede inner ones and the result is stable for a given
//! input. `serde_json::Value` is an owned tree, so there are no cycles to
//! guard against. Page data is parsed without serde_json's nesting limit,
//! so deeply nested components still contribute their images.

use crate::page::Page;
use serde::Deserialize;
use serde_json::Value;
use std::{fs, path::Path};

/// Key holding a list of image URLs.
const IMAGES_KEY: &str = "images";
/// Key holding a single image URL.
const IMAGE_KEY: &str = "image";

/// Collect every image URL found under `images` / `image` keys.
pub fn extract_images(data: &Value) -> Vec<String> {
    let mut found = Vec::new();
    let mut stack = vec![data];

    while let Some(value) = stack.pop() {
        match value {
            Value::Object(map) => {
                if let Some(Value::Array(images)) = map.get(IMAGES_KEY) {
                    found.extend(images.iter().filter_map(image_url));
                }
                if let Some(image) = map.get(IMAGE_KEY).and_then(image_url) {
                    found.push(image);
                }
                stack.extend(map.values().rev());
            }
            Value::Array(items) => stack.extend(items.iter().rev()),
            _ => {}
        }
    }

    found
}

/// Load a page's rendered data, `None` if it is absent or unreadable.
pub fn load_page_data(path: &Path) -> Option<Value> {
    let content = fs::read(path).ok()?;

    let mut json = serde_json::Deserializer::from_slice(&content);
    json.disable_recursion_limit();
    let data = Value::deserialize(serde_stacker::Deserializer::new(&mut json)).ok()?;
    json.end().ok()?;

    Some(data)
}

/// Images referenced by a page's rendered data.
///
/// Pages without loadable data have no images.
pub fn page_images(page: &Page) -> Vec<String> {
    page.data_output
        .as_deref()
        .and_then(load_page_data)
        .map(|data| extract_images(&data))
        .unwrap_or_default()
}

#[inline]
fn image_url(value: &Value) -> Option<String> {
    match value {
        Value::String(url) if !url.is_empty() => Some(url.clone()),
        _ => None,
    }
}
