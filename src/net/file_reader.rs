//! Awaitable file → data URL reads on top of the browser `FileReader`.
//!
//! `FileReader` reports completion through callbacks; [`read_file_as_data_url`]
//! bridges those into a `Promise` and awaits it with `JsFuture`. Both
//! callbacks are owned here and released once the read settles, whichever of
//! them fired.

#[cfg(all(test, target_arch = "wasm32"))]
#[path = "file_reader_test.rs"]
mod file_reader_test;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use crate::error::ClientError;

type ReaderCallback = Closure<dyn FnMut(JsValue)>;

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// First file picked in a file input, if any.
pub fn first_selected_file(input: &web_sys::HtmlInputElement) -> Option<web_sys::File> {
    input.files().and_then(|list| list.get(0))
}

/// Read `file` as a base64 data URL.
///
/// # Errors
///
/// Returns [`ClientError::FileRead`] if the reader cannot be created, the read
/// fails, or the result is not a string.
pub async fn read_file_as_data_url(file: &web_sys::File) -> Result<String, ClientError> {
    let reader = web_sys::FileReader::new().map_err(|e| ClientError::FileRead(describe(&e)))?;
    read_with(&reader, file).await
}

/// Run one data URL read on `reader`, leaving no handlers attached afterwards.
async fn read_with(reader: &web_sys::FileReader, blob: &web_sys::Blob) -> Result<String, ClientError> {
    let mut on_load: Option<ReaderCallback> = None;
    let mut on_error: Option<ReaderCallback> = None;

    let done = js_sys::Promise::new(&mut |resolve, reject| {
        let load: ReaderCallback = Closure::once(move |_ev: JsValue| {
            let _ = resolve.call0(&JsValue::UNDEFINED);
        });
        let error: ReaderCallback = Closure::once(move |ev: JsValue| {
            let _ = reject.call1(&JsValue::UNDEFINED, &ev);
        });
        reader.set_onload(Some(load.as_ref().unchecked_ref()));
        reader.set_onerror(Some(error.as_ref().unchecked_ref()));
        on_load = Some(load);
        on_error = Some(error);
    });

    let settled = match reader.read_as_data_url(blob) {
        Ok(()) => wasm_bindgen_futures::JsFuture::from(done).await.map(|_| ()),
        Err(e) => Err(e),
    };

    reader.set_onload(None);
    reader.set_onerror(None);
    drop(on_load);
    drop(on_error);

    settled.map_err(|e| ClientError::FileRead(describe(&e)))?;

    reader
        .result()
        .map_err(|e| ClientError::FileRead(describe(&e)))?
        .as_string()
        .ok_or_else(|| ClientError::FileRead("reader produced no text".to_owned()))
}
