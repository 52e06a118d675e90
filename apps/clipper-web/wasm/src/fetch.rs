//! `fetch`-based transport for the file API

use crate::describe_js_error;
use clipper_core::{ClipperConfig, ClipperError, HttpReply, Result, Transport};
use js_sys::Promise;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response, Window};

pub struct FetchTransport {
    window: Window,
    config: ClipperConfig,
}

impl FetchTransport {
    pub fn new(window: Window, config: ClipperConfig) -> Self {
        Self { window, config }
    }
}

impl Transport for FetchTransport {
    async fn get(&self, path: &str) -> Result<HttpReply> {
        let url = self.config.endpoint(path);
        finish(self.window.fetch_with_str(&url)).await
    }

    async fn post_json(&self, path: &str, body: String) -> Result<HttpReply> {
        let url = self.config.endpoint(path);

        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_body(&JsValue::from_str(&body));

        let request = Request::new_with_str_and_init(&url, &opts).map_err(network)?;
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(network)?;

        finish(self.window.fetch_with_request(&request)).await
    }
}

/// Wait for the response and read its body as text, whatever the status
async fn finish(pending: Promise) -> Result<HttpReply> {
    let response = JsFuture::from(pending).await.map_err(network)?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| ClipperError::Network("fetch did not return a Response".to_string()))?;

    let body = JsFuture::from(response.text().map_err(network)?)
        .await
        .map_err(network)?;

    Ok(HttpReply::new(
        response.status(),
        body.as_string().unwrap_or_default(),
    ))
}

fn network(err: JsValue) -> ClipperError {
    ClipperError::Network(describe_js_error(&err))
}
