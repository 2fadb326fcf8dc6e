#![allow(dead_code)]

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{HeaderMap, Method, Request, Response};
use axum::Router;
use figment::{
    providers::{Format, Yaml},
    Figment,
};
use text2kv::config::{parse_config, ConfigV1};
use text2kv::routes::create_router;
use text2kv::startup::build_state;

pub const TEST_HOST: &str = "kv.example.com";

pub fn load_test_config(yaml: &str) -> ConfigV1 {
    parse_config(Figment::new().merge(Yaml::string(yaml))).expect("Failed to parse test config YAML")
}

pub async fn build_app(config: ConfigV1) -> Router {
    let state = build_state(Arc::new(config))
        .await
        .expect("state should build");
    create_router(state)
}

pub fn get_request(path: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(path)
        .header("Host", TEST_HOST)
        .body(Body::empty())
        .expect("failed to build request")
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    String::from_utf8(bytes.to_vec()).expect("body should be UTF-8")
}

pub fn header<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}
