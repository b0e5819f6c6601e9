use std::fs;
use std::path::PathBuf;

use query_engine_metadata::metadata::Metadata;
use query_engine_request::request::{ast, convert};
use query_engine_translation::translation;

fn read_request<T: serde::de::DeserializeOwned>(testname: &str) -> anyhow::Result<T> {
    let path = PathBuf::from("tests/goldenfiles")
        .join(testname)
        .join("request.json");
    Ok(serde_json::from_str(&fs::read_to_string(path)?)?)
}

fn metadata() -> Metadata {
    Metadata::empty().with_legacy_tables()
}

/// Render a translated request as `METHOD table?query [prefer] [accept] body`.
fn describe(request: &ast::Request) -> String {
    let rendered = request.render();
    let method = match rendered.method {
        convert::Method::Get => "GET",
        convert::Method::Post => "POST",
        convert::Method::Patch => "PATCH",
    };
    let mut description = format!("{method} {}?{}", rendered.path, rendered.query_string());
    if let Some(prefer) = rendered.prefer {
        description.push_str(&format!(" prefer={prefer}"));
    }
    if let Some(accept) = rendered.accept {
        description.push_str(&format!(" accept={accept}"));
    }
    if let Some(body) = rendered.body {
        description.push_str(&format!(" body={}", serde_json::to_string(&body).unwrap()));
    }
    description
}

/// Translate a read request from the goldenfiles and describe the result.
pub fn test_query_translation(testname: &str) -> anyhow::Result<String> {
    let request: translation::models::QueryRequest = read_request(testname)?;
    let translated = translation::query::translate(&metadata(), &request)?;
    Ok(describe(&translated))
}

/// Translate an insert request from the goldenfiles and describe the result.
pub fn test_insert_translation(testname: &str) -> anyhow::Result<String> {
    let request: translation::models::InsertRequest = read_request(testname)?;
    let translated = translation::mutation::insert::translate(&metadata(), request);
    Ok(describe(&translated))
}

/// Translate an update request from the goldenfiles and describe the result.
pub fn test_update_translation(testname: &str) -> anyhow::Result<String> {
    let request: translation::models::UpdateRequest = read_request(testname)?;
    let translated = translation::mutation::update::translate(&metadata(), request)?;
    Ok(describe(&translated))
}
