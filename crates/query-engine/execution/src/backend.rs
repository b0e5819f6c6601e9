//! The transport seam: something that can carry a rendered request to the
//! REST service and bring back its answer.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};

use query_engine_request::request::convert::{Method, RenderedRequest};

use crate::error::{Error, ServiceError};

/// What the service answered: rows on success, its error otherwise.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Response {
    pub data: Option<serde_json::Value>,
    pub error: Option<ServiceError>,
}

impl Response {
    pub fn into_result(self) -> Result<Option<serde_json::Value>, Error> {
        match self.error {
            Some(error) => Err(Error::Service(error)),
            None => Ok(self.data),
        }
    }
}

/// Executes rendered requests.
#[async_trait]
pub trait Backend: Send + Sync {
    /// One round trip. Transport failures are errors; service-reported
    /// failures are returned in the response.
    async fn execute(&self, request: &RenderedRequest) -> Result<Response, Error>;

    /// Check that the service is reachable and accepts our credentials.
    async fn health(&self) -> Result<(), Error>;
}

/// The reqwest implementation of [`Backend`].
#[derive(Debug, Clone)]
pub struct PostgrestClient {
    client: reqwest::Client,
    rest_url: url::Url,
    api_key: String,
    schema: Option<String>,
}

impl PostgrestClient {
    /// `rest_url` is the REST root, ending in a slash.
    pub fn new(rest_url: url::Url, api_key: String, schema: Option<String>) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("supabridge/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            rest_url,
            api_key,
            schema,
        })
    }

    pub fn rest_url(&self) -> &url::Url {
        &self.rest_url
    }

    /// The URL of a table: the REST root with the table name appended as a
    /// single percent-encoded path segment.
    fn table_url(&self, table: &str) -> Result<url::Url, Error> {
        if table.is_empty() || table == "." || table == ".." {
            return Err(Error::InvalidTableName(table.to_string()));
        }
        let mut url = self.rest_url.clone();
        url.path_segments_mut()
            .map_err(|()| Error::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
            .pop_if_empty()
            .push(table);
        Ok(url)
    }

    fn auth_headers(&self, method: Method) -> Result<HeaderMap, Error> {
        let mut headers = HeaderMap::new();
        headers.insert("apikey", header_value(&self.api_key)?);
        headers.insert(AUTHORIZATION, header_value(&format!("Bearer {}", self.api_key))?);
        if let Some(schema) = &self.schema {
            let profile = match method {
                Method::Get => "accept-profile",
                Method::Post | Method::Patch => "content-profile",
            };
            headers.insert(profile, header_value(schema)?);
        }
        Ok(headers)
    }
}

fn header_value(value: &str) -> Result<HeaderValue, Error> {
    HeaderValue::from_str(value).map_err(|err| Error::InvalidHeader(err.to_string()))
}

fn to_reqwest_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Patch => reqwest::Method::PATCH,
    }
}

#[async_trait]
impl Backend for PostgrestClient {
    async fn execute(&self, request: &RenderedRequest) -> Result<Response, Error> {
        let url = self.table_url(&request.path)?;

        let mut builder = self
            .client
            .request(to_reqwest_method(request.method), url)
            .headers(self.auth_headers(request.method)?)
            .query(&request.query);
        if let Some(prefer) = request.prefer {
            builder = builder.header("Prefer", prefer);
        }
        if let Some(accept) = request.accept {
            builder = builder.header(ACCEPT, accept);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;
        tracing::debug!(status = %status, "REST response received");

        if status.is_success() {
            let data = if body.trim().is_empty() {
                None
            } else {
                Some(serde_json::from_str(&body)?)
            };
            Ok(Response { data, error: None })
        } else {
            Ok(Response {
                data: None,
                error: Some(ServiceError::from_body(status, &body)),
            })
        }
    }

    async fn health(&self) -> Result<(), Error> {
        let response = self
            .client
            .get(self.rest_url.clone())
            .headers(self.auth_headers(Method::Get)?)
            .send()
            .await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = response.text().await?;
            Err(Error::Service(ServiceError::from_body(status, &body)))
        }
    }
}
