use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use url::Url;

use crux_http::Http;

use crate::event::Event;

pub type HttpCapability = Http<Event>;

pub const MAX_REQUEST_BODY_SIZE: usize = 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }

    pub fn has_request_body(&self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Put)
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RequestError {
    #[error("{method} requests cannot have a body")]
    BodyNotAllowed { method: &'static str },

    #[error("request body too large: {size} bytes exceeds maximum of {max} bytes")]
    BodyTooLarge { size: usize, max: usize },

    #[error("serialization error: {message}")]
    Serialization { message: String },
}

/// A fully-resolved call against the jobs API, independent of the HTTP stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    method: HttpMethod,
    url: Url,
    body: Option<Vec<u8>>,
    request_id: String,
}

impl ApiRequest {
    pub fn new(method: HttpMethod, url: Url) -> Self {
        Self {
            method,
            url,
            body: None,
            request_id: uuid::Uuid::new_v4().to_string(),
        }
    }

    pub fn get(url: Url) -> Self {
        Self::new(HttpMethod::Get, url)
    }

    pub fn post(url: Url) -> Self {
        Self::new(HttpMethod::Post, url)
    }

    pub fn put(url: Url) -> Self {
        Self::new(HttpMethod::Put, url)
    }

    pub fn delete(url: Url) -> Self {
        Self::new(HttpMethod::Delete, url)
    }

    pub fn with_json<T: Serialize>(mut self, value: &T) -> Result<Self, RequestError> {
        if !self.method.has_request_body() {
            return Err(RequestError::BodyNotAllowed {
                method: self.method.as_str(),
            });
        }

        let body = serde_json::to_vec(value).map_err(|e| RequestError::Serialization {
            message: e.to_string(),
        })?;

        if body.len() > MAX_REQUEST_BODY_SIZE {
            return Err(RequestError::BodyTooLarge {
                size: body.len(),
                max: MAX_REQUEST_BODY_SIZE,
            });
        }

        self.body = Some(body);
        Ok(self)
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    pub fn request_id(&self) -> &str {
        &self.request_id
    }
}

/// Outcome of one request as the sync layer sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Exchange {
    Response { status: u16, body: Vec<u8> },
    Failed { message: String },
}

impl Exchange {
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self::Response {
            status: 200,
            body: body.into(),
        }
    }

    pub fn status(status: u16) -> Self {
        Self::Response {
            status,
            body: Vec::new(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed {
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Response { status, .. } if (200..300).contains(status))
    }
}

impl From<crux_http::Result<crux_http::Response<Vec<u8>>>> for Exchange {
    fn from(result: crux_http::Result<crux_http::Response<Vec<u8>>>) -> Self {
        match result {
            Ok(mut response) => Self::Response {
                status: response.status().into(),
                body: response.take_body().unwrap_or_default(),
            },
            // crux_http reports 4xx/5xx responses as errors.
            Err(crux_http::HttpError::Http { code, body, .. }) => Self::Response {
                status: code.into(),
                body: body.unwrap_or_default(),
            },
            Err(e) => Self::failed(e.to_string()),
        }
    }
}

/// Hands `request` to the shell and turns the completion into an event.
pub fn send<F>(http: &HttpCapability, request: ApiRequest, make_event: F)
where
    F: FnOnce(Exchange) -> Event + Send + 'static,
{
    debug!(
        request_id = request.request_id(),
        method = request.method().as_str(),
        url = %request.url(),
        "sending request"
    );

    let url = request.url.as_str();
    let builder = match request.method {
        HttpMethod::Get => http.get(url),
        HttpMethod::Post => http.post(url),
        HttpMethod::Put => http.put(url),
        HttpMethod::Delete => http.delete(url),
    };

    let builder = match request.body {
        Some(body) => builder.header("Content-Type", "application/json").body(body),
        None => builder,
    };

    builder.send(move |result| make_event(Exchange::from(result)));
}
