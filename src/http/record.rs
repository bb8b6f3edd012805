use crate::error::{Error, Result};
use bytes::Bytes;
use http::header::{HeaderName, CONTENT_TYPE};
use http::{HeaderValue, StatusCode};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A finished response: status, headers and the body exactly as it was sent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record<B> {
  status: u16,
  headers: HashMap<String, String>,
  body: B,
}

impl<B> Record<B> {
  pub fn new(status: u16, headers: HashMap<String, String>, body: B) -> Self {
    Self {
      status,
      headers,
      body,
    }
  }

  pub fn status(&self) -> u16 {
    self.status
  }

  /// The status as an [`http::StatusCode`], if it is one.
  pub fn status_code(&self) -> Option<StatusCode> {
    StatusCode::from_u16(self.status).ok()
  }

  pub fn headers(&self) -> &HashMap<String, String> {
    &self.headers
  }

  pub fn header(&self, name: &str) -> Option<&str> {
    self.headers.get(name).map(String::as_str)
  }

  pub fn body(&self) -> &B {
    &self.body
  }

  pub fn into_body(self) -> B {
    self.body
  }

  pub fn into_parts(self) -> (u16, HashMap<String, String>, B) {
    (self.status, self.headers, self.body)
  }
}

impl<B: Serialize> Record<B> {
  /// Encodes the record as an HTTP response with a JSON body.
  ///
  /// `content-type` defaults to `application/json` unless a header of that
  /// name (in any case) was set explicitly.
  pub fn into_http(self) -> Result<hyper::Response<hyper::Body>> {
    let status = self
      .status_code()
      .ok_or(Error::InvalidStatus(self.status))?;

    let mut builder = hyper::Response::builder().status(status);
    let mut has_content_type = false;

    for (name, value) in &self.headers {
      let invalid = || Error::InvalidHeader { name: name.clone() };
      let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| invalid())?;
      let header_value = HeaderValue::from_str(value).map_err(|_| invalid())?;

      has_content_type |= header_name == CONTENT_TYPE;
      builder = builder.header(header_name, header_value);
    }

    if !has_content_type {
      builder = builder.header(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    }

    let body = Bytes::from(serde_json::to_vec(&self.body)?);
    Ok(builder.body(hyper::Body::from(body))?)
  }
}
