use crate::completion::{self, BoxedCompletion, Outcome, Pending};
use crate::config::Config;
use crate::http::Record;
use std::collections::HashMap;
use std::fmt;

/// An outgoing response, built up fluently and finished with [`send`].
///
/// ```
/// use turbofish_respond::Response;
///
/// Response::new(|outcome| {
///   let record = outcome.unwrap();
///   assert_eq!(record.status(), 201);
///   assert_eq!(record.header("X-FOO"), Some("bar"));
/// })
/// .status(201)
/// .header("X-FOO", "bar")
/// .send("created");
/// ```
///
/// [`send`]: Response::send
pub struct Response<B> {
  status: u16,
  headers: HashMap<String, String>,
  completion: BoxedCompletion<B>,
}

impl<B> Response<B> {
  /// Creates a response that hands its record to `callback` once sent.
  pub fn new<F>(callback: F) -> Self
  where
    F: FnOnce(Outcome<B>) + Send + 'static,
  {
    Self::with_config(callback, &Config::default())
  }

  /// Like [`Response::new`], starting from the defaults in `config`.
  pub fn with_config<F>(callback: F, config: &Config) -> Self
  where
    F: FnOnce(Outcome<B>) + Send + 'static,
  {
    Self::with_completion(Box::new(callback), config)
  }

  pub fn with_completion(completion: BoxedCompletion<B>, config: &Config) -> Self {
    Self {
      status: config.status,
      headers: config.headers.clone(),
      completion,
    }
  }

  /// Creates a response together with a future resolving to its record.
  pub fn channel() -> (Self, Pending<B>)
  where
    B: Send + 'static,
  {
    Self::channel_with_config(&Config::default())
  }

  pub fn channel_with_config(config: &Config) -> (Self, Pending<B>)
  where
    B: Send + 'static,
  {
    let (notifier, pending) = completion::channel();
    (Self::with_completion(Box::new(notifier), config), pending)
  }

  /// Sets the status code. Any `u16` is accepted.
  pub fn status(mut self, code: u16) -> Self {
    self.set_status(code);
    self
  }

  pub fn set_status(&mut self, code: u16) -> &mut Self {
    log::trace!("response status set to {}", code);
    self.status = code;
    self
  }

  /// Sets a header, replacing any earlier value under the same name.
  pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
    self.set_header(name, value);
    self
  }

  /// Alias for [`Response::header`].
  pub fn set(self, name: impl Into<String>, value: impl Into<String>) -> Self {
    self.header(name, value)
  }

  pub fn set_header(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
    let (name, value) = (name.into(), value.into());
    log::trace!("response header set: {}: {}", name, value);
    self.headers.insert(name, value);
    self
  }

  /// Finishes the response, passing `body` through untouched.
  pub fn send(self, body: B) {
    let Self {
      status,
      headers,
      completion,
    } = self;

    log::debug!("sending response with status {} and {} header(s)", status, headers.len());
    completion.complete(Ok(Record::new(status, headers, body)));
  }
}

impl<B> fmt::Debug for Response<B> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Response")
      .field("status", &self.status)
      .field("headers", &self.headers)
      .finish()
  }
}
