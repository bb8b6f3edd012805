use std::collections::HashMap;

/// Defaults every response built from this config starts with.
#[derive(Clone, Debug)]
pub struct Config {
  pub(crate) status: u16,
  pub(crate) headers: HashMap<String, String>,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      status: 200,
      headers: HashMap::new(),
    }
  }
}

impl Config {
  pub fn builder() -> Self {
    Self::default()
  }

  /// Sets the initial status code (default is 200)
  pub fn status(mut self, code: u16) -> Self {
    self.status = code;
    self
  }

  /// Adds a header every response starts out with
  pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
    self.headers.insert(name.into(), value.into());
    self
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn defaults_to_ok_without_headers() {
    let config = Config::default();
    assert_eq!(config.status, 200);
    assert!(config.headers.is_empty());
  }

  #[test]
  fn builder_overrides_defaults() {
    let config = Config::builder()
      .status(204)
      .header("Server", "turbofish")
      .header("Server", "turbofish/0.0");

    assert_eq!(config.status, 204);
    assert_eq!(config.headers.len(), 1);
    assert_eq!(config.headers["Server"], "turbofish/0.0");
  }
}
