pub mod action;
pub mod completion;
pub mod config;
pub mod error;
pub mod http;
pub mod service;

pub use action::Action;
pub use completion::{Completion, Outcome, Pending};
pub use config::Config;
pub use error::{Error, Result};
pub use crate::http::{Record, Request, Response};
pub use service::{ActionService, MakeActionService};
