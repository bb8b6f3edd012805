mod record;
mod response;

#[doc(inline)]
pub use record::Record;

#[doc(inline)]
pub use response::Response;

#[doc(inline)]
pub use http::{HeaderMap, HeaderValue, StatusCode};

/// The type of an incoming web request.
pub type Request = hyper::Request<hyper::Body>;
