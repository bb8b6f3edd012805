use crate::http::{Request, Response};
use async_trait::async_trait;

/// Handles a request by finishing the response it is handed.
#[async_trait]
pub trait Action<B: Send + 'static>: Send + Sync {
  async fn call(&self, req: Request, res: Response<B>);
}

#[async_trait]
impl<B, F> Action<B> for F
where
  B: Send + 'static,
  F: Fn(Request, Response<B>) + Send + Sync,
{
  async fn call(&self, req: Request, res: Response<B>) {
    (self)(req, res)
  }
}
