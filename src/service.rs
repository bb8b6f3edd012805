use crate::action::Action;
use crate::config::Config;
use crate::error::Error;
use crate::http::{Record, Request, Response};
use futures::future::BoxFuture;
use hyper::service::Service;
use hyper::{Body, StatusCode};
use serde::Serialize;
use std::future::Future;
use std::marker::PhantomData;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

/// Creates an [`ActionService`] for every incoming connection.
pub struct MakeActionService<A, B>(ActionService<A, B>);

impl<A, B> MakeActionService<A, B> {
  pub fn new(service: ActionService<A, B>) -> Self {
    Self(service)
  }
}

impl<T, A, B> Service<T> for MakeActionService<A, B>
where
  A: Action<B> + 'static,
  B: Serialize + Send + 'static,
{
  type Response = ActionService<A, B>;
  type Error = Error;
  type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

  fn poll_ready(&mut self, _: &mut Context) -> Poll<Result<(), Self::Error>> {
    Poll::Ready(Ok(()))
  }

  fn call(&mut self, _: T) -> Self::Future {
    let service = self.0.clone();
    let fut = async move { Ok(service) };
    Box::pin(fut)
  }
}

/// Serves requests by running an [`Action`] and encoding the response it sends.
///
/// An action that drops its response, or sends one that cannot be encoded,
/// is answered with an empty `500 Internal Server Error`.
pub struct ActionService<A, B> {
  action: Arc<A>,
  config: Arc<Config>,
  _body: PhantomData<fn() -> B>,
}

impl<A, B> Clone for ActionService<A, B> {
  fn clone(&self) -> Self {
    Self {
      action: self.action.clone(),
      config: self.config.clone(),
      _body: PhantomData,
    }
  }
}

impl<A, B> ActionService<A, B>
where
  A: Action<B> + 'static,
  B: Serialize + Send + 'static,
{
  pub fn new(action: A) -> Self {
    Self::with_config(action, Config::default())
  }

  pub fn with_config(action: A, config: Config) -> Self {
    Self {
      action: Arc::new(action),
      config: Arc::new(config),
      _body: PhantomData,
    }
  }

  async fn serve(action: Arc<A>, config: Arc<Config>, req: Request) -> hyper::Response<Body> {
    let (res, pending) = Response::channel_with_config(&config);
    action.call(req, res).await;

    match pending.await.and_then(Record::into_http) {
      Ok(response) => response,
      Err(err) => {
        log::warn!("action did not produce a response: {}", err);
        internal_server_error()
      }
    }
  }
}

fn internal_server_error() -> hyper::Response<Body> {
  let mut response = hyper::Response::new(Body::empty());
  *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
  response
}

impl<A, B> Service<Request> for ActionService<A, B>
where
  A: Action<B> + 'static,
  B: Serialize + Send + 'static,
{
  type Response = hyper::Response<Body>;
  type Error = Error;
  type Future = BoxFuture<'static, Result<Self::Response, Self::Error>>;

  fn poll_ready(&mut self, _: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
    Poll::Ready(Ok(()))
  }

  fn call(&mut self, req: Request) -> Self::Future {
    let (action, config) = (self.action.clone(), self.config.clone());
    Box::pin(async move { Ok(Self::serve(action, config, req).await) })
  }
}
