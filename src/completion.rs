//! Delivery of a finished [`Record`] back to whoever created the response.
//!
//! A response is completed through a [`Completion`], either a plain closure
//! handed to [`Response::new`] or the [`Pending`] future returned by
//! [`Response::channel`]. Completion happens at most once: sending consumes
//! the response, and dropping it unsent never reaches a closure.
//!
//! [`Response::new`]: crate::Response::new
//! [`Response::channel`]: crate::Response::channel
use crate::error::Error;
use crate::http::Record;
use futures::channel::oneshot;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

/// What a completion receives: the finished record, or why there is none.
pub type Outcome<B> = Result<Record<B>, Error>;

/// Receives the outcome of a response, exactly once.
pub trait Completion<B>: Send {
  fn complete(self: Box<Self>, outcome: Outcome<B>);
}

impl<B, F> Completion<B> for F
where
  F: FnOnce(Outcome<B>) + Send,
{
  fn complete(self: Box<Self>, outcome: Outcome<B>) {
    (*self)(outcome)
  }
}

pub type BoxedCompletion<B> = Box<dyn Completion<B>>;

/// Completes a [`Pending`] future.
pub(crate) struct Notifier<B> {
  sender: oneshot::Sender<Outcome<B>>,
}

impl<B: Send> Completion<B> for Notifier<B> {
  fn complete(self: Box<Self>, outcome: Outcome<B>) {
    if self.sender.send(outcome).is_err() {
      log::debug!("pending response was dropped before completion");
    }
  }
}

/// Resolves once the paired response is sent.
///
/// Resolves to [`Error::Canceled`] if the response is dropped instead.
#[must_use = "futures do nothing unless polled"]
pub struct Pending<B> {
  receiver: oneshot::Receiver<Outcome<B>>,
}

impl<B> Future for Pending<B> {
  type Output = Outcome<B>;

  fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
    Pin::new(&mut self.receiver).poll(cx).map(|received| match received {
      Ok(outcome) => outcome,
      Err(oneshot::Canceled) => {
        log::warn!("response was dropped without being sent");
        Err(Error::Canceled)
      }
    })
  }
}

pub(crate) fn channel<B>() -> (Notifier<B>, Pending<B>) {
  let (sender, receiver) = oneshot::channel();
  (Notifier { sender }, Pending { receiver })
}

#[cfg(test)]
mod tests {
  use super::*;
  use futures::executor::block_on;
  use std::collections::HashMap;

  #[test]
  fn notifier_resolves_pending() {
    let (notifier, pending) = channel::<&str>();
    let record = Record::new(200, HashMap::new(), "ok");
    Box::new(notifier).complete(Ok(record.clone()));

    assert_eq!(block_on(pending).unwrap(), record);
  }

  #[test]
  fn dropped_notifier_cancels_pending() {
    let (notifier, pending) = channel::<&str>();
    drop(notifier);

    assert!(matches!(block_on(pending), Err(Error::Canceled)));
  }

  #[test]
  fn completing_after_pending_dropped_is_silent() {
    let (notifier, pending) = channel::<&str>();
    drop(pending);
    Box::new(notifier).complete(Ok(Record::new(200, HashMap::new(), "ok")));
  }

  #[test]
  fn closures_are_completions() {
    let (tx, rx) = std::sync::mpsc::channel();
    let completion: BoxedCompletion<u8> = Box::new(move |outcome: Outcome<u8>| {
      tx.send(outcome.map(Record::into_body)).unwrap();
    });
    completion.complete(Ok(Record::new(201, HashMap::new(), 7)));

    assert_eq!(rx.recv().unwrap().unwrap(), 7);
  }
}
