use std::{
  future::Future,
  pin::Pin,
  sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
  },
  task::{Context, Poll},
};

use rand::Rng;
use tokio::task::JoinHandle;
use tracing::debug;
use util::error::{WordSearchError, WordSearchResult};

use crate::generator::{Generation, WordSearchGenerator};

/// Requests cancellation of a running generation. Cloning shares the flag.
#[derive(Clone, Debug, Default)]
pub struct CancelHandle(Arc<AtomicBool>);

impl CancelHandle {
  pub fn cancel(&self) {
    self.0.store(true, Ordering::Relaxed);
  }

  pub fn is_cancelled(&self) -> bool {
    self.0.load(Ordering::Relaxed)
  }
}

/// A generation running on tokio's blocking pool. Await it for the result.
/// Dropping the task cancels it.
pub struct GenerationTask {
  cancel: CancelHandle,
  handle: JoinHandle<WordSearchResult<Generation>>,
}

impl GenerationTask {
  /// Must be called from within a tokio runtime.
  pub fn submit<R>(generator: WordSearchGenerator, names: Vec<String>, mut rng: R) -> Self
  where
    R: Rng + Send + 'static,
  {
    let cancel = CancelHandle::default();
    let flag = cancel.clone();
    debug!(names = names.len(), "Submitting generation task");
    let handle = tokio::task::spawn_blocking(move || {
      generator.generate_cancellable(&names, &mut rng, &flag.0)
    });
    Self { cancel, handle }
  }

  pub fn cancel(&self) {
    self.cancel.cancel();
  }

  pub fn cancel_handle(&self) -> CancelHandle {
    self.cancel.clone()
  }
}

impl Future for GenerationTask {
  type Output = WordSearchResult<Generation>;

  fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
    Pin::new(&mut self.handle).poll(cx).map(|joined| {
      joined.unwrap_or_else(|err| {
        Err(WordSearchError::Internal(format!("Generation task failed: {err}")).into())
      })
    })
  }
}

impl Drop for GenerationTask {
  fn drop(&mut self) {
    self.cancel.cancel();
  }
}
