//! Cache Actor Task
//!
//! Message-passing front end for a [`Cache`]. A single tokio task owns the
//! cache and applies requests in arrival order; callers talk to it through
//! a cloneable [`CacheHandle`].

use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::{Cache, EntryHandle, Store};
use crate::error::{CacheError, Result};

#[derive(Debug)]
enum Request {
    Set {
        key: String,
        value: String,
        expires_at: i64,
        reply: oneshot::Sender<()>,
    },
    Get {
        key: String,
        reply: oneshot::Sender<Option<String>>,
    },
    Delete {
        key: String,
        reply: oneshot::Sender<()>,
    },
    Has {
        key: String,
        reply: oneshot::Sender<bool>,
    },
    Size {
        reply: oneshot::Sender<usize>,
    },
    Len {
        reply: oneshot::Sender<usize>,
    },
}

/// Spawns a task that takes ownership of `cache` and serves requests.
///
/// `buffer` bounds the number of queued requests (minimum 1). The task runs
/// until every [`CacheHandle`] is dropped.
///
/// # Returns
/// The handle used to send requests, and the task's JoinHandle.
///
/// # Example
/// ```ignore
/// let (cache, task) = spawn_cache_actor(Cache::in_memory(1000), 64);
/// cache.set("k", "v", expires_in(60)).await?;
/// drop(cache);
/// task.await?;
/// ```
pub fn spawn_cache_actor<S>(cache: Cache<S>, buffer: usize) -> (CacheHandle, JoinHandle<()>)
where
    S: Store<EntryHandle> + 'static,
{
    let (tx, mut rx) = mpsc::channel(buffer.max(1));

    let task = tokio::spawn(async move {
        info!("Starting cache task with capacity {}", cache.size());

        let mut served: u64 = 0;
        while let Some(request) = rx.recv().await {
            serve(&cache, request);
            served += 1;
        }

        info!("Cache task stopped after serving {} requests", served);
    });

    (CacheHandle { tx }, task)
}

// A dropped reply receiver means the caller gave up; the operation still applies.
fn serve<S: Store<EntryHandle>>(cache: &Cache<S>, request: Request) {
    match request {
        Request::Set {
            key,
            value,
            expires_at,
            reply,
        } => {
            cache.set(key, value, expires_at);
            let _ = reply.send(());
        }
        Request::Get { key, reply } => {
            let value = cache.get(&key);
            if value.is_none() {
                debug!("Cache miss for key {}", key);
            }
            let _ = reply.send(value);
        }
        Request::Delete { key, reply } => {
            cache.delete(&key);
            let _ = reply.send(());
        }
        Request::Has { key, reply } => {
            let _ = reply.send(cache.has(&key));
        }
        Request::Size { reply } => {
            let _ = reply.send(cache.size());
        }
        Request::Len { reply } => {
            let _ = reply.send(cache.len());
        }
    }
}

// == Cache Handle ==
/// Cloneable async client for a cache task.
///
/// Every method fails with [`CacheError::ActorClosed`] once the task is gone.
#[derive(Debug, Clone)]
pub struct CacheHandle {
    tx: mpsc::Sender<Request>,
}

impl CacheHandle {
    async fn call<T>(&self, make: impl FnOnce(oneshot::Sender<T>) -> Request) -> Result<T> {
        let (reply, response) = oneshot::channel();
        self.tx
            .send(make(reply))
            .await
            .map_err(|_| CacheError::ActorClosed)?;
        response.await.map_err(|_| CacheError::ActorClosed)
    }

    pub async fn set(
        &self,
        key: impl Into<String>,
        value: impl Into<String>,
        expires_at: i64,
    ) -> Result<()> {
        let key = key.into();
        let value = value.into();
        self.call(|reply| Request::Set {
            key,
            value,
            expires_at,
            reply,
        })
        .await
    }

    pub async fn get(&self, key: impl Into<String>) -> Result<Option<String>> {
        let key = key.into();
        self.call(|reply| Request::Get { key, reply }).await
    }

    pub async fn delete(&self, key: impl Into<String>) -> Result<()> {
        let key = key.into();
        self.call(|reply| Request::Delete { key, reply }).await
    }

    pub async fn has(&self, key: impl Into<String>) -> Result<bool> {
        let key = key.into();
        self.call(|reply| Request::Has { key, reply }).await
    }

    /// Returns the configured capacity.
    pub async fn size(&self) -> Result<usize> {
        self.call(|reply| Request::Size { reply }).await
    }

    /// Returns the number of resident entries.
    pub async fn len(&self) -> Result<usize> {
        self.call(|reply| Request::Len { reply }).await
    }
}
