use std::future::Future;
use std::pin::Pin;
use std::sync::mpsc::{channel, Receiver, Sender, TryRecvError};

/// Result type carried back to the UI thread
pub type AsyncTaskResult<T> = Result<T, String>;

/// Boxed future produced by a task factory
pub type AsyncTask<T> = Pin<Box<dyn Future<Output = AsyncTaskResult<T>> + Send + 'static>>;

/// Runs an async task on a fresh worker thread and sends its result over `tx`
///
/// The thread owns a current-thread runtime and exits after sending. If the
/// receiver was dropped (the UI replaced the channel), the result is discarded.
///
/// # Example
/// ```ignore
/// let (tx, rx) = std::sync::mpsc::channel();
/// let client = self.api.clone();
/// spawn_and_send(
///     move || Box::pin(async move { client.playlists().await.map_err(|e| e.to_string()) }),
///     tx,
/// );
/// ```
pub fn spawn_and_send<F, T>(task_factory: F, tx: Sender<AsyncTaskResult<T>>)
where
    F: FnOnce() -> AsyncTask<T> + Send + 'static,
    T: Send + 'static,
{
    std::thread::spawn(move || {
        let rt = match crate::utils::error_handling::create_runtime() {
            Ok(r) => r,
            Err(e) => {
                log::error!("[AsyncHelper] Failed to create runtime: {}", e);
                let _ = tx.send(Err(e));
                return;
            }
        };

        let result = rt.block_on(task_factory());
        let _ = tx.send(result);
    });
}

/// Fire-and-forget spawn for calls whose outcome the UI does not track
///
/// Failures are logged with `context` as the tag.
pub fn spawn_fire_and_forget<F, T>(context: &'static str, task_factory: F)
where
    F: FnOnce() -> AsyncTask<T> + Send + 'static,
    T: Send + 'static,
{
    std::thread::spawn(move || {
        let rt = match crate::utils::error_handling::create_runtime() {
            Ok(r) => r,
            Err(e) => {
                log::error!("[AsyncHelper] Failed to create runtime: {}", e);
                return;
            }
        };

        if let Err(e) = rt.block_on(task_factory()) {
            log::warn!("[{}] Background request failed: {}", context, e);
        }
    });
}

/// `spawn_and_send` with a fresh channel; the receiver goes into a task slot
pub fn spawn_task<F, T>(task_factory: F) -> Receiver<AsyncTaskResult<T>>
where
    F: FnOnce() -> AsyncTask<T> + Send + 'static,
    T: Send + 'static,
{
    let (tx, rx) = channel();
    spawn_and_send(task_factory, tx);
    rx
}

/// Non-blocking check of a task slot, called once per frame
///
/// Empties the slot once a result arrives. A worker that died without
/// sending is reported as an error instead of leaving the slot stuck.
pub fn poll_task<T>(slot: &mut Option<Receiver<AsyncTaskResult<T>>>) -> Option<AsyncTaskResult<T>> {
    let result = match slot.as_ref()?.try_recv() {
        Ok(result) => result,
        Err(TryRecvError::Empty) => return None,
        Err(TryRecvError::Disconnected) => Err("Background task ended unexpectedly".to_string()),
    };
    *slot = None;
    Some(result)
}
