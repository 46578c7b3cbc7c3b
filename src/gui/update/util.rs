//! gui/update/util.rs
use iced::futures::channel::oneshot;

/// Run a blocking function on a background thread and await the result.
///
/// Keeps file IO off the UI thread: the caller wraps this in `Task::perform`
/// and gets a `Message` back once the work is done.
pub(crate) async fn spawn_blocking<T>(f: impl FnOnce() -> T + Send + 'static) -> Result<T, String>
where
    T: Send + 'static,
{
    let (tx, rx) = oneshot::channel::<T>();

    std::thread::spawn(move || {
        let _ = tx.send(f());
    });

    rx.await
        .map_err(|_| "background worker dropped without returning".to_string())
}
