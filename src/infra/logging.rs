//! Logging setup and the two last-resort safety nets.
//!
//! Nothing here recovers from anything: a panic or a failed task is logged and
//! the normal flow continues (or unwinds) exactly as it would have.

use std::future::Future;
use std::sync::Once;
use tokio::task::JoinHandle;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Installs the stderr subscriber (`RUST_LOG`, default `info`) and the panic hook.
///
/// Safe to call more than once; only the first call has an effect.
pub fn init() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        // Logs go to stderr so rendered HTML on stdout stays clean.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init();
        install_panic_hook();
    });
}

/// Logs every otherwise-uncaught panic, then hands over to the previous hook.
pub fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        tracing::error!("Global error: {}", info);
        previous(info);
    }));
}

/// Spawns `fut` and logs it if the task panics or is cancelled.
pub fn spawn_logged<F>(name: &'static str, fut: F) -> JoinHandle<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let inner = tokio::spawn(fut);
    tokio::spawn(async move {
        if let Err(e) = inner.await {
            tracing::error!(task = name, "Unhandled task failure: {}", e);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn failed_task_is_logged_not_propagated() {
        let handle = spawn_logged("boom", async {
            panic!("task exploded");
        });
        // The watcher itself completes normally.
        assert!(handle.await.is_ok());
    }

    #[tokio::test]
    async fn successful_task_completes() {
        let (tx, rx) = tokio::sync::oneshot::channel();
        spawn_logged("ok", async move {
            let _ = tx.send(7);
        })
        .await
        .unwrap();
        assert_eq!(rx.await.unwrap(), 7);
    }
}
