//! Configuration file watcher for recompilation.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::time::Duration;

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;

use crate::config::loader::{load_config, ConfigError};
use crate::config::schema::ServiceConfig;

/// Outcome of reloading the watched file.
pub type Reload = Result<ServiceConfig, ConfigError>;

/// A watcher that monitors a service description for changes.
pub struct ConfigWatcher {
    path: PathBuf,
    update_tx: mpsc::UnboundedSender<Reload>,
}

impl ConfigWatcher {
    /// Create a new ConfigWatcher.
    ///
    /// Returns the watcher and a receiver for reload results. Failed reloads are
    /// delivered too, so the consumer can report them.
    pub fn new(path: &Path) -> (Self, mpsc::UnboundedReceiver<Reload>) {
        let (update_tx, update_rx) = mpsc::unbounded_channel();

        (
            Self {
                path: path.to_path_buf(),
                update_tx,
            },
            update_rx,
        )
    }

    /// Start watching the file in a background thread.
    ///
    /// Watching stops when the returned watcher is dropped.
    pub fn run(self) -> Result<RecommendedWatcher, notify::Error> {
        let tx = self.update_tx.clone();
        let path = self.path.clone();

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) => {
                    if event.kind.is_modify() || event.kind.is_create() {
                        tracing::info!(path = ?path, "Service file changed, reloading");
                        let _ = tx.send(load_config(&path));
                    }
                }
                Err(e) => tracing::error!("Watch error: {:?}", e),
            },
            Config::default().with_poll_interval(Duration::from_secs(2)),
        )?;

        watcher.watch(&self.path, RecursiveMode::NonRecursive)?;

        tracing::info!(path = ?self.path, "Config watcher started");
        Ok(watcher)
    }
}

/// Hand every reload result to `on_reload` until `stop` completes or the
/// watcher side of the channel is gone. Returns the number of reloads handled.
pub async fn process_reloads<S, F>(
    updates: &mut mpsc::UnboundedReceiver<Reload>,
    stop: S,
    mut on_reload: F,
) -> usize
where
    S: Future<Output = ()>,
    F: FnMut(Reload),
{
    tokio::pin!(stop);
    let mut handled = 0;

    loop {
        tokio::select! {
            _ = &mut stop => break,
            update = updates.recv() => match update {
                Some(reload) => {
                    on_reload(reload);
                    handled += 1;
                }
                None => break,
            },
        }
    }

    handled
}
