//! Background settings watcher
//!
//! Polls a platform probe for the high-contrast flag on a dedicated thread and
//! pushes changes into [`SystemSettings`]. Listeners therefore fire on the
//! watcher thread, and bound elements are updated through their affinity
//! queues.

use crate::settings::SystemSettings;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Watcher timing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WatcherConfig {
    pub poll_interval: Duration,
}

impl Default for WatcherConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(1),
        }
    }
}

/// Handle to a running watcher thread; stops the thread when dropped
pub struct SettingsWatcher {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl SettingsWatcher {
    /// Start polling `probe`, which returns the current high-contrast flag
    pub fn spawn<F>(
        settings: Arc<SystemSettings>,
        probe: F,
        config: WatcherConfig,
    ) -> std::io::Result<Self>
    where
        F: Fn() -> bool + Send + 'static,
    {
        let stop = Arc::new(AtomicBool::new(false));
        let stop_flag = stop.clone();
        let handle = thread::Builder::new()
            .name("tint-settings-watcher".into())
            .spawn(move || {
                tracing::debug!(interval = ?config.poll_interval, "settings watcher started");
                while !stop_flag.load(Ordering::SeqCst) {
                    settings.set_high_contrast(probe());
                    thread::park_timeout(config.poll_interval);
                }
                tracing::debug!("settings watcher stopped");
            })?;

        Ok(Self {
            stop,
            handle: Some(handle),
        })
    }

    /// Stop the watcher and wait for its thread to exit
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        self.stop.store(true, Ordering::SeqCst);
        if let Some(handle) = self.handle.take() {
            handle.thread().unpark();
            if handle.join().is_err() {
                tracing::warn!("settings watcher thread panicked");
            }
        }
    }
}

impl Drop for SettingsWatcher {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::SettingsProvider;
    use std::sync::atomic::AtomicUsize;
    use std::time::Instant;
    use tint_core::DisplayId;

    #[test]
    fn watcher_pushes_probe_changes_from_its_own_thread() {
        let settings = Arc::new(SystemSettings::new());
        let notified = Arc::new(AtomicUsize::new(0));
        let counter = notified.clone();
        let test_thread = thread::current().id();
        settings.on_values_changed(Arc::new(move || {
            assert_ne!(thread::current().id(), test_thread);
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        let source = Arc::new(AtomicBool::new(true));
        let probe_source = source.clone();
        let watcher = SettingsWatcher::spawn(
            settings.clone(),
            move || probe_source.load(Ordering::SeqCst),
            WatcherConfig {
                poll_interval: Duration::from_millis(5),
            },
        )
        .unwrap();

        let deadline = Instant::now() + Duration::from_secs(5);
        while !settings.is_high_contrast(DisplayId::PRIMARY) && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(5));
        }
        watcher.stop();

        assert!(settings.high_contrast());
        assert_eq!(notified.load(Ordering::SeqCst), 1);
    }
}
