//! High-contrast demo
//!
//! A watcher thread flips high contrast every few polls; the UI thread owns the
//! elements and pumps their dispatch queue, so theme changes land on the
//! right thread.
//!
//! Run with:
//! `RUST_LOG=tint_theme=debug cargo run -p tint_theme --example high_contrast_demo --features watcher`

use anyhow::Result;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tint_core::{attributes, Appearance, Node, ThreadDispatcher};
use tint_theme::{SettingsWatcher, SystemSettings, ThemeBinder, ThemeConfig, WatcherConfig};
use tracing_subscriber::EnvFilter;

const THEME: &str = r##"
[variants.Light]
Accent = "#0078D4"
Background = "#F3F3F3"

[variants.Default]
Accent = "#60CDFF"
Background = "#202020"

[variants.HighContrast]
Accent = "#FFFF00"
Background = "#000000"
"##;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = ThemeConfig::from_toml_str(THEME)?;
    let settings = Arc::new(SystemSettings::new());
    let binder = ThemeBinder::with_config(
        Arc::new(config.to_dictionary()?),
        settings.clone(),
        config.binder,
    );

    let (dispatcher, queue) = ThreadDispatcher::for_current_thread();
    let light = Arc::new(Node::new(dispatcher.clone()).with_appearance(Appearance::Light));
    let dark = Arc::new(Node::new(dispatcher).with_appearance(Appearance::Dark));
    for node in [&light, &dark] {
        node.activate();
        binder.declare_binding(node, "Accent", attributes::ACCENT);
        binder.declare_binding(node, "Background", attributes::BACKGROUND);
    }

    // Simulated platform probe: high contrast on for three polls, off for three.
    let polls = AtomicUsize::new(0);
    let watcher = SettingsWatcher::spawn(
        settings,
        move || (polls.fetch_add(1, Ordering::SeqCst) / 3) % 2 == 1,
        WatcherConfig {
            poll_interval: Duration::from_millis(200),
        },
    )?;

    for _ in 0..20 {
        std::thread::sleep(Duration::from_millis(100));
        if queue.pump() > 0 {
            for (name, node) in [("light", &light), ("dark", &dark)] {
                let accent = node.attribute(attributes::ACCENT);
                let background = node.attribute(attributes::BACKGROUND);
                println!("{name:>5}: accent={accent:?} background={background:?}");
            }
        }
    }

    watcher.stop();
    Ok(())
}
