//! Tint Theme Bindings
//!
//! Keeps element attributes consistent with a live theme (light, default/dark
//! and high-contrast variants plus accent color changes) without element
//! authors writing update logic.
//!
//! # Overview
//!
//! - **Variant resolution**: high contrast overrides the element's requested
//!   light/dark appearance ([`resolve_variant`])
//! - **Resource stores**: variant-keyed tables of named values
//!   ([`ResourceStore`], [`ResourceDictionary`])
//! - **Binding engine**: [`ThemeBinder`] applies declared bindings and
//!   re-applies them on activation, appearance changes and settings changes
//! - **Cross-thread delivery**: settings changes arriving on a foreign thread
//!   are marshaled onto each element's own affinity queue
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use tint_core::{attributes, Color, ImmediateDispatcher, Node};
//! use tint_theme::{ResourceDictionary, ResourceTable, SystemSettings, ThemeBinder, ThemeVariant};
//!
//! let store = Arc::new(
//!     ResourceDictionary::new()
//!         .with_table(ThemeVariant::Default, ResourceTable::new().with("Accent", Color::RED))
//!         .with_table(ThemeVariant::HighContrast, ResourceTable::new().with("Accent", Color::YELLOW)),
//! );
//! let settings = Arc::new(SystemSettings::new());
//! let binder = ThemeBinder::new(store, settings.clone());
//!
//! let node = Arc::new(Node::new(Arc::new(ImmediateDispatcher)));
//! node.activate();
//! binder.declare_binding(&node, "Accent", attributes::ACCENT);
//! assert_eq!(node.attribute(attributes::ACCENT), Some(Color::RED.into()));
//!
//! settings.set_high_contrast(true);
//! assert_eq!(node.attribute(attributes::ACCENT), Some(Color::YELLOW.into()));
//! ```
//!
//! # Configuration
//!
//! Resource tables and binder behavior can be loaded from TOML with
//! [`ThemeConfig`].

pub mod binder;
pub mod binding;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod registry;
pub mod resources;
pub mod settings;
pub mod variant;

#[cfg(feature = "watcher")]
pub mod watcher;

// Re-export commonly used types
pub use binder::ThemeBinder;
pub use binding::{BindingChange, BindingRecord};
pub use config::{BinderConfig, ReapplyMode, ThemeConfig};
pub use diagnostics::ResolvedBinding;
pub use error::{Result, ThemeError};
pub use registry::SubscriberRegistry;
pub use resources::{ResourceDictionary, ResourceStore, ResourceTable};
pub use settings::{ChangeListener, SettingsProvider, SystemSettings};
pub use variant::{resolve_variant, ThemeVariant};

#[cfg(feature = "watcher")]
pub use watcher::{SettingsWatcher, WatcherConfig};
