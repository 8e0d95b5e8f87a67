//! Tint Core
//!
//! Element-facing primitives shared by the Tint theming crates:
//!
//! - **Values**: [`Color`], [`ResourceValue`] and [`AttributeSlot`] handles
//! - **Elements**: the [`Element`] contract plus a reference [`Node`]
//! - **Lifecycle**: activation, deactivation and appearance notifications
//! - **Affinity queues**: [`Dispatcher`] for marshaling work onto an element's
//!   owning thread
//!
//! # Example
//!
//! ```rust
//! use tint_core::{attributes, Color, Element, ImmediateDispatcher, Node};
//! use std::sync::Arc;
//!
//! let node = Node::new(Arc::new(ImmediateDispatcher));
//! node.set_attribute(attributes::BACKGROUND, Color::RED.into());
//! assert_eq!(
//!     node.attribute(attributes::BACKGROUND).and_then(|v| v.as_color()),
//!     Some(Color::RED)
//! );
//! ```

pub mod color;
pub mod dispatch;
pub mod element;
pub mod events;
pub mod node;
pub mod value;

pub use color::{Color, ColorParseError};
pub use dispatch::{DispatchQueue, Dispatcher, ImmediateDispatcher, Task, ThreadDispatcher};
pub use element::{Appearance, DisplayId, Element, ElementId};
pub use events::{LifecycleEvent, LifecycleHandler, LifecycleHandlers};
pub use node::Node;
pub use value::{attributes, AttributeSlot, ResourceValue};
