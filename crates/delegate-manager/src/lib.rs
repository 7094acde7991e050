//! Delegate Manager - named-method event bindings with selector delegation
//!
//! Binds events arriving at a target to named methods on a receiver object,
//! optionally delegated through a CSS selector, and tracks every binding so
//! it can later be removed individually, per event, or all at once.
//!
//! ## Architecture
//!
//! - [`manager`]: the [`DelegateManager`] and its binding registry
//! - [`descriptor`]: `"event selector"` descriptor parsing
//! - [`receiver`]: the [`Receiver`] capability and [`MethodTable`]
//! - [`target`]: the [`EventTarget`] seam over listener primitives
//! - [`callback`]: the identity-preserving [`Callback`] wrapper
//! - [`options`]: [`ManagerOptions`]
//! - [`testing`]: an in-memory [`EventTarget`] for native code and tests
//! - `dom` (wasm32 only): a `web_sys::Element` backend
//!
//! ## Example
//!
//! ```
//! use std::rc::Rc;
//! use std::cell::Cell;
//! use delegate_manager::testing::{MockEvent, MockTarget};
//! use delegate_manager::{DelegateManager, MethodTable};
//!
//! let clicks = Rc::new(Cell::new(0));
//! let receiver = MethodTable::new()
//!     .with_method("onclick", {
//!         let clicks = Rc::clone(&clicks);
//!         move |_: &MockEvent| clicks.set(clicks.get() + 1)
//!     })
//!     .with_method("onkeyup", |_: &MockEvent| {});
//!
//! let list = Rc::new(MockTarget::new());
//! let mut events = DelegateManager::new(Rc::clone(&list), Rc::new(receiver));
//!
//! events
//!     .bind("click li a", None)?
//!     .bind("keyup", None)?;
//!
//! list.dispatch(&MockEvent::at("click", &["li", "a"]));
//! assert_eq!(clicks.get(), 1);
//!
//! events.unbind_event("click");
//! list.dispatch(&MockEvent::at("click", &["li", "a"]));
//! assert_eq!(clicks.get(), 1);
//! assert!(events.is_bound("keyup", "onkeyup"));
//!
//! events.unbind_all();
//! assert!(list.is_empty());
//! # Ok::<(), delegate_manager::BindingError>(())
//! ```

#![warn(missing_docs)]

pub mod callback;
pub mod descriptor;
pub mod error;
pub mod logging;
pub mod manager;
pub mod options;
pub mod receiver;
pub mod target;
pub mod testing;

#[cfg(target_arch = "wasm32")]
pub mod dom;

pub use callback::Callback;
pub use descriptor::EventDescriptor;
pub use error::{BindingError, ListenerError, Result};
pub use manager::{Binding, DelegateManager};
pub use options::ManagerOptions;
pub use receiver::{MethodTable, Receiver};
pub use target::EventTarget;

#[cfg(target_arch = "wasm32")]
pub use dom::{DomHandle, DomTarget};

// Used by the logging macros.
#[doc(hidden)]
pub mod __private {
	#[cfg(not(target_arch = "wasm32"))]
	pub use tracing;
	#[cfg(target_arch = "wasm32")]
	pub use web_sys;
}
