//! The event target seam.
//!
//! [`EventTarget`] collects the four primitives the manager consumes: plain
//! listener registration and removal, and selector-delegated registration
//! and removal. Implementations decide what an event is and what a
//! delegation handle looks like.
//!
//! Backends shipped with this crate:
//!
//! - [`MockTarget`](crate::testing::MockTarget): in-memory target for native
//!   code and tests
//! - `DomTarget` (wasm32 only): a `web_sys::Element`

use crate::callback::Callback;
use crate::error::ListenerError;

/// An object capable of receiving event registrations.
pub trait EventTarget {
	/// The event value passed to listeners.
	type Event;

	/// Token returned by [`delegate_bind`](Self::delegate_bind), required to
	/// reverse that exact registration.
	type Handle;

	/// Registers `listener` for `event` on the target itself.
	fn add_listener(
		&self,
		event: &str,
		listener: &Callback<Self::Event>,
		use_capture: bool,
	) -> Result<(), ListenerError>;

	/// Removes a listener previously added with [`add_listener`](Self::add_listener).
	///
	/// `listener` must be the same callback (by identity) that was added.
	/// Removing an unknown listener does nothing.
	fn remove_listener(&self, event: &str, listener: &Callback<Self::Event>, use_capture: bool);

	/// Registers `listener` for `event`, invoked only when the event's origin
	/// matches `selector` within the target.
	fn delegate_bind(
		&self,
		selector: &str,
		event: &str,
		listener: Callback<Self::Event>,
		use_capture: bool,
	) -> Result<Self::Handle, ListenerError>;

	/// Reverses a registration made with [`delegate_bind`](Self::delegate_bind).
	fn delegate_unbind(&self, event: &str, handle: Self::Handle, use_capture: bool);
}
