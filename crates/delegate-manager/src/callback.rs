//! Callback type with stable identity.
//!
//! A [`Callback`] is what a receiver hands out for a method name and what the
//! manager registers with the target. Direct listeners are removed by
//! identity, so the exact `Callback` used at registration must be kept and
//! passed back on removal. Cloning shares the same function, and
//! [`Callback::ptr_eq`] compares that identity.
//!
//! ## Example
//!
//! ```
//! use delegate_manager::Callback;
//!
//! let on_click = Callback::new(|clicks: &u32| assert_eq!(*clicks, 1));
//! let registered = on_click.clone();
//!
//! registered.call(&1);
//! assert!(on_click.ptr_eq(&registered));
//! ```

use std::rc::Rc;

/// A cloneable event callback.
///
/// Events are borrowed by the callback, so one event value can be handed to
/// every listener of a dispatch.
pub struct Callback<E> {
	inner: Rc<dyn Fn(&E) + 'static>,
}

impl<E> Callback<E> {
	/// Creates a new Callback from a function or closure.
	pub fn new<F>(f: F) -> Self
	where
		F: Fn(&E) + 'static,
	{
		Self { inner: Rc::new(f) }
	}

	/// Calls the callback with the given event.
	pub fn call(&self, event: &E) {
		(self.inner)(event)
	}

	/// Returns true if both callbacks wrap the same function allocation.
	pub fn ptr_eq(&self, other: &Self) -> bool {
		Rc::ptr_eq(&self.inner, &other.inner)
	}
}

impl<E> Clone for Callback<E> {
	fn clone(&self) -> Self {
		Self {
			inner: Rc::clone(&self.inner),
		}
	}
}

impl<E> std::fmt::Debug for Callback<E> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Callback")
			.field("inner", &"<function>")
			.finish()
	}
}
