//! Browser backend built on `web_sys`.
//!
//! [`DomTarget`] wraps an element and implements [`EventTarget`] for it.
//! Every registration creates a `Closure` owned by the target. A removed
//! listener may still be running (a handler that unbinds itself), so a
//! closure removed while any of the target's listeners is dispatching is
//! retired. Retired closures are freed by the next registration or removal
//! made outside a dispatch, and a closure removed outside a dispatch is
//! freed immediately.
//!
//! Delegated listeners are installed on the element itself. When an event
//! arrives, the listener walks up from `event.target` with
//! `Element.closest(selector)` and fires only if the match lies inside the
//! wrapped element.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;

use crate::callback::Callback;
use crate::error::ListenerError;
use crate::target::EventTarget;

type JsListener = Closure<dyn FnMut(web_sys::Event)>;

/// Wraps `f` in a closure that keeps `depth` raised while it runs.
fn listen(depth: &Rc<Cell<usize>>, f: impl Fn(&web_sys::Event) + 'static) -> JsListener {
	let depth = Rc::clone(depth);
	Closure::new(move |event: web_sys::Event| {
		depth.set(depth.get() + 1);
		f(&event);
		depth.set(depth.get() - 1);
	})
}

/// Handle for a delegated listener registered on a [`DomTarget`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DomHandle(u64);

struct DirectListener {
	event: String,
	use_capture: bool,
	callback: Callback<web_sys::Event>,
	closure: JsListener,
}

struct DelegatedListener {
	id: u64,
	event: String,
	use_capture: bool,
	closure: JsListener,
}

/// An [`EventTarget`] over a DOM element.
pub struct DomTarget {
	element: web_sys::Element,
	next_id: Cell<u64>,
	direct: RefCell<Vec<DirectListener>>,
	delegated: RefCell<Vec<DelegatedListener>>,
	retired: RefCell<Vec<JsListener>>,
	// Number of this target's listeners currently running.
	depth: Rc<Cell<usize>>,
}

impl DomTarget {
	/// Wraps `element`.
	pub fn new(element: web_sys::Element) -> Self {
		Self {
			element,
			next_id: Cell::new(0),
			direct: RefCell::new(Vec::new()),
			delegated: RefCell::new(Vec::new()),
			retired: RefCell::new(Vec::new()),
			depth: Rc::new(Cell::new(0)),
		}
	}

	/// Returns the wrapped element.
	pub fn element(&self) -> &web_sys::Element {
		&self.element
	}

	/// Returns the number of listeners this target has registered.
	pub fn listener_count(&self) -> usize {
		self.direct.borrow().len() + self.delegated.borrow().len()
	}

	/// Returns the number of removed closures waiting to be freed.
	pub fn retired_count(&self) -> usize {
		self.retired.borrow().len()
	}

	fn dispatching(&self) -> bool {
		self.depth.get() > 0
	}

	/// Frees retired closures unless a listener is running.
	fn collect_retired(&self) {
		if !self.dispatching() {
			// Take first so no borrow is held while closures drop.
			let retired = std::mem::take(&mut *self.retired.borrow_mut());
			drop(retired);
		}
	}

	fn retire(&self, closure: JsListener) {
		if self.dispatching() {
			self.retired.borrow_mut().push(closure);
		} else {
			drop(closure);
			self.collect_retired();
		}
	}
}

impl std::fmt::Debug for DomTarget {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("DomTarget")
			.field("element", &self.element.tag_name())
			.field("listener_count", &self.listener_count())
			.finish()
	}
}

fn platform_error(err: JsValue) -> ListenerError {
	ListenerError::Platform(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

impl EventTarget for DomTarget {
	type Event = web_sys::Event;
	type Handle = DomHandle;

	fn add_listener(
		&self,
		event: &str,
		listener: &Callback<web_sys::Event>,
		use_capture: bool,
	) -> Result<(), ListenerError> {
		let exists = self.direct.borrow().iter().any(|existing| {
			existing.event == event
				&& existing.use_capture == use_capture
				&& existing.callback.ptr_eq(listener)
		});
		if exists {
			return Ok(());
		}
		self.collect_retired();

		let callback = listener.clone();
		let closure = listen(&self.depth, move |event| callback.call(event));
		self.element
			.add_event_listener_with_callback_and_bool(
				event,
				closure.as_ref().unchecked_ref(),
				use_capture,
			)
			.map_err(platform_error)?;

		self.direct.borrow_mut().push(DirectListener {
			event: event.to_string(),
			use_capture,
			callback: listener.clone(),
			closure,
		});
		Ok(())
	}

	fn remove_listener(&self, event: &str, listener: &Callback<web_sys::Event>, use_capture: bool) {
		let position = self.direct.borrow().iter().position(|existing| {
			existing.event == event
				&& existing.use_capture == use_capture
				&& existing.callback.ptr_eq(listener)
		});
		let Some(position) = position else {
			return;
		};

		let removed = self.direct.borrow_mut().remove(position);
		if let Err(err) = self.element.remove_event_listener_with_callback_and_bool(
			event,
			removed.closure.as_ref().unchecked_ref(),
			use_capture,
		) {
			crate::warn_log!("failed to remove '{}' listener: {:?}", event, err);
		}
		self.retire(removed.closure);
	}

	fn delegate_bind(
		&self,
		selector: &str,
		event: &str,
		listener: Callback<web_sys::Event>,
		use_capture: bool,
	) -> Result<DomHandle, ListenerError> {
		// querySelector throws on malformed selectors.
		self.element
			.query_selector(selector)
			.map_err(|_| ListenerError::InvalidSelector(selector.to_string()))?;
		self.collect_retired();

		let root = self.element.clone();
		let selector = selector.to_string();
		let closure = listen(&self.depth, move |event| {
			let Some(origin) = event
				.target()
				.and_then(|target| target.dyn_into::<web_sys::Element>().ok())
			else {
				return;
			};
			if let Ok(Some(matched)) = origin.closest(&selector) {
				if root.contains(Some(matched.as_ref())) {
					listener.call(event);
				}
			}
		});
		self.element
			.add_event_listener_with_callback_and_bool(
				event,
				closure.as_ref().unchecked_ref(),
				use_capture,
			)
			.map_err(platform_error)?;

		let id = self.next_id.get();
		self.next_id.set(id + 1);
		self.delegated.borrow_mut().push(DelegatedListener {
			id,
			event: event.to_string(),
			use_capture,
			closure,
		});
		Ok(DomHandle(id))
	}

	fn delegate_unbind(&self, event: &str, handle: DomHandle, _use_capture: bool) {
		let position = self
			.delegated
			.borrow()
			.iter()
			.position(|existing| existing.id == handle.0 && existing.event == event);
		let Some(position) = position else {
			return;
		};

		let removed = self.delegated.borrow_mut().remove(position);
		if let Err(err) = self.element.remove_event_listener_with_callback_and_bool(
			event,
			removed.closure.as_ref().unchecked_ref(),
			removed.use_capture,
		) {
			crate::warn_log!("failed to remove delegated '{}' listener: {:?}", event, err);
		}
		self.retire(removed.closure);
	}
}
