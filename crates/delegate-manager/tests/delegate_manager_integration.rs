//! Integration tests for DelegateManager
//!
//! These tests drive the manager through [`MockTarget`] and verify:
//! 1. Delegated listeners fire only for matching origins
//! 2. Unbinding at every granularity stops delivery
//! 3. Handlers can tear down their own bindings while firing

use delegate_manager::testing::{MockEvent, MockTarget};
use delegate_manager::{BindingError, Callback, DelegateManager, MethodTable, Receiver};
use rstest::rstest;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

type Manager<R> = DelegateManager<MockTarget, R>;

fn counting(hits: &Rc<Cell<u32>>) -> impl Fn(&MockEvent) + 'static {
	let hits = Rc::clone(hits);
	move |_: &MockEvent| hits.set(hits.get() + 1)
}

/// Delegated click on `<a>` inside `<li>` reaches the handler exactly once,
/// and not at all after unbinding.
#[rstest]
fn test_delegated_click_then_unbind() {
	let clicks = Rc::new(Cell::new(0));
	let list = Rc::new(MockTarget::new());
	let receiver = MethodTable::new().with_method("onclick", counting(&clicks));
	let mut events = DelegateManager::new(Rc::clone(&list), Rc::new(receiver));

	events.bind("click li a", Some("onclick")).unwrap();
	let click = MockEvent::at("click", &["li", "a"]);

	list.dispatch(&click);
	assert_eq!(clicks.get(), 1);

	// Clicks outside the selector are ignored
	list.dispatch(&MockEvent::at("click", &["li"]));
	assert_eq!(clicks.get(), 1);

	events.unbind("click li a", Some("onclick"));
	list.dispatch(&click);
	assert_eq!(clicks.get(), 1);
	assert!(list.is_empty());
}

#[rstest]
fn test_bind_all_then_unbind_one_event() {
	let clicks = Rc::new(Cell::new(0));
	let keys = Rc::new(Cell::new(0));
	let target = Rc::new(MockTarget::new());
	let receiver = MethodTable::new()
		.with_method("onclick", counting(&clicks))
		.with_method("onkeyup", counting(&keys));
	let mut events = DelegateManager::new(Rc::clone(&target), Rc::new(receiver));

	events
		.bind_all([("click", "onclick"), ("keyup", "onkeyup")])
		.unwrap();
	events.unbind_event("click");

	target.dispatch(&MockEvent::new("click"));
	target.dispatch(&MockEvent::new("keyup"));

	assert_eq!(clicks.get(), 0);
	assert_eq!(keys.get(), 1);
	assert!(events.is_bound("keyup", "onkeyup"));
}

#[rstest]
fn test_bind_all_accepts_owned_pairs() {
	let target = Rc::new(MockTarget::new());
	let receiver = MethodTable::new()
		.with_method("onclick", |_: &MockEvent| {})
		.with_method("onsubmit", |_: &MockEvent| {});
	let mut events = DelegateManager::new(Rc::clone(&target), Rc::new(receiver));

	let pairs = vec![
		("click li".to_string(), "onclick".to_string()),
		("submit form".to_string(), "onsubmit".to_string()),
	];
	events.bind_all(pairs).unwrap();

	assert_eq!(events.len(), 2);
	assert_eq!(target.delegated_count(), 2);
}

#[rstest]
fn test_chained_calls_return_same_manager() {
	let target = Rc::new(MockTarget::new());
	let receiver = MethodTable::new()
		.with_method("onclick", |_: &MockEvent| {})
		.with_method("onkeyup", |_: &MockEvent| {});
	let mut events = DelegateManager::new(Rc::clone(&target), Rc::new(receiver));

	let before: *const Manager<MethodTable<MockEvent>> = &events;
	let after: *const Manager<MethodTable<MockEvent>> = events
		.bind("click", None)
		.unwrap()
		.bind("keyup", None)
		.unwrap()
		.unbind("click", None);

	assert_eq!(before, after);
	assert_eq!(events.event_names().collect::<Vec<_>>(), vec!["keyup"]);
}

#[rstest]
fn test_missing_default_method() {
	let target = Rc::new(MockTarget::new());
	let receiver = MethodTable::new().with_method("onclick", |_: &MockEvent| {});
	let mut events = DelegateManager::new(target, Rc::new(receiver));

	let err = events.bind("dblclick li", None).unwrap_err();
	assert_eq!(
		err,
		BindingError::MissingMethod {
			method: "ondblclick".to_string(),
			event: "dblclick".to_string(),
		}
	);
}

#[rstest]
fn test_unbind_is_idempotent() {
	let target = Rc::new(MockTarget::new());
	let receiver = MethodTable::new().with_method("onclick", |_: &MockEvent| {});
	let mut events = DelegateManager::new(Rc::clone(&target), Rc::new(receiver));

	events.bind("click", None).unwrap();
	events.unbind("click", None).unbind("click", None);
	events.unbind_event("click").unbind_all().unbind_all();

	assert!(events.is_empty());
	assert!(target.is_empty());
}

/// Method resolution happens at bind time, so the receiver can change
/// afterwards without affecting live bindings.
#[rstest]
fn test_method_resolved_at_bind_time() {
	let original = Rc::new(Cell::new(0));
	let replacement = Rc::new(Cell::new(0));
	let target = Rc::new(MockTarget::new());
	let receiver = Rc::new(RefCell::new(
		MethodTable::new().with_method("onclick", counting(&original)),
	));

	struct Shared(Rc<RefCell<MethodTable<MockEvent>>>);
	impl Receiver<MockEvent> for Shared {
		fn method(&self, name: &str) -> Option<Callback<MockEvent>> {
			self.0.borrow().method(name)
		}
	}

	let mut events = DelegateManager::new(Rc::clone(&target), Rc::new(Shared(Rc::clone(&receiver))));
	events.bind("click", None).unwrap();

	receiver
		.borrow_mut()
		.insert("onclick", Callback::new(counting(&replacement)));
	target.dispatch(&MockEvent::new("click"));

	assert_eq!(original.get(), 1);
	assert_eq!(replacement.get(), 0);

	// The stored callback is still the one removed on unbind
	events.unbind("click", None);
	assert!(target.is_empty());
}

/// A handler that unbinds itself after a number of clicks.
#[rstest]
#[case("click li a", 3)]
#[case("click", 8)]
fn test_handler_unbinds_itself(#[case] unbind_descriptor: &str, #[case] limit: u32) {
	let target = Rc::new(MockTarget::new());
	let manager: Rc<RefCell<Option<Manager<MethodTable<MockEvent>>>>> =
		Rc::new(RefCell::new(None));
	let clicks = Rc::new(Cell::new(0));

	let receiver = MethodTable::new().with_method("onclick", {
		let manager = Rc::clone(&manager);
		let clicks = Rc::clone(&clicks);
		let unbind_descriptor = unbind_descriptor.to_string();
		move |_: &MockEvent| {
			clicks.set(clicks.get() + 1);
			if clicks.get() >= limit {
				if let Some(events) = manager.borrow_mut().as_mut() {
					events.unbind(&unbind_descriptor, Some("onclick"));
				}
			}
		}
	});

	let mut events = DelegateManager::new(Rc::clone(&target), Rc::new(receiver));
	events.bind("click li a", Some("onclick")).unwrap();
	*manager.borrow_mut() = Some(events);

	let click = MockEvent::at("click", &["li", "a"]);
	for _ in 0..20 {
		target.dispatch(&click);
	}

	assert_eq!(clicks.get(), limit);
	assert!(target.is_empty());
	assert!(manager.borrow().as_ref().unwrap().is_empty());
}

/// Two managers sharing one receiver and one target each own a listener,
/// so unbinding through one leaves the other delivering.
#[rstest]
fn test_managers_sharing_receiver_keep_separate_listeners() {
	let clicks = Rc::new(Cell::new(0));
	let target = Rc::new(MockTarget::new());
	let receiver = Rc::new(MethodTable::new().with_method("onclick", counting(&clicks)));
	let mut first = DelegateManager::new(Rc::clone(&target), Rc::clone(&receiver));
	let mut second = DelegateManager::new(Rc::clone(&target), Rc::clone(&receiver));

	first.bind("click", None).unwrap();
	second.bind("click", None).unwrap();
	assert_eq!(target.listener_count("click"), 2);

	target.dispatch(&MockEvent::new("click"));
	assert_eq!(clicks.get(), 2);

	first.unbind("click", None);
	assert!(second.is_bound("click", "onclick"));
	assert_eq!(target.listener_count("click"), 1);

	target.dispatch(&MockEvent::new("click"));
	assert_eq!(clicks.get(), 3);

	second.unbind_all();
	assert!(target.is_empty());
}

/// Two method names resolving to one callback count as two bindings with
/// two live listeners.
#[rstest]
fn test_method_names_sharing_callback_keep_separate_listeners() {
	let clicks = Rc::new(Cell::new(0));
	let shared = Callback::new(counting(&clicks));
	let mut table = MethodTable::new();
	table.insert("onclick", shared.clone());
	table.insert("track", shared);

	let target = Rc::new(MockTarget::new());
	let mut events = DelegateManager::new(Rc::clone(&target), Rc::new(table));
	events
		.bind("click", Some("onclick"))
		.unwrap()
		.bind("click", Some("track"))
		.unwrap();

	assert_eq!(events.len(), 2);
	assert_eq!(target.listener_count("click"), 2);

	events.unbind("click", Some("track"));
	assert!(events.is_bound("click", "onclick"));
	assert_eq!(target.listener_count("click"), 1);

	target.dispatch(&MockEvent::new("click"));
	assert_eq!(clicks.get(), 1);
}
