//! Engine lifecycle state machine.
//!
//! Owns the single engine instance behind one mounted graph and guards every
//! transition: mount once, re-apply options any number of times, tear down
//! exactly once. The state machine is `Unmounted → Mounted → (Configured)* →
//! Destroyed`, with `Destroyed` terminal. Option updates and render
//! completions that race a teardown are dropped silently; they are expected
//! during UI unmount and are not errors.

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};

use super::engine::Engine;
use super::options::GraphOptions;

struct Slot<E> {
	engine: Option<E>,
	/// Bumped on every mount so a completion from a previous instance's
	/// render pass cannot fire against its successor.
	generation: u64,
}

/// Exclusive owner of one engine instance across its whole lifecycle.
///
/// Cheap to clone: clones share the same instance slot, so the mount,
/// update, and cleanup closures of a UI component can each hold one. All
/// mutation happens from UI-thread lifecycle hooks; render completions
/// re-borrow the slot on their own event-loop turn.
pub struct GraphHost<E: Engine> {
	slot: Rc<RefCell<Slot<E>>>,
	on_render: Option<Rc<dyn Fn(&E)>>,
	on_teardown: Option<Rc<dyn Fn()>>,
}

impl<E: Engine> Clone for GraphHost<E> {
	fn clone(&self) -> Self {
		Self {
			slot: Rc::clone(&self.slot),
			on_render: self.on_render.clone(),
			on_teardown: self.on_teardown.clone(),
		}
	}
}

impl<E: Engine> Default for GraphHost<E> {
	fn default() -> Self {
		Self::new()
	}
}

impl<E: Engine> GraphHost<E> {
	/// Create an unmounted host with no lifecycle callbacks.
	pub fn new() -> Self {
		Self {
			slot: Rc::new(RefCell::new(Slot {
				engine: None,
				generation: 0,
			})),
			on_render: None,
			on_teardown: None,
		}
	}

	/// Register a callback fired with the live engine after each successful
	/// render pass.
	pub fn on_render(mut self, callback: impl Fn(&E) + 'static) -> Self {
		self.on_render = Some(Rc::new(callback));
		self
	}

	/// Register a callback fired once after teardown destroys the engine.
	pub fn on_teardown(mut self, callback: impl Fn() + 'static) -> Self {
		self.on_teardown = Some(Rc::new(callback));
		self
	}

	/// Whether a live engine instance is currently mounted.
	pub fn is_mounted(&self) -> bool {
		self.slot.borrow().engine.is_some()
	}

	/// Take ownership of a freshly constructed engine instance.
	///
	/// Mounting while already mounted is a caller bug: the incoming instance
	/// is destroyed and the established one kept, so the slot never holds
	/// more than one live engine.
	pub fn mount(&self, engine: E) {
		let mut slot = self.slot.borrow_mut();
		if slot.engine.is_some() {
			warn!("graph host: mount while mounted, destroying new instance");
			engine.destroy();
			return;
		}
		slot.generation += 1;
		slot.engine = Some(engine);
	}

	/// Apply a configuration bundle and start an asynchronous render pass.
	///
	/// A no-op when nothing is mounted or the instance is already destroyed.
	/// On success the render callback fires exactly once with the live
	/// engine; a completion that arrives after teardown or after a remount
	/// finds a missing or newer instance and does nothing. A failed pass is
	/// logged at debug level and swallowed; the host stays usable.
	pub fn apply_options(&self, options: &GraphOptions) {
		let slot_ref = self.slot.borrow();
		let Some(engine) = slot_ref.engine.as_ref() else {
			return;
		};
		if engine.destroyed() {
			return;
		}
		if let Err(error) = engine.set_options(options) {
			debug!("graph host: configuration rejected: {error}");
			return;
		}

		let generation = slot_ref.generation;
		let slot = Rc::clone(&self.slot);
		let on_render = self.on_render.clone();
		engine.render(Box::new(move |outcome| match outcome {
			Ok(()) => {
				let slot = slot.borrow();
				let Some(engine) = slot.engine.as_ref() else {
					return;
				};
				if slot.generation != generation || engine.destroyed() {
					return;
				}
				if let Some(on_render) = &on_render {
					on_render(engine);
				}
			}
			Err(error) => debug!("graph host: render pass failed: {error}"),
		}));
	}

	/// Destroy the engine instance and fire the teardown callback.
	///
	/// Idempotent beyond the first call: later calls find the slot empty and
	/// do nothing, as do render completions still in flight.
	pub fn teardown(&self) {
		let engine = self.slot.borrow_mut().engine.take();
		let Some(engine) = engine else {
			return;
		};
		engine.destroy();
		if let Some(on_teardown) = &self.on_teardown {
			on_teardown();
		}
	}
}

#[cfg(test)]
mod tests {
	use std::cell::{Cell, RefCell};
	use std::rc::Rc;

	use serde_json::json;

	use super::*;
	use crate::components::relation_graph::engine::{Engine, EngineError, RenderDone};
	use crate::fixture;

	#[derive(Default)]
	struct MockState {
		destroyed: bool,
		destroy_calls: u32,
		applied: Vec<GraphOptions>,
		pending: Vec<RenderDone>,
	}

	/// In-memory engine double. Render passes queue up until the test
	/// settles them by hand, which makes the async completion ordering
	/// explicit.
	#[derive(Clone, Default)]
	struct MockEngine {
		state: Rc<RefCell<MockState>>,
	}

	impl MockEngine {
		fn pending_renders(&self) -> usize {
			self.state.borrow().pending.len()
		}

		fn applied(&self) -> Vec<GraphOptions> {
			self.state.borrow().applied.clone()
		}

		fn destroy_calls(&self) -> u32 {
			self.state.borrow().destroy_calls
		}

		fn complete_next(&self, outcome: Result<(), EngineError>) {
			let done = self.state.borrow_mut().pending.remove(0);
			done(outcome);
		}
	}

	impl Engine for MockEngine {
		fn set_options(&self, options: &GraphOptions) -> Result<(), EngineError> {
			self.state.borrow_mut().applied.push(options.clone());
			Ok(())
		}

		fn render(&self, done: RenderDone) {
			self.state.borrow_mut().pending.push(done);
		}

		fn destroy(&self) {
			let mut state = self.state.borrow_mut();
			state.destroyed = true;
			state.destroy_calls += 1;
		}

		fn destroyed(&self) -> bool {
			self.state.borrow().destroyed
		}
	}

	fn counting_host(renders: &Rc<Cell<u32>>) -> GraphHost<MockEngine> {
		let renders = Rc::clone(renders);
		GraphHost::new().on_render(move |engine: &MockEngine| {
			assert!(!engine.destroyed());
			renders.set(renders.get() + 1);
		})
	}

	#[test]
	fn render_completion_fires_once_with_demo_counts() {
		let engine = MockEngine::default();
		let renders = Rc::new(Cell::new(0));
		let host = counting_host(&renders);

		host.mount(engine.clone());
		host.apply_options(&fixture::demo_options());

		assert_eq!(engine.pending_renders(), 1);
		assert_eq!(renders.get(), 0);

		engine.complete_next(Ok(()));
		assert_eq!(renders.get(), 1);
		assert_eq!(engine.pending_renders(), 0);

		let applied = engine.applied();
		assert_eq!(applied.len(), 1);
		assert_eq!(applied[0].data.nodes.len(), 4);
		assert_eq!(applied[0].data.edges.len(), 2);
		assert_eq!(applied[0].data.combos.len(), 2);
	}

	#[test]
	fn teardown_destroys_exactly_once() {
		let engine = MockEngine::default();
		let teardowns = Rc::new(Cell::new(0));
		let host = GraphHost::new().on_teardown({
			let teardowns = Rc::clone(&teardowns);
			move || teardowns.set(teardowns.get() + 1)
		});

		host.mount(engine.clone());
		assert!(host.is_mounted());

		host.teardown();
		host.teardown();
		host.teardown();

		assert_eq!(engine.destroy_calls(), 1);
		assert_eq!(teardowns.get(), 1);
		assert!(!host.is_mounted());
	}

	#[test]
	fn apply_after_teardown_is_ignored() {
		let engine = MockEngine::default();
		let renders = Rc::new(Cell::new(0));
		let host = counting_host(&renders);

		host.mount(engine.clone());
		host.teardown();
		host.apply_options(&GraphOptions::default());

		assert!(engine.applied().is_empty());
		assert_eq!(engine.pending_renders(), 0);
		assert_eq!(renders.get(), 0);
	}

	#[test]
	fn apply_before_mount_is_ignored() {
		let host: GraphHost<MockEngine> = GraphHost::new();
		host.apply_options(&GraphOptions::default());
		assert!(!host.is_mounted());
	}

	#[test]
	fn render_failure_is_swallowed_and_host_stays_usable() {
		let engine = MockEngine::default();
		let renders = Rc::new(Cell::new(0));
		let host = counting_host(&renders);

		host.mount(engine.clone());
		host.apply_options(&GraphOptions::default());
		engine.complete_next(Err(EngineError::Render("layout diverged".into())));
		assert_eq!(renders.get(), 0);

		host.apply_options(&GraphOptions::default());
		engine.complete_next(Ok(()));
		assert_eq!(renders.get(), 1);
	}

	#[test]
	fn teardown_suppresses_pending_completion() {
		let engine = MockEngine::default();
		let renders = Rc::new(Cell::new(0));
		let host = counting_host(&renders);

		host.mount(engine.clone());
		host.apply_options(&GraphOptions::default());
		assert_eq!(engine.pending_renders(), 1);

		host.teardown();
		engine.complete_next(Ok(()));

		assert_eq!(renders.get(), 0);
	}

	#[test]
	fn remount_ignores_completion_from_previous_instance() {
		let first = MockEngine::default();
		let second = MockEngine::default();
		let renders = Rc::new(Cell::new(0));
		let host = counting_host(&renders);

		host.mount(first.clone());
		host.apply_options(&GraphOptions::default());
		host.teardown();
		host.mount(second.clone());

		// The old instance's pass settles against the new mount.
		first.complete_next(Ok(()));
		assert_eq!(renders.get(), 0);

		host.apply_options(&GraphOptions::default());
		second.complete_next(Ok(()));
		assert_eq!(renders.get(), 1);
	}

	#[test]
	fn second_mount_destroys_incoming_instance() {
		let first = MockEngine::default();
		let second = MockEngine::default();
		let host = GraphHost::new();

		host.mount(first.clone());
		host.mount(second.clone());

		assert_eq!(second.destroy_calls(), 1);
		assert_eq!(first.destroy_calls(), 0);
		assert!(host.is_mounted());

		host.apply_options(&GraphOptions::default());
		assert_eq!(first.applied().len(), 1);
		assert!(second.applied().is_empty());
	}

	#[test]
	fn dangling_references_are_forwarded_unchanged() {
		let raw = json!({
			"nodes": [
				{ "id": "C|orphan", "combo": "CUSTOMER|missing" }
			],
			"edges": [
				{ "id": "e1", "source": "C|orphan", "target": "A|missing", "label": "HAS_ACCOUNT" }
			],
			"combos": []
		});
		let options = GraphOptions {
			data: serde_json::from_value(raw.clone()).unwrap(),
			..GraphOptions::default()
		};

		let engine = MockEngine::default();
		let host: GraphHost<MockEngine> = GraphHost::new();
		host.mount(engine.clone());
		host.apply_options(&options);

		let forwarded = serde_json::to_value(&engine.applied()[0].data).unwrap();
		assert_eq!(forwarded["edges"], raw["edges"]);
		assert_eq!(forwarded["nodes"][0]["combo"], raw["nodes"][0]["combo"]);
	}
}
