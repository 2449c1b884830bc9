//! Engine abstraction and the binding to the browser-side renderer.
//!
//! Layout, drawing, hit-testing, and gesture handling all live in the
//! external engine; this crate only sequences calls into it. The [`Engine`]
//! trait is the seam that lets the lifecycle logic run against a test double
//! off the wasm target.

use thiserror::Error;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::HtmlElement;

use super::options::GraphOptions;

/// Error raised by an engine operation.
#[derive(Debug, Error)]
pub enum EngineError {
	/// The engine rejected a render pass.
	#[error("render pass failed: {0}")]
	Render(String),
	/// The options bundle could not be converted to the engine wire format.
	#[error("options conversion failed: {0}")]
	Options(String),
}

/// Callback fired exactly once when an asynchronous render pass settles.
pub type RenderDone = Box<dyn FnOnce(Result<(), EngineError>)>;

/// Minimal surface the lifecycle host needs from a graph engine.
///
/// `render` starts an asynchronous pass; its `done` callback arrives on a
/// later event-loop turn, never re-entrantly from inside the call. After
/// `destroy`, `destroyed` reports `true` and the instance must not be used.
pub trait Engine: 'static {
	/// Replace the engine's configuration ahead of the next render pass.
	fn set_options(&self, options: &GraphOptions) -> Result<(), EngineError>;
	/// Start an asynchronous render pass.
	fn render(&self, done: RenderDone);
	/// Release everything the engine allocated for its container element.
	fn destroy(&self);
	/// Whether `destroy` has run.
	fn destroyed(&self) -> bool;
}

#[wasm_bindgen]
extern "C" {
	/// Browser-global renderer class owning layout and gestures for one
	/// mounted graph.
	#[wasm_bindgen(js_namespace = G6, js_name = Graph)]
	type JsGraph;

	#[wasm_bindgen(constructor, js_namespace = G6, js_class = "Graph")]
	fn new(init: &JsValue) -> JsGraph;

	#[wasm_bindgen(method, js_class = "Graph", js_name = setOptions)]
	fn set_options(this: &JsGraph, options: &JsValue);

	#[wasm_bindgen(method, js_class = "Graph")]
	fn render(this: &JsGraph) -> js_sys::Promise;

	#[wasm_bindgen(method, js_class = "Graph")]
	fn destroy(this: &JsGraph);

	#[wasm_bindgen(method, getter, js_class = "Graph")]
	fn destroyed(this: &JsGraph) -> bool;
}

fn js_error_message(reason: &JsValue) -> String {
	reason
		.dyn_ref::<js_sys::Error>()
		.map(|error| String::from(error.message()))
		.unwrap_or_else(|| format!("{reason:?}"))
}

/// Production [`Engine`] backed by the browser-side renderer.
///
/// Options cross the boundary as JSON: the bundle is serialized with serde
/// and re-parsed into a plain object on the JS side, so the engine never
/// sees wasm-specific values.
pub struct G6Engine {
	raw: JsGraph,
}

impl G6Engine {
	/// Construct an engine instance bound to the given container element.
	pub fn attach(container: &HtmlElement) -> Self {
		let init = js_sys::Object::new();
		let _ = js_sys::Reflect::set(&init, &JsValue::from_str("container"), container.as_ref());
		Self {
			raw: JsGraph::new(&init.into()),
		}
	}
}

impl Engine for G6Engine {
	fn set_options(&self, options: &GraphOptions) -> Result<(), EngineError> {
		let json = serde_json::to_string(options)
			.map_err(|error| EngineError::Options(error.to_string()))?;
		let wire = js_sys::JSON::parse(&json)
			.map_err(|reason| EngineError::Options(js_error_message(&reason)))?;
		self.raw.set_options(&wire);
		Ok(())
	}

	fn render(&self, done: RenderDone) {
		let pass = JsFuture::from(self.raw.render());
		spawn_local(async move {
			match pass.await {
				Ok(_) => done(Ok(())),
				Err(reason) => done(Err(EngineError::Render(js_error_message(&reason)))),
			}
		});
	}

	fn destroy(&self) {
		self.raw.destroy();
	}

	fn destroyed(&self) -> bool {
		self.raw.destroyed()
	}
}
