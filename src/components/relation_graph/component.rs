//! Leptos component wrapping the engine lifecycle.
//!
//! The component renders the container element and drives the lifecycle
//! host from the framework's hooks: an effect mounts the engine once the
//! element appears and re-applies the options bundle whenever it changes,
//! and the cleanup hook tears the instance down when the component leaves
//! the tree. Everything visual happens inside the engine.

use std::rc::Rc;

use leptos::prelude::*;
use web_sys::HtmlDivElement;

use super::engine::G6Engine;
use super::host::GraphHost;
use super::options::GraphOptions;

/// Renders an interactive relationship graph into a container element.
///
/// Pass the configuration via the reactive `options` signal; every change
/// re-applies it to the mounted engine and triggers a fresh render pass.
/// `on_render` fires with the live engine after each successful pass,
/// `on_destroy` once after the instance is destroyed on unmount.
#[component]
pub fn RelationGraph(
	/// Configuration applied on mount and re-applied on every change.
	#[prop(into)]
	options: Signal<GraphOptions>,
	/// Fired with the live engine after each successful render pass.
	#[prop(optional)]
	on_render: Option<Rc<dyn Fn(&G6Engine)>>,
	/// Fired once after the engine instance is destroyed.
	#[prop(optional)]
	on_destroy: Option<Rc<dyn Fn()>>,
) -> impl IntoView {
	let container_ref = NodeRef::<leptos::html::Div>::new();

	let mut host = GraphHost::new();
	if let Some(on_render) = on_render {
		host = host.on_render(move |engine: &G6Engine| on_render(engine));
	}
	if let Some(on_destroy) = on_destroy {
		host = host.on_teardown(move || on_destroy());
	}

	let effect_host = host.clone();
	Effect::new(move |_| {
		let options = options.get();
		let Some(container) = container_ref.get() else {
			return;
		};
		let container: HtmlDivElement = container.into();
		if !effect_host.is_mounted() {
			effect_host.mount(G6Engine::attach(&container));
		}
		effect_host.apply_options(&options);
	});

	// on_cleanup needs a Send closure and the host holds JS handles, so the
	// host stays in thread-local storage and only the arena key crosses the
	// bound.
	let cleanup_host = StoredValue::new_local(host);
	on_cleanup(move || {
		let _ = cleanup_host.try_with_value(|host| host.teardown());
	});

	view! {
		<div
			node_ref=container_ref
			class="relation-graph"
			style:width=move || format!("{}px", options.get().width)
			style:height=move || format!("{}px", options.get().height)
		/>
	}
}
