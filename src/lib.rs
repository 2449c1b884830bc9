//! party-graph: Interactive customer and account relationship visualization.
//!
//! This crate renders parties, their accounts, and the relationships between
//! them as a node-link graph with collapsible per-customer groupings. Layout,
//! drawing, and gestures are delegated to an external rendering engine; the
//! crate owns the engine's lifecycle and the data plumbing around it.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info};

pub mod components;
pub mod fixture;

pub use components::relation_graph::{
	Behavior, Engine, EngineError, G6Engine, GraphCombo, GraphDataset, GraphEdge, GraphHost,
	GraphNode, GraphOptions, LayoutKind, RelationGraph,
};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("party-graph: logging initialized");
}

/// Main application component.
/// Builds the demo configuration once and renders the relationship graph.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let options = fixture::demo_options();
	let options_signal = Signal::derive(move || options.clone());

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Party Relationship Graph" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="graph-page">
			<RelationGraph options=options_signal />
			<div class="graph-overlay">
				<h1>"Party Relationships"</h1>
				<p class="subtitle">
					"Drag to pan, scroll to zoom. Click a customer group to collapse it."
				</p>
			</div>
		</div>
	}
}
