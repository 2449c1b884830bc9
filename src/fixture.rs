//! Embedded demo dataset: two customers with linked accounts.
//!
//! The dataset ships inside the binary, so building the configuration reads
//! no external input and repeated calls return identical bundles.

use log::{info, warn};

use crate::components::relation_graph::{Behavior, GraphDataset, GraphOptions, LayoutKind};

static FIXTURE_JSON: &str = include_str!("fixture.json");

/// Parse the embedded dataset, logging the entity counts.
///
/// Falls back to the empty dataset with a warning if the embedded document
/// no longer parses; the graph then renders empty instead of tearing down
/// the page.
pub fn demo_dataset() -> GraphDataset {
	match serde_json::from_str::<GraphDataset>(FIXTURE_JSON) {
		Ok(data) => {
			info!(
				"party-graph: fixture holds {} nodes, {} edges, {} combos",
				data.nodes.len(),
				data.edges.len(),
				data.combos.len()
			);
			data
		}
		Err(error) => {
			warn!("party-graph: embedded fixture failed to parse: {error}");
			GraphDataset::default()
		}
	}
}

/// Build the demo render configuration: the embedded dataset at 800x600,
/// the combo-aware layout, and the full interaction set.
pub fn demo_options() -> GraphOptions {
	GraphOptions {
		width: 800,
		height: 600,
		data: demo_dataset(),
		layout: LayoutKind::ComboCombined,
		behaviors: Behavior::all(),
	}
}
