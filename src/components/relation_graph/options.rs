//! Render configuration applied to the engine.
//!
//! One immutable bundle per render request: canvas dimensions, the dataset,
//! the layout selector, and the enabled interaction set. Updates replace the
//! whole bundle rather than mutating it in place.

use serde::{Deserialize, Serialize};

use super::types::GraphDataset;

/// Layout algorithm the engine runs over the dataset.
///
/// Serialized as the engine's tagged wire object, e.g.
/// `{"type": "combo-combined"}`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum LayoutKind {
	/// Combo-aware force layout: combos are positioned as rigid units, then
	/// members are arranged inside each combo.
	#[default]
	ComboCombined,
	/// Plain force-directed layout, ignoring combo membership.
	Force,
	/// Layered layout for mostly-acyclic relationship data.
	Dagre,
}

/// A named interaction capability enabled on the engine instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Behavior {
	/// Drag the canvas background to pan.
	DragCanvas,
	/// Scroll to zoom.
	ZoomCanvas,
	/// Drag individual nodes and combos.
	DragElement,
	/// Click to select elements.
	ClickSelect,
	/// Click a combo to collapse or expand it.
	CollapseExpand,
}

impl Behavior {
	/// The full interaction set, in registration order.
	pub fn all() -> Vec<Behavior> {
		vec![
			Behavior::DragCanvas,
			Behavior::ZoomCanvas,
			Behavior::DragElement,
			Behavior::ClickSelect,
			Behavior::CollapseExpand,
		]
	}
}

/// Everything the engine needs for one render pass.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GraphOptions {
	/// Canvas width in pixels.
	pub width: u32,
	/// Canvas height in pixels.
	pub height: u32,
	/// Entities to lay out and draw.
	pub data: GraphDataset,
	/// Layout algorithm selector.
	pub layout: LayoutKind,
	/// Interactions enabled on the mounted instance, in registration order.
	pub behaviors: Vec<Behavior>,
}

impl Default for GraphOptions {
	fn default() -> Self {
		Self {
			width: 800,
			height: 600,
			data: GraphDataset::default(),
			layout: LayoutKind::default(),
			behaviors: Behavior::all(),
		}
	}
}
