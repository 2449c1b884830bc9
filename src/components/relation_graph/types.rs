//! Graph dataset structures handed to the rendering engine.
//!
//! Three entity collections (nodes, edges, combos), each mixing the fields
//! the engine understands with free-form business attributes that pass
//! through untouched. Serde renames pin the engine's wire field names.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Free-form domain attributes attached to an entity.
///
/// Customers, accounts, and relationships each carry a different set of
/// business fields, so this stays an open string-keyed map rather than a
/// fixed struct. The host never interprets these values.
pub type DomainAttributes = Map<String, Value>;

/// Shape the engine draws for a node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeShape {
	/// Circular marker. Every entity in the demo dataset uses this.
	#[default]
	Circle,
	/// Rectangular marker.
	Rect,
	/// Elliptical marker.
	Ellipse,
}

/// Display style attached to a node.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct NodeStyle {
	/// Text rendered beside the node.
	#[serde(rename = "labelText", skip_serializing_if = "Option::is_none")]
	pub label_text: Option<String>,
}

/// A node in the graph: a customer or an account.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GraphNode {
	/// Unique identifier for this node. Used to reference nodes in edges.
	pub id: String,
	/// Shape kind, wire name `type`.
	#[serde(rename = "type", default)]
	pub shape: NodeShape,
	/// Display style.
	#[serde(default)]
	pub style: NodeStyle,
	/// Business fields forwarded to the engine unchanged.
	#[serde(default)]
	pub data: DomainAttributes,
	/// Id of the combo grouping this node, if any. Must name an entry in the
	/// dataset's `combos` collection.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub combo: Option<String>,
	/// Informational member count reported by the upstream data source.
	#[serde(rename = "nodeCount", default)]
	pub node_count: u32,
}

/// A labeled relationship between two nodes.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GraphEdge {
	/// Unique identifier for this edge.
	pub id: String,
	/// Source node ID.
	pub source: String,
	/// Target node ID.
	pub target: String,
	/// Relationship label rendered on the edge (e.g. `HAS_ACCOUNT`).
	#[serde(default)]
	pub label: String,
	/// Relationship fields (timestamps, relation codes) forwarded unchanged.
	#[serde(default)]
	pub data: DomainAttributes,
}

/// Display style attached to a combo.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ComboStyle {
	/// Whether the combo starts out collapsed.
	#[serde(default)]
	pub collapsed: bool,
}

/// A collapsible container clustering a customer with its account nodes.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GraphCombo {
	/// Unique identifier, referenced by node `combo` fields.
	pub id: String,
	/// Business fields forwarded to the engine unchanged.
	#[serde(default)]
	pub data: DomainAttributes,
	/// Display style.
	#[serde(default)]
	pub style: ComboStyle,
	/// Informational member count reported by the upstream data source.
	#[serde(rename = "nodeCount", default)]
	pub node_count: u32,
}

/// Complete graph dataset: nodes, edges, and combos.
///
/// Referential integrity (edge endpoints, combo references) is the data
/// supplier's contract; this layer forwards the collections as-is.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct GraphDataset {
	pub nodes: Vec<GraphNode>,
	pub edges: Vec<GraphEdge>,
	pub combos: Vec<GraphCombo>,
}
