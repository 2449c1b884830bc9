//! Relationship graph component: customers, accounts, and the links between
//! them, grouped into collapsible per-customer combos.
//!
//! The component owns exactly one external engine instance per mount:
//! - created when the container element appears,
//! - reconfigured (and re-rendered) on every options change,
//! - destroyed deterministically on unmount.
//!
//! Layout, drawing, hit-testing, and gestures are the engine's job; this
//! module only sequences its lifecycle. The [`Engine`] trait is the seam
//! between the sequencing logic and the browser-side renderer.
//!
//! # Example
//!
//! ```ignore
//! use party_graph::{RelationGraph, fixture};
//!
//! let options = fixture::demo_options();
//! let options = Signal::derive(move || options.clone());
//!
//! view! { <RelationGraph options=options /> }
//! ```

mod component;
mod engine;
mod host;
mod options;
mod types;

pub use component::RelationGraph;
pub use engine::{Engine, EngineError, G6Engine, RenderDone};
pub use host::GraphHost;
pub use options::{Behavior, GraphOptions, LayoutKind};
pub use types::{
	ComboStyle, DomainAttributes, GraphCombo, GraphDataset, GraphEdge, GraphNode, NodeShape,
	NodeStyle,
};
