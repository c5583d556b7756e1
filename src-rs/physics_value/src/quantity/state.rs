//! Serialization of quantities
//!
//! A quantity serializes the tensor name of its placeholder, never the
//! placeholder itself. Deserializing needs the graph to look the
//! placeholder up again, so it goes through [`QuantitySeed`].

use serde::{Deserialize, Deserializer, Serialize, Serializer, de::DeserializeSeed};
use tracing::warn;

use physics_units::Unit;

use super::Quantity;
use crate::graph::Graph;

/// The serialized form of a [`Quantity`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuantityState {
    /// The magnitude, in `unit`
    pub magnitude: f64,
    /// The unit of the quantity
    #[serde(default)]
    pub unit: Unit,
    /// The name of the quantity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The tensor name of the placeholder the quantity stands for
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tensor: Option<String>,
}

impl Serialize for Quantity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.state().serialize(serializer)
    }
}

/// Deserializes a [`Quantity`], rebinding its placeholder from a graph.
///
/// ```
/// use serde::de::DeserializeSeed;
/// use physics_value::{ComputationGraph, Graph, QuantitySeed};
///
/// let mut graph = ComputationGraph::default();
/// graph.placeholder("bias", None);
///
/// let json = r#"{"magnitude": 0.7, "unit": [], "name": "bias", "tensor": "bias:0"}"#;
/// let mut deserializer = serde_json::Deserializer::from_str(json);
/// let bias = QuantitySeed::new(&graph).deserialize(&mut deserializer)?;
///
/// assert_eq!(bias.tensor()?.name(), "bias");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct QuantitySeed<'graph, G: Graph + ?Sized> {
    graph: &'graph G,
}

impl<'graph, G: Graph + ?Sized> QuantitySeed<'graph, G> {
    /// Creates a seed that looks placeholders up in the given graph.
    #[must_use]
    pub const fn new(graph: &'graph G) -> Self {
        Self { graph }
    }
}

impl<'de, G: Graph + ?Sized> DeserializeSeed<'de> for QuantitySeed<'_, G> {
    type Value = Quantity;

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        let state = QuantityState::deserialize(deserializer)?;
        Ok(restore(state, self.graph))
    }
}

pub fn restore<G: Graph + ?Sized>(state: QuantityState, graph: &G) -> Quantity {
    let placeholder = state.tensor.as_deref().and_then(|tensor| {
        let placeholder = graph.tensor_by_name(tensor);
        if placeholder.is_none() {
            warn!(
                tensor,
                "placeholder not found in graph, leaving quantity unbound"
            );
        }
        placeholder
    });

    Quantity {
        magnitude: state.magnitude,
        unit: state.unit,
        name: state.name,
        placeholder,
    }
}

#[cfg(test)]
mod tests {
    use physics_units::{
        builtin::{MILLI, VOLT},
        units,
    };

    use super::*;
    use crate::{error::ValueError, graph::ComputationGraph};

    #[test]
    fn state_holds_tensor_name() {
        let mut graph = ComputationGraph::default();
        let bias = Quantity::named_in(0.7, units::volt(), "bias", &mut graph, None);

        let state = bias.state();

        assert_eq!(state.name.as_deref(), Some("bias"));
        assert_eq!(state.tensor.as_deref(), Some("bias:0"));
    }

    #[test]
    fn json_round_trip_rebinds_placeholder() {
        let mut graph = ComputationGraph::default();
        let bias = Quantity::named_in(
            700.0,
            units::prefixed(&MILLI, &VOLT),
            "bias",
            &mut graph,
            None,
        );

        let json = serde_json::to_string(&bias).expect("quantities serialize");
        let mut deserializer = serde_json::Deserializer::from_str(&json);
        let restored = QuantitySeed::new(&graph)
            .deserialize(&mut deserializer)
            .expect("state deserializes");

        assert_eq!(restored, bias);
        assert_eq!(restored.unit(), bias.unit());
        assert_eq!(restored.name(), Some("bias"));
        assert_eq!(restored.tensor(), bias.tensor());
    }

    #[test]
    fn unknown_placeholder_leaves_quantity_unbound() {
        let mut graph = ComputationGraph::default();
        let bias = Quantity::named_in(1.0, units::volt(), "bias", &mut graph, None);

        let restored = Quantity::from_state(bias.state(), &ComputationGraph::default());

        assert_eq!(restored, bias);
        assert_eq!(
            restored.tensor(),
            Err(ValueError::NotBound {
                name: "bias".to_string()
            })
        );
    }

    #[test]
    fn unbound_quantity_has_no_tensor_field() {
        let voltage = Quantity::new(1.0, units::volt());

        let json = serde_json::to_value(&voltage).expect("quantities serialize");

        assert!(json.get("tensor").is_none());
        assert!(json.get("name").is_none());
        assert_eq!(json.get("magnitude"), Some(&serde_json::json!(1.0)));
    }
}
