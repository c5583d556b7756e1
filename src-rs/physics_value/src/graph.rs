//! Placeholders in an external computation graph
//!
//! A quantity can stand for an input slot of a machine-learning graph. The
//! [`Graph`] trait is the seam to that graph. [`ComputationGraph`] is the
//! in-process implementation, which only keeps track of placeholders.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::Config;

/// The element type of a placeholder
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DType {
    /// 32-bit floats
    #[default]
    Float32,
    /// 64-bit floats
    Float64,
}

/// The shape of a placeholder, where `None` is a dimension of unknown size.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TensorShape(Vec<Option<usize>>);

impl TensorShape {
    /// Creates a shape from its dimensions.
    #[must_use]
    pub fn new(dims: impl IntoIterator<Item = Option<usize>>) -> Self {
        Self(dims.into_iter().collect())
    }

    /// The number of dimensions.
    #[must_use]
    pub fn rank(&self) -> usize {
        self.0.len()
    }

    /// The dimensions of the shape.
    #[must_use]
    pub fn dims(&self) -> &[Option<usize>] {
        &self.0
    }
}

impl Default for TensorShape {
    /// A single column with a batch dimension of unknown size.
    fn default() -> Self {
        Self(vec![None, Some(1)])
    }
}

impl fmt::Display for TensorShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (index, dim) in self.0.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            match dim {
                Some(size) => write!(f, "{size}")?,
                None => write!(f, "?")?,
            }
        }
        write!(f, ")")
    }
}

/// An input slot in a computation graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placeholder {
    name: String,
    shape: TensorShape,
    dtype: DType,
}

impl Placeholder {
    /// Creates a new placeholder.
    #[must_use]
    pub fn new(name: impl Into<String>, shape: TensorShape, dtype: DType) -> Self {
        Self {
            name: name.into(),
            shape,
            dtype,
        }
    }

    /// The name of the operation that produces the placeholder.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The name of the placeholder's output tensor, e.g. `bias:0`.
    #[must_use]
    pub fn tensor_name(&self) -> String {
        format!("{}:0", self.name)
    }

    /// The shape of the placeholder.
    #[must_use]
    pub const fn shape(&self) -> &TensorShape {
        &self.shape
    }

    /// The element type of the placeholder.
    #[must_use]
    pub const fn dtype(&self) -> DType {
        self.dtype
    }
}

/// A computation graph that quantities can register placeholders in.
pub trait Graph {
    /// Registers a placeholder with the given name.
    ///
    /// The graph may rename the placeholder to keep names unique. When no
    /// shape is given, the graph picks its default shape. Returns `None` if
    /// the graph does not accept placeholders.
    fn placeholder(&mut self, name: &str, shape: Option<TensorShape>) -> Option<Placeholder>;

    /// Looks up a placeholder by its tensor name, e.g. `bias:0`.
    fn tensor_by_name(&self, tensor_name: &str) -> Option<Placeholder>;
}

/// An in-process computation graph that records placeholders by name.
#[derive(Debug, Clone, Default)]
pub struct ComputationGraph {
    config: Config,
    placeholders: IndexMap<String, Placeholder>,
}

impl ComputationGraph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config,
            placeholders: IndexMap::new(),
        }
    }

    /// The configuration of the graph.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// The registered placeholders, in registration order.
    pub fn placeholders(&self) -> impl Iterator<Item = &Placeholder> {
        self.placeholders.values()
    }

    /// The number of registered placeholders.
    #[must_use]
    pub fn len(&self) -> usize {
        self.placeholders.len()
    }

    /// Checks whether no placeholder has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.placeholders.is_empty()
    }

    fn unique_name(&self, name: &str) -> String {
        if !self.placeholders.contains_key(name) {
            return name.to_string();
        }

        (1..)
            .map(|suffix| format!("{name}_{suffix}"))
            .find(|candidate| !self.placeholders.contains_key(candidate))
            .unwrap_or_else(|| name.to_string())
    }
}

impl Graph for ComputationGraph {
    fn placeholder(&mut self, name: &str, shape: Option<TensorShape>) -> Option<Placeholder> {
        if !self.config.placeholders_enabled {
            debug!(name, "placeholders are disabled, not registering");
            return None;
        }

        let unique_name = self.unique_name(name);
        let shape = shape.unwrap_or_else(|| self.config.default_shape.clone());
        let placeholder = Placeholder::new(unique_name.clone(), shape, self.config.dtype);

        debug!(
            name = %unique_name,
            shape = %placeholder.shape(),
            "registered placeholder"
        );
        self.placeholders.insert(unique_name, placeholder.clone());

        Some(placeholder)
    }

    fn tensor_by_name(&self, tensor_name: &str) -> Option<Placeholder> {
        let name = tensor_name.strip_suffix(":0")?;
        self.placeholders.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_shape_is_single_column() {
        let shape = TensorShape::default();

        assert_eq!(shape, TensorShape::new([None, Some(1)]));
        assert_eq!(shape.rank(), 2);
        assert_eq!(shape.to_string(), "(?, 1)");
    }

    #[test]
    fn placeholder_uses_config_defaults() {
        let mut graph = ComputationGraph::default();

        let placeholder = graph
            .placeholder("bias", None)
            .expect("placeholders are enabled by default");

        assert_eq!(placeholder.name(), "bias");
        assert_eq!(placeholder.tensor_name(), "bias:0");
        assert_eq!(placeholder.shape(), &TensorShape::default());
        assert_eq!(placeholder.dtype(), DType::Float32);
    }

    #[test]
    fn duplicate_names_are_made_unique() {
        let mut graph = ComputationGraph::default();

        let names: Vec<_> = std::iter::repeat_with(|| graph.placeholder("x", None))
            .take(3)
            .flatten()
            .map(|placeholder| placeholder.name().to_string())
            .collect();

        assert_eq!(names, ["x", "x_1", "x_2"]);
        assert_eq!(graph.len(), 3);
    }

    #[test]
    fn lookup_by_tensor_name() {
        let mut graph = ComputationGraph::default();
        let shape = TensorShape::new([None, Some(3)]);
        let placeholder = graph
            .placeholder("gate", Some(shape))
            .expect("placeholders are enabled by default");

        assert_eq!(graph.tensor_by_name("gate:0"), Some(placeholder));
        assert_eq!(graph.tensor_by_name("gate"), None);
        assert_eq!(graph.tensor_by_name("other:0"), None);
    }

    #[test]
    fn disabled_placeholders_are_not_registered() {
        let config = Config {
            placeholders_enabled: false,
            ..Config::default()
        };
        let mut graph = ComputationGraph::new(config);

        assert!(graph.placeholder("bias", None).is_none());
        assert!(graph.is_empty());
    }
}
