#![cfg_attr(doc, doc = include_str!("../README.md"))]
//! Dimensioned quantities with unit-checked arithmetic

mod config;
pub mod constants;
mod error;
mod field;
mod graph;
pub mod materials;
mod meta;
mod operand;
mod quantity;

pub use config::Config;
pub use error::{ConfigError, ValueError};
pub use field::{FieldKind, FieldTag, fields_docs};
pub use graph::{ComputationGraph, DType, Graph, Placeholder, TensorShape};
pub use meta::AsQuantity;
pub use operand::{Comparison, Operand};
pub use quantity::{Quantity, QuantitySeed, QuantityState, compare_magnitudes};
