#![cfg_attr(doc, doc = include_str!("../README.md"))]
//! Units, dimensions and unit conversions for dimensioned quantities

pub mod builtin;
mod convert;
mod dimension;
mod error;
mod registry;
mod unit;
pub mod units;
mod util;

pub use convert::{convert, to_base_units, to_compact, to_reduced_units};
pub use dimension::{Dimension, DimensionMap};
pub use error::{UnitError, describe};
pub use registry::{UnitRegistry, registry};
pub use unit::{NamedUnit, Prefix, Unit, UnitTerm};
pub use util::{is_close, is_relatively_close};
