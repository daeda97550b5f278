//! Document model: the [`node::Node`] tree and conversion from parsed
//! YAML/JSON values.

pub mod node;
pub mod parser;
