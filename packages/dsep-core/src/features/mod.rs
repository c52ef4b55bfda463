//! Feature modules
//!
//! graph → path_enumeration → separation, with network bundling the input.

pub mod graph;
pub mod network;
pub mod path_enumeration;
pub mod separation;
