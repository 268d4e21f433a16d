// Stopset
//
// Stop-word list loading and lookup for text processing pipelines
// License: Mozilla Public License v2.0 (MPL v2.0)

#![cfg_attr(feature = "benchmark", feature(test))]
#![deny(unstable_features, unused_imports, unused_qualifications, clippy::all)]

#[macro_use]
extern crate log;

mod lexer;
pub mod store;

pub use crate::store::error::StoreError;
pub use crate::store::resource::{DataResource, FileDataResource};
pub use crate::store::set::StopWordStore;
