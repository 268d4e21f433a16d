// Stopset
//
// Stop-word list loading and lookup for text processing pipelines
// License: Mozilla Public License v2.0 (MPL v2.0)

pub mod line;
