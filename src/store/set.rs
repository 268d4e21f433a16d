// Stopset
//
// Stop-word list loading and lookup for text processing pipelines
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use hashbrown::HashSet;

use super::error::StoreError;
use super::resource::DataResource;
use crate::lexer::line::LexerLine;

/// In-memory set of stop words, populated from list files or byte streams.
///
/// Loading normalizes entries (first token of each line, trimmed, \
///   lower-cased); querying matches verbatim, so callers wanting \
///   case-insensitive lookups lower-case their side. Loading is additive and \
///   single-threaded; only share the store across threads once all loads are \
///   done.
pub struct StopWordStore {
    entries: HashSet<String>,
}

impl StopWordStore {
    pub fn new() -> StopWordStore {
        StopWordStore {
            entries: HashSet::new(),
        }
    }

    /// Creates a store and loads the given list files, in order.
    ///
    /// The first file that fails to open or read aborts the remainder.
    pub fn from_files<P: AsRef<Path>>(paths: &[P]) -> Result<StopWordStore, StoreError> {
        let mut store = StopWordStore::new();

        for path in paths {
            store.load_file(path)?;
        }

        Ok(store)
    }

    /// Loads a stop-word list file (UTF-8 text).
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), StoreError> {
        let path = path.as_ref();

        debug!("loading stop-word file: {}", path.display());

        let file = File::open(path).map_err(|err| StoreError::Open {
            path: path.to_path_buf(),
            source: err,
        })?;

        // Handle is released when the stream loader returns (on any path)
        self.load(file)
    }

    /// Loads stop words from a UTF-8 byte stream.
    ///
    /// One entry candidate per line; only the first token of a line is \
    ///   significant (whitespace and '|' both separate, the rest of the line \
    ///   is a comment). Entries are lower-cased on the way in and duplicates \
    ///   collapse. Lines are streamed one at a time, so sources of any \
    ///   length are accepted.
    pub fn load<R: Read>(&mut self, stream: R) -> Result<(), StoreError> {
        let reader = BufReader::new(stream);
        let size_before = self.entries.len();

        for line in reader.lines() {
            let line = line?;

            if let Some(token) = LexerLine::first_token(&line) {
                self.entries.insert(token.to_lowercase());
            }
        }

        debug!(
            "loaded {} new stop-words (total: {})",
            self.entries.len() - size_before,
            self.entries.len()
        );

        Ok(())
    }

    /// Loads stop words from an externally-managed resource handle.
    pub fn load_resource(&mut self, resource: &dyn DataResource) -> Result<(), StoreError> {
        self.load(resource.open_stream()?)
    }

    /// Tests exact membership (the query is not normalized).
    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains(word)
    }

    /// Counts distinct entries.
    pub fn size(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over entries, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Returns a read-only view of the entries.
    pub fn data(&self) -> &HashSet<String> {
        &self.entries
    }
}

impl Default for StopWordStore {
    fn default() -> StopWordStore {
        StopWordStore::new()
    }
}


#[cfg(all(feature = "benchmark", test))]
mod benches {
    extern crate test;

    use test::Bencher;

    use super::*;

    fn make_store() -> StopWordStore {
        let mut store = StopWordStore::new();

        store
            .load("the\nand\nis\nof\nto\nin\nthat\nit\nwith\nas\n".as_bytes())
            .unwrap();

        store
    }

    #[bench]
    fn bench_contains_found(b: &mut Bencher) {
        let store = make_store();

        b.iter(|| store.contains("the"));
    }

    #[bench]
    fn bench_contains_not_found(b: &mut Bencher) {
        let store = make_store();

        b.iter(|| store.contains("fox"));
    }

    #[bench]
    fn bench_load_small_stream(b: &mut Bencher) {
        b.iter(|| {
            let mut store = StopWordStore::new();

            store
                .load("the\nand\nis\nof\nto\n".as_bytes())
                .unwrap();

            store.size()
        });
    }
}
