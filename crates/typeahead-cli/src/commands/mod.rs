pub mod complete_ops;
pub mod config_ops;
pub mod demo;
pub mod serve_ops;
pub mod stats;

use std::path::Path;

use typeahead_engine::typeahead_core::vocab::{self, VocabError, Vocabulary};

/// Vocabulary from `path`, or the reference vocabulary when none is given.
pub fn load_vocabulary(path: Option<&str>) -> Result<Vocabulary, VocabError> {
    match path {
        Some(p) => vocab::load_file(Path::new(p)),
        None => Ok(Vocabulary::reference()),
    }
}
