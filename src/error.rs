use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FixError {
    #[error("input contains no lines")]
    EmptyInput,

    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
