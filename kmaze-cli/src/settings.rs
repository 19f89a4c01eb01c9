use std::{fs, path::Path};

use kmaze::MazeSpec;
use ron::{self, extensions::Extensions};

use crate::Error;

/// Reads a [`MazeSpec`] from a ron file, e.g. `(size: (20, 10), seed: 42)`.
pub fn load_spec(path: &Path) -> Result<MazeSpec, Error> {
    let string = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_owned(),
        source,
    })?;

    parse_spec(&string).map_err(|source| Error::Spec {
        path: path.to_owned(),
        source,
    })
}

pub fn parse_spec(string: &str) -> Result<MazeSpec, ron::error::SpannedError> {
    let options = ron::Options::default().with_default_extension(Extensions::IMPLICIT_SOME);
    options.from_str(string)
}
