//This file is part of bundlefix
//
//bundlefix is free software: you can redistribute it and/or modify
//it under the terms of the GNU General Public License as published by
//the Free Software Foundation, either version 3 of the License, or
//(at your option) any later version.
//
//bundlefix is distributed in the hope that it will be useful,
//but WITHOUT ANY WARRANTY; without even the implied warranty of
//MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//GNU General Public License for more details.
//
//You should have received a copy of the GNU General Public License
//along with bundlefix.  If not, see <http://www.gnu.org/licenses/>.

use crate::errors::Error;
use crate::types::*;
use log::{debug, info};
use regex::{NoExpand, Regex};
use std::fs::File;
use std::io::prelude::*;
use std::path::{Path, PathBuf};

/// Loads the built-in project path and bundle identifiers from `data.toml`
///
/// # Errors
///
/// * Errors out if the embedded `data.toml` can't be deserialized
pub fn load_defaults() -> Result<Defaults, Error> {
    let data: TomlData = toml::from_str(include_str!("data.toml"))?;

    Ok(Defaults {
        project_path: PathBuf::from(data.project.path),
        from: data.bundle_id.from,
        to: data.bundle_id.to,
    })
}

impl Substitution {
    /// Compiles `from` into a pattern that only ever matches `from` literally.
    ///
    /// # Errors
    ///
    /// * Errors out if `from` is empty, since it would match between every character
    /// * Errors out if the escaped pattern can't be compiled
    pub fn new(from: &str, to: &str) -> Result<Substitution, Error> {
        if from.is_empty() {
            return Err(Error::Pattern(
                "Refusing to replace an empty bundle identifier!".to_string(),
            ));
        }

        let pattern = Regex::new(&regex::escape(from))?;

        debug!("Compiled pattern: {}", pattern.as_str());

        Ok(Substitution {
            from: from.to_owned(),
            to: to.to_owned(),
            pattern,
        })
    }

    /// The bundle identifier that gets replaced
    pub fn from(&self) -> &str {
        &self.from
    }

    /// What it gets replaced with
    pub fn to(&self) -> &str {
        &self.to
    }

    /// Replaces every non-overlapping occurrence of `self.from` in `input`, scanning left
    /// to right, and returns the new string together with the number of replacements.
    pub fn apply(&self, input: &str) -> (String, usize) {
        let count = self.pattern.find_iter(input).count();

        // `to` is a literal, `$1` and friends must not be expanded
        let output = self.pattern.replace_all(input, NoExpand(self.to.as_str()));

        (output.into_owned(), count)
    }
}

/// Reads the whole file at `path` into memory as UTF-8
///
/// # Errors
///
/// * `Error::FileNotFound` if `path` doesn't exist
/// * `Error::PermissionDenied` if we may not read it
/// * `Error::Decode` if it isn't valid UTF-8
pub fn read_config(path: &Path) -> Result<ConfigText, Error> {
    let mut inner = String::new();

    {
        let mut file = File::open(path).map_err(|e| Error::from_io(path, &e))?;
        file.read_to_string(&mut inner).map_err(|e| Error::from_io(path, &e))?;
    }

    debug!("Read {} bytes from {}", inner.len(), path.display());

    Ok(ConfigText {
        path: path.to_path_buf(),
        inner,
    })
}

/// Overwrites the file at `text.path` with `text.inner`. The old content is gone
/// afterwards; nothing is backed up and the write isn't atomic.
///
/// # Errors
///
/// * `Error::PermissionDenied` if we may not write to the file
/// * `Error::Io` if the write itself fails, e.g. because the disk is full
pub fn write_config(text: &ConfigText) -> Result<(), Error> {
    let mut file = File::create(&text.path).map_err(|e| Error::from_io(&text.path, &e))?;
    file.write_all(text.inner.as_bytes()).map_err(|e| Error::from_io(&text.path, &e))?;
    file.flush().map_err(|e| Error::from_io(&text.path, &e))?;

    info!("Wrote {}", text.path.display());

    Ok(())
}
