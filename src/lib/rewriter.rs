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
use crate::helpers::*;
use crate::types::*;
use std::path::Path;

use log::{info, warn};

impl Rewriter {
    /// Initializes a new Rewriter for the project file at `path`. Pass an absolute path,
    /// a relative one is resolved against whatever the working directory is at `read()` time.
    pub fn new<P: AsRef<Path>>(path: P) -> Rewriter {
        Rewriter {
            path: path.as_ref().to_path_buf(),
            config_text: None,
            replacements: None,
        }
    }

    /// Initializes a new Rewriter from a ConfigText that's already in memory. Useful for testing
    pub fn from_config_text(config_text: ConfigText) -> Rewriter {
        Rewriter {
            path: config_text.path.clone(),
            config_text: Some(config_text),
            replacements: None,
        }
    }

    /// Reads the project file of the Rewriter that's passed into the method
    ///
    /// # Errors
    ///
    /// * See [read_config](crate::helpers::read_config)
    pub fn read(&mut self) -> Result<&mut Rewriter, Error> {
        self.config_text = Some(read_config(&self.path)?);
        Ok(self)
    }

    /// Replaces all occurrences of `substitution.from()` in the ConfigText read before
    ///
    /// # Errors
    ///
    /// * If you try to call this method without reading the file first via
    ///   (self.read)[crate::rewriter::Rewriter::read]
    pub fn substitute(&mut self, substitution: &Substitution) -> Result<&mut Rewriter, Error> {
        let config_text = match self.config_text.take() {
            Some(config_text) => config_text,
            None => {
                return Err(Error::TooLittleInfo(
                    "Can't substitute without reading the project file first!".to_string(),
                ))
            }
        };

        let (inner, count) = substitution.apply(&config_text.inner);

        if count == 0 {
            warn!(
                "Didn't find '{}' in {}, leaving its content as is",
                substitution.from(),
                config_text.path.display()
            );
        } else {
            info!(
                "Replaced {} occurrence(s) of '{}' with '{}'",
                count,
                substitution.from(),
                substitution.to()
            );
        }

        self.config_text = Some(ConfigText {
            path: config_text.path,
            inner,
        });
        self.replacements = Some(self.replacements.unwrap_or(0) + count);

        Ok(self)
    }

    /// Writes the (substituted) ConfigText back to where it was read from
    ///
    /// # Errors
    ///
    /// * If there's nothing to write because the file hasn't been read yet
    /// * See [write_config](crate::helpers::write_config)
    pub fn write(&self) -> Result<Outcome, Error> {
        let config_text = match self.config_text.as_ref() {
            Some(config_text) => config_text,
            None => {
                return Err(Error::TooLittleInfo(
                    "Can't write the project file without reading it first!".to_string(),
                ))
            }
        };

        write_config(config_text)?;

        Ok(Outcome {
            path: config_text.path.clone(),
            replacements: self.replacements.unwrap_or(0),
        })
    }
}

/// Convenience function that reads the project file at `path`, replaces the bundle
/// identifier and writes it back, in that order.
///
/// The file is rewritten even if nothing was replaced.
///
/// # Errors
///
/// * See [read_config](crate::helpers::read_config) and [write_config](crate::helpers::write_config)
pub fn fix_bundle_id(path: &Path, substitution: &Substitution) -> Result<Outcome, Error> {
    Rewriter::new(path).read()?.substitute(substitution)?.write()
}
