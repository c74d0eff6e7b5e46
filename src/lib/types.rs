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

use regex::Regex;
use serde_derive::Deserialize;
use std::path::PathBuf;

/// The Rewriter struct, which is used to rewrite a [ConfigText](crate::types::ConfigText)
/// in place
pub struct Rewriter {
    pub path: PathBuf,
    pub config_text: Option<ConfigText>,
    pub replacements: Option<usize>,
}

/// The whole content of a project file, held in memory between reading and writing it
#[derive(Clone, Eq, Ord, PartialOrd, Hash, Debug, PartialEq)]
pub struct ConfigText {
    pub path: PathBuf,
    pub inner: String,
}

/// A literal search string and what to replace it with
#[derive(Clone, Debug)]
pub struct Substitution {
    pub(super) from: String,
    pub(super) to: String,
    pub(super) pattern: Regex,
}

/// What a finished run did to the project file
#[derive(Clone, Eq, Ord, PartialOrd, Hash, Default, Debug, PartialEq)]
pub struct Outcome {
    pub path: PathBuf,
    pub replacements: usize,
}

impl Outcome {
    /// Whether at least one occurrence was replaced
    pub fn changed(&self) -> bool {
        self.replacements > 0
    }
}

/// Built-in settings used when the user doesn't override them
#[derive(Clone, Eq, Ord, PartialOrd, Hash, Debug, PartialEq)]
pub struct Defaults {
    pub project_path: PathBuf,
    pub from: String,
    pub to: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct ProjectData {
    pub path: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct BundleIdData {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct TomlData {
    pub project: ProjectData,
    pub bundle_id: BundleIdData,
}
