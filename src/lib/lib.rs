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

//! libbundlefix rewrites the bundle identifier (`PRODUCT_BUNDLE_IDENTIFIER`) of an Xcode
//! project file in place. The file is treated as opaque UTF-8 text: every literal occurrence
//! of the old identifier is replaced with the new one and the result is written back to the
//! same path. There is no backup and the write isn't atomic.
//!
//! # Usage
//!
//! The following replaces the built-in wrong bundle identifier in `project.pbxproj`
//!
//! ```no_run
//! use libbundlefix::*;
//! use std::path::Path;
//!
//! let defaults = load_defaults().unwrap();
//! let substitution = Substitution::new(&defaults.from, &defaults.to).unwrap();
//!
//! let outcome = fix_bundle_id(
//!     Path::new("/src/app/ios/Runner.xcodeproj/project.pbxproj"),
//!     &substitution,
//! )
//! .unwrap();
//!
//! println!("Replaced {} occurrences", outcome.replacements);
//! ```

pub mod errors;
pub mod helpers;
pub mod rewriter;
pub mod types;
#[cfg(test)]
mod tests;

pub use crate::errors::*;
pub use crate::helpers::*;
pub use crate::rewriter::*;
pub use crate::types::*;
