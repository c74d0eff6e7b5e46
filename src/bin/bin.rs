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

use clap::{App, YamlLoader};
use env_logger::Builder;
use libbundlefix::*;
use std::path::PathBuf;

use log::{debug, error, warn};

const SUCCESS_MSG: &str = "Bundle ID corregido en todas las instancias";

pub(crate) struct BinOptions {
    pub project: Option<PathBuf>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub verbose: bool,
    pub debug: bool,
}

fn main() {
    let bin_options = help_string();

    set_up_logging(bin_options.debug, bin_options.verbose);

    // This isn't so very pretty, especially since main() can return Result since Rust 2018,
    // but we need this for pretty error messages via `env_logger`.
    match actual_work(&bin_options) {
        Ok(outcome) => {
            debug!(
                "Done with {}, {} replacement(s)",
                outcome.path.display(),
                outcome.replacements
            );
            println!("{}", SUCCESS_MSG);
        }
        Err(e) => {
            error!("{}", e.to_string());
            std::process::exit(1);
        }
    }
}

fn actual_work(opts: &BinOptions) -> Result<Outcome, Error> {
    let defaults = load_defaults()?;

    let from = opts.from.as_ref().unwrap_or(&defaults.from);
    let to = opts.to.as_ref().unwrap_or(&defaults.to);
    let project = opts.project.as_ref().unwrap_or(&defaults.project_path);

    // The library only ever sees absolute paths
    let project_path = std::env::current_dir()?.join(project);

    debug!(
        "Replacing '{}' with '{}' in {}",
        from,
        to,
        project_path.display()
    );

    let substitution = Substitution::new(from, to)?;

    fix_bundle_id(&project_path, &substitution)
}

fn set_up_logging(is_debug: bool, is_verbose: bool) {
    let mut builder = Builder::new();

    if is_debug {
        builder
            .filter_module("libbundlefix", log::LevelFilter::Debug)
            .filter_module("bundlefix", log::LevelFilter::Debug);
    } else if is_verbose {
        builder
            .filter_module("libbundlefix", log::LevelFilter::Info)
            .filter_module("bundlefix", log::LevelFilter::Info);
    } else {
        builder
            .filter_module("libbundlefix", log::LevelFilter::Warn)
            .filter_module("bundlefix", log::LevelFilter::Warn);
    }

    builder.default_format_timestamp(false).init();

    if is_debug && is_verbose {
        warn!("Specified both --verbose and --debug! Will ignore --verbose.");
    }
}

// Print the help script if invoked with `--help`/`-h`. No arguments at all is a valid invocation.
fn help_string() -> BinOptions {
    let help_yaml =
        YamlLoader::load_from_str(include_str!(concat!(env!("OUT_DIR"), "/cli_gen.yml"))).unwrap();
    let matches = App::from_yaml(&help_yaml[0]).get_matches();

    let project = matches.value_of("project").map(PathBuf::from);

    let from = matches.value_of("from").map(String::from);

    let to = matches.value_of("to").map(String::from);

    let verbose = matches.is_present("verbose");

    let debug = matches.is_present("debug");

    BinOptions {
        project,
        from,
        to,
        verbose,
        debug,
    }
}
