/* ************************************************************************ **
** This file is part of kpath, and is licensed under EITHER the MIT license **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::FailResult;

use std::ffi::OsStr;
use std::path::PathBuf;

use clap::Arg;

use crate::ui::logging::GlobalLogger;
use crate::ui::cli_deserialize::{CliDeserialize, ParseError, parse_args};

fn wrap_result_main<F>(main: F)
where F: FnOnce() -> FailResult<()>,
{
    main().unwrap_or_else(|e| {
        for cause in e.iter_chain() {
            error!("{}", cause);
        }

        if std::env::var_os("RUST_BACKTRACE") == Some(OsStr::new("1").to_owned()) {
            error!("{}", e.backtrace());
        }
        std::process::exit(1);
    });
}

struct LoggingArgs {
    verbosity: i32,
    log_file: Option<PathBuf>,
}

impl CliDeserialize for LoggingArgs {
    fn clap_args<'a, 'b>() -> Vec<Arg<'a, 'b>> {
        vec![
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .multiple(true)
                .help("show more log messages (may be given twice)"),
            Arg::with_name("log")
                .long("log")
                .takes_value(true)
                .value_name("LOGFILE")
                .number_of_values(1)
                .help("also write the log to this file"),
        ]
    }

    fn from_matches(m: &clap::ArgMatches<'_>) -> FailResult<Self>
    { Ok(LoggingArgs {
        verbosity: m.occurrences_of("verbose") as i32,
        log_file: m.value_of_os("log").map(PathBuf::from),
    })}
}

impl LoggingArgs {
    fn init_global_logger(&self) -> FailResult<()> {
        let mut logger = GlobalLogger::default();
        logger.verbosity(self.verbosity);
        if let Some(path) = &self.log_file {
            logger.path(path);
        }
        logger.apply()
    }
}

struct KpathArgs {
    config: PathBuf,
    explicit: bool,
    output: Option<PathBuf>,
}

impl CliDeserialize for KpathArgs {
    fn clap_args<'a, 'b>() -> Vec<Arg<'a, 'b>> {
        vec![
            Arg::with_name("config")
                .short("c")
                .long("config")
                .required(true)
                .takes_value(true)
                .value_name("CONFIG")
                .number_of_values(1)
                .help("settings yaml, containing the cell and (optionally) a path"),
            Arg::with_name("explicit")
                .long("explicit")
                .help("sample the path into an explicit list of k-points"),
            Arg::with_name("output")
                .short("o")
                .long("output")
                .takes_value(true)
                .value_name("OUTPUT")
                .number_of_values(1)
                .help("write JSON here instead of to stdout"),
        ]
    }

    fn from_matches(m: &clap::ArgMatches<'_>) -> FailResult<Self>
    {Ok({
        let config = match m.value_of_os("config") {
            Some(path) => PathBuf::from(path),
            None => bail!("(BUG) --config is required, but clap let it through"),
        };
        KpathArgs {
            config,
            explicit: m.is_present("explicit"),
            output: m.value_of_os("output").map(PathBuf::from),
        }
    })}
}

// -------------------------------------------------------------------------------------

fn kpath_app<'a, 'b>() -> clap::App<'a, 'b> {
    clap::App::new("kpath")
        .version(crate_version!())
        .about("Classify the Bravais lattice of a cell, and write its high-symmetry \
                points and a path through the Brillouin zone as JSON.")
}

pub fn kpath() {
    wrap_result_main(|| {
        let (logging, args): (LoggingArgs, KpathArgs) = match parse_args(kpath_app(), std::env::args_os()) {
            Ok(parsed) => parsed,
            Err(ParseError::Clap(e)) => e.exit(),
            Err(ParseError::Resolve(e)) => return Err(e),
        };

        logging.init_global_logger()?;
        crate::cmd::run_kpath(&args.config, args.explicit, args.output.as_ref().map(|p| p.as_path()))
    });
}
