/* ************************************************************************ **
** This file is part of kpath, and is licensed under EITHER the MIT license **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::FailResult;

use std::ffi::OsString;

/// A group of command line arguments that contributes its own flags to a
/// clap app and reads itself back out of the matches.
///
/// Groups combine as tuples, so an entry point names every group it needs
/// in a single type and lets inference pick the rest.
pub trait CliDeserialize: Sized {
    /// Flags belonging to this group.
    fn clap_args<'a, 'b>() -> Vec<clap::Arg<'a, 'b>>;

    fn from_matches(matches: &clap::ArgMatches<'_>) -> FailResult<Self>;
}

impl<A, B> CliDeserialize for (A, B)
where
    A: CliDeserialize,
    B: CliDeserialize,
{
    fn clap_args<'a, 'b>() -> Vec<clap::Arg<'a, 'b>> {
        let mut args = A::clap_args();
        args.extend(B::clap_args());
        args
    }

    fn from_matches(matches: &clap::ArgMatches<'_>) -> FailResult<Self>
    { Ok((A::from_matches(matches)?, B::from_matches(matches)?)) }
}

/// Parse `argv` with an app extended by the flags of `A`.
///
/// Help and version requests come back as errors whose `kind` says so;
/// callers that want clap's usual behavior should `exit()` on them.
pub fn parse_args<A, I, T>(app: clap::App<'_, '_>, argv: I) -> Result<A, ParseError>
where
    A: CliDeserialize,
    I: IntoIterator<Item=T>,
    T: Into<OsString> + Clone,
{
    let matches = app.args(&A::clap_args()).get_matches_from_safe(argv).map_err(ParseError::Clap)?;
    A::from_matches(&matches).map_err(ParseError::Resolve)
}

#[derive(Debug)]
pub enum ParseError {
    /// Rejected by clap (includes `--help` and `--version`).
    Clap(clap::Error),
    /// Accepted by clap, but the values made no sense.
    Resolve(failure::Error),
}
