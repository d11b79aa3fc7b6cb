/* ************************************************************************ **
** This file is part of kpath, and is licensed under EITHER the MIT license **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::ffi::{OsStr, OsString};
use std::path::Path;
use std::process::Command;

use failure::Error;
use tempdir::TempDir;

pub type Result<T> = std::result::Result<T, Error>;

/// What the binary printed.
#[derive(Debug, Clone)]
pub struct Captured {
    pub stdout: String,
    pub stderr: String,
}

pub type Checker = Box<dyn Fn(&Path, &Captured) -> Result<()>>;

/// Runs the `kpath` binary inside a fresh temporary directory.
#[must_use]
pub struct CliTest {
    cmd: Vec<OsString>,
    expect_success: Option<bool>,
    checkers: Vec<Checker>,
}

impl CliTest {
    pub fn kpath() -> Self {
        CliTest {
            cmd: vec![env!("CARGO_BIN_EXE_kpath").into()],
            expect_success: Some(true),
            checkers: vec![],
        }
    }

    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.cmd.push(arg.as_ref().into());
        self
    }

    pub fn expect_failure(mut self) -> Self {
        self.expect_success = Some(false);
        self
    }

    /// Inspect the output.  The path is the working directory of the run.
    pub fn check<F>(mut self, checker: F) -> Self
    where F: Fn(&Path, &Captured) -> Result<()> + 'static,
    {
        self.checkers.push(Box::new(checker));
        self
    }

    pub fn run(self) -> Result<()> {
        let CliTest { cmd, checkers, expect_success } = self;

        let tmp = TempDir::new("kpath")?;
        let output = {
            let mut args = cmd;
            let bin = args.remove(0);

            Command::new(&bin)
                .args(&args)
                .current_dir(tmp.path())
                .output()?
        };
        let captured = Captured {
            stdout: String::from_utf8(output.stdout)?,
            stderr: String::from_utf8(output.stderr)?,
        };
        // show it in the test harness
        print!("{}", captured.stdout);
        eprint!("{}", captured.stderr);

        if let Some(success) = expect_success {
            assert_eq!(success, output.status.success(), "{}", output.status);
        }

        for checker in checkers {
            checker(tmp.path(), &captured)?;
        }
        Ok(())
    }
}
