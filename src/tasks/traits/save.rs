/* ************************************************************************ **
** This file is part of kpath, and is licensed under EITHER the MIT license **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::FailResult;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use failure::ResultExt;

pub trait Save {
    fn save<P: AsRef<Path>>(&self, path: P) -> FailResult<()>;

    /// Write to stdout instead of a file.
    fn print(&self) -> FailResult<()>;
}

/// Utility adapter for `Save` that serializes as (pretty-printed) JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Json<T: ?Sized>(pub T);

impl<T> Save for Json<T> where T: serde::Serialize {
    fn save<P: AsRef<Path>>(&self, path: P) -> FailResult<()>
    {Ok({
        let path = path.as_ref();
        let file = File::create(path).with_context(|_| format!("could not create {}", path.display()))?;
        write_json(BufWriter::new(file), &self.0)?;
    })}

    fn print(&self) -> FailResult<()>
    {
        let stdout = io::stdout();
        let lock = stdout.lock();
        write_json(lock, &self.0)
    }
}

fn write_json<W: Write>(mut w: W, value: &impl serde::Serialize) -> FailResult<()>
{Ok({
    serde_json::to_writer_pretty(&mut w, value)?;
    writeln!(w)?;
    w.flush()?;
})}
