//! `supabase secrets` commands
//!
//! Each operation takes its collaborators explicitly: a cancellation token, the
//! API capability, the filesystem, and the writer that receives user-facing
//! output. `main` wires in the real ones; tests pass mocks.

use std::io::Write;

use colored::Colorize;

use crate::error::Result;

mod env_file;
pub mod list;
pub mod set;
pub mod unset;

/// Print the `Finished <command>.` confirmation line.
fn finished(out: &mut dyn Write, command: &str) -> Result<()> {
    writeln!(out, "Finished {}.", command.cyan())?;
    Ok(())
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::io::Write;

    /// Captured output with colours disabled, so assertions see plain text.
    pub fn plain_output() -> Vec<u8> {
        colored::control::set_override(false);
        Vec::new()
    }

    pub fn as_text(buf: &[u8]) -> String {
        String::from_utf8_lossy(buf).into_owned()
    }

    /// A writer that fails, for checking that write errors surface.
    pub struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }
}
