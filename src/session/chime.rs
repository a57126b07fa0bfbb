//! Completion chime.

use std::io::Write;

/// Ring the terminal bell.
///
/// Best-effort: a chime that fails to sound must never affect the timer,
/// so write errors are swallowed.
pub fn ring() {
    let mut stdout = std::io::stdout();
    let _ = stdout.write_all(b"\x07");
    let _ = stdout.flush();
}
