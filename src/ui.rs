/// Terminal output for the exporter binary
///
/// Status lines go to stdout with a "coverage: " prefix; errors go to stderr
/// with a colored "error" label so they stand out in CI logs.
use lazy_static::lazy_static;
use std::io::Write;
use std::sync::Mutex;

lazy_static! {
    static ref CONSOLE: Mutex<()> = Mutex::new(());
}

/// Run `f` while holding the console lock so lines are never interleaved
fn with_console<F>(f: F)
where
    F: FnOnce(),
{
    let _guard = CONSOLE.lock();
    f();
}

/// Write a bold colored label to stderr, falling back to plain text
fn eprint_label(label: &str, fg: term::color::Color) {
    let colored = match term::stderr() {
        Some(mut t) => {
            let ok = t.fg(fg).is_ok() && t.attr(term::Attr::Bold).is_ok() && write!(t, "{}", label).is_ok();
            let _ = t.reset();
            ok
        }
        None => false,
    };
    if !colored {
        eprint!("{}", label);
    }
}

/// Print a status message with "coverage: " prefix
pub fn status(msg: &str) {
    with_console(|| println!("coverage: {}", msg));
}

/// Print an error message with colored "error" prefix
pub fn print_error(msg: &str) {
    with_console(|| {
        eprint_label("error", term::color::BRIGHT_RED);
        eprintln!(": {}", msg);
    });
}

/// Print a warning message with colored "warning" prefix
pub fn print_warning(msg: &str) {
    with_console(|| {
        eprint_label("warning", term::color::BRIGHT_YELLOW);
        eprintln!(": {}", msg);
    });
}
