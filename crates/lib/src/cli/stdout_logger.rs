use log::{Level, Log};

/// Logger which prints informational records to stdout and problems to
/// stderr. Debug records are prefixed with where they were emitted.
pub(crate) struct StdoutLogger;

impl Log for StdoutLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let level = record.level().as_str().to_ascii_lowercase();

        match record.level() {
            Level::Error | Level::Warn => {
                eprintln!("{level}: {}", record.args());
            }
            Level::Info => {
                println!("{level}: {}", record.args());
            }
            Level::Debug | Level::Trace => {
                println!(
                    "{file}:{line}: {level}: {}",
                    record.args(),
                    file = record.file().unwrap_or_default(),
                    line = record.line().unwrap_or_default()
                );
            }
        }
    }

    fn flush(&self) {}
}
