use chrono::Local;
use log::LevelFilter;
use simplelog::*;
use std::fs::File;

/// `log_<name>_<date>_<time>.txt` in the working directory
pub fn timestamped_log_name(name: &str) -> String {
    let date_and_time = Local::now().format("%Y-%m-%d_%H-%M-%S");
    format!("log_{}_{}.txt", name, date_and_time)
}

/// Console logger plus an optional file logger. Only the first call installs a
/// logger; later calls return false and leave the first one in place.
pub fn init_logger(level: LevelFilter, log_file: Option<&str>) -> bool {
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )];
    if let Some(filename) = log_file {
        match File::create(filename) {
            Ok(file) => loggers.push(WriteLogger::new(level, Config::default(), file)),
            Err(e) => eprintln!("cannot create log file {}: {}", filename, e),
        }
    }
    CombinedLogger::init(loggers).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_name() {
        let name = timestamped_log_name("integrals");
        assert!(name.starts_with("log_integrals_"));
        assert!(name.ends_with(".txt"));
    }

    #[test]
    fn test_second_init_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("integrals.log");
        let path = path.to_str().unwrap();
        init_logger(LevelFilter::Debug, Some(path));
        assert!(!init_logger(LevelFilter::Info, None));
        assert!(dir.path().join("integrals.log").exists());
    }
}
