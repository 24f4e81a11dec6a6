use flexi_logger::{opt_format, Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming};

pub fn setup_logging(directory: &str) -> LoggerHandle {
    Logger::try_with_env_or_str("info")  // Use the log level from the environment or fallback to "info"
        .unwrap()
        .log_to_file(FileSpec::default().directory(directory))
        .format(opt_format)
        .rotate(
            Criterion::Size(10 * 1024 * 1024), // Rotate logs after they reach 10 MB
            Naming::Numbers,
            Cleanup::KeepLogFiles(3),
        )
        .start()
        .unwrap()
}

#[cfg(test)]
mod tests {
    use super::setup_logging;

    #[test]
    fn test_logging_writes_to_the_configured_directory() {
        let dir = tempfile::tempdir().unwrap();
        let handle = setup_logging(dir.path().to_str().unwrap());

        log::info!("logging smoke test");
        handle.flush();

        let has_log_file = std::fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .any(|e| e.path().extension().map_or(false, |ext| ext == "log"));
        assert!(has_log_file, "The logger should create a log file in the directory.");
    }
}
