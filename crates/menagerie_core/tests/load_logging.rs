use log::{Level, LevelFilter, Log, Metadata, Record};
use menagerie_core::{AnimalRegistry, JsonFileAnimalRepository, ServiceError};
use std::fs;
use std::sync::Mutex;

struct CapturingLogger {
    lines: Mutex<Vec<(Level, String)>>,
}

impl Log for CapturingLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        self.lines
            .lock()
            .unwrap()
            .push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

static LOGGER: CapturingLogger = CapturingLogger {
    lines: Mutex::new(Vec::new()),
};

#[test]
fn failed_load_logs_one_metadata_only_error() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Trace);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("animals.json");
    fs::write(
        &path,
        r#"[{"$type":"parrot","Name":"Polly","Age":2,"Vocabulary":"SecretWord"}]"#,
    )
    .unwrap();

    let mut registry = AnimalRegistry::new(JsonFileAnimalRepository::new(&path));
    let err = registry.load().unwrap_err();
    assert!(matches!(err, ServiceError::Repo(_)));

    let lines = LOGGER.lines.lock().unwrap();
    let errors: Vec<&String> = lines
        .iter()
        .filter(|(level, _)| *level == Level::Error)
        .map(|(_, line)| line)
        .collect();
    assert_eq!(errors.len(), 1, "unexpected error lines: {errors:?}");
    assert!(errors[0].contains("error_code=decode_failed"));
    assert!(errors[0].contains("category=data"));
    for (_, line) in lines.iter() {
        assert!(!line.contains("SecretWord"), "leaked value: {line}");
        assert!(!line.contains("Polly"), "leaked value: {line}");
    }
}
