use std::error::Error;
use std::fs;
use std::path::PathBuf;

use tempfile::tempdir;

use fw::config::{load_or_default, save, Config};
use fw::policy::{PathPolicy, PolicyStore};

type TestResult = Result<(), Box<dyn Error>>;

fn sample_config() -> Config {
    let mut paths = PolicyStore::new();
    paths.insert(
        "src/app.go",
        PathPolicy::Execute {
            cwd: PathBuf::from("/home/user/project"),
        },
    );
    paths.insert("README.md", PathPolicy::Skip);

    Config {
        commands: vec!["cargo check".into(), "cargo test".into()],
        paths,
    }
}

#[test]
fn save_then_load_reproduces_commands_and_paths() -> TestResult {
    let dir = tempdir()?;
    let path = dir.path().join(".fw.toml");

    let config = sample_config();
    save(&path, &config)?;

    let reloaded = load_or_default(&path);
    assert_eq!(reloaded, config);

    Ok(())
}

#[test]
fn missing_file_loads_as_empty_config() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(".fw.toml");

    let config = load_or_default(&path);
    assert_eq!(config, Config::default());
}

#[test]
fn malformed_file_loads_as_empty_config() -> TestResult {
    let dir = tempdir()?;
    let path = dir.path().join(".fw.toml");
    fs::write(&path, "commands = [unterminated")?;

    let config = load_or_default(&path);
    assert_eq!(config, Config::default());

    Ok(())
}

#[test]
fn empty_config_round_trips_to_empty() -> TestResult {
    let dir = tempdir()?;
    let path = dir.path().join(".fw.toml");

    save(&path, &Config::default())?;
    let reloaded = load_or_default(&path);
    assert_eq!(reloaded, Config::default());

    Ok(())
}

#[test]
fn persisted_skip_entries_keep_their_keys() -> TestResult {
    let dir = tempdir()?;
    let path = dir.path().join(".fw.toml");

    save(&path, &sample_config())?;
    let reloaded = load_or_default(&path);

    // The skip entry survives even though it carries no execute/cwd fields
    // on the wire.
    assert_eq!(reloaded.paths.lookup("README.md"), Some(&PathPolicy::Skip));

    Ok(())
}
