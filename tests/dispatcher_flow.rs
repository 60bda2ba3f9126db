use std::error::Error;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use fw::config::Config;
use fw::engine::{change_queue, DispatchOutcome, Dispatcher};
use fw::exec::CommandOutcome;
use fw::policy::{PathPolicy, PolicyStore};
use fw_test_utils::{init_tracing, RecordingRunner, ScriptedPrompter};

type TestResult = Result<(), Box<dyn Error>>;

fn config_with(commands: &[&str], paths: PolicyStore) -> Config {
    Config {
        commands: commands.iter().map(|c| c.to_string()).collect(),
        paths,
    }
}

#[tokio::test]
async fn skip_policy_short_circuits_the_pipeline() -> TestResult {
    init_tracing();

    let mut paths = PolicyStore::new();
    paths.insert("ignored.txt", PathPolicy::Skip);
    let config = config_with(&["echo never"], paths);

    let executed = Arc::new(Mutex::new(Vec::new()));
    let runner = RecordingRunner::new(Arc::clone(&executed));
    let prompter = ScriptedPrompter::new(Vec::<String>::new());
    let (_tx, rx) = change_queue();

    let mut dispatcher = Dispatcher::new(config, prompter, runner, rx);
    let outcome = dispatcher.dispatch("ignored.txt").await?;

    assert_eq!(outcome, DispatchOutcome::Skipped);
    assert!(executed.lock().unwrap().is_empty());

    Ok(())
}

#[tokio::test]
async fn pipeline_commands_run_in_configured_order() -> TestResult {
    init_tracing();

    let mut paths = PolicyStore::new();
    paths.insert(
        "src/main.rs",
        PathPolicy::Execute {
            cwd: PathBuf::from("/work"),
        },
    );
    let config = config_with(&["echo a", "echo b", "echo c"], paths);

    let executed = Arc::new(Mutex::new(Vec::new()));
    let runner = RecordingRunner::new(Arc::clone(&executed));
    let prompter = ScriptedPrompter::new(Vec::<String>::new());
    let (_tx, rx) = change_queue();

    let mut dispatcher = Dispatcher::new(config, prompter, runner, rx);
    let outcome = dispatcher.dispatch("src/main.rs").await?;

    assert_eq!(outcome, DispatchOutcome::Executed);
    assert_eq!(
        *executed.lock().unwrap(),
        vec!["echo a".to_string(), "echo b".to_string(), "echo c".to_string()]
    );

    Ok(())
}

#[tokio::test]
async fn commands_run_in_the_policy_working_directory() -> TestResult {
    let mut paths = PolicyStore::new();
    paths.insert(
        "src/main.rs",
        PathPolicy::Execute {
            cwd: PathBuf::from("/work/project"),
        },
    );
    let config = config_with(&["make"], paths);

    let executed = Arc::new(Mutex::new(Vec::new()));
    let runner = RecordingRunner::new(Arc::clone(&executed));
    let cwds = runner.cwds_handle();

    let prompter = ScriptedPrompter::new(Vec::<String>::new());
    let (_tx, rx) = change_queue();

    let mut dispatcher = Dispatcher::new(config, prompter, runner, rx);
    dispatcher.dispatch("src/main.rs").await?;

    assert_eq!(*cwds.lock().unwrap(), vec![PathBuf::from("/work/project")]);

    Ok(())
}

#[tokio::test]
async fn failed_commands_do_not_stop_the_pipeline() -> TestResult {
    let mut paths = PolicyStore::new();
    paths.insert(
        "src/main.rs",
        PathPolicy::Execute {
            cwd: PathBuf::from("/work"),
        },
    );
    let config = config_with(&["false", "echo still-runs"], paths);

    let executed = Arc::new(Mutex::new(Vec::new()));
    let runner =
        RecordingRunner::new(Arc::clone(&executed)).with_outcome(CommandOutcome::Failed(1));
    let prompter = ScriptedPrompter::new(Vec::<String>::new());
    let (_tx, rx) = change_queue();

    let mut dispatcher = Dispatcher::new(config, prompter, runner, rx);
    let outcome = dispatcher.dispatch("src/main.rs").await?;

    // A non-zero exit is logged but never aborts the rest of the pipeline.
    assert_eq!(outcome, DispatchOutcome::Executed);
    assert_eq!(executed.lock().unwrap().len(), 2);

    Ok(())
}

#[tokio::test]
async fn unknown_path_is_resolved_once_then_reused() -> TestResult {
    init_tracing();

    let config = config_with(&["echo hi"], PolicyStore::new());

    let executed = Arc::new(Mutex::new(Vec::new()));
    let runner = RecordingRunner::new(Arc::clone(&executed));
    // Exactly one scripted answer: a second prompt would error the test.
    let prompter = ScriptedPrompter::new(["y"]);
    let (_tx, rx) = change_queue();

    let mut dispatcher = Dispatcher::new(config, prompter, runner, rx);

    let first = dispatcher.dispatch("src/new_file.rs").await?;
    assert_eq!(first, DispatchOutcome::Executed);
    assert!(dispatcher
        .config()
        .paths
        .lookup("src/new_file.rs")
        .is_some_and(PathPolicy::is_execute));

    let second = dispatcher.dispatch("src/new_file.rs").await?;
    assert_eq!(second, DispatchOutcome::Executed);
    assert_eq!(executed.lock().unwrap().len(), 2);

    Ok(())
}

#[tokio::test]
async fn run_loop_dispatches_queued_paths_then_returns_config_on_shutdown() -> TestResult {
    init_tracing();

    let mut paths = PolicyStore::new();
    paths.insert(
        "watched.rs",
        PathPolicy::Execute {
            cwd: PathBuf::from("/work"),
        },
    );
    paths.insert("ignored.txt", PathPolicy::Skip);
    let config = config_with(&["echo ran"], paths);

    let executed = Arc::new(Mutex::new(Vec::new()));
    let runner = RecordingRunner::new(Arc::clone(&executed));
    let prompter = ScriptedPrompter::new(Vec::<String>::new());
    let (tx, rx) = change_queue();

    tx.push("watched.rs");
    tx.push("ignored.txt");
    tx.push("watched.rs");
    tx.push_shutdown();

    let dispatcher = Dispatcher::new(config, prompter, runner, rx);
    let final_config = dispatcher.run().await?;

    assert_eq!(
        *executed.lock().unwrap(),
        vec!["echo ran".to_string(), "echo ran".to_string()]
    );
    assert_eq!(final_config.paths.len(), 2);

    Ok(())
}
