// src/session.rs

//! Interactive session setup, run once at startup before dispatching.
//!
//! Two steps, in order:
//! 1. Review or replace the persisted command list (unconditionally prompt
//!    for a fresh one when none is persisted).
//! 2. Offer a whole-table reset of the remembered path decisions.

use anyhow::Result;

use crate::config::Config;
use crate::policy::{PathPolicy, PolicyStore};
use crate::prompt::{confirm_default_no, read_lines_until_empty, Prompter};

/// Run the full startup reconciliation against the loaded config.
pub fn init_config<P>(config: &mut Config, prompter: &mut P) -> Result<()>
where
    P: Prompter + ?Sized,
{
    reset_commands(config, prompter)?;
    reset_paths(&mut config.paths, prompter)?;
    Ok(())
}

/// Review the persisted command list, replacing it on request.
///
/// With no persisted list the operator is prompted for a fresh one without
/// being asked first. The effective list is echoed back either way.
pub fn reset_commands<P>(config: &mut Config, prompter: &mut P) -> Result<()>
where
    P: Prompter + ?Sized,
{
    let mut get_new_commands = true;
    if !config.commands.is_empty() {
        print_commands(&config.commands);
        get_new_commands = confirm_default_no(prompter, "Change commands? (y/N) ")?;
    }

    if get_new_commands {
        config.commands = read_lines_until_empty(
            prompter,
            "Set commands to execute, each in one line. Empty line if done.",
        )?;
        print_commands(&config.commands);
    }

    Ok(())
}

/// Offer a bulk reset of all remembered path decisions.
///
/// All-or-nothing: `y` clears the whole table, `n` or an empty answer keeps
/// it, anything else re-asks without touching it. There is no per-path
/// editing.
pub fn reset_paths<P>(store: &mut PolicyStore, prompter: &mut P) -> Result<()>
where
    P: Prompter + ?Sized,
{
    print_paths(store);
    if confirm_default_no(prompter, "Reset paths? (y/N) ")? {
        store.reset_all();
    }
    Ok(())
}

fn print_commands(commands: &[String]) {
    println!("Will execute following commands when files are changed:");
    if commands.is_empty() {
        println!("  (none)");
    }
    for command in commands {
        println!("  {command}");
    }
}

fn print_paths(store: &PolicyStore) {
    println!("Remembered path decisions ({}):", store.len());
    for (path, policy) in store.iter() {
        match policy {
            PathPolicy::Execute { cwd } => println!("  {path}: run in {}", cwd.display()),
            PathPolicy::Skip => println!("  {path}: skip"),
        }
    }
}
