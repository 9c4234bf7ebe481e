//! # Completions Command Implementation
//!
//! Prints a completion script for `loc-wizard` and all of its subcommands
//! and options. The shell names are the ones `clap_complete` knows: bash,
//! zsh, fish, powershell and elvish.
//!
//! ```bash
//! loc-wizard completions bash > ~/.local/share/bash-completion/completions/loc-wizard
//! loc-wizard completions zsh > ~/.zfunc/_loc-wizard
//! loc-wizard completions fish > ~/.config/fish/completions/loc-wizard.fish
//! ```

use anyhow::Result;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io::{self, Write};

use crate::cli::Cli;

/// Name completions are registered under.
const BIN_NAME: &str = "loc-wizard";

/// Generate shell completion scripts
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// The shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Execute the `completions` command.
pub fn execute(args: CompletionsArgs) -> Result<()> {
    write_completions(args.shell, &mut io::stdout());
    Ok(())
}

fn write_completions(shell: Shell, out: &mut dyn Write) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, BIN_NAME, out);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn script(shell: Shell) -> String {
        let mut buffer = Vec::new();
        write_completions(shell, &mut buffer);
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_bash_completes_subcommands() {
        let script = script(Shell::Bash);
        assert!(script.contains(BIN_NAME));
        assert!(script.contains("analyze"));
        assert!(script.contains("library"));
    }

    #[test]
    fn test_fish_completes_analyze_options() {
        let script = script(Shell::Fish);
        assert!(script.contains("refresh-library"));
        assert!(script.contains("fetch-cmd"));
    }

    #[test]
    fn test_every_shell_produces_a_script() {
        for shell in [Shell::Bash, Shell::Zsh, Shell::Fish, Shell::PowerShell, Shell::Elvish] {
            assert!(!script(shell).is_empty(), "{:?}", shell);
        }
    }
}
