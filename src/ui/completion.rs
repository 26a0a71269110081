//! Shell completion system for formsight

use clap::{Command, CommandFactory};
use clap_complete::{Generator, generate};
use std::path::PathBuf;

/// Generate shell completions for the given shell
pub fn print_completions<G: Generator>(generator: G, app: &mut Command) {
    generate(
        generator,
        app,
        app.get_name().to_string(),
        &mut std::io::stdout(),
    );
}

/// Install shell completion to standard system location
pub fn install_completion(shell: clap_complete::Shell) -> Result<String, String> {
    use std::fs;

    let completion_dir = get_completion_directory(shell)?;
    let filename = get_completion_filename(shell);
    let completion_path = completion_dir.join(filename);

    let completion_script = generate_completion_script(shell);

    fs::write(&completion_path, completion_script).map_err(|e| {
        format!(
            "Failed to write completion file to {}: {}",
            completion_path.display(),
            e
        )
    })?;

    Ok(format!(
        "Shell completion installed to {}. Restart your shell to pick it up.",
        completion_path.display()
    ))
}

/// Get the standard completion directory for a shell
fn get_completion_directory(shell: clap_complete::Shell) -> Result<PathBuf, String> {
    use std::fs;

    let home =
        std::env::var("HOME").map_err(|_| "HOME environment variable not set".to_string())?;

    let dir = match shell {
        clap_complete::Shell::Bash => {
            format!("{home}/.local/share/bash-completion/completions")
        }
        clap_complete::Shell::Zsh => format!("{home}/.local/share/zsh/site-functions"),
        clap_complete::Shell::Fish => format!("{home}/.config/fish/completions"),
        other => {
            return Err(format!(
                "Completion installation not supported for {other:?}. Use 'formsight completion-generate' and install manually."
            ));
        }
    };

    let path = PathBuf::from(dir);
    fs::create_dir_all(&path)
        .map_err(|e| format!("Failed to create completion directory: {e}"))?;
    Ok(path)
}

/// Get the standard filename for shell completions
fn get_completion_filename(shell: clap_complete::Shell) -> &'static str {
    match shell {
        clap_complete::Shell::Bash => "formsight",
        clap_complete::Shell::Zsh => "_formsight",
        clap_complete::Shell::Fish => "formsight.fish",
        _ => "formsight",
    }
}

fn generate_completion_script(shell: clap_complete::Shell) -> String {
    let mut app = crate::ui::cli::Cli::command();
    let mut buffer = Vec::new();
    generate(shell, &mut app, "formsight", &mut buffer);
    String::from_utf8_lossy(&buffer).to_string()
}
