//! lint-configure - set up ESLint, Prettier, lint-staged and husky in a JS/TS project

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use lint_configure_core::{pipeline, Framework, PackageManager, PlainReporter, Presets, RunOptions};
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "lint-configure")]
#[command(about = "Configure ESLint, Prettier, lint-staged and husky for a JavaScript/TypeScript project")]
#[command(version, disable_version_flag = true)]
pub struct Args {
    /// Print version
    #[arg(short = 'v', long, action = clap::ArgAction::Version)]
    version: Option<bool>,

    /// Remove old lint, format and hook configuration files, then exit
    #[arg(short, long)]
    pub clear: bool,

    /// Project directory to configure (defaults to the current directory)
    #[arg(short, long)]
    pub directory: Option<PathBuf>,

    /// Answer the TypeScript question up front
    #[arg(long, value_name = "BOOL")]
    pub typescript: Option<bool>,

    /// Answer the TailwindCSS question up front
    #[arg(long, value_name = "BOOL")]
    pub tailwind: Option<bool>,

    /// Package manager used to install the tooling
    #[arg(long, value_enum)]
    pub package_manager: Option<PackageManager>,

    /// Framework whose ESLint preset is extended
    #[arg(long, value_enum)]
    pub framework: Option<Framework>,

    /// Auto-confirm all prompts (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,

    /// Do not install dependencies (tooling already present)
    #[arg(long = "skip-install")]
    pub skip_install: bool,
}

impl From<Args> for RunOptions {
    fn from(args: Args) -> Self {
        RunOptions {
            directory: args.directory,
            presets: Presets {
                typescript: args.typescript,
                tailwind: args.tailwind,
                package_manager: args.package_manager,
                framework: args.framework,
                accept_defaults: args.yes,
            },
            skip_install: args.skip_install,
        }
    }
}

/// A bare `help` word in first position is read as `--help`
fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(Into::into)
        .enumerate()
        .map(|(i, arg)| {
            if i == 1 && arg == "help" {
                OsString::from("--help")
            } else {
                arg
            }
        })
        .collect()
}

async fn clear(options: RunOptions) -> Result<()> {
    let root = options.project_root()?;

    println!(
        "{}",
        format!("Removing old files in {}", root.display()).cyan().bold()
    );

    let removed = pipeline::clear(&root, &mut PlainReporter).await?;
    for path in &removed {
        println!("    {}", path.display().to_string().dimmed());
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse_from(normalize_args(std::env::args_os()));

    if args.clear {
        return clear(args.into()).await;
    }

    let result = lint_configure_core::run(args.into()).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use clap::CommandFactory;

    #[test]
    fn test_args_are_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_no_arguments_is_interactive() {
        let args = Args::try_parse_from(["lint-configure"]).unwrap();
        assert!(!args.clear);

        let options: RunOptions = args.into();
        assert!(options.presets.typescript.is_none());
        assert!(!options.presets.accept_defaults);
    }

    #[test]
    fn test_presets_from_flags() {
        let args = Args::try_parse_from([
            "lint-configure",
            "--typescript",
            "false",
            "--tailwind",
            "true",
            "--package-manager",
            "yarn",
            "--framework",
            "react",
            "-y",
        ])
        .unwrap();

        let options: RunOptions = args.into();
        assert_eq!(options.presets.typescript, Some(false));
        assert_eq!(options.presets.tailwind, Some(true));
        assert_eq!(options.presets.package_manager, Some(PackageManager::Yarn));
        assert_eq!(options.presets.framework, Some(Framework::React));
        assert!(options.presets.accept_defaults);
    }

    #[test]
    fn test_lowercase_v_prints_version() {
        for flag in ["-v", "--version"] {
            let err = Args::try_parse_from(["lint-configure", flag]).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::DisplayVersion);
        }
    }

    #[test]
    fn test_help_word_prints_help() {
        let err = Args::try_parse_from(normalize_args(["lint-configure", "help"])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_help_as_directory_is_kept() {
        let args =
            Args::try_parse_from(normalize_args(["lint-configure", "-d", "help"])).unwrap();
        assert_eq!(args.directory, Some(PathBuf::from("help")));
    }

    #[test]
    fn test_clear_flag() {
        let args = Args::try_parse_from(["lint-configure", "-c"]).unwrap();
        assert!(args.clear);
    }

    #[test]
    fn test_unknown_framework_rejected() {
        assert!(Args::try_parse_from(["lint-configure", "--framework", "vue"]).is_err());
    }

    #[tokio::test]
    async fn test_clear_removes_legacy_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(".eslintrc"), "{}").unwrap();
        let options = RunOptions {
            directory: Some(dir.path().to_path_buf()),
            ..Default::default()
        };

        clear(options.clone()).await.unwrap();
        assert!(!dir.path().join(".eslintrc").exists());

        clear(options).await.unwrap();
    }
}
