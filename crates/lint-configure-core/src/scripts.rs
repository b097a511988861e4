//! `package.json` script registration

use crate::answers::UserConfiguration;
use crate::error::ConfigureError;
use crate::runtime::exec::{run_checked, CommandRunner, ShellCommand};

/// Name and command of one `package.json` script
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Script {
    pub name: &'static str,
    pub command: &'static str,
}

const ALWAYS: [Script; 3] = [
    Script {
        name: "lint",
        command: "eslint --ext .js,.jsx,.ts,.tsx .",
    },
    Script {
        name: "lint:fix",
        command: "eslint --ext .js,.jsx,.ts,.tsx . --fix",
    },
    Script {
        name: "format",
        command: "prettier --write .",
    },
];

const TYPE_CHECK: Script = Script {
    name: "type-check",
    command: "tsc --noEmit",
};

/// Scripts to register; `type-check` only for TypeScript projects
pub fn scripts_for(config: &UserConfiguration) -> Vec<Script> {
    let mut scripts = ALWAYS.to_vec();
    if config.uses_typescript {
        scripts.push(TYPE_CHECK);
    }
    scripts
}

/// Single `npm pkg set` call writing every script.
///
/// Existing scripts with the same name are overwritten. npm edits
/// `package.json` the same way for yarn projects, so this does not depend on
/// the package manager choice.
pub fn register_command(scripts: &[Script]) -> ShellCommand {
    ShellCommand::new("npm").args(["pkg", "set"]).args(
        scripts
            .iter()
            .map(|s| format!("scripts.{}={}", s.name, s.command)),
    )
}

pub async fn register_scripts<R: CommandRunner>(
    runner: &R,
    config: &UserConfiguration,
) -> Result<Vec<Script>, ConfigureError> {
    let scripts = scripts_for(config);
    run_checked(runner, &register_command(&scripts))
        .await
        .map_err(|output| ConfigureError::ScriptRegistrationFailed { output })?;
    Ok(scripts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::{Framework, PackageManager};
    use crate::runtime::exec::testing::RecordingRunner;

    fn config(uses_typescript: bool) -> UserConfiguration {
        UserConfiguration {
            uses_typescript,
            uses_tailwind: false,
            package_manager: PackageManager::Yarn,
            framework: Framework::NextJs,
        }
    }

    fn names(scripts: &[Script]) -> Vec<&'static str> {
        scripts.iter().map(|s| s.name).collect()
    }

    #[test]
    fn test_type_check_only_for_typescript() {
        assert_eq!(
            names(&scripts_for(&config(true))),
            vec!["lint", "lint:fix", "format", "type-check"]
        );
        assert_eq!(
            names(&scripts_for(&config(false))),
            vec!["lint", "lint:fix", "format"]
        );
    }

    #[test]
    fn test_register_command_args() {
        let cmd = register_command(&scripts_for(&config(true)));
        assert_eq!(cmd.program, "npm");
        assert_eq!(
            cmd.args,
            vec![
                "pkg",
                "set",
                "scripts.lint=eslint --ext .js,.jsx,.ts,.tsx .",
                "scripts.lint:fix=eslint --ext .js,.jsx,.ts,.tsx . --fix",
                "scripts.format=prettier --write .",
                "scripts.type-check=tsc --noEmit",
            ]
        );
    }

    #[tokio::test]
    async fn test_registration_failure() {
        let runner = RecordingRunner::failing_on("pkg set");
        let err = register_scripts(&runner, &config(false)).await.unwrap_err();
        assert!(matches!(err, ConfigureError::ScriptRegistrationFailed { .. }));
    }

    #[tokio::test]
    async fn test_registration_single_invocation() {
        let runner = RecordingRunner::new();
        let scripts = register_scripts(&runner, &config(false)).await.unwrap();
        assert_eq!(scripts.len(), 3);
        assert_eq!(runner.rendered().len(), 1);
    }
}
