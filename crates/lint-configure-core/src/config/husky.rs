//! husky pre-commit hook
//!
//! Exit status contract of the generated script:
//! - `0` only when `lint` passes on the first attempt (and `type-check`, when
//!   present, passes).
//! - `1` when `lint` fails, whether or not `lint:fix` then succeeds. A
//!   successful autofix still rejects the commit so the rewritten files get
//!   reviewed before they are committed.

pub const FILE_NAME: &str = ".husky/pre-commit";

const TYPE_CHECK_PLACEHOLDER: &str = "{{typeCheck}}";

const PRE_COMMIT_TEMPLATE: &str = r#"#!/usr/bin/env sh
. "$(dirname -- "$0")/_/husky.sh"

echo 'Running Git Hooks'
{{typeCheck}}
echo '🔎 Running linter..'

if ! npm run lint; then
    echo '⛔️ There is a problem in the code. ⌛️ I run linter autofix for you.'
    echo '🔎 Running linter autofix..'

    if ! npm run lint:fix; then
        echo '⛔️ Autofix failed. Please fix the linting errors manually. ⛔️'
        exit 1
    fi

    echo '🧐 Please check the changes and commit again.'
    exit 1
fi

echo '✅ No Eslint error found'
echo '⌛️ Running lint staged and git commit ⌛️'
"#;

const TYPE_CHECK_BLOCK: &str = r#"
echo '🔎 Checking validity of types with TypeScript'

if ! npm run type-check; then
    echo '⛔️ There is a type error in the code, fix it, and try commit again. ⛔️'
    exit 1
fi

echo '✅ No TypeError found'
"#;

/// Render the hook; the type-check block is only present for TypeScript projects
pub fn pre_commit_script(uses_typescript: bool) -> String {
    let block = if uses_typescript { TYPE_CHECK_BLOCK } else { "" };
    PRE_COMMIT_TEMPLATE.replace(TYPE_CHECK_PLACEHOLDER, block)
}
