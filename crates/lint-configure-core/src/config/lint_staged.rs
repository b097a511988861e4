//! `lint-staged.config.js`
//!
//! Commands go through `npx` so the file works unchanged for npm and yarn
//! projects.

pub const FILE_NAME: &str = "lint-staged.config.js";

pub const LINT_STAGED_CONFIG: &str = r#"module.exports = {
  "**/*.(ts|tsx)": () => "npx tsc --noEmit",
  "**/*.(ts|tsx|js|jsx)": filenames => [
    `npx eslint --fix ${filenames.join(" ")}`,
    `npx prettier --write ${filenames.join(" ")}`
  ],
  "**/*.(md|json)": filenames =>
    `npx prettier --write ${filenames.join(" ")}`
};
"#;
