//! Editor settings that hand formatting to Prettier and fixes to ESLint

use serde_json::{json, Value};

pub const FILE_NAME: &str = ".vscode/settings.json";

pub fn document() -> Value {
    json!({
        "editor.formatOnPaste": true,
        "editor.formatOnSave": true,
        "editor.codeActionsOnSave": {
            "source.fixAll.eslint": true
        }
    })
}
