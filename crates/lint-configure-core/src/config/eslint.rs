//! `.eslintrc.json` composition

use crate::answers::{Framework, UserConfiguration};
use serde_json::{json, Map, Value};

pub const FILE_NAME: &str = ".eslintrc.json";

/// Plugin name appended to `plugins` for Tailwind projects
pub const TAILWIND_PLUGIN: &str = "tailwindcss";

/// Tailwind rules and their fixed severities, in output order
pub const TAILWIND_RULES: [(&str, &str); 7] = [
    ("tailwindcss/classnames-order", "warn"),
    ("tailwindcss/enforces-negative-arbitrary-values", "warn"),
    ("tailwindcss/enforces-shorthand", "warn"),
    ("tailwindcss/migration-from-tailwind-2", "warn"),
    ("tailwindcss/no-arbitrary-value", "off"),
    ("tailwindcss/no-custom-classname", "warn"),
    ("tailwindcss/no-contradicting-classname", "error"),
];

/// Presets appended to `extends` for each framework
pub fn framework_presets(framework: Framework) -> &'static [&'static str] {
    match framework {
        Framework::NextJs => &["next", "next/core-web-vitals"],
        Framework::React => &["plugin:react/recommended"],
    }
}

fn base_rules() -> Map<String, Value> {
    [
        ("quotes", json!(["error", "double"])),
        ("prettier/prettier", json!("error")),
        ("no-console", json!("error")),
        ("simple-import-sort/imports", json!("error")),
        ("no-duplicate-imports", json!("error")),
        (
            "no-unused-vars",
            json!(["error", { "args": "all", "argsIgnorePattern": "^_" }]),
        ),
        ("no-duplicate-case", json!("error")),
        ("no-empty", json!("error")),
        ("no-use-before-define", json!("error")),
        ("class-methods-use-this", json!("error")),
        ("no-plusplus", json!(["error", { "allowForLoopAfterthoughts": true }])),
        ("no-dupe-keys", json!("error")),
        ("no-dupe-args", json!("error")),
        ("no-case-declarations", json!("error")),
    ]
    .into_iter()
    .map(|(rule, setting)| (rule.to_string(), setting))
    .collect()
}

/// Build the ESLint config document for `config`.
///
/// Key order follows the template (serde_json `preserve_order`), so identical
/// answers always serialize to identical bytes.
pub fn document(config: &UserConfiguration) -> Value {
    let mut extends = vec!["eslint:recommended", "prettier"];
    extends.extend_from_slice(framework_presets(config.framework));

    let mut plugins = vec!["prettier", "simple-import-sort"];
    let mut rules = base_rules();

    if config.uses_tailwind {
        plugins.push(TAILWIND_PLUGIN);
        for (rule, severity) in TAILWIND_RULES {
            rules.insert(rule.to_string(), Value::from(severity));
        }
    }

    json!({
        "extends": extends,
        "plugins": plugins,
        "parserOptions": {
            "ecmaFeatures": {
                "jsx": true
            }
        },
        "rules": rules
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::PackageManager;

    fn config(uses_tailwind: bool, framework: Framework) -> UserConfiguration {
        UserConfiguration {
            uses_typescript: false,
            uses_tailwind,
            package_manager: PackageManager::Npm,
            framework,
        }
    }

    fn strings(value: &Value) -> Vec<&str> {
        value
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect()
    }

    #[test]
    fn test_tailwind_block_iff_enabled() {
        for framework in [Framework::NextJs, Framework::React] {
            for tailwind in [false, true] {
                let doc = document(&config(tailwind, framework));
                let rules = doc["rules"].as_object().unwrap();
                let has_rules = TAILWIND_RULES.iter().all(|(r, _)| rules.contains_key(*r));
                let any_rule = rules.keys().any(|k| k.starts_with("tailwindcss/"));
                let has_plugin = strings(&doc["plugins"]).contains(&TAILWIND_PLUGIN);

                assert_eq!(has_rules, tailwind);
                assert_eq!(any_rule, tailwind);
                assert_eq!(has_plugin, tailwind);
            }
        }
    }

    #[test]
    fn test_framework_presets_are_exclusive() {
        let next = document(&config(false, Framework::NextJs));
        assert_eq!(
            strings(&next["extends"]),
            vec!["eslint:recommended", "prettier", "next", "next/core-web-vitals"]
        );

        let react = document(&config(true, Framework::React));
        let extends = strings(&react["extends"]);
        assert_eq!(
            extends,
            vec!["eslint:recommended", "prettier", "plugin:react/recommended"]
        );
        assert!(!extends.contains(&"next"));
    }

    #[test]
    fn test_tailwind_severities() {
        let doc = document(&config(true, Framework::NextJs));
        let rules = &doc["rules"];
        assert_eq!(rules["tailwindcss/no-arbitrary-value"], "off");
        assert_eq!(rules["tailwindcss/no-contradicting-classname"], "error");
        assert_eq!(rules["tailwindcss/classnames-order"], "warn");
    }

    #[test]
    fn test_base_rules() {
        let doc = document(&config(false, Framework::NextJs));
        let rules = &doc["rules"];
        assert_eq!(rules["quotes"], json!(["error", "double"]));
        assert_eq!(rules["prettier/prettier"], "error");
        assert_eq!(rules["no-unused-vars"][1]["argsIgnorePattern"], "^_");
        assert_eq!(rules["no-plusplus"][1]["allowForLoopAfterthoughts"], true);
        assert_eq!(rules.as_object().unwrap().len(), 14);
    }

    #[test]
    fn test_key_order_follows_template() {
        let doc = document(&config(true, Framework::NextJs));
        let keys: Vec<&String> = doc.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["extends", "plugins", "parserOptions", "rules"]);

        let rule_keys: Vec<&String> = doc["rules"].as_object().unwrap().keys().collect();
        assert_eq!(rule_keys.first().map(|k| k.as_str()), Some("quotes"));
        assert_eq!(
            rule_keys.last().map(|k| k.as_str()),
            Some("tailwindcss/no-contradicting-classname")
        );
    }
}
