//! `.prettierrc.json`, identical for every project

use serde::Serialize;

pub const FILE_NAME: &str = ".prettierrc.json";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrettierConfig {
    pub semi: bool,
    pub trailing_comma: &'static str,
    pub single_quote: bool,
    pub print_width: u16,
    pub tab_width: u8,
    pub use_tabs: bool,
    pub arrow_parens: &'static str,
    pub prose_wrap: &'static str,
    pub quote_props: &'static str,
    pub bracket_same_line: bool,
    pub bracket_spacing: bool,
}

pub const PRETTIER_CONFIG: PrettierConfig = PrettierConfig {
    semi: true,
    trailing_comma: "none",
    single_quote: false,
    print_width: 80,
    tab_width: 2,
    use_tabs: false,
    arrow_parens: "avoid",
    prose_wrap: "preserve",
    quote_props: "as-needed",
    bracket_same_line: false,
    bracket_spacing: true,
};
