use serde::{Deserialize, Serialize};

/// Configuration from scorecard.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScorecardConfig {
    #[serde(default)]
    pub dom: DomConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub chain: ChainConfig,
}

/// Markup conventions the page uses to mark its widgets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomConfig {
    /// Class carried by every filter checkbox
    #[serde(default = "default_filter_class")]
    pub filter_class: String,
    /// Class carried by checkboxes that default to checked regardless of the URL
    #[serde(default = "default_always_on_class")]
    pub always_on_class: String,
    /// Producer elements have id `<element_prefix><producer name>`
    #[serde(default = "default_element_prefix")]
    pub element_prefix: String,
}

impl Default for DomConfig {
    fn default() -> Self {
        DomConfig {
            filter_class: default_filter_class(),
            always_on_class: default_always_on_class(),
            element_prefix: default_element_prefix(),
        }
    }
}

impl DomConfig {
    pub fn element_id(&self, producer_name: &str) -> String {
        format!("{}{}", self.element_prefix, producer_name)
    }
}

/// CSS `display` values written for shown and hidden producers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_shown")]
    pub shown: String,
    #[serde(default = "default_hidden")]
    pub hidden: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            shown: default_shown(),
            hidden: default_hidden(),
        }
    }
}

/// Names used in the emitted `cleos push action` line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainConfig {
    #[serde(default = "default_contract")]
    pub contract: String,
    #[serde(default = "default_action")]
    pub action: String,
    #[serde(default = "default_permission")]
    pub permission: String,
}

impl Default for ChainConfig {
    fn default() -> Self {
        ChainConfig {
            contract: default_contract(),
            action: default_action(),
            permission: default_permission(),
        }
    }
}

fn default_filter_class() -> String {
    "filter".to_string()
}

fn default_always_on_class() -> String {
    "filterx".to_string()
}

fn default_element_prefix() -> String {
    "bp_".to_string()
}

fn default_shown() -> String {
    "inline-block".to_string()
}

fn default_hidden() -> String {
    "none".to_string()
}

fn default_contract() -> String {
    "producerjson".to_string()
}

fn default_action() -> String {
    "set".to_string()
}

fn default_permission() -> String {
    "active".to_string()
}
