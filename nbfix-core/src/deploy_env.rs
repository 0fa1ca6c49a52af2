//! Deployment settings check
//!
//! Resolves the three settings a deployment needs, from the environment first and from
//! the user second, and renders a summary that never shows the full secret.
//!
//! The environment and the user are both behind traits ([`EnvSource`], [`Prompter`]) so the
//! resolution order can be tested without a terminal. The binary supplies the real ones.

use crate::error::PromptError;
use std::collections::HashMap;

pub const HF_HUB_TOKEN: &str = "HF_HUB_TOKEN";
/// Older name for the token, read when `HF_HUB_TOKEN` is unset
pub const HF_TOKEN: &str = "HF_TOKEN";
pub const HF_REPO_ID: &str = "HF_REPO_ID";
pub const BACKEND_API_URL: &str = "BACKEND_API_URL";

pub const TOKEN_PROMPT: &str = "Enter Hugging Face token (input hidden, or set HF_HUB_TOKEN): ";
pub const REPO_ID_PROMPT: &str =
    "Enter HF_REPO_ID (username/space-name) or leave blank to skip upload: ";
pub const BACKEND_URL_PROMPT: &str = "Enter BACKEND_API_URL for frontend (or leave blank): ";

const NOT_SET: &str = "(not set)";

/// Where settings are looked up before prompting
pub trait EnvSource {
    fn var(&self, key: &str) -> Option<String>;

    /// Like [`EnvSource::var`], but an empty value counts as unset
    fn non_empty(&self, key: &str) -> Option<String> {
        self.var(key).filter(|value| !value.is_empty())
    }
}

/// The process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Asks the user for a missing setting
pub trait Prompter {
    /// Show `message` and read a line with echo
    fn prompt(&mut self, message: &str) -> Result<String, PromptError>;

    /// Show `message` and read a line without echo
    fn prompt_hidden(&mut self, message: &str) -> Result<String, PromptError>;
}

/// Resolved deployment settings. Empty strings mean the user skipped the setting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeployEnv {
    pub hf_hub_token: String,
    pub hf_repo_id: String,
    pub backend_api_url: String,
}

impl DeployEnv {
    /// Human-readable summary, one setting per line, with the token masked
    pub fn summary(&self) -> String {
        format!(
            "\nConfiguration summary:\n{HF_HUB_TOKEN}: {}\n{HF_REPO_ID}: {}\n{BACKEND_API_URL}: {}\n",
            mask_token(&self.hf_hub_token),
            or_not_set(&self.hf_repo_id),
            or_not_set(&self.backend_api_url),
        )
    }
}

/// Read each setting from `env`, prompting for whatever is missing.
///
/// The token answer is kept verbatim; the visible answers are trimmed.
pub fn resolve_deploy_env(
    env: &impl EnvSource,
    prompter: &mut impl Prompter,
) -> Result<DeployEnv, PromptError> {
    let hf_hub_token = match env.non_empty(HF_HUB_TOKEN).or_else(|| env.non_empty(HF_TOKEN)) {
        Some(token) => token,
        None => prompter.prompt_hidden(TOKEN_PROMPT)?,
    };

    let hf_repo_id = match env.non_empty(HF_REPO_ID) {
        Some(repo) => repo,
        None => prompter.prompt(REPO_ID_PROMPT)?.trim().to_string(),
    };

    let backend_api_url = match env.non_empty(BACKEND_API_URL) {
        Some(url) => url,
        None => prompter.prompt(BACKEND_URL_PROMPT)?.trim().to_string(),
    };

    Ok(DeployEnv {
        hf_hub_token,
        hf_repo_id,
        backend_api_url,
    })
}

/// Show only the first 6 and last 4 characters of a secret.
///
/// Short secrets are not padded, so the two ends may overlap.
pub fn mask_token(token: &str) -> String {
    if token.is_empty() {
        return NOT_SET.to_string();
    }
    let chars: Vec<char> = token.chars().collect();
    let head: String = chars.iter().take(6).collect();
    let tail: String = chars[chars.len().saturating_sub(4)..].iter().collect();
    format!("{head}...{tail}")
}

fn or_not_set(value: &str) -> &str {
    if value.is_empty() {
        NOT_SET
    } else {
        value
    }
}
