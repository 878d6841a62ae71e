//! Application configuration. Provider credentials, persona, CORS, server address.

use crate::adapters::ai::RetryPolicy;
use crate::adapters::http::CorsPolicy;
use crate::domain::{DomainError, Persona, PersonaKind};
use crate::usecases::DEFAULT_FALLBACK_ADVICE;
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_PROVIDER_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    // ─────────────────────────────────────────────────────────────────────────
    // Provider Configuration
    // ─────────────────────────────────────────────────────────────────────────
    /// Provider API key. Read from OPENAI_API_KEY (or SOMMELIER_AI_API_KEY).
    #[serde(default)]
    pub ai_api_key: Option<String>,

    /// Chat completions URL. Defaults to OpenAI. Read from SOMMELIER_AI_API_URL.
    #[serde(default)]
    pub ai_api_url: Option<String>,

    /// Model name. Defaults to "gpt-4". Read from SOMMELIER_AI_MODEL.
    #[serde(default)]
    pub ai_model: Option<String>,

    /// Per-attempt provider timeout in seconds (default 30).
    #[serde(default)]
    pub provider_timeout_secs: Option<u64>,

    /// Extra attempts on transient provider failures (default 1).
    #[serde(default)]
    pub provider_max_retries: Option<u32>,

    /// Pause between attempts in ms (default 250).
    #[serde(default)]
    pub provider_retry_delay_ms: Option<u64>,

    /// Serve with the mock provider when no API key is set. Off by default: a missing key is fatal.
    #[serde(default)]
    pub allow_mock_provider: Option<bool>,

    // ─────────────────────────────────────────────────────────────────────────
    // Advice Pipeline
    // ─────────────────────────────────────────────────────────────────────────
    /// Persona name: expert | host | storefront. Read from SOMMELIER_PERSONA.
    #[serde(default)]
    pub persona: Option<String>,

    /// Replaces the persona's built-in system prompt. Read from SOMMELIER_PERSONA_PROMPT.
    #[serde(default)]
    pub persona_prompt: Option<String>,

    /// Run the topic classifier before answering (default true).
    #[serde(default)]
    pub classification_enabled: Option<bool>,

    /// Answer for out-of-domain questions. Read from SOMMELIER_FALLBACK_ADVICE.
    #[serde(default)]
    pub fallback_advice: Option<String>,

    // ─────────────────────────────────────────────────────────────────────────
    // Server / CORS
    // ─────────────────────────────────────────────────────────────────────────
    #[serde(default)]
    pub host: Option<String>,

    /// Listen port. Read from PORT (or SOMMELIER_PORT); default 5000.
    #[serde(default)]
    pub port: Option<u16>,

    /// allowlist | permissive. Read from SOMMELIER_CORS_MODE.
    #[serde(default)]
    pub cors_mode: Option<String>,

    /// Comma-separated allowed origins. Read from SOMMELIER_CORS_ORIGINS.
    #[serde(default)]
    pub cors_origins: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        Self::from_vars(std::env::vars().collect())
    }

    /// Build from an explicit variable set instead of the process environment.
    pub fn from_vars(vars: config::Map<String, String>) -> Result<Self, config::ConfigError> {
        let mut c = config::Config::builder();
        if let Some(path) = vars.get("SOMMELIER_CONFIG") {
            c = c.add_source(config::File::with_name(path));
        }
        c = c.add_source(config::Environment::with_prefix("SOMMELIER").source(Some(vars.clone())));
        let mut cfg: Self = c.build()?.try_deserialize()?;
        // OPENAI_API_KEY and PORT are read directly (no SOMMELIER_ prefix) so hosting platforms can set them
        if let Some(key) = vars.get("OPENAI_API_KEY") {
            if !key.trim().is_empty() {
                cfg.ai_api_key = Some(key.clone());
            }
        }
        if let Some(s) = vars.get("PORT") {
            if let Ok(port) = s.parse::<u16>() {
                cfg.port = Some(port);
            }
        }
        Ok(cfg)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Provider Helpers
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the API key if configured and non-blank.
    pub fn ai_api_key(&self) -> Option<String> {
        self.ai_api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
    }

    /// Returns the API URL. Defaults to OpenAI chat completions endpoint.
    pub fn ai_api_url_or_default(&self) -> String {
        self.ai_api_url
            .clone()
            .unwrap_or_else(|| "https://api.openai.com/v1/chat/completions".to_string())
    }

    /// Returns the model name. Defaults to "gpt-4".
    pub fn ai_model_or_default(&self) -> String {
        self.ai_model.clone().unwrap_or_else(|| "gpt-4".to_string())
    }

    pub fn allow_mock_provider(&self) -> bool {
        self.allow_mock_provider.unwrap_or(false)
    }

    pub fn provider_timeout(&self) -> Duration {
        Duration::from_secs(
            self.provider_timeout_secs
                .unwrap_or(DEFAULT_PROVIDER_TIMEOUT_SECS),
        )
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        let default = RetryPolicy::default();
        RetryPolicy {
            max_retries: self.provider_max_retries.unwrap_or(default.max_retries),
            delay: self
                .provider_retry_delay_ms
                .map(Duration::from_millis)
                .unwrap_or(default.delay),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Pipeline Helpers
    // ─────────────────────────────────────────────────────────────────────────

    /// Resolve the startup persona. Unknown names are an error rather than a silent default.
    pub fn persona(&self) -> Result<Persona, DomainError> {
        let kind = match self.persona.as_deref() {
            Some(name) => name.parse::<PersonaKind>()?,
            None => PersonaKind::default(),
        };
        let persona = Persona::builtin(kind);
        Ok(match self.persona_prompt.as_deref().map(str::trim) {
            Some(prompt) if !prompt.is_empty() => persona.with_system_prompt(prompt),
            _ => persona,
        })
    }

    pub fn classification_enabled(&self) -> bool {
        self.classification_enabled.unwrap_or(true)
    }

    pub fn fallback_advice_or_default(&self) -> String {
        self.fallback_advice
            .clone()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FALLBACK_ADVICE.to_string())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Server Helpers
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns "host:port". Defaults to 0.0.0.0:5000.
    pub fn bind_addr(&self) -> String {
        format!(
            "{}:{}",
            self.host.as_deref().unwrap_or("0.0.0.0"),
            self.port.unwrap_or(DEFAULT_PORT)
        )
    }

    /// Resolve the CORS policy. Defaults to the storefront allow-list.
    pub fn cors_policy(&self) -> Result<CorsPolicy, DomainError> {
        match self
            .cors_mode
            .as_deref()
            .map(|m| m.trim().to_ascii_lowercase())
            .as_deref()
        {
            None | Some("allowlist") => Ok(match self.cors_origins.as_deref() {
                Some(list) if !list.trim().is_empty() => CorsPolicy::allow_list(list.split(',')),
                _ => CorsPolicy::default(),
            }),
            Some("permissive") => Ok(CorsPolicy::Permissive),
            Some(other) => Err(DomainError::Unexpected(format!(
                "unknown CORS mode '{}' (expected allowlist or permissive)",
                other
            ))),
        }
    }
}
