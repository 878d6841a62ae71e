//! Startup provider choice: real adapter when a key is set, mock only when explicitly allowed.

use crate::adapters::ai::{MockAiAdapter, OpenAiAdapter};
use crate::ports::CompletionPort;
use crate::shared::AppConfig;
use std::sync::Arc;
use tracing::{info, warn};

pub const MISSING_KEY_MESSAGE: &str =
    "Set OPENAI_API_KEY (env or .env), or SOMMELIER_ALLOW_MOCK_PROVIDER=true for local development";

/// The provider chosen at startup. Built once and shared read-only by every request.
pub enum Provider {
    OpenAi(Arc<OpenAiAdapter>),
    Mock(Arc<MockAiAdapter>),
}

impl Provider {
    pub fn into_port(self) -> Arc<dyn CompletionPort> {
        match self {
            Provider::OpenAi(ai) => ai as Arc<dyn CompletionPort>,
            Provider::Mock(ai) => ai as Arc<dyn CompletionPort>,
        }
    }
}

pub fn build_provider(cfg: &AppConfig) -> anyhow::Result<Provider> {
    if let Some(key) = cfg.ai_api_key() {
        let retry = cfg.retry_policy();
        info!(
            model = %cfg.ai_model_or_default(),
            url = %cfg.ai_api_url_or_default(),
            timeout_secs = cfg.provider_timeout().as_secs(),
            max_retries = retry.max_retries,
            "using OpenAI-compatible provider"
        );
        let adapter = OpenAiAdapter::new(
            cfg.ai_api_url_or_default(),
            key,
            cfg.ai_model_or_default(),
            cfg.provider_timeout(),
            retry,
        )
        .map_err(|e| anyhow::anyhow!("{}", e))?;
        Ok(Provider::OpenAi(Arc::new(adapter)))
    } else if cfg.allow_mock_provider() {
        warn!("OPENAI_API_KEY not set, using mock AI provider (SOMMELIER_ALLOW_MOCK_PROVIDER)");
        Ok(Provider::Mock(Arc::new(MockAiAdapter::new())))
    } else {
        anyhow::bail!(MISSING_KEY_MESSAGE)
    }
}
