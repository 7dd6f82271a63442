use anyhow::Result;
use async_trait::async_trait;
use tracing::info;

use shared_models::NotificationSettings;

/// Outbound delivery channel. The company's settings carry the provider
/// choice and credentials; implementations decide what to do with them.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageGateway: Send + Sync {
    async fn deliver(
        &self,
        settings: &NotificationSettings,
        to: &str,
        message: &str,
    ) -> Result<()>;
}

/// Stand-in for a real provider call: logs the payload and reports
/// success. Matches the behavior of the MOCK provider mode.
pub struct ConsoleGateway;

#[async_trait]
impl MessageGateway for ConsoleGateway {
    async fn deliver(
        &self,
        settings: &NotificationSettings,
        to: &str,
        message: &str,
    ) -> Result<()> {
        info!(
            "[{:?}] To: {} | Msg: {}",
            settings.provider, to, message
        );
        Ok(())
    }
}
