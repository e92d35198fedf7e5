use url::Url;
use crate::core::CruduiConfig;
use crate::directory::DirectoryClient;
use crate::session::SessionRegistry;

#[derive(Debug, Clone)]
pub struct AppState {
    pub env: CruduiConfig,
    pub directory: DirectoryClient,
    pub sessions: SessionRegistry,
}

impl AppState {
    pub fn new(env: CruduiConfig) -> Result<Self, url::ParseError> {
        let directory = DirectoryClient::builder()
            .base_url(Url::parse(&env.directory_url)?)
            .build();
        Ok(AppState {
            env,
            directory,
            sessions: SessionRegistry::new(),
        })
    }
}
