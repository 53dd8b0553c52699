use crate::{
    config::Config,
    services::{
        token_cache::ClientCredentialsProvider, BlobStorage, ClassifierClient, CorrectionStore,
        GraphClient, ResultsStore, TokenCache,
    },
};
use std::sync::Arc;

/// Everything a handler needs, shared through `web::Data<AppState>`
pub struct AppState {
    pub config: Config,
    pub storage: BlobStorage,
    pub classifier: ClassifierClient,
    pub graph: GraphClient,
    pub tokens: TokenCache,
    pub corrections: CorrectionStore,
    pub results: ResultsStore,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(config.http_timeout)
            .build()?;

        let provider = ClientCredentialsProvider::new(http.clone(), &config);

        Ok(Self {
            storage: BlobStorage::new(http.clone(), &config),
            classifier: ClassifierClient::new(http.clone(), config.backend_url.clone()),
            graph: GraphClient::new(http, config.graph_api_endpoint.clone()),
            tokens: TokenCache::new(Arc::new(provider)),
            corrections: CorrectionStore::default(),
            results: ResultsStore::default(),
            config,
        })
    }
}
