pub mod analytics_service;
pub mod classifier_service;
pub mod correction_store;
pub mod graph_service;
pub mod mapping_parser;
pub mod profile_service;
pub mod report_service;
pub mod results_store;
pub mod storage_service;
pub mod token_cache;

pub use classifier_service::ClassifierClient;
pub use correction_store::CorrectionStore;
pub use graph_service::GraphClient;
pub use results_store::ResultsStore;
pub use storage_service::BlobStorage;
pub use token_cache::TokenCache;
