pub mod analytics;
pub mod classification;
pub mod correction;
pub mod user_profile;

pub use analytics::*;
pub use classification::*;
pub use correction::*;
pub use user_profile::*;
