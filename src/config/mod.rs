//! Configuration module

mod site;

pub use site::CanonicalPolicy;
pub use site::CmsConfig;
pub use site::Mode;
pub use site::SiteConfig;
pub use site::TaxonomyConfig;
