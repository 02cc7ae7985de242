//! Configuration module

mod site;

pub use site::ContactConfig;
pub use site::ContentConfig;
pub use site::ContentMode;
pub use site::ServerConfig;
pub use site::SiteConfig;
