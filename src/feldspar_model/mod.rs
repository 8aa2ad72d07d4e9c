mod config;
mod integration;

pub use feldspar_config::IntegrationSpec;

pub use self::config::BasePath;
pub use self::config::Config;
pub use self::integration::Integration;
pub use self::integration::mdx;
pub use self::integration::names;
pub use self::integration::resolve;
pub use self::integration::sitemap;
