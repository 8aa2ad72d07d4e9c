use std::fmt;
use std::path::PathBuf;

use anyhow::Context as _;

use super::integration;
use super::integration::Integration;

/// The post-processed site configuration handed to the build pipeline.
///
/// Built from a raw [`feldspar_config::Config`]; this is where the record's
/// invariants are enforced: `site` must be a syntactically valid absolute
/// URL, `base` must be root-relative, and every integration must resolve
/// against the registry.
#[derive(Debug)]
pub struct Config {
    pub root: PathBuf,
    pub site: Option<url::Url>,
    pub base: BasePath,
    pub integrations: Vec<Box<dyn Integration>>,
}

impl Config {
    pub fn from_config(config: feldspar_config::Config) -> anyhow::Result<Self> {
        let feldspar_config::Config {
            root,
            site,
            base,
            integrations,
        } = config;

        let site = site
            .map(|s| {
                url::Url::parse(&s)
                    .with_context(|| format!("`site` is not a valid absolute URL: `{s}`"))
            })
            .transpose()?;
        let base = BasePath::new(base)?;
        let integrations = integrations
            .into_iter()
            .map(integration::resolve)
            .collect::<anyhow::Result<Vec<_>>>()?;

        Ok(Self {
            root,
            site,
            base,
            integrations,
        })
    }

    fn to_spec(&self) -> feldspar_config::Config {
        feldspar_config::Config {
            root: self.root.clone(),
            site: self.site.as_ref().map(url::Url::to_string),
            base: self.base.as_str().to_owned(),
            integrations: self.integrations.iter().map(|i| i.spec()).collect(),
        }
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let converted = serde_yaml::to_string(&self.to_spec()).map_err(|_| fmt::Error)?;
        write!(f, "{converted}")
    }
}

/// Root-relative URL prefix under which all generated pages are served.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasePath(String);

impl BasePath {
    pub fn new<S: Into<String>>(path: S) -> anyhow::Result<Self> {
        Self::new_internal(path.into())
    }

    fn new_internal(path: String) -> anyhow::Result<Self> {
        anyhow::ensure!(
            path.starts_with('/'),
            "`base` must be a root-relative path starting with `/`, got `{path}`"
        );
        Ok(Self(path))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Default for BasePath {
    fn default() -> Self {
        Self("/".to_owned())
    }
}

impl AsRef<str> for BasePath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for BasePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
