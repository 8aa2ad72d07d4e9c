use std::fmt;

/// One entry of the `integrations` list.
///
/// Accepts either a bare name or a map carrying an options table:
///
/// ```yaml
/// integrations:
/// - mdx
/// - name: sitemap
///   options:
///     changefreq: weekly
/// ```
///
/// Options are opaque at this layer; they are handed through to the plugin
/// untouched.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum IntegrationSpec {
    Name(String),
    Detailed {
        name: String,
        #[serde(default, skip_serializing_if = "serde_yaml::Mapping::is_empty")]
        options: serde_yaml::Mapping,
    },
}

impl IntegrationSpec {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self::Name(name.into())
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Name(name) => name,
            Self::Detailed { name, .. } => name,
        }
    }

    pub fn options(&self) -> Option<&serde_yaml::Mapping> {
        match self {
            Self::Name(_) => None,
            Self::Detailed { options, .. } => (!options.is_empty()).then_some(options),
        }
    }

    pub fn into_parts(self) -> (String, serde_yaml::Mapping) {
        match self {
            Self::Name(name) => (name, serde_yaml::Mapping::new()),
            Self::Detailed { name, options } => (name, options),
        }
    }
}

impl fmt::Display for IntegrationSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
