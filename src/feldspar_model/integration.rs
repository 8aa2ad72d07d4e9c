use std::fmt;

use feldspar_config::IntegrationSpec;

/// An opaque plugin handle registered with the build pipeline.
///
/// The pipeline owns each plugin's behavior; this layer only knows a
/// handle's registry name and the options table it was configured with.
pub trait Integration: fmt::Debug + Send + Sync {
    /// Registry name, as written in the `integrations` list.
    fn name(&self) -> &'static str;

    /// The options table handed to the plugin, opaque at this layer.
    fn options(&self) -> &serde_yaml::Mapping;

    fn spec(&self) -> IntegrationSpec {
        if self.options().is_empty() {
            IntegrationSpec::Name(self.name().to_owned())
        } else {
            IntegrationSpec::Detailed {
                name: self.name().to_owned(),
                options: self.options().clone(),
            }
        }
    }
}

/// MDX content support.
pub fn mdx(options: serde_yaml::Mapping) -> Box<dyn Integration> {
    Box::new(MdxIntegration { options })
}

/// Sitemap generation.
pub fn sitemap(options: serde_yaml::Mapping) -> Box<dyn Integration> {
    Box::new(SitemapIntegration { options })
}

const BUILTIN: &[(&str, fn(serde_yaml::Mapping) -> Box<dyn Integration>)] =
    &[("mdx", mdx), ("sitemap", sitemap)];

/// Names of the integrations the registry can resolve, in registry order.
pub fn names() -> impl Iterator<Item = &'static str> {
    BUILTIN.iter().map(|(name, _)| *name)
}

pub fn resolve(spec: IntegrationSpec) -> anyhow::Result<Box<dyn Integration>> {
    let (name, options) = spec.into_parts();
    let factory = BUILTIN
        .iter()
        .find(|(known, _)| *known == name)
        .map(|(_, factory)| *factory)
        .ok_or_else(|| {
            anyhow::format_err!(
                "unknown integration `{name}` (expected one of: {})",
                names().collect::<Vec<_>>().join(", ")
            )
        })?;
    if !options.is_empty() {
        log::debug!("Passing options through to `{name}`: {options:?}");
    }
    Ok(factory(options))
}

#[derive(Debug, Default)]
struct MdxIntegration {
    options: serde_yaml::Mapping,
}

impl Integration for MdxIntegration {
    fn name(&self) -> &'static str {
        "mdx"
    }

    fn options(&self) -> &serde_yaml::Mapping {
        &self.options
    }
}

#[derive(Debug, Default)]
struct SitemapIntegration {
    options: serde_yaml::Mapping,
}

impl Integration for SitemapIntegration {
    fn name(&self) -> &'static str {
        "sitemap"
    }

    fn options(&self) -> &serde_yaml::Mapping {
        &self.options
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_resolve_builtin() {
        for name in names() {
            let handle = resolve(IntegrationSpec::new(name)).unwrap();
            assert_eq!(handle.name(), name);
            assert!(handle.options().is_empty());
        }
    }

    #[test]
    fn test_resolve_unknown() {
        let result = resolve(IntegrationSpec::new("tailwind"));
        assert!(result.is_err());
    }

    #[test]
    fn test_options_passthrough() {
        let spec: IntegrationSpec =
            serde_yaml::from_str("name: sitemap\noptions:\n  changefreq: weekly\n").unwrap();
        let handle = resolve(spec).unwrap();
        assert_eq!(
            handle.options().get("changefreq"),
            Some(&serde_yaml::Value::from("weekly"))
        );
    }

    #[test]
    fn test_spec_round_trip() {
        let spec = IntegrationSpec::new("mdx");
        let handle = resolve(spec.clone()).unwrap();
        assert_eq!(handle.spec(), spec);
    }
}
