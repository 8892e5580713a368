use anyhow::Context;
use log::{debug, info};

use crate::{
    cli::args::RequestArgs,
    config::FxResolveConfig,
    model::{Architecture, BuildConfiguration, Module, Platform},
    FxResolve,
};

/// Handler to resolve command
/// Prints one `configuration coordinate` line per dependency to add.
pub fn do_resolve(config: FxResolveConfig, args: RequestArgs) -> anyhow::Result<()> {
    let config = apply_overrides(config, args)?;
    let request = config.request();
    debug!("Resolving {:?}", request);

    let mut fx = FxResolve::builder().index(config.index).try_build()?;
    let configurations = request
        .configurations
        .iter()
        .map(BuildConfiguration::empty)
        .collect::<Vec<_>>();
    let reconciliation = fx
        .reconcile(&request, &configurations)
        .with_context(|| format!("Could not resolve version {}", request.version))?;

    if reconciliation.to_add.is_empty() {
        info!("No modules selected, nothing to add");
    }
    for change in reconciliation.to_add {
        println!("{} {}", change.configuration, change.coordinate);
    }
    Ok(())
}

/// Handler to modules command
pub fn do_modules(config: FxResolveConfig, modules: Option<String>) -> anyhow::Result<()> {
    let modules = match modules {
        Some(modules) => Module::parse_list(&modules)?,
        None => config.modules,
    };
    let fx = FxResolve::builder().offline().try_build()?;
    for module in fx.closure(&modules) {
        println!("{} {}", module.artifact_name(), module.module_name());
    }
    Ok(())
}

/// Handler to classifier command
pub fn do_classifier(
    config: FxResolveConfig,
    platform: Option<String>,
    arch: Option<String>,
) -> anyhow::Result<()> {
    let platform = platform.map_or(config.platform, |p| Platform::from(p.as_str()));
    let architecture = arch.map_or(config.architecture, |a| Architecture::from(a.as_str()));
    let classifier = FxResolve::classifier(&platform, &architecture)?;
    let suffix = FxResolve::archive_suffix(&platform, &architecture)?;
    println!("{} {}", classifier, suffix);
    Ok(())
}

fn apply_overrides(
    mut config: FxResolveConfig,
    args: RequestArgs,
) -> anyhow::Result<FxResolveConfig> {
    if let Some(modules) = args.modules {
        config.modules = Module::parse_list(&modules)?;
    }
    if let Some(version) = args.target_version {
        config.version = version;
    }
    if let Some(platform) = args.platform {
        config.platform = Platform::from(platform.as_str());
    }
    if let Some(arch) = args.arch {
        config.architecture = Architecture::from(arch.as_str());
    }
    if !args.configurations.is_empty() {
        config.configurations = args.configurations;
    }
    if let Some(endpoint) = args.endpoint {
        config.index.endpoint = endpoint;
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    use crate::resolver::IndexSettings;

    fn config() -> FxResolveConfig {
        FxResolveConfig {
            modules: vec![Module::Base],
            version: "#latest#".to_owned(),
            platform: Platform::Linux,
            architecture: Architecture::X86_64,
            configurations: vec!["implementation".to_owned()],
            index: IndexSettings::default(),
        }
    }

    #[test]
    fn overrides_replace_configured_values() {
        let args = RequestArgs {
            modules: Some("web".to_owned()),
            target_version: Some("21.0.1".to_owned()),
            platform: Some("darwin".to_owned()),
            arch: Some("arm64".to_owned()),
            configurations: vec!["runtimeOnly".to_owned()],
            endpoint: Some("http://localhost/select".to_owned()),
        };
        let config = apply_overrides(config(), args).unwrap();
        assert_eq!(config.modules, vec![Module::Web]);
        assert_eq!(config.version, "21.0.1");
        assert_eq!(config.platform, Platform::MacOs);
        assert_eq!(config.architecture, Architecture::Aarch64);
        assert_eq!(config.configurations, vec!["runtimeOnly"]);
        assert_eq!(config.index.endpoint, "http://localhost/select");
    }

    #[test]
    fn no_overrides_keep_configuration() {
        assert_eq!(
            apply_overrides(config(), RequestArgs::default()).unwrap(),
            config()
        );
    }

    #[test]
    fn unknown_module_override() {
        let args = RequestArgs {
            modules: Some("base;charts".to_owned()),
            ..Default::default()
        };
        assert!(apply_overrides(config(), args).is_err());
    }
}
