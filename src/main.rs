use clap::Parser;
use env_logger::Env;
use fxresolve::{
    cli::{
        args::{CliArgs, Command},
        command_handlers::{do_classifier, do_modules, do_resolve},
    },
    config::FxResolveConfig,
};

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli_args = CliArgs::parse();
    let config = FxResolveConfig::load(Some(&cli_args.config))?;

    match cli_args.cmd {
        Command::Resolve { request } => do_resolve(config, request),
        Command::Modules { modules } => do_modules(config, modules),
        Command::Classifier { platform, arch } => do_classifier(config, platform, arch),
    }
}
