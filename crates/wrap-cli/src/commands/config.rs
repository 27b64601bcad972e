use anyhow::Context;
use wrap_config::WrapConfig;

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::ConfigArgs;

/// Handle `wrapped config`. Always prints TOML, whatever `--format` says.
pub fn handle(args: &ConfigArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let config = if args.default {
        WrapConfig::default()
    } else {
        bootstrap::load_config(flags)?
    };
    print!("{}", render(&config)?);
    Ok(())
}

fn render(config: &WrapConfig) -> anyhow::Result<String> {
    toml::to_string_pretty(config).context("failed to render configuration as TOML")
}
