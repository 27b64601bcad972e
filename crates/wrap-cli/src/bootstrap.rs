use anyhow::Context;
use wrap_config::WrapConfig;

use crate::cli::GlobalFlags;

/// Load `.env`, then the layered configuration plus any `--config` file.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<WrapConfig> {
    let config = WrapConfig::load_with_dotenv(flags.config.as_deref())
        .context("failed to load configuration")?;
    tracing::debug!(
        input_dir = %config.paths.input_dir.display(),
        output_dir = %config.paths.output_dir.display(),
        utc_offset = %config.analysis.utc_offset,
        "configuration loaded"
    );
    Ok(config)
}
