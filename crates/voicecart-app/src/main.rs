use std::path::PathBuf;

use anyhow::Context;
use voicecart_app::config::{ENV_CONFIG_PATH, load_config};
use voicecart_app::inspector::{Metrics, outline};
use voicecart_app::Shell;

const ENV_AUTOSTART: &str = "VOICECART_AUTOSTART";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let path = std::env::var_os(ENV_CONFIG_PATH).map(PathBuf::from);
    let config = load_config(path.as_deref()).context("loading app config")?;

    let agent = config.agent_name.clone();
    let mut shell = Shell::new(config, move || {
        // Session transport lives outside this binary.
        log::info!(
            "voice session requested for agent {}",
            agent.as_deref().unwrap_or("<default>")
        );
    });

    let metrics = Metrics::of(shell.compose().context("laying out welcome view")?);
    print!("{}", outline(&shell.view()));
    log::info!(
        "{} scene nodes, {} hit regions, {} semantics nodes",
        metrics.scene_nodes,
        metrics.hit_regions,
        metrics.semantics_nodes
    );

    if std::env::var(ENV_AUTOSTART).is_ok_and(|v| v == "1" || v == "true") {
        let fired = shell
            .activate_primary()
            .context("activating start button")?;
        log::info!("autostart fired: {fired}");
    }

    Ok(())
}
