use clap::Parser;
use tracing::{error, info};

use lorenz::{cli::Cli, logging::init_logging, util::graph::show_trajectory};

fn main() {
    init_logging();

    if let Err(e) = run(Cli::parse()) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> lorenz::error::Result<()> {
    let config = cli.run_config()?;
    let trajectory = config.run()?;

    let frames = trajectory.frame_count(config.frame_stride)?;
    info!(
        points = trajectory.len(),
        frames,
        first = ?trajectory.first(),
        last = ?trajectory.last(),
        finite = trajectory.is_finite(),
        "trajectory ready"
    );

    if cli.no_show {
        return Ok(());
    }

    match cli.frame {
        Some(k) => {
            let view = trajectory
                .frames(config.frame_stride)?
                .nth(k)
                .unwrap_or_else(|| trajectory.as_array());
            show_trajectory(view);
        }
        None => show_trajectory(trajectory.as_array()),
    }

    Ok(())
}
