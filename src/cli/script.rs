use std::{fs::File, io::BufReader, path::PathBuf};

use anyhow::{Context, Result};
use mealweek::{Session, command, render::Renderer};

pub fn run(config: mealweek::Config, script: PathBuf) -> Result<()> {
    let file = File::open(&script)
        .with_context(|| format!("failed to open script {}", script.display()))?;

    tracing::info!(script = %script.display(), "running script");

    let mut session = Session::new(config.session.start_day);
    let renderer = Renderer::new(&config.render);
    let stdout = std::io::stdout();

    command::run_script(
        &mut session,
        &renderer,
        BufReader::new(file),
        &mut stdout.lock(),
    )
    .with_context(|| format!("script {} failed", script.display()))
}
