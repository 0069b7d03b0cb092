use std::io::Write;

use anyhow::Result;
use mealweek::{Session, command, render::Renderer};

pub fn interactive(config: mealweek::Config) -> Result<()> {
    let mut session = Session::new(config.session.start_day);
    let renderer = Renderer::new(&config.render);
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout().lock();

    writeln!(stdout, "Type 'help' for commands, 'quit' to leave.")?;
    write!(stdout, "{}", renderer.day(session.plan(), session.current_day()))?;

    command::run_interactive(&mut session, &renderer, stdin.lock(), &mut stdout)?;

    tracing::info!(meals = session.plan().len(), "session ended");

    Ok(())
}
