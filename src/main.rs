use anyhow::Result;
use wordterm::tui::App;

fn main() -> Result<()> {
    init_tracing()?;

    let terminal = ratatui::init();
    let result = App::new().run(terminal);
    ratatui::restore();

    result
}

/// Logs go to a file so they don't tear up the TUI. Set RUST_LOG to enable.
fn init_tracing() -> Result<()> {
    if std::env::var_os("RUST_LOG").is_none() {
        return Ok(());
    }

    let file = std::fs::File::create("wordterm.log")?;
    tracing_subscriber::fmt()
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
