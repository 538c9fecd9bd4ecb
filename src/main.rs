use anyhow::Result;

mod app;
mod logging;

fn main() -> Result<()> {
    let args = move_it::cli::parse();
    app::run(args)
}
