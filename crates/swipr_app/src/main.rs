mod app;
mod logging;
mod render;
mod schedule;
mod share;

fn main() -> anyhow::Result<()> {
    logging::initialize(logging::LogDestination::File);
    app::run()
}
