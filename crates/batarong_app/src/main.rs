use batarong_core::App;
use batarong_game::BatarongGame;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("starting Batarong");
    App::new(Box::new(BatarongGame::default())).run();
}
