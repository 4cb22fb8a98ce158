use campus_guide::app::App;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "campus_guide=info".into()),
        )
        .init();

    tracing::info!("Starting Campus Guide");
    dioxus::launch(App);
}
