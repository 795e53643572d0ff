use tracing_subscriber::EnvFilter;

fn main() -> eyre::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let matches = ecfp::command_line::command().get_matches();
    ecfp::command_line::action(&matches)
}
