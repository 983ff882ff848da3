use clap::Parser;

#[derive(Parser)]
#[command(
    name = "ytscribe",
    about = "Serve a one-page form that renders YouTube caption tracks as plain text",
    version
)]
pub struct Cli {
    /// Listening port (overrides the config file)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Preferred caption language (overrides the config file)
    #[arg(short, long)]
    pub lang: Option<String>,
}
