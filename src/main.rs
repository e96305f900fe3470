use anyhow::Context;
use clap::Parser;
use url::Url;

mod cli;
mod config;
mod preview;
mod scrape;
mod share;
mod web;

use config::Config;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args = cli::Args::parse();
    let mut config = Config::load(args.config.as_deref())?;

    match args.command {
        cli::Command::Daemon { listen } => {
            if let Some(listen) = listen {
                config.listen = listen;
            }
            web::start_daemon(config);
            Ok(())
        }

        cli::Command::Scrape { url } => {
            let url = Url::parse(&url).with_context(|| format!("not an absolute url: {url}"))?;
            let result = preview::scrape_content(&url, &config);
            println!("{}", serde_json::to_string_pretty(&result)?);
            Ok(())
        }

        cli::Command::Probe { url } => {
            let url = Url::parse(&url).with_context(|| format!("not an absolute url: {url}"))?;
            let client = scrape::build_client(&config.scrape)?;

            let (kind, canonical) = scrape::classify(&client, &url);
            let length = scrape::content_length(&client, &url);

            println!("kind: {kind:?}");
            match canonical {
                Some(canonical) => println!("canonical: {canonical}"),
                None => println!("canonical: -"),
            }
            println!("content length: {length}");
            Ok(())
        }

        cli::Command::ShareCount { url } => {
            let url = Url::parse(&url).with_context(|| format!("not an absolute url: {url}"))?;
            let client = scrape::build_client(&config.scrape)?;
            println!("{}", share::share_count(&client, &config.share_count_endpoint, &url));
            Ok(())
        }
    }
}
