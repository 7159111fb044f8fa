use anyhow::Context;
use ramen_menu::{config::Config, view::Page, Catalog, HttpRamenApi};
use tokio::io::{AsyncBufReadExt, BufReader};

mod commands;

use commands::{MenuAction, USAGE};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .with_ansi(true)
        .with_file(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("fail to setup logging")?;

    let api = HttpRamenApi::new(&config.api_url)?;
    tracing::info!(url = %api.base(), "using ramen api");

    let mut catalog = Catalog::new(api, Page::new());
    if let Err(e) = catalog.initialize().await {
        println!("fail to load the menu: {e}");
    }
    println!("{}", catalog.view());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let action = match MenuAction::new(&line) {
            Ok(MenuAction::Quit) => break,
            Ok(action) => action,
            Err(hint) => {
                println!("{hint}\n\n{USAGE}");
                continue;
            }
        };

        match action.run(&mut catalog).await {
            Ok(out) => println!("{out}"),
            Err(e) => println!("Error: {e}"),
        }
    }

    Ok(())
}
