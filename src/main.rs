use std::net::SocketAddr;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use layouts::{App, Server, pages, routes};

/// Serve the flexbox, grid and responsive layout demo pages.
#[derive(Parser)]
#[command(name = "layouts", version, long_about = None)]
struct Cli {
    /// Address to listen on.
    #[arg(short, long, env = "LAYOUTS_ADDR", default_value = "127.0.0.1:3000")]
    addr: SocketAddr,

    /// Print the route table and exit.
    #[arg(long)]
    routes: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "layouts=info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let router = routes::draw().context("building the route table")?;

    if cli.routes {
        for binding in router.bindings() {
            println!("{binding}");
        }
        return Ok(());
    }

    let app = App::new(router, pages::controller()).context("wiring routes to the pages controller")?;
    let server = Server::bind(cli.addr)
        .await
        .with_context(|| format!("binding {}", cli.addr))?;
    server.serve(app).await.context("serving")?;
    Ok(())
}
