//! Storybook: visual component explorer for the ui crate
//!
//! Run with hot-reload:
//! ```bash
//! systemfd --no-pid -s http::3030 -- cargo watch -x 'run -p storybook'
//! ```
//!
//! Or simple (no hot-reload):
//! ```bash
//! cargo run -p storybook
//! ```

use actix_web::middleware::Logger;
use actix_web::{App, HttpServer};
use clap::Parser;
use listenfd::ListenFd;
use tracing::{info, warn};
use tracing_subscriber::prelude::*;

use storybook::{Opts, routes};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let opts = Opts::parse();
    init_tracing();

    let mut listenfd = ListenFd::from_env();

    let server = HttpServer::new(|| {
        App::new()
            .wrap(Logger::default())
            .configure(routes::configure)
    });

    // Use systemfd socket if available, otherwise bind to host:port
    let server = if let Some(listener) = listenfd.take_tcp_listener(0)? {
        info!(addr = ?listener.local_addr().ok(), "storybook running (hot-reload)");
        server.listen(listener)?
    } else {
        let server = server.bind((opts.host.as_str(), opts.port))?;
        let url = opts.url();
        info!(%url, "storybook running");
        if !opts.no_open {
            if let Err(e) = open::that(&url) {
                warn!(?e, "failed to open browser");
            }
        }
        server
    };

    server.run().await?;
    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt};
    let _ = tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "storybook=info,ui=info,actix_web=info".into()),
        )
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
