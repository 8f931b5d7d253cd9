//! Vehicle selector console entrypoint.

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use selector::catalog::{FileCatalogSource, load_catalog};
use selector::config::Config;
use selector::console::{Command, Console};
use selector::session::Session;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    config.validate()?;
    let source = FileCatalogSource::new(config.catalog_path.clone());

    if std::env::args().any(|arg| arg == "--check") {
        std::process::exit(run_check(&source).await);
    }

    tracing::info!(
        catalog = %config.catalog_path.display(),
        make_limit = config.make_limit,
        model_limit = config.model_limit,
        "Vehicle selector starting"
    );

    let session = Session::load(&source, config.limits()).await;
    let mut console = Console::new(session);

    let mut stdout = tokio::io::stdout();
    stdout
        .write_all(format!("{}\n", Command::HELP).as_bytes())
        .await?;
    stdout.flush().await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let reply = console.handle_line(&line);
        for out in &reply.lines {
            stdout.write_all(out.as_bytes()).await?;
            stdout.write_all(b"\n").await?;
        }
        stdout.flush().await?;
        if reply.quit {
            break;
        }
    }

    tracing::info!("Vehicle selector exiting");
    Ok(())
}

async fn run_check(source: &FileCatalogSource) -> i32 {
    match load_catalog(source).await {
        Ok(catalog) => {
            println!(
                "catalog ok: {} makes, {} models",
                catalog.len(),
                catalog.model_count()
            );
            0
        }
        Err(e) => {
            eprintln!("catalog check failed: {e}");
            1
        }
    }
}
