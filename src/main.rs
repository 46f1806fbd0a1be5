use anyhow::Result;
use clap::Parser;
use lifeboard_core::config::LifeConfig;
use lifeboard_lib::app::{headless, App};
use lifeboard_lib::cli::{Args, Mode};
use lifeboard_tui::{MouseCapture, Tui};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing(mode: Mode) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::new(std::env::var("RUST_LOG").unwrap_or_else(
        |_| "lifeboard=info,lifeboard_lib=info,lifeboard_core=info".into(),
    ));
    match mode {
        // The terminal belongs to the board; logs go to a file instead.
        Mode::Interactive => {
            let file = std::fs::File::create("lifeboard.log")?;
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(std::sync::Mutex::new(file)),
                )
                .init();
        }
        Mode::Headless => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.mode)?;

    let mut config = LifeConfig::load(&args.config);
    args.apply(&mut config)?;

    match args.mode {
        Mode::Headless => {
            let mut stdout = std::io::stdout().lock();
            let last = headless::run_headless(&config, args.generations, &mut stdout).await?;
            eprintln!("Stopped at generation {last}.");
        }
        Mode::Interactive => {
            let mut tui = Tui::enter(MouseCapture::On)?;

            let res = match App::new(config) {
                Ok(mut app) => app.run(&mut tui).await,
                Err(e) => Err(e),
            };

            tui.leave()?;

            if let Err(e) = res {
                eprintln!("Application error: {e}");
            } else {
                println!("Exited clean.");
            }
        }
    }

    Ok(())
}
