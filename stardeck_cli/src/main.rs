use anyhow::Result;
use clap::{Parser, ValueEnum};

use stardeck_cli::config::AppConfig;
use stardeck_cli::ui::tui_app::{PageKind, TuiApp};
use stardeck_core::utils::logger;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum PageArg {
    /// The scrollable pitch-deck slideshow
    Deck,
    /// The portfolio landing page
    Portfolio,
}

#[derive(Parser)]
#[command(name = "stardeck")]
#[command(about = "Terminal pitch-deck and portfolio presenter", long_about = None)]
struct Cli {
    /// Which page to present
    #[arg(long, value_enum)]
    page: Option<PageArg>,

    /// Target frame rate
    #[arg(long)]
    fps: Option<u16>,

    /// Start the deck with autoplay running
    #[arg(long)]
    autoplay: bool,

    /// Enable debug mode
    #[arg(short, long)]
    debug: bool,
}

fn print_banner(kind: PageKind) {
    println!(
        "{} {}",
        console::style("★ stardeck").cyan().bold(),
        console::style("— presentations with gravity").dim()
    );
    let page = match kind {
        PageKind::Deck => "pitch deck · ←/→ navigate · space autoplay · q quit",
        PageKind::Portfolio => "portfolio · ↑/↓ scroll · 1-4 filter · q quit",
    };
    println!("{}", console::style(page).dim());
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set debug environment variable if the debug flag is enabled
    if cli.debug {
        unsafe {
            std::env::set_var("STARDECK_DEBUG", "1");
        }
    }

    // Initialize global logger
    if let Err(e) = logger::init_global_logger() {
        eprintln!("⚠️ Failed to initialize logger: {}", e);
    }

    let config = AppConfig::load_or_default()?;
    let kind = match cli.page {
        Some(PageArg::Deck) => PageKind::Deck,
        Some(PageArg::Portfolio) => PageKind::Portfolio,
        None if config.page == "portfolio" => PageKind::Portfolio,
        None => PageKind::Deck,
    };
    let fps = cli.fps.unwrap_or(config.fps);
    let autoplay = cli.autoplay || config.autoplay;

    // Print banner BEFORE entering the TUI
    print_banner(kind);
    logger::info(&format!("starting {:?} page at {} fps", kind, fps));

    let mut app = TuiApp::new(kind, fps, autoplay)?;
    app.run().await?;

    Ok(())
}
