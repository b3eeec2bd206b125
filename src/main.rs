//! # Starcard CLI
//!
//! Renders a faction's cards from an asset directory to PNG files.
//!
//! ## Usage
//!
//! ```bash
//! # Render the combat deck of one faction
//! starcard render --assets ./assets --expansion core \
//!     --faction space-marines --card-type combat --out ./out
//!
//! # Double-size prints
//! starcard render --assets ./assets --expansion core \
//!     --faction orks --card-type orders --out ./out --scale 2.0
//!
//! # Gate pre-colon italics on unit keywords
//! starcard render --assets ./assets --expansion core \
//!     --faction orks --card-type combat --out ./out \
//!     --keyword-emphasis --emphasis-keyword Титан
//! ```

use clap::{Parser, Subcommand, ValueEnum};
use log::{error, info};
use std::path::PathBuf;
use std::sync::Arc;

use starcard::{
    CardError,
    assets::FsImageLoader,
    fonts::FontSet,
    gallery::{CanvasPainter, CardRequest, render_all},
    geometry::CardDims,
    manifest::{CardKind, FactionText, FileManifest, artwork_path},
    text::emphasis::EmphasisPolicy,
};

/// Starcard - trading card renderer
#[derive(Parser, Debug)]
#[command(name = "starcard")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render one faction's cards of one type to PNG files
    Render {
        /// Asset directory (fonts/, pictures/, factions/)
        #[arg(long)]
        assets: PathBuf,

        /// Expansion folder key, e.g. "core"
        #[arg(long)]
        expansion: String,

        /// Faction folder key, e.g. "space-marines"
        #[arg(long)]
        faction: String,

        /// Card type to render
        #[arg(long, value_enum)]
        card_type: CardTypeArg,

        /// Output directory for PNG files
        #[arg(long)]
        out: PathBuf,

        /// Card size multiplier (1.0 = 450x650)
        #[arg(long, default_value = "1.0")]
        scale: f32,

        /// Italicize pre-colon labels only when they contain a slash or
        /// one of the configured keywords
        #[arg(long)]
        keyword_emphasis: bool,

        /// Keyword for --keyword-emphasis (repeatable)
        #[arg(long = "emphasis-keyword", value_name = "WORD")]
        emphasis_keywords: Vec<String>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CardTypeArg {
    Combat,
    Orders,
    Events,
}

impl From<CardTypeArg> for CardKind {
    fn from(arg: CardTypeArg) -> CardKind {
        match arg {
            CardTypeArg::Combat => CardKind::Combat,
            CardTypeArg::Orders => CardKind::Orders,
            CardTypeArg::Events => CardKind::Events,
        }
    }
}

#[tokio::main]
async fn main() {
    env_logger::init();
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CardError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            assets,
            expansion,
            faction,
            card_type,
            out,
            scale,
            keyword_emphasis,
            emphasis_keywords,
        } => {
            let kind: CardKind = card_type.into();
            let policy = if keyword_emphasis {
                EmphasisPolicy::KeywordGated {
                    keywords: emphasis_keywords,
                }
            } else {
                EmphasisPolicy::PreColon
            };

            let manifest =
                FileManifest::parse(&std::fs::read_to_string(assets.join("factions/file_names.json"))?)?;
            let text_path = assets
                .join("factions")
                .join(&expansion)
                .join(&faction)
                .join("text.json");
            let texts = FactionText::parse(&std::fs::read_to_string(text_path)?)?;

            let fonts = Arc::new(FontSet::load_from_dir(&assets)?);
            let loader = Arc::new(FsImageLoader::new(&assets));
            let dims = CardDims::scaled(scale);
            let painter = Arc::new(CanvasPainter::new(loader, fonts, dims, policy));

            let requests: Vec<CardRequest> = manifest
                .card_files(kind)
                .iter()
                .zip(texts.records(kind))
                .map(|(file, text)| CardRequest {
                    artwork_path: artwork_path(&expansion, &faction, kind, file),
                    text,
                })
                .collect();
            let total = requests.len();
            info!("rendering {total} {} cards for {faction}/{expansion}", kind.folder());

            std::fs::create_dir_all(&out)?;
            let outcomes = render_all(painter, kind, requests).await;

            let mut failed = 0usize;
            for outcome in outcomes {
                match outcome.result {
                    Ok(img) => {
                        let path = out.join(format!("{}_{:02}.png", kind.folder(), outcome.index));
                        img.save(&path)?;
                        info!("wrote {}", path.display());
                    }
                    Err(err) => {
                        failed += 1;
                        error!("card {} failed: {err}", outcome.index);
                    }
                }
            }
            if failed > 0 {
                eprintln!("{failed} of {total} cards failed; see log for details");
            } else {
                println!("Rendered {total} cards to {}", out.display());
            }
        }
    }

    Ok(())
}
