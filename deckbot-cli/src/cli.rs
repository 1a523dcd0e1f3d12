//! Command-line arguments.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "deckbot")]
#[command(
    about = "Telegram bot that turns Wikipedia summaries into slide decks",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the Telegram bot (config from env; token overrides TOKEN / BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Build a deck for a topic and write it to disk; prints the slide titles.
    Render {
        /// Topic words, joined with spaces.
        #[arg(required = true)]
        topic: Vec<String>,
        /// Slide count, title included (default: DEFAULT_SLIDE_COUNT). Ignored with --flat.
        #[arg(short, long, allow_negative_numbers = true)]
        slides: Option<i64>,
        /// One sentence per slide, as for a plain text message.
        #[arg(long)]
        flat: bool,
        /// Output path (default: "<topic>.pptx").
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_render() {
        let cli = Cli::try_parse_from([
            "deckbot", "render", "Great", "Wall", "--slides", "3", "--out", "wall.pptx",
        ])
        .unwrap();
        match cli.command {
            Commands::Render { topic, slides, flat, out } => {
                assert_eq!(topic, vec!["Great", "Wall"]);
                assert_eq!(slides, Some(3));
                assert!(!flat);
                assert_eq!(out, Some(PathBuf::from("wall.pptx")));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_run_and_missing_topic() {
        let cli = Cli::try_parse_from(["deckbot", "run", "--token", "abc"]).unwrap();
        assert!(matches!(cli.command, Commands::Run { token: Some(ref t) } if t == "abc"));

        assert!(Cli::try_parse_from(["deckbot", "render"]).is_err());
    }
}
