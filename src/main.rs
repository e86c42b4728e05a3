//! Sentiment classifier CLI.
//!
//! Trains (or loads) the positive/negative frequency tables, then
//! classifies text from the command line, from stdin, or scores a pair of
//! held-out files.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use polarus::classifier::Classifier;
use polarus::corpus::{CorpusSource, FileCorpus};
use polarus::store::{save_table_pair, JsonFileStore};
use polarus::training::train_from_corpora;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "polarus")]
#[command(about = "Naive Bayes sentiment classifier", long_about = None)]
struct Cli {
  #[command(subcommand)]
  command: Commands,

  /// Verbosity level
  #[arg(short, long, default_value = "info")]
  log_level: String,
}

#[derive(clap::Args)]
struct DataArgs {
  /// Positive training corpus, one review per line
  #[arg(short, long, default_value = "pos_review.txt")]
  positive: PathBuf,

  /// Negative training corpus, one review per line
  #[arg(short, long, default_value = "neg_review.txt")]
  negative: PathBuf,

  /// Directory holding the cached frequency tables
  #[arg(short, long, default_value = ".")]
  cache_dir: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
  /// Retrain from the corpora and overwrite the cached tables
  Train {
    #[command(flatten)]
    data: DataArgs,
  },

  /// Classify a single text and print its label
  Classify {
    /// Text to classify
    text: String,

    #[command(flatten)]
    data: DataArgs,
  },

  /// Classify lines typed on stdin, one at a time
  Interactive {
    #[command(flatten)]
    data: DataArgs,
  },

  /// Report accuracy over two held-out labeled files
  Eval {
    /// Held-out positive lines
    held_out_positive: PathBuf,

    /// Held-out negative lines
    held_out_negative: PathBuf,

    #[command(flatten)]
    data: DataArgs,
  },
}

/// Loads cached tables when both are present, otherwise trains and caches.
fn build_classifier(data: &DataArgs) -> Result<Classifier> {
  let store = JsonFileStore::new(&data.cache_dir);
  let positive = FileCorpus::new(&data.positive);
  let negative = FileCorpus::new(&data.negative);
  Ok(Classifier::load_or_train(&store, &positive, &negative)?)
}

fn main() -> Result<()> {
  let cli = Cli::parse();

  // Setup logging
  let level = match cli.log_level.as_str() {
    "trace" => Level::TRACE,
    "debug" => Level::DEBUG,
    "info" => Level::INFO,
    "warn" => Level::WARN,
    "error" => Level::ERROR,
    _ => Level::INFO,
  };

  let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
  tracing::subscriber::set_global_default(subscriber)?;

  match cli.command {
    Commands::Train { data } => {
      info!("Training from {:?} and {:?}", data.positive, data.negative);

      let positive = FileCorpus::new(&data.positive);
      let negative = FileCorpus::new(&data.negative);
      let (pos, neg) = train_from_corpora(&positive, &negative)?;
      save_table_pair(&JsonFileStore::new(&data.cache_dir), &pos, &neg)?;

      println!(
        "Trained tables: {} distinct positive tokens, {} distinct negative tokens",
        pos.distinct(),
        neg.distinct()
      );
    }

    Commands::Classify { text, data } => {
      let classifier = build_classifier(&data)?;
      let scores = classifier.score(&text);

      info!(
        "Scores: positive {:.4}, negative {:.4}, margin {:.4}",
        scores.positive,
        scores.negative,
        scores.margin()
      );
      println!("{}", scores.label());
    }

    Commands::Interactive { data } => {
      let classifier = build_classifier(&data)?;
      println!("What do you want to classify? One line at a time; Ctrl-D exits.");

      let stdin = io::stdin();
      let mut line = String::new();
      loop {
        print!("> ");
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
          break;
        }

        let text = line.trim_end_matches(['\r', '\n']);
        if text.trim().is_empty() {
          continue;
        }
        println!("{}", classifier.classify(text));
      }
    }

    Commands::Eval {
      held_out_positive,
      held_out_negative,
      data,
    } => {
      let classifier = build_classifier(&data)?;

      let positive_lines = FileCorpus::new(&held_out_positive).read_lines()?;
      let negative_lines = FileCorpus::new(&held_out_negative).read_lines()?;
      let accuracy = classifier.accuracy(&positive_lines, &negative_lines);

      println!(
        "Accuracy: {:.3} over {} held-out lines",
        accuracy,
        positive_lines.len() + negative_lines.len()
      );
    }
  }

  Ok(())
}
