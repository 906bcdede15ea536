#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod args;
mod names;
mod render;

use std::{
  fs::{self, File},
  io::Write,
  path::Path,
  process::ExitCode,
};

use args::Args;
use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use util::{
  bitcode,
  error::{as_word_search_error, WordSearchError, WordSearchResult},
  time::time_future,
};
use wordsearch_gen::{GenerationResult, GenerationTask, WordSearchGenerator};

fn init_logging() {
  tracing_subscriber::registry()
    .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
    .init();
}

fn save_puzzle(path: &Path, result: &GenerationResult) -> WordSearchResult {
  let encoded = bitcode::encode(result);
  let mut file = File::create(path)?;
  file.write_all(&encoded)?;
  Ok(())
}

fn load_puzzle(path: &Path) -> WordSearchResult<GenerationResult> {
  Ok(bitcode::decode(&fs::read(path)?)?)
}

async fn generate_puzzle(args: &Args) -> WordSearchResult<GenerationResult> {
  let file_contents = args
    .names_file
    .as_deref()
    .map(names::read_names_file)
    .transpose()?;
  let names = names::collect_names(&args.names, file_contents.as_deref())?;
  let generator = WordSearchGenerator::new(args.generation_config())?;

  let seed = args.seed.unwrap_or_else(rand::random);
  info!(seed, names = names.len(), "Generating word search");

  let task = GenerationTask::submit(generator, names, StdRng::seed_from_u64(seed));
  let cancel = task.cancel_handle();
  let (elapsed, generation) = time_future(async {
    tokio::select! {
      generation = task => generation,
      _ = tokio::signal::ctrl_c() => {
        warn!("Interrupted, cancelling generation");
        cancel.cancel();
        Err(WordSearchError::Cancelled.into())
      }
    }
  })
  .await;
  let generation = generation?;

  info!(
    attempts = generation.stats.attempts,
    "Took {}s",
    elapsed.as_secs_f32()
  );
  if !generation.result.unplaced_words.is_empty() {
    warn!(
      unplaced = generation.result.unplaced_words.len(),
      "Some names couldn't fit"
    );
  }
  Ok(generation.result)
}

async fn run(args: Args) -> WordSearchResult {
  let result = match &args.load {
    Some(path) => load_puzzle(path)?,
    None => generate_puzzle(&args).await?,
  };

  if let Some(path) = &args.save {
    save_puzzle(path, &result)?;
    info!("Saved puzzle to {}", path.display());
  }

  print!("{}", render::render(&result, args.format)?);
  Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
  init_logging();
  match run(Args::parse()).await {
    Ok(()) => ExitCode::SUCCESS,
    Err(err) if as_word_search_error(err.as_ref()) == Some(&WordSearchError::Cancelled) => {
      warn!("{err}");
      ExitCode::from(130)
    }
    Err(err) => {
      error!("Error: {err}");
      ExitCode::FAILURE
    }
  }
}
