//! seedverify-cli: check a written-down BIP-39 backup against a device seed.
//!
//! Mnemonics are read without echo unless passed with `--phrase`, and the
//! device seed comes from the environment (see [`config`]).

mod config;

use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use tracing::warn;
use zeroize::Zeroizing;

use seedverify_backup::{BackupEntry, SeedComparator, VerifyOutcome, WordInput};
use seedverify_core::Phrase;
use seedverify_core::checksum::{MnemonicLength, check_mnemonic};
use seedverify_core::constants::NOT_FOUND;
use seedverify_core::predict::next_letters;
use seedverify_core::wordlist::{index_of, word_at};

use crate::config::Config;

/// Verify a BIP-39 backup against a device master seed.
#[derive(Parser)]
#[command(name = "seedverify-cli")]
#[command(version, about = "Verify a BIP-39 backup against a device master seed.")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the word at a wordlist index.
    Word(WordArgs),
    /// Print the wordlist index of a word.
    Index(IndexArgs),
    /// Show the letters that can follow a prefix.
    Predict(PredictArgs),
    /// Validate a mnemonic's word count, words and checksum.
    Check(PhraseArgs),
    /// Compare a mnemonic against the configured device.
    Verify(VerifyArgs),
}

#[derive(Args)]
struct WordArgs {
    /// Index in 0..2048.
    index: usize,
}

#[derive(Args)]
struct IndexArgs {
    word: String,
}

#[derive(Args)]
struct PredictArgs {
    /// Typed prefix (may be empty).
    #[arg(default_value = "")]
    prefix: String,
}

#[derive(Args)]
struct PhraseArgs {
    /// Mnemonic words separated by spaces. If not provided, will prompt securely.
    ///
    /// Any run of whitespace between words is read as a single space, so
    /// input the library would reject as malformed is accepted here.
    #[arg(short, long)]
    phrase: Option<String>,
}

#[derive(Args)]
struct VerifyArgs {
    #[command(flatten)]
    input: PhraseArgs,

    /// Enter the backup one word at a time.
    #[arg(short, long, conflicts_with = "phrase", requires = "words")]
    interactive: bool,

    /// Number of words in the backup (12, 18 or 24).
    #[arg(short, long)]
    words: Option<usize>,

    /// Print the outcome as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<ExitCode> {
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_filter)),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Word(args) => word(args),
        Commands::Index(args) => index(args),
        Commands::Predict(args) => predict(args),
        Commands::Check(args) => check(args),
        Commands::Verify(args) => verify(&config, args),
    }
}

fn word(args: WordArgs) -> Result<ExitCode> {
    println!("{}", word_at(args.index)?);
    Ok(ExitCode::SUCCESS)
}

fn index(args: IndexArgs) -> Result<ExitCode> {
    match index_of(&args.word) {
        NOT_FOUND => {
            println!("{:?} is not in the wordlist", args.word);
            Ok(ExitCode::FAILURE)
        }
        i => {
            println!("{i}");
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn predict(args: PredictArgs) -> Result<ExitCode> {
    let p = next_letters(&args.prefix);
    println!("letters:  {}", p.letters);
    println!("complete: {}", p.complete);
    match p.unique {
        Some(i) => println!("unique:   {} ({i})", word_at(i as usize)?),
        None => println!("unique:   none"),
    }
    Ok(ExitCode::SUCCESS)
}

fn check(args: PhraseArgs) -> Result<ExitCode> {
    let phrase = read_phrase(args.phrase)?;
    match check_mnemonic(phrase.as_str()) {
        Ok(packed) => {
            println!("valid ({} words)", packed.length().word_count());
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            println!("invalid: {e}");
            Ok(ExitCode::FAILURE)
        }
    }
}

fn verify(config: &Config, args: VerifyArgs) -> Result<ExitCode> {
    let comparator = SeedComparator::new(config.software_device()?);

    let phrase = if args.interactive {
        let count = args.words.context("--interactive needs --words")?;
        let length = MnemonicLength::from_word_count(count)
            .with_context(|| format!("unsupported word count {count} (expected 12, 18 or 24)"))?;
        enter_backup(length)?
    } else {
        read_phrase(args.input.phrase)?
    };

    let words = phrase.word_count();
    let outcome = comparator.verify(phrase).context("verification failed")?;

    if args.json {
        let report = serde_json::json!({ "words": words, "outcome": outcome });
        println!("{report}");
    } else {
        println!(
            "{}",
            match outcome {
                VerifyOutcome::Match => "MATCH: backup reproduces the device seed",
                VerifyOutcome::Mismatch => "MISMATCH: backup is valid but for a different seed",
                VerifyOutcome::ChecksumInvalid => "INVALID: word count, unknown word or checksum",
            }
        );
    }

    Ok(if outcome.is_match() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Take the phrase from the argument or a hidden prompt, collapsing whitespace.
fn read_phrase(arg: Option<String>) -> Result<Phrase> {
    let raw = match arg {
        Some(text) => {
            warn!("mnemonic passed on the command line may be kept in shell history");
            Zeroizing::new(text)
        }
        None => prompt_secret("Enter mnemonic")?,
    };
    Ok(normalize_phrase(&raw))
}

/// Trim and collapse whitespace runs to the single spaces the validator expects.
fn normalize_phrase(raw: &str) -> Phrase {
    let words: Vec<&str> = raw.split_whitespace().collect();
    Phrase::new(words.join(" "))
}

/// Prompt for each word in turn. A unique prefix is enough to pick a word.
fn enter_backup(length: MnemonicLength) -> Result<Phrase> {
    let mut entry = BackupEntry::new(length);
    let mut input = WordInput::new();
    let total = length.word_count();

    while let Some(slot) = entry.next_empty() {
        let typed = prompt_secret(&format!("Word {}/{total}", slot + 1))?;
        match resolve_word(&mut input, typed.trim()) {
            Ok(index) => entry.set_word(slot, index)?,
            Err(e) => eprintln!("  {e}, try again"),
        }
        input.clear();
    }
    Ok(entry.into_phrase()?)
}

fn resolve_word(input: &mut WordInput, typed: &str) -> Result<u16> {
    for letter in typed.chars() {
        input.push(letter)?;
    }
    if input.ready() {
        if let Some(index) = input.submit()? {
            return Ok(index);
        }
        bail!("no word entered");
    }
    Ok(input.accept_prediction()?)
}

fn prompt_secret(prompt: &str) -> Result<Zeroizing<String>> {
    rpassword::prompt_password(format!("{prompt}: "))
        .map(Zeroizing::new)
        .context("Failed to read input")
}
