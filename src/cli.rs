//! CLI module - Command-line interface definitions and handlers

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::core::render::{OutputFormat, RenderConfig};
use crate::core::status::Status;
use crate::flows::classes::{run_classes, ClassOptions, ClassSort};
use crate::flows::common::{run_common, CommonOptions, CommonSort, OccurrenceMode};
use crate::flows::ngrams::{
    run_ngrams, NgramOptions, NgramSort, Punctuation, DEFAULT_MIN_WORDS, DEFAULT_PUNCTUATION,
    DEFAULT_ZERO_RESULTS,
};
use crate::lexicon::frequency_list::FrequencyList;
use crate::lexicon::pos::RuleTagger;
use crate::lexicon::stopwords::Stopwords;

/// corpus - comparative text analysis: shared words, shared phrases, word classes.
#[derive(Parser, Debug)]
#[command(name = "corpus")]
#[command(
    author,
    version,
    about,
    long_about = r#"corpus compares plain-text files and reports what they share.

Every command prints a result table to stdout in the selected format
(default: table). Progress and summary lines go to stderr.

Output formats:
- table: aligned plain-text columns
- jsonl: one JSON object per line
- json: a single JSON array
- md: Markdown table

Examples:
    corpus common moby.txt pequod.txt --sort frequency
    corpus ngrams a.txt b.txt c.txt --min-words 5
    corpus classes moby.txt --sort class
    corpus --format jsonl ngrams a.txt b.txt
"#
)]
pub struct Cli {
    /// Output format (table/jsonl/json/md).
    #[arg(
        long,
        global = true,
        env = "CORPUS_FORMAT",
        default_value = "table",
        value_name = "FORMAT",
        long_help = "Select the output format for the result table.\n\n\
Supported values:\n\
- table (default)\n\
- jsonl\n\
- json\n\
- md (markdown)\n\n\
Can also be set with the CORPUS_FORMAT environment variable."
    )]
    pub format: String,

    /// Pretty-print JSON/JSONL output with indentation.
    #[arg(
        long,
        global = true,
        long_help = "Pretty-print JSON and JSONL output with indentation for human readability.\n\n\
Has no effect on table/md formats."
    )]
    pub pretty: bool,

    /// Disable colored output.
    #[arg(
        long,
        global = true,
        long_help = "Disable colored status lines. This is useful when redirecting stderr\n\
to a file or when your terminal does not support ANSI colors."
    )]
    pub no_color: bool,

    /// Quiet mode (results only).
    #[arg(
        short,
        long,
        global = true,
        long_help = "Suppress progress and summary lines. Results are still printed to\n\
stdout and warnings to stderr."
    )]
    pub quiet: bool,

    /// Verbose mode (more diagnostics).
    #[arg(
        short,
        long,
        global = true,
        long_help = "Print per-file and per-window diagnostics to stderr."
    )]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List words used in every text, with frequency statistics.
    #[command(
        long_about = "Find the words that occur in every given text and report, per word,\n\
its frequency across all texts (percent of all words), its occurrence count,\n\
its length and optionally its frequency in a reference word list.\n\n\
Stopwords are removed unless --include-stopwords is given.\n\n\
Examples:\n\
  corpus common a.txt b.txt\n\
  corpus common a.txt b.txt c.txt --sort frequency --reverse\n\
  corpus common a.txt b.txt --word-frequency-list freq.txt\n"
    )]
    Common {
        /// Texts to compare (at least two).
        #[arg(value_name = "FILES", required = true, num_args = 1..)]
        files: Vec<PathBuf>,

        /// Keep stopwords in the results.
        #[arg(long)]
        include_stopwords: bool,

        /// Replace the built-in English stopword list.
        #[arg(
            long,
            value_name = "PATH",
            long_help = "Replace the built-in English stopword list with a custom list.\n\n\
One word per line; blank lines and # comments are ignored."
        )]
        stopword_list: Option<PathBuf>,

        /// Add a literary frequency column from a `word;frequency` list.
        #[arg(
            long,
            value_name = "PATH",
            long_help = "Add a literary frequency column looked up in a word frequency list.\n\n\
Each line is `word;frequency`. Words missing from the list show `unknown`.\n\
A line without `;` is an error."
        )]
        word_frequency_list: Option<PathBuf>,

        /// How occurrences are counted.
        #[arg(
            long,
            value_name = "MODE",
            default_value = "total",
            value_parser = ["total", "min"],
            long_help = "How the occurrences column is counted.\n\n\
- total (default): sum over all texts\n\
- min: smallest count in any single text"
        )]
        occurrences: String,

        /// Sort key.
        #[arg(
            long,
            value_name = "KEY",
            default_value = "occurrences",
            value_parser = ["alpha", "frequency", "occurrences", "length"]
        )]
        sort: String,

        /// Reverse the sort order.
        #[arg(long)]
        reverse: bool,
    },

    /// Find word sequences that appear verbatim in every text.
    #[command(
        long_about = "Find contiguous word sequences (n-grams) shared by every given text.\n\n\
Window sizes run from --min-words up to --max-words (by default the length of\n\
the longest sentence in any text). Punctuation tokens do not count toward a\n\
sequence's length. The search stops after --zero-results consecutive window\n\
sizes without a new full-length match (0 never stops early).\n\n\
Shorter matches contained in longer ones are hidden unless --include-subgrams\n\
is given.\n\n\
Examples:\n\
  corpus ngrams a.txt b.txt\n\
  corpus ngrams a.txt b.txt c.txt --min-words 3 --max-words 12\n\
  corpus ngrams a.txt b.txt --zero-results 0 --sort text-length\n"
    )]
    Ngrams {
        /// Texts to compare (at least two).
        #[arg(value_name = "FILES", required = true, num_args = 1..)]
        files: Vec<PathBuf>,

        /// Smallest sequence length, not counting punctuation.
        #[arg(long, value_name = "N", default_value_t = DEFAULT_MIN_WORDS)]
        min_words: usize,

        /// Largest window size (defaults to the longest sentence).
        #[arg(long, value_name = "N")]
        max_words: Option<usize>,

        /// Consecutive empty window sizes before stopping (0 disables).
        #[arg(long, value_name = "N", default_value_t = DEFAULT_ZERO_RESULTS)]
        zero_results: usize,

        /// Characters treated as punctuation.
        #[arg(long, value_name = "CHARS", default_value = DEFAULT_PUNCTUATION)]
        punctuation: String,

        /// Keep matches contained in longer matches.
        #[arg(long)]
        include_subgrams: bool,

        /// Order within each length group.
        #[arg(
            long,
            value_name = "KEY",
            default_value = "alpha",
            value_parser = ["alpha", "text-length"]
        )]
        sort: String,

        /// Reverse the order within each length group.
        #[arg(long)]
        reverse: bool,
    },

    /// Tag every distinct word of a text with its word class.
    #[command(
        long_about = "Tag every distinct word of one text with a Penn Treebank part-of-speech\n\
tag and its word class. Words are tagged in isolation, without sentence context.\n\n\
Stopwords are removed unless --include-stopwords is given.\n\n\
Examples:\n\
  corpus classes moby.txt\n\
  corpus classes moby.txt --sort class --include-stopwords\n"
    )]
    Classes {
        /// Text to classify.
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Keep stopwords in the results.
        #[arg(long)]
        include_stopwords: bool,

        /// Replace the built-in English stopword list.
        #[arg(long, value_name = "PATH")]
        stopword_list: Option<PathBuf>,

        /// Sort key.
        #[arg(
            long,
            value_name = "KEY",
            default_value = "occurrences",
            value_parser = ["alpha", "occurrences", "length", "class"]
        )]
        sort: String,

        /// Reverse the sort order.
        #[arg(long)]
        reverse: bool,
    },
}

fn load_stopwords(path: Option<&PathBuf>) -> Result<Stopwords> {
    match path {
        Some(path) => Stopwords::load(path),
        None => Ok(Stopwords::english()),
    }
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let format: OutputFormat = cli.format.parse().unwrap_or_default();
    let render_config = RenderConfig::with_pretty(format, cli.pretty);
    let status = Status::new(cli.quiet, cli.verbose, !cli.no_color);

    match cli.command {
        Commands::Common {
            files,
            include_stopwords,
            stopword_list,
            word_frequency_list,
            occurrences,
            sort,
            reverse,
        } => {
            let frequency_list = word_frequency_list
                .as_deref()
                .map(FrequencyList::load)
                .transpose()?;
            let options = CommonOptions {
                stopwords: load_stopwords(stopword_list.as_ref())?,
                include_stopwords,
                frequency_list,
                occurrences: occurrences.parse::<OccurrenceMode>().unwrap_or_default(),
                sort: sort.parse::<CommonSort>().unwrap_or_default(),
                reverse,
            };
            run_common(&files, options, &status, render_config)
        }

        Commands::Ngrams {
            files,
            min_words,
            max_words,
            zero_results,
            punctuation,
            include_subgrams,
            sort,
            reverse,
        } => {
            let options = NgramOptions {
                min_words,
                max_words,
                zero_results,
                punctuation: Punctuation::new(&punctuation)?,
                include_subgrams,
                sort: sort.parse::<NgramSort>().unwrap_or_default(),
                reverse,
            };
            run_ngrams(&files, options, &status, render_config)
        }

        Commands::Classes {
            file,
            include_stopwords,
            stopword_list,
            sort,
            reverse,
        } => {
            let options = ClassOptions {
                stopwords: load_stopwords(stopword_list.as_ref())?,
                include_stopwords,
                sort: sort.parse::<ClassSort>().unwrap_or_default(),
                reverse,
            };
            run_classes(&file, options, &RuleTagger::new(), &status, render_config)
        }
    }
}
