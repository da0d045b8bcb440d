use std::{
    fs,
    io::{self, Read, Write},
    path::PathBuf,
    time::Instant,
};

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use log::info;
use tf_idf_matrix::{
    engine::tokenizer::DEFAULT_TOKEN_PATTERN, split_documents, Corpus, SplitMode, TFIDFVectorizer, Tokenizer,
    TokenizerConfig, WeightMatrix,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Print the TF-IDF matrix of a text corpus", long_about = None)]
struct Cli {
    /// Input text files (stdin when omitted)
    files: Vec<PathBuf>,

    /// How input text is cut into documents
    #[arg(long, value_enum, default_value_t = Split::Sentences)]
    split: Split,

    /// Drop English stop words
    #[arg(long)]
    stop_words: bool,

    /// Minimum token length in characters
    #[arg(long, default_value_t = 1)]
    min_len: usize,

    /// Regex whose matches are tokens
    #[arg(long, default_value = DEFAULT_TOKEN_PATTERN)]
    pattern: String,

    /// Output format of the matrix
    #[arg(long, value_enum, default_value_t = Format::Table)]
    format: Format,

    /// Write the matrix here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print bag of words, tokenized documents, TF and IDF before the matrix
    #[arg(long)]
    stages: bool,

    /// Print the N highest weighted terms of every document
    #[arg(long)]
    top: Option<usize>,

    /// Decimal places in table output
    #[arg(long, default_value_t = 6)]
    precision: usize,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Split {
    Sentences,
    Lines,
    /// one document per input file
    Files,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Table,
    Json,
    Cbor,
}

fn read_inputs(files: &[PathBuf]) -> Result<Vec<String>> {
    if files.is_empty() {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text).context("failed to read stdin")?;
        return Ok(vec![text]);
    }
    files
        .iter()
        .map(|path| fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display())))
        .collect()
}

fn print_stages(out: &mut impl Write, tokenized: &[Vec<String>], vectorizer: &TFIDFVectorizer<f64>) -> Result<()> {
    let vocab: Vec<&str> = vectorizer.vocabulary().iter().collect();
    writeln!(out, "Unique words (Bag of Words):\n{vocab:?}\n")?;
    writeln!(out, "Tokenized documents:\n{tokenized:?}\n")?;

    let bag = vectorizer.corpus().merged_frequency();
    writeln!(out, "Word counts (most frequent first):\n{:?}", bag.sorted_frequency_vector())?;
    writeln!(out, "Most frequent: {:?}", bag.most_frequent_tokens_vector())?;
    writeln!(out, "Hapaxes: {:?}", bag.hapaxes())?;
    writeln!(out, "Unique token ratio: {:.4}\n", bag.unique_token_ratio())?;

    writeln!(out, "TF (Term Frequency):")?;
    for (i, doc) in vectorizer.corpus().documents().iter().enumerate() {
        writeln!(out, "Document {}: {:?}", i + 1, vectorizer.term_frequency(doc))?;
    }
    writeln!(out)?;

    writeln!(out, "IDF (Inverse Document Frequency):\n{:?}\n", vectorizer.inverse_document_frequency()?)?;
    Ok(())
}

fn print_top_terms(out: &mut impl Write, matrix: &WeightMatrix<f64>, n: usize) -> Result<()> {
    writeln!(out, "Top {n} terms per document:")?;
    for doc in 0..matrix.shape().0 {
        let terms: Vec<String> = matrix
            .top_terms(doc, n)
            .into_iter()
            .map(|(term, w)| format!("{term}={w:.4}"))
            .collect();
        writeln!(out, "Document {}: {}", doc + 1, terms.join(", "))?;
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    let program_start = Instant::now();

    let mut config = TokenizerConfig {
        pattern: cli.pattern.clone(),
        min_token_len: cli.min_len,
        ..TokenizerConfig::default()
    };
    if cli.stop_words {
        config = config.with_english_stop_words();
    }
    let tokenizer = Tokenizer::new(config).context("invalid tokenizer settings")?;

    let texts = read_inputs(&cli.files)?;
    let mode = match cli.split {
        Split::Sentences => SplitMode::Sentences,
        Split::Lines => SplitMode::Lines,
        Split::Files => SplitMode::Whole,
    };
    let documents: Vec<&str> = texts.iter().flat_map(|t| split_documents(t, mode)).collect();
    let tokenized: Vec<Vec<String>> = documents.iter().map(|doc| tokenizer.tokenize(doc)).collect();
    let corpus = Corpus::from_documents(tokenized.iter());
    info!("loaded {} documents, {} tokens", corpus.doc_num(), corpus.token_sum());

    let vectorizer: TFIDFVectorizer<f64> =
        TFIDFVectorizer::new(&corpus).context("cannot compute TF-IDF: no documents in input")?;
    let compute_start = Instant::now();
    let matrix = vectorizer.compute()?;
    info!(
        "computed {} x {} matrix in {:.2}ms",
        matrix.shape().0,
        matrix.shape().1,
        compute_start.elapsed().as_secs_f64() * 1000.0
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if cli.stages {
        print_stages(&mut out, &tokenized, &vectorizer)?;
    }

    let encoded: Vec<u8> = match cli.format {
        Format::Table => format!("TF-IDF matrix:\n{:.*}", cli.precision, matrix).into_bytes(),
        Format::Json => {
            let mut json = matrix.to_json()?;
            json.push('\n');
            json.into_bytes()
        }
        Format::Cbor => matrix.to_cbor()?,
    };
    match &cli.output {
        Some(path) => {
            fs::write(path, &encoded).with_context(|| format!("failed to write {}", path.display()))?;
            info!("wrote {} bytes to {}", encoded.len(), path.display());
        }
        None if cli.format == Format::Cbor => bail!("cbor output needs --output <PATH>"),
        None => out.write_all(&encoded)?,
    }

    if let Some(n) = cli.top {
        print_top_terms(&mut out, &matrix, n)?;
    }

    info!("done in {:.2}ms", program_start.elapsed().as_secs_f64() * 1000.0);
    Ok(())
}
