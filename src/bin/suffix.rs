//! suffix: CLI tool printing input lines whose fields end in a known suffix.

use clap::{CommandFactory, Parser};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use suffixset::filter::{
    ExactNames, Filter, FilterConfig, LineScanner, OutputMode, SingleFieldScanner, SplitScanner,
};
use suffixset::SuffixSet;

const LONG_ABOUT: &str = "\
suffix -- domain name suffix search and print

Suffix scans input lines and tries to locate a column containing a name
matching the suffix pattern. A suffix matches a name if the latter ends with
the same labels as the suffix. Labels are delimited by dots, as in DNS.

For example suffix 'golang.org' matches 'blog.golang.org', but not
'amigolang.org'. A leading dot ('.golang.org') matches only names below the
suffix; a trailing dot ('golang.org.') matches only the suffix itself.

If no input files are provided, lines are read from stdin. Multiple patterns
can be loaded with -f, in which case no pattern is expected on the command
line.

All matching is case sensitive.";

#[derive(Parser)]
#[command(name = "suffix")]
#[command(version)]
#[command(about = "Domain name suffix search and print", long_about = LONG_ABOUT)]
struct Cli {
    /// Read name patterns from file
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    file: Option<PathBuf>,

    /// Invert match: print lines where no field matches
    #[arg(short = 'v', long = "invert-match")]
    invert: bool,

    /// Treat suffixes as FQDNs, so they must match exactly
    #[arg(short = 'F', long = "fixed-names")]
    fixed_names: bool,

    /// Column delimiter
    #[arg(short = 'd', long = "delimiter", default_value = "\t")]
    delimiter: String,

    /// Select only one column (1-based) for matching
    #[arg(short = 'c', long = "column", default_value_t = 0)]
    column: usize,

    /// Print only the matching suffix
    #[arg(long = "only-suffix", conflicts_with = "only_name")]
    only_suffix: bool,

    /// Print only the matching name
    #[arg(long = "only-name")]
    only_name: bool,

    /// Verbose output
    #[arg(long)]
    verbose: bool,

    /// Pattern (unless -f is given) followed by input files
    #[arg(value_name = "PATTERN | FILE")]
    args: Vec<String>,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let mut args = cli.args.clone();
    let set = if let Some(path) = &cli.file {
        match load_rules(path) {
            Ok(set) => set,
            Err(e) => fail(e),
        }
    } else if !args.is_empty() {
        let pattern = args.remove(0);
        let mut set = SuffixSet::new();
        if let Err(e) = set.add(&pattern) {
            fail(e.to_string());
        }
        set
    } else {
        if let Err(e) = Cli::command().print_help() {
            fail(e);
        }
        std::process::exit(2);
    };

    if let Err(e) = run(&cli, &set, &args) {
        fail(e);
    }
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("{}", message);
    std::process::exit(1);
}

fn load_rules(path: &Path) -> Result<SuffixSet, String> {
    let file = File::open(path).map_err(|e| format!("{}: {}", path.display(), e))?;
    let mut set = SuffixSet::new();
    let bytes = set
        .read_from(file)
        .map_err(|e| format!("{}: {}", path.display(), e))?;
    log::info!(
        "Loaded {} suffixes from {:?} ({} bytes)",
        set.len(),
        path,
        bytes
    );
    Ok(set)
}

fn run(cli: &Cli, set: &SuffixSet, paths: &[String]) -> Result<(), String> {
    let output = if cli.only_suffix {
        OutputMode::Suffix
    } else if cli.only_name {
        OutputMode::Field
    } else {
        OutputMode::Line
    };
    let config = FilterConfig::new(cli.invert, output);

    let filter = if cli.fixed_names {
        Filter::new(config).with_matcher(ExactNames(set))
    } else {
        Filter::new(config).with_matcher(set)
    };

    // Open every input up front so a bad path fails before any output
    let mut inputs: Vec<(String, Box<dyn BufRead>)> = Vec::new();
    for path in paths {
        let file = File::open(path).map_err(|e| format!("{}: {}", path, e))?;
        inputs.push((path.clone(), Box::new(BufReader::new(file))));
    }
    if inputs.is_empty() {
        inputs.push(("<stdin>".to_string(), Box::new(io::stdin().lock())));
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    for (name, reader) in inputs {
        let scanner = SplitScanner::new(reader, &cli.delimiter);
        let mut scanner: Box<dyn LineScanner> = if cli.column > 0 {
            Box::new(SingleFieldScanner::new(scanner, cli.column - 1))
        } else {
            Box::new(scanner)
        };

        let printed = filter
            .run(scanner.as_mut(), &mut out)
            .map_err(|e| format!("{}: {}", name, e))?;
        log::debug!("{}: {} lines printed", name, printed);
    }

    out.flush().map_err(|e| e.to_string())
}
