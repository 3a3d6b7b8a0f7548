use clap::Parser;
use std::path::PathBuf;

/// Translate filenames in a directory.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// The source language (e.g., "en")
    pub src_lang: String,

    /// The target language (e.g., "es")
    pub trg_lang: String,

    /// The source directory path
    pub source_directory: PathBuf,

    /// The target directory path
    pub target_directory: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_positionals() {
        let args = Args::try_parse_from(["transname", "en", "es", "in", "out"]).unwrap();
        assert_eq!(args.src_lang, "en");
        assert_eq!(args.trg_lang, "es");
        assert_eq!(args.source_directory, PathBuf::from("in"));
        assert_eq!(args.target_directory, PathBuf::from("out"));
        assert!(!args.verbose);
        assert!(args.config.is_none());
    }

    #[test]
    fn test_flags_and_missing_positionals() {
        let args = Args::try_parse_from(["transname", "-v", "-c", "t.toml", "en", "de", "a", "b"]).unwrap();
        assert!(args.verbose);
        assert_eq!(args.config, Some(PathBuf::from("t.toml")));

        assert!(Args::try_parse_from(["transname", "en", "es", "in"]).is_err());
    }
}
