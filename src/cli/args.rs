//! CLI argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "notelet")]
#[command(author, version, about = "Terminal launcher for Markdown notes", long_about = None)]
pub struct Cli {
    /// Directory holding the notes (overrides config)
    #[arg(long)]
    pub notes_dir: Option<PathBuf>,

    /// Editor command (overrides config)
    #[arg(long)]
    pub editor: Option<String>,

    /// Fuzzy-selector command (overrides config)
    #[arg(long)]
    pub selector: Option<String>,

    /// Path to an alternative config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Suppress status messages
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["notelet"]);
        assert!(cli.notes_dir.is_none());
        assert!(cli.editor.is_none());
        assert!(cli.selector.is_none());
        assert!(!cli.quiet);
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::parse_from([
            "notelet",
            "--notes-dir",
            "/tmp/notes",
            "--editor",
            "hx",
            "--selector",
            "sk",
            "--quiet",
        ]);
        assert_eq!(cli.notes_dir, Some(PathBuf::from("/tmp/notes")));
        assert_eq!(cli.editor.as_deref(), Some("hx"));
        assert_eq!(cli.selector.as_deref(), Some("sk"));
        assert!(cli.quiet);
    }
}
