use crate::output::{self, Destination};
use bmhtml::config::Config;
use bmhtml::error::Result;
use bmhtml::import_export::{self, ExportFormat};
use bmhtml::utils;
use clap::Parser;
use log::info;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Bookmarks file pathname
    #[arg(short = 'i', long)]
    pub input: Option<PathBuf>,

    /// Output file pathname (standard output when omitted or "-")
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Read the default bookmarks file of this browser (opera, chrome, chromium, edge, brave)
    #[arg(short = 'b', long)]
    pub browser: Option<String>,

    /// Output format: html, outline or json
    #[arg(short = 'f', long)]
    pub format: Option<String>,

    /// Title of the generated HTML document
    #[arg(long)]
    pub title: Option<String>,

    /// Optional custom configuration file path
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// List detected browser bookmark files and exit
    #[arg(long)]
    pub list_browsers: bool,
}

pub fn handle_args(args: Cli, cfg: &Config) -> Result<()> {
    if args.list_browsers {
        let profiles = import_export::detect_browsers();
        if profiles.is_empty() {
            eprintln!("No browser profiles detected.");
        } else {
            for profile in profiles {
                println!("{}\t{}", profile.display_string(), profile.path.display());
            }
        }
        return Ok(());
    }

    let input = cfg.resolve_input(
        args.input.as_deref(),
        args.browser.as_deref(),
        utils::home_dir().as_deref(),
    )?;
    let format = ExportFormat::from_string(args.format.as_deref().unwrap_or(&cfg.format))?;
    let title = args.title.as_deref().unwrap_or(&cfg.title);

    info!("Reading bookmarks from {:?}", input);
    let tree = import_export::import_bookmarks(&input)?;

    let dest = Destination::from_arg(args.output.as_deref());
    info!("Writing {:?} output to {}", format, dest);
    output::with_writer(&dest, |out| {
        import_export::export_tree(&tree, format, title, out)
    })
}
