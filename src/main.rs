use std::fs;
use std::path::PathBuf;

use clap::Parser;
use fstab_reader::{Fstab, ParseOptions};

/// Print the entries of an fstab(5) file.
#[derive(Parser, Debug)]
#[command(name = "fstab-dump")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the fstab file
    #[arg(default_value = "/etc/fstab")]
    path: PathBuf,

    /// Text encoding label of the file (e.g. utf-8, latin1)
    #[arg(long)]
    encoding: Option<String>,

    /// Only show entries of this filesystem type (repeatable)
    #[arg(long = "vfs-type")]
    vfs_types: Vec<String>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let data = match fs::read(&cli.path) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("ERROR: Failed to read {}", cli.path.display());
            eprintln!("  {}", e);
            std::process::exit(1);
        }
    };

    let options = ParseOptions {
        encoding: cli.encoding,
    };
    let fstab = match Fstab::parse_with(&data, &options) {
        Ok(fstab) => fstab,
        Err(e) => {
            eprintln!("ERROR: Failed to parse {}", cli.path.display());
            eprintln!("  {}", e);
            std::process::exit(1);
        }
    };

    let shown = if cli.vfs_types.is_empty() {
        fstab.clone()
    } else {
        fstab.filter(|entry| entry.has_vfs_type(cli.vfs_types.as_slice()))
    };

    println!("Reading fstab: {}", cli.path.display());
    println!("{}", "=".repeat(60));
    for (i, entry) in shown.iter().enumerate() {
        let check = if entry.is_checked() { "fsck" } else { "-" };
        println!("  {}. {}  [{}]", i + 1, entry, check);
    }
    println!("{}", "=".repeat(60));
    println!("{} of {} entries shown", shown.len(), fstab.len());
}
