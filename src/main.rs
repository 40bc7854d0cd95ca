//! binstash - hide an encrypted message inside random binary cover files.
//!
//! Encrypts a message with AES-256-CBC, embeds the blob at a random offset in
//! one of several random cover files, and scans `.bin` files for byte ranges.

use binstash::codegen;
use binstash::config::ContainerConfig;
use binstash::container::generate_containers;
use binstash::crypto::{decrypt_message, encrypt_message, CipherBlob};
use binstash::scan::{scan_bin_files, NumericValue};
use binstash::Result;
use clap::{Parser, Subcommand};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "binstash")]
#[command(author, version, about, long_about = None)]
#[command(
    about = "Hide an encrypted message inside random binary cover files",
    long_about = "Encrypts a message with AES-256-CBC under a PBKDF2-derived key and embeds the blob at a random offset in one of several random cover files. A scanning companion reads byte ranges from .bin files for inspection."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a message and hide it in a batch of cover files
    Hide {
        /// Message to encrypt (default: read from stdin)
        #[arg(long)]
        message: Option<String>,

        /// Number of cover files to create
        #[arg(long, default_value = "10")]
        count: usize,

        /// Minimum cover file size in bytes
        #[arg(long, default_value = "1024")]
        min_size: u64,

        /// Maximum cover file size in bytes
        #[arg(long, default_value = "10240")]
        max_size: u64,

        /// Output directory for cover files
        #[arg(long, default_value = "bin_files")]
        dir: PathBuf,

        /// Skip the plaintext readme/technical_info files that disclose the placement
        #[arg(long)]
        no_disclosure: bool,

        /// Print an illustrative C++ retrieval program
        #[arg(long)]
        snippet: bool,
    },

    /// Decrypt a hex-encoded blob
    Reveal {
        /// Hex-encoded blob (default: read from stdin)
        #[arg(long)]
        hex: Option<String>,
    },

    /// Read a byte range from every .bin file under a directory
    Scan {
        /// Root directory to search
        root: PathBuf,

        /// Byte offset within each file
        #[arg(long)]
        offset: u64,

        /// Number of bytes to read
        #[arg(long)]
        length: usize,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Hide {
            message,
            count,
            min_size,
            max_size,
            dir,
            no_disclosure,
            snippet,
        } => {
            let config = ContainerConfig {
                count,
                min_size,
                max_size,
                dir,
                disclose: !no_disclosure,
            };
            cmd_hide(message, config, snippet)
        }

        Commands::Reveal { hex } => cmd_reveal(hex),

        Commands::Scan {
            root,
            offset,
            length,
        } => cmd_scan(&root, offset, length),
    }
}

fn prompt_password(prompt: &str) -> String {
    rpassword::prompt_password(prompt).unwrap_or_else(|_| {
        eprint!("{}", prompt);
        io::stderr().flush().unwrap();
        let mut password = String::new();
        io::stdin().read_line(&mut password).unwrap();
        password.trim().to_string()
    })
}

fn read_stdin() -> Result<String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer.trim_end().to_string())
}

fn cmd_hide(message: Option<String>, config: ContainerConfig, snippet: bool) -> Result<()> {
    let message = match message {
        Some(m) => m,
        None => read_stdin()?,
    };
    let password = prompt_password("Enter password: ");
    let mut rng = rand::thread_rng();

    let blob = encrypt_message(&message, &password, &mut rng);

    println!("Encrypted data size: {} bytes", blob.size());
    println!("Encrypted data (hex):");
    println!("{}", blob.to_hex());

    println!();
    println!("Creating cover files...");
    let (files, placement) = generate_containers(&blob, &config, &mut rng)?;

    println!(
        "Created {} cover files in {}",
        files.len(),
        config.dir.display()
    );
    println!(
        "The encrypted payload is in '{}'",
        placement.path.display()
    );
    println!("Offset: {} bytes", placement.offset);
    println!("Data size: {} bytes", placement.length);
    println!(
        "Data range: {} - {} bytes",
        placement.offset,
        placement.end()
    );

    if snippet {
        println!();
        println!("Example C++ retrieval code:");
        println!("{}", codegen::retrieval_snippet(&blob, &placement));
    }

    Ok(())
}

fn cmd_reveal(hex_input: Option<String>) -> Result<()> {
    let hex_input = match hex_input {
        Some(h) => h,
        None => read_stdin()?,
    };
    let password = prompt_password("Enter password: ");

    let blob = CipherBlob::from_hex(&hex_input)?;
    println!("Encrypted data size: {} bytes", blob.size());

    let plaintext = decrypt_message(&blob, &password)?;
    println!("Decrypted text: {}", plaintext);

    Ok(())
}

fn cmd_scan(root: &Path, offset: u64, length: usize) -> Result<()> {
    let report = scan_bin_files(root, offset, length);

    for hit in &report.hits {
        println!();
        println!("File: {}", hit.path.display());
        println!("Data at offset {}, {} bytes:", offset, length);
        println!("Hex: {}", hex::encode(&hit.bytes));
        println!("ASCII: {}", hit.text);
        match hit.numeric {
            Some(NumericValue::Int32(v)) => println!("Int32 (LE): {}", v),
            Some(NumericValue::Int64(v)) => println!("Int64 (LE): {}", v),
            None => {}
        }
    }

    if report.hits.is_empty() {
        println!("No file yielded the full byte range");
    }

    for failure in &report.failures {
        eprintln!(
            "Error reading {}: {}",
            failure.path.display(),
            failure.error
        );
    }

    Ok(())
}
