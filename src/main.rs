mod error;
mod export;
mod files;
mod record;
mod resolve;
mod source;
mod uri;

use crate::export::{export_uris, render_uri_list};
use crate::files::{expand_path, json_output_path, read_text, write_records, write_text};
use crate::resolve::{AccountSupplier, StdinPrompt};
use crate::source::SourceFormat;
use anyhow::anyhow;
use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use std::ffi::OsString;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "sntotpconverter",
    version,
    about = "Import and export files for use with Standard Notes, TOTP apps, or password managers"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Import a TOTP URI list (.txt), Apple Passwords CSV, or a Bitwarden/Vaultwarden JSON
    ///
    /// Примеры:
    ///   sntotpconverter import codes.txt codes.json
    ///   sntotpconverter import Passwords.csv authenticator
    ///   sntotpconverter import bitwarden_export.json codes.json
    #[command(disable_help_flag = true)]
    Import {
        /// Input file (.txt, .csv or .json)
        input: Option<String>,
        /// Output SN TOTP JSON (".json" is appended when the name has no dot)
        output: Option<String>,
    },

    /// Output a TOTP URI list (.txt) for use with TOTP apps
    ///
    /// Примеры:
    ///   sntotpconverter export codes.json codes.txt
    #[command(disable_help_flag = true)]
    Export {
        /// SN TOTP JSON produced by `import` or copied from Standard Notes
        input: Option<String>,
        /// Output TOTP URI list
        output: Option<String>,
    },
}

fn main() -> ExitCode {
    init_logging();
    println!("Standard Notes TOTP Converter");

    let cli = match Cli::try_parse_from(normalize_args(std::env::args_os())) {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            let _ = e.print();
            println!("Unknown command, run sntotpconverter -h for instructions");
            return ExitCode::FAILURE;
        }
    };

    let res = match cli.command {
        Commands::Import { input, output } => {
            cmd_import(input.as_deref(), output.as_deref(), &mut StdinPrompt)
        }
        Commands::Export { input, output } => cmd_export(input.as_deref(), output.as_deref()),
    };

    match res {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stdout)
        .without_time()
        .with_target(false)
        .init();
}

/// Команды принимаем в любом регистре: `IMPORT` == `import`.
fn normalize_args<I: IntoIterator<Item = OsString>>(args: I) -> Vec<OsString> {
    args.into_iter()
        .enumerate()
        .map(|(i, a)| {
            if i == 1 && (a.eq_ignore_ascii_case("import") || a.eq_ignore_ascii_case("export")) {
                a.to_ascii_lowercase()
            } else {
                a
            }
        })
        .collect()
}

/// sntotpconverter import INPUT OUTPUT
fn cmd_import(
    input: Option<&str>,
    output: Option<&str>,
    accounts: &mut dyn AccountSupplier,
) -> anyhow::Result<()> {
    let input = input.ok_or_else(|| anyhow!("No input TXT/CSV/JSON provided"))?;
    let input_path = expand_path(input);
    let format = SourceFormat::from_path(&input_path)?;

    // Проверяем до конвертации, чтобы не спрашивать аккаунты впустую
    let output = output.ok_or_else(|| anyhow!("No output path provided"))?;
    let output = json_output_path(output);

    let text = read_text(&input_path)?;
    let batch = format.normalize(&text, accounts)?;
    write_records(&expand_path(&output), &batch.items)?;

    info!(
        "Converted {} entries from {input}, skipped {}",
        batch.items.len(),
        batch.skipped
    );
    println!("The input was converted to SN TOTP JSON, saved to {output}");
    println!(
        "To save the codes to Standard Notes, make a new note, set the note to Plain Text, \
         paste the contents of the output file into SN, then change the note type to Authenticator."
    );
    Ok(())
}

/// sntotpconverter export INPUT OUTPUT
fn cmd_export(input: Option<&str>, output: Option<&str>) -> anyhow::Result<()> {
    let input = input.ok_or_else(|| anyhow!("No input JSON provided"))?;
    println!("Continuing with argument (input file path: {input})");
    let output = output.ok_or_else(|| anyhow!("No output file path provided"))?;

    let text = read_text(&expand_path(input))?;
    let batch = export_uris(&text)?;
    write_text(&expand_path(output), &render_uri_list(&batch.items))?;

    info!("Exported {} TOTP URIs, skipped {}", batch.items.len(), batch.skipped);
    println!("TOTP URIs exported from SN TOTP JSON and saved to {output}");
    println!("You may import them using authenticator apps that support importing from URI lists");
    Ok(())
}
