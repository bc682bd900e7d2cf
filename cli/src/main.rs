//! quotebom CLI - quotation text to CSV bill of materials

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;
use log::debug;

use quotebom::{JsonFormat, QuoteBom};

#[derive(Parser)]
#[command(name = "quotebom")]
#[command(version)]
#[command(about = "Convert decoded quotation text to a CSV bill of materials", long_about = None)]
struct Cli {
    /// Input text file (decoded quote)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Opportunity ID stamped on every row (18 characters)
    #[arg(short = 'o', long, env = "QUOTEBOM_OPPORTUNITY_ID", default_value = "")]
    opportunity_id: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert quote text to a CSV file
    Convert {
        /// Input text file (decoded quote)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output directory (current directory if not specified)
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Opportunity ID stamped on every row (18 characters)
        #[arg(short = 'O', long, env = "QUOTEBOM_OPPORTUNITY_ID", default_value = "")]
        opportunity_id: String,

        /// Override the base product code instead of deriving it
        #[arg(long, value_name = "CODE")]
        base_product_code: Option<String>,
    },

    /// Print extracted line items as JSON
    Items {
        /// Input text file (decoded quote)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Print the extracted quote header
    Info {
        /// Input text file (decoded quote)
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Convert {
            input,
            output,
            opportunity_id,
            base_product_code,
        }) => convert(&input, output, &opportunity_id, base_product_code),
        Some(Commands::Items { input, compact }) => items(&input, compact),
        Some(Commands::Info { input }) => info(&input),
        None => match cli.input {
            Some(input) => convert(&input, None, &cli.opportunity_id, None),
            None => {
                eprintln!("{}: no input file; see --help", "error".red().bold());
                return ExitCode::FAILURE;
            }
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn process(input: &PathBuf, opportunity_id: &str, base: Option<String>) -> quotebom::Result<quotebom::Bom> {
    let text = fs::read_to_string(input)?;
    debug!("read {} bytes from {}", text.len(), input.display());
    let mut builder = QuoteBom::new().with_opportunity_id(opportunity_id);
    if let Some(code) = base {
        builder = builder.with_base_product_code(code);
    }
    builder.process(&text)
}

fn convert(
    input: &PathBuf,
    output: Option<PathBuf>,
    opportunity_id: &str,
    base: Option<String>,
) -> quotebom::Result<()> {
    let bom = process(input, opportunity_id, base)?;
    let dir = output.unwrap_or_else(|| PathBuf::from("."));
    let path = bom.write_csv_file(&dir)?;
    println!(
        "{} {} rows -> {}",
        "ok".green().bold(),
        bom.rows.len(),
        path.display()
    );
    Ok(())
}

fn items(input: &PathBuf, compact: bool) -> quotebom::Result<()> {
    let bom = process(input, "", None)?;
    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    println!("{}", quotebom::render::to_json(&bom.items, format)?);
    Ok(())
}

fn info(input: &PathBuf) -> quotebom::Result<()> {
    let bom = process(input, "", None)?;
    let header = &bom.header;
    println!("{}  {}", "Quote Number:".bold(), header.quote_number);
    println!("{}    {}", "Quote Date:".bold(), header.quote_date);
    println!("{} {}", "Quote Expires:".bold(), header.quote_expires);
    println!("{}      {}", "Customer:".bold(), header.customer_name);
    println!("{}       {}", "Partner:".bold(), header.partner_name);
    println!("{}   {}", "Prepared By:".bold(), header.prepared_by);
    println!("{}         {}", "Email:".bold(), header.email);
    println!("{}    {}", "Line Items:".bold(), bom.items.len());
    Ok(())
}
