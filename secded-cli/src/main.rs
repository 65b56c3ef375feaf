use anyhow::Result;
use clap::{Parser, Subcommand};
use secded_cli::{commands, OutputFormat};
use secded_core::DecoderConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "secded")]
#[command(about = "Secded - Hamming SEC-DED codec for 8, 16 and 32 bit payloads", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Report format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a binary payload into a codeword
    Encode {
        /// Payload as a string of 0s and 1s
        payload: String,

        /// Declared payload width (8, 16 or 32); defaults to the payload length
        #[arg(short, long)]
        width: Option<usize>,
    },

    /// Flip bits of a codeword at the given positions
    Corrupt {
        /// Codeword as a string of 0s and 1s
        codeword: String,

        /// 1-indexed position to flip (repeatable)
        #[arg(short, long = "position", required = true)]
        positions: Vec<usize>,
    },

    /// Flip randomly chosen distinct bits of a codeword
    Inject {
        /// Codeword as a string of 0s and 1s
        codeword: String,

        /// Number of bits to flip
        #[arg(short, long, default_value = "1")]
        count: usize,

        /// Seed for reproducible position choice
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Check a codeword and correct a single error
    Decode {
        /// Codeword as a string of 0s and 1s
        codeword: String,

        /// Original payload width (8, 16 or 32)
        #[arg(short, long)]
        width: usize,

        /// Correct a lone error in the overall parity bit
        #[arg(long)]
        correct_overall_parity: bool,
    },

    /// Encode a file block by block
    Pack {
        /// Input file
        #[arg(short, long)]
        input: String,

        /// Output file for the packed stream (JSON)
        #[arg(short, long)]
        output: String,

        /// Block width in bits (8, 16 or 32)
        #[arg(short, long, default_value = "32")]
        width: usize,
    },

    /// Decode a packed stream, correcting single errors per block
    Unpack {
        /// Packed stream (JSON)
        #[arg(short, long)]
        input: String,

        /// Output file for the recovered bytes
        #[arg(short, long)]
        output: String,

        /// Correct a lone error in the overall parity bit
        #[arg(long)]
        correct_overall_parity: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    // Execute command
    match cli.command {
        Commands::Encode { payload, width } => {
            commands::encode::execute(&payload, width, cli.format)
        }

        Commands::Corrupt {
            codeword,
            positions,
        } => commands::corrupt::execute(&codeword, &positions, cli.format),

        Commands::Inject {
            codeword,
            count,
            seed,
        } => commands::inject::execute(&codeword, count, seed, cli.format),

        Commands::Decode {
            codeword,
            width,
            correct_overall_parity,
        } => commands::decode::execute(
            &codeword,
            width,
            DecoderConfig {
                correct_overall_parity,
            },
            cli.format,
        ),

        Commands::Pack {
            input,
            output,
            width,
        } => commands::pack::execute(&input, &output, width),

        Commands::Unpack {
            input,
            output,
            correct_overall_parity,
        } => commands::unpack::execute(
            &input,
            &output,
            DecoderConfig {
                correct_overall_parity,
            },
        ),
    }
}
