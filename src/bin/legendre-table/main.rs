mod reference;

use clap::{ArgAction, Parser};
use legendre_coefficients::legendre::{self, Kind};
use log::{info, LevelFilter};
use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// Prints the exact coefficients of the Legendre polynomials of the first
/// kind, ordinary and shifted, computed with Rodrigues' formula.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Highest degree of the ordinary Legendre polynomials P(n,x)
    #[arg(short = 'n', long, default_value_t = 13, value_name = "DEGREE")]
    max_degree: u32,

    /// Highest degree of the shifted Legendre polynomials /P(n,x)
    #[arg(short = 's', long, default_value_t = 5, value_name = "DEGREE")]
    max_shifted_degree: u32,

    /// Fail if the generated polynomials differ from the published reference
    /// values
    #[arg(short, long)]
    check: bool,

    /// Log more details, may be repeated
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<(), String> {
    let args = Args::parse();

    pretty_env_logger::formatted_builder()
        .filter_level(match args.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .init();

    println!("Legendre polynomials of the first kind.");
    print_table(Kind::Ordinary, args.max_degree, args.check)?;

    println!("\nShifted Legendre polynomials.");
    print_table(Kind::Shifted, args.max_shifted_degree, args.check)?;

    Ok(())
}

fn generate(kind: Kind, degree: u32) -> Result<String, String> {
    legendre::generate(kind, degree)
        .map(|coefficients| coefficients.to_string())
        .map_err(|why| format!("Could not generate {}({},x): {}", kind.symbol(), degree, why))
}

fn print_table(kind: Kind, max_degree: u32, check: bool) -> Result<(), String> {
    for degree in 0..=max_degree {
        println!("{}", generate(kind, degree)?);
    }

    let reference = reference::published(kind);
    println!("Reference:");
    println!("{}", reference.line);

    if check {
        let generated = generate(kind, reference.degree)?;
        if generated != reference.line {
            return Err(format!(
                "Mismatch with the reference value:\n  generated: {}\n  expected:  {}",
                generated, reference.line
            ));
        }
        info!(
            "{}({},x) matches the reference value",
            kind.symbol(),
            reference.degree
        );
    }

    Ok(())
}
