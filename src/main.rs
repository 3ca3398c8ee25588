use clap::{Parser, Subcommand};

mod doc;
mod fields;
mod model;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "telemetry-fields")]
#[command(about = "Telemetry field alias extractor", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract aliased fields from telemetry documents (validates inputs while running).
    Extract {
        /// Alias table JSON file. Defaults to the builtin APM field table.
        #[arg(long)]
        aliases: Option<String>,

        #[arg(long)]
        docs: String,

        #[arg(short = 'o', long)]
        out: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Extract { aliases, docs, out } => {
            // 1) Load + validate the alias table (file if given, builtin otherwise).
            let table = match &aliases {
                Some(path) => {
                    let spec: fields::AliasesSpec =
                        serde_json::from_str(&std::fs::read_to_string(path)?)?;
                    spec.validate_and_build()?
                }
                None => fields::builtin_table()?,
            };

            // 2) Parse documents.
            let documents = doc::parse_doc_file(&docs)?;

            // 3) Resolve every alias against every document.
            let data = model::build_extract_report(&table, &documents);

            // 4) Write the JSON report.
            let json = serde_json::to_string_pretty(&data)?;
            std::fs::write(&out, json)?;
            println!("Wrote {}", out);
        }
    }

    Ok(())
}
