//! Example: Print the header fields of a chart file
//!
//! ```sh
//! cargo run --example print_fields -- tests/files/simple.sm
//! cargo run --example print_fields -- tests/files/multi_bpm.ssc --field GENRE
//! ```

use std::path::PathBuf;

use clap::Parser;
use sm_rs::{
    FieldName, SampleSelector, Simfile, SimfileError,
    sm::diagnostics::emit_extract_errors,
};

#[derive(Debug, Parser)]
#[command(about = "Prints the header fields of a StepMania chart")]
struct Args {
    /// A `.sm` or `.ssc` chart file.
    path: PathBuf,
    /// Print only this directive, such as `TITLE` or `MUSIC`.
    #[arg(long)]
    field: Option<FieldName>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), SimfileError> {
    let args = Args::parse();
    let simfile = Simfile::new(&args.path);
    let chart = simfile.read().await?;

    let fields = match args.field {
        Some(name) => vec![name],
        None => FieldName::GUARANTEED.to_vec(),
    };

    let mut errors = vec![];
    for name in fields {
        let value = match name {
            FieldName::Bpms => chart.bpm(),
            FieldName::SampleStart => chart.sample_preview(SampleSelector::Start),
            FieldName::SampleLength => chart.sample_preview(SampleSelector::Length),
            other => chart.raw(other),
        };
        match value {
            Ok(value) => println!("{name}: {value:?}"),
            Err(err) => {
                println!("{name}: <{err}>");
                errors.push(err);
            }
        }
    }

    let name = args.path.display().to_string();
    emit_extract_errors(&name, chart.as_str(), &errors);
    Ok(())
}
