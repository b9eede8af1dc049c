// inspect.rs — `edidiff inspect`: file type, delimiters and tag histogram.

use std::path::PathBuf;

use clap::Args;
use edi_diff::DiffConfig;
use edi_segment::parse_with;

#[derive(Args)]
pub struct InspectArgs {
    /// EDI file to describe.
    pub file: PathBuf,
    /// Print JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: &InspectArgs, config: &DiffConfig) -> anyhow::Result<()> {
    let mut store = super::store_for(config);
    let file = super::load(&mut store, &args.file)?;
    let delimiters = config.delimiters.resolve(&file.content);
    let parsed = parse_with(&file.content, &delimiters);
    let tags = parsed.tag_counts();

    if args.json {
        let report = serde_json::json!({
            "name": file.name,
            "id": file.id,
            "type": parsed.file_type,
            "delimiters": delimiters,
            "segments": parsed.len(),
            "tags": tags
                .iter()
                .map(|(tag, count)| serde_json::json!({ "tag": tag, "count": count }))
                .collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("File:       {}", file.name);
    println!("Type:       {}", parsed.file_type);
    println!(
        "Delimiters: element '{}', segment '{}', sub-element '{}'",
        delimiters.element, delimiters.segment, delimiters.sub_element
    );
    println!("Segments:   {}", parsed.len());
    if tags.is_empty() {
        return Ok(());
    }
    println!();
    println!("{:<6} {:>6}", "TAG", "COUNT");
    for (tag, count) in &tags {
        println!("{:<6} {:>6}", tag, count);
    }
    Ok(())
}
