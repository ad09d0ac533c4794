use metadata_compare::{DiffSide, ExportFormat, MetadataComparer, MetadataSnapshot};
use std::path::Path;

/// Compare two exported snapshots: `cargo run --example compare_snapshots -- left.json right.json`
fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let (Some(left), Some(right)) = (args.next(), args.next()) else {
        eprintln!("usage: compare_snapshots <left.json> <right.json>");
        std::process::exit(2);
    };

    let left = MetadataSnapshot::load(Path::new(&left))?;
    let right = MetadataSnapshot::load(Path::new(&right))?;
    let comparer = MetadataComparer::builder().build();

    let diff = comparer.compare(&left, &right);
    for (category, key, entry) in diff.entries().filter(|(_, _, e)| e.is_difference()) {
        let class = entry
            .highlight(DiffSide::Right)
            .or_else(|| entry.highlight(DiffSide::Left))
            .map_or("", |h| h.css_class());
        println!("{category:>10} {key:<32} {:<10} {class}", entry.status());
    }

    println!("\n{}", comparer.comparison_report(&left, &right));
    println!("\n{}", comparer.privacy_report(&left));
    println!("\n{}", comparer.export(&left, ExportFormat::Csv)?);

    Ok(())
}
