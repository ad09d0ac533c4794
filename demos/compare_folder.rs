use metadata_compare::{MetadataComparer, MetadataSnapshot};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Compare every exported snapshot in a folder against the first one found.
fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    env_logger::init();

    let start_dir = std::env::args().nth(1).unwrap_or_else(|| ".".to_string());
    let mut files: Vec<PathBuf> = WalkDir::new(Path::new(&start_dir))
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(walkdir::DirEntry::into_path)
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();

    let Some((baseline_path, rest)) = files.split_first() else {
        println!("No snapshot files found in {start_dir}");
        return Ok(());
    };

    let baseline = MetadataSnapshot::load(baseline_path)?;
    let others = rest
        .iter()
        .map(|path| MetadataSnapshot::load(path))
        .collect::<Result<Vec<_>, _>>()?;

    let comparer = MetadataComparer::builder().build();
    let results = comparer.compare_many(&baseline, &others);

    println!("Baseline: {}", baseline_path.display());
    for (path, diff) in rest.iter().zip(&results) {
        println!("\t{}: {}", path.display(), diff.summary());
    }

    Ok(())
}
