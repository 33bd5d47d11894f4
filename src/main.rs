mod archive;
mod args;
mod context;
mod definition;
mod error;
mod result;
mod scaffold;

use args::Args;
use context::Context;
use definition::ScaffoldDefinition;
use error::Error;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> result::Result<()> {
    // Parse command-line arguments
    let Args {
        verbose,
        root,
        output_dir,
        definition: definition_path,
    } = Args::parse();

    let ctx = Context::new(output_dir, verbose);

    if !ctx.output_dir.is_dir() {
        return Err(Error::custom(format!(
            "Output directory {} does not exist",
            ctx.output_dir.display()
        )));
    }

    cliclack::intro("arch-scaffold")?;

    // Load the scaffold definition
    let definition = match definition_path {
        Some(path) => {
            let definition = ScaffoldDefinition::load(&path)?;
            if verbose {
                cliclack::log::info(format!(
                    "Loaded {} entries from {}",
                    definition.len(),
                    path.display()
                ))?;
            }
            definition
        }
        None => scaffold::default_definition()?,
    };

    if definition.is_empty() {
        cliclack::log::warning("Scaffold definition has no entries, the archive will be empty")?;
    }

    let root = root
        .or_else(|| definition.root.clone())
        .unwrap_or_else(|| scaffold::DEFAULT_ROOT.to_string());

    let spinner = cliclack::spinner();
    spinner.start(format!("Writing {}...", archive::archive_file_name(&root)));

    let archive_path = match archive::write(&ctx, &root, &definition) {
        Ok(path) => {
            spinner.stop(format!("Wrote {} files", definition.len()));
            path
        }
        Err(e) => {
            spinner.error("Failed to write archive");
            return Err(e);
        }
    };

    cliclack::outro("Scaffold archive created successfully!")?;

    let file_name = archive_path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| archive_path.display().to_string());
    println!("Created {}", file_name);

    Ok(())
}
