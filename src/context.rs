use std::path::PathBuf;

/// Context passed to the archive builder containing run configuration
#[derive(Clone)]
pub struct Context {
    /// Enable verbose output (log each archive member as it is written)
    pub verbose: bool,

    /// Directory the archive is written into
    pub output_dir: PathBuf,
}

impl Context {
    pub fn new(output_dir: Option<PathBuf>, verbose: bool) -> Self {
        Self {
            verbose,
            output_dir: output_dir.unwrap_or_else(|| PathBuf::from(".")),
        }
    }
}
