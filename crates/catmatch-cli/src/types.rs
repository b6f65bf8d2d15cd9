use std::path::PathBuf;

use catmatch_model::Report;

#[derive(Debug)]
pub struct RunResult {
    pub root: PathBuf,
    pub inputs: Vec<PathBuf>,
    pub report: Report,
    /// Path actually written; `None` on a dry run.
    pub output: Option<PathBuf>,
}
