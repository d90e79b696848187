use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for dcmresidue
#[derive(Parser, Debug)]
#[command(name = "dcmresidue")]
#[command(about = "Write raw and Gaussian-filtered residue images of two DICOM files")]
#[command(version)]
pub struct Cli {
    /// Directory holding the two DICOM (.dcm) files; words are joined with spaces
    #[arg(
        value_name = "PATH",
        required = true,
        num_args = 1..,
        allow_hyphen_values = true,
        trailing_var_arg = true
    )]
    pub path: Vec<String>,
}

impl Cli {
    /// Input directory, all path words joined by single spaces
    pub fn directory(&self) -> PathBuf {
        PathBuf::from(self.path.join(" "))
    }
}
