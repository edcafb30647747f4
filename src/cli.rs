// cli.rs - Command-line interface configuration
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "lights")]
#[command(about = "Rotating point-light quad viewer", long_about = None)]
pub struct Cli {
    /// Scene description file (tagged records: C color, V position, N normal)
    #[arg(default_value = "lightPolygons.txt")]
    pub scene: PathBuf,
}
