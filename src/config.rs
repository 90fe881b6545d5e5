use std::path::PathBuf;

use clap::Parser;

use crate::state::Page;

/// Dashboard for the sentiment-analysis pipeline's CSV snapshots.
#[derive(Debug, Clone, Parser)]
#[command(name = "sentimen-dashboard", version, about)]
pub struct Config {
    /// Folder holding crawl1.csv, data_berlabel.csv, data_bersih.csv,
    /// data_label_final.csv, loss_data.csv and evaluation.csv.
    #[arg(long, env = "DASHBOARD_DATA_DIR", default_value = "data")]
    pub data_dir: PathBuf,

    /// Page shown at start-up.
    #[arg(long, value_enum, default_value_t = Page::Home)]
    pub page: Page,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            page: Page::Home,
        }
    }
}
