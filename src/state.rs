use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::Config;
use crate::data::loader::TableCache;
use crate::data::model::{CellValue, Table};
use crate::error::Result;

// ---------------------------------------------------------------------------
// Pages
// ---------------------------------------------------------------------------

/// The fixed sidebar menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Page {
    Home,
    Raw,
    Labeled,
    Preprocessing,
    BinaryRelevance,
    Loss,
    Evaluation,
}

impl Page {
    pub const ALL: [Page; 7] = [
        Page::Home,
        Page::Raw,
        Page::Labeled,
        Page::Preprocessing,
        Page::BinaryRelevance,
        Page::Loss,
        Page::Evaluation,
    ];

    /// Sidebar label.
    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "🏠 Beranda",
            Page::Raw => "📜 Data Awal",
            Page::Labeled => "🏷️ Data Setelah Labeling",
            Page::Preprocessing => "🛠️ Data Setelah Preprocessing",
            Page::BinaryRelevance => "🧩 Data Binary Relevance",
            Page::Loss => "📉 Training & Validation Loss",
            Page::Evaluation => "📊 Evaluasi Model",
        }
    }

    /// Heading shown at the top of the page.
    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "📊 Dashboard Analisis Sentimen Multi Aspek",
            Page::Raw => "📜 Data Awal Sebelum Labeling",
            Page::Labeled => "🏷️ Data Setelah Labeling",
            Page::Preprocessing => "🛠️ Data Setelah Preprocessing",
            Page::BinaryRelevance => "🧩 Data dalam Bentuk Binary Relevance",
            Page::Loss => "📉 Training & Validation Loss",
            Page::Evaluation => "📊 Evaluasi Model",
        }
    }

    /// The CSV file this page reads; `None` for the home page.
    pub fn file_name(self) -> Option<&'static str> {
        match self {
            Page::Home => None,
            Page::Raw => Some("crawl1.csv"),
            Page::Labeled => Some("data_berlabel.csv"),
            Page::Preprocessing => Some("data_bersih.csv"),
            Page::BinaryRelevance => Some("data_label_final.csv"),
            Page::Loss => Some("loss_data.csv"),
            Page::Evaluation => Some("evaluation.csv"),
        }
    }
}

// ---------------------------------------------------------------------------
// Preprocessing stages
// ---------------------------------------------------------------------------

/// Preprocessing stages; each label is also the column name in `data_bersih.csv`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Stage {
    #[default]
    Cleaning,
    RemoveEmoji,
    ReplaceTom,
    CaseFolding,
    Tokenizing,
    Formalization,
    StopwordRemoval,
    Stemming,
}

impl Stage {
    pub const ALL: [Stage; 8] = [
        Stage::Cleaning,
        Stage::RemoveEmoji,
        Stage::ReplaceTom,
        Stage::CaseFolding,
        Stage::Tokenizing,
        Stage::Formalization,
        Stage::StopwordRemoval,
        Stage::Stemming,
    ];

    pub fn column(self) -> &'static str {
        match self {
            Stage::Cleaning => "Cleaning",
            Stage::RemoveEmoji => "Hapus Emoji",
            Stage::ReplaceTom => "Replace TOM",
            Stage::CaseFolding => "Case Folding",
            Stage::Tokenizing => "Tokenizing",
            Stage::Formalization => "Formalisasi",
            Stage::StopwordRemoval => "Stopword Removal",
            Stage::Stemming => "Stemming",
        }
    }
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

/// One user interaction. Each event is applied by [`AppState::handle`]; the
/// next frame then renders the current page from scratch.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    SelectPage(Page),
    QueryChanged(String),
    StageChanged(Stage),
    EpochChanged(CellValue),
    ReloadData,
    DataDirChanged(PathBuf),
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
#[derive(Debug)]
pub struct AppState {
    /// Folder the page files are read from.
    pub data_dir: PathBuf,

    /// Currently selected page.
    pub page: Page,

    /// Search box contents; empty means no filter.
    pub query: String,

    /// Selected preprocessing stage.
    pub stage: Stage,

    /// Selected epoch on the loss page (None until the user picks one).
    pub loss_epoch: Option<CellValue>,

    /// Selected epoch on the evaluation page.
    pub eval_epoch: Option<CellValue>,

    /// Memoized file loads.
    cache: TableCache,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            data_dir: config.data_dir.clone(),
            page: config.page,
            query: String::new(),
            stage: Stage::default(),
            loss_epoch: None,
            eval_epoch: None,
            cache: TableCache::new(),
        }
    }

    /// Apply one interaction.
    pub fn handle(&mut self, event: UiEvent) {
        log::debug!("event: {event:?}");
        match event {
            UiEvent::SelectPage(page) => {
                if page != self.page {
                    self.page = page;
                    self.query.clear();
                }
            }
            UiEvent::QueryChanged(query) => self.query = query,
            UiEvent::StageChanged(stage) => self.stage = stage,
            UiEvent::EpochChanged(epoch) => match self.page {
                Page::Loss => self.loss_epoch = Some(epoch),
                Page::Evaluation => self.eval_epoch = Some(epoch),
                _ => {}
            },
            UiEvent::ReloadData => self.cache.clear(),
            UiEvent::DataDirChanged(dir) => {
                log::info!("data folder is now {}", dir.display());
                self.data_dir = dir;
                self.loss_epoch = None;
                self.eval_epoch = None;
            }
        }
    }

    /// Path of the file a page reads.
    pub fn page_path(&self, page: Page) -> Option<PathBuf> {
        page.file_name().map(|f| self.data_dir.join(f))
    }

    /// Load a file through the cache.
    pub fn load(&mut self, path: &Path) -> Result<Arc<Table>> {
        self.cache.load(path)
    }

    /// Table for the current page; `None` on the home page.
    pub fn current_table(&mut self) -> Option<Result<Arc<Table>>> {
        let path = self.page_path(self.page)?;
        Some(self.load(&path))
    }

    /// The epoch the current page should show: the stored choice if the
    /// table still has it, otherwise the first epoch.
    pub fn selected_epoch(&self, epochs: &[CellValue]) -> Option<CellValue> {
        let stored = match self.page {
            Page::Loss => self.loss_epoch.as_ref(),
            Page::Evaluation => self.eval_epoch.as_ref(),
            _ => None,
        };
        stored
            .filter(|e| epochs.contains(e))
            .or_else(|| epochs.first())
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::data::filter::{preview, search};
    use crate::data::loss::loss_curves;
    use crate::error::DashboardError;

    fn state_in(dir: &Path) -> AppState {
        AppState::new(&Config {
            data_dir: dir.to_path_buf(),
            page: Page::Home,
        })
    }

    #[test]
    fn every_data_page_has_its_own_file() {
        let state = AppState::default();
        let paths: Vec<_> = Page::ALL.iter().map(|&p| state.page_path(p)).collect();
        assert_eq!(paths[0], None);
        assert_eq!(paths[1], Some(PathBuf::from("data/crawl1.csv")));
        assert_eq!(paths[3], Some(PathBuf::from("data/data_bersih.csv")));
        assert_eq!(paths[5], Some(PathBuf::from("data/loss_data.csv")));
        assert_eq!(paths[6], Some(PathBuf::from("data/evaluation.csv")));
    }

    #[test]
    fn home_page_loads_nothing() {
        let dir = TempDir::new().unwrap();
        let mut state = state_in(dir.path());
        assert!(state.current_table().is_none());
    }

    #[test]
    fn missing_file_fails_only_that_page() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("data_berlabel.csv"), "teks,label\nbagus,positif\n").unwrap();
        let mut state = state_in(dir.path());

        state.handle(UiEvent::SelectPage(Page::Raw));
        let err = state.current_table().unwrap().unwrap_err();
        assert!(matches!(err, DashboardError::FileNotFound { .. }));
        assert!(err.to_string().ends_with("crawl1.csv tidak ditemukan."));

        state.handle(UiEvent::SelectPage(Page::Labeled));
        assert_eq!(state.current_table().unwrap().unwrap().len(), 1);
    }

    #[test]
    fn changing_page_clears_the_query() {
        let mut state = AppState::default();
        state.handle(UiEvent::SelectPage(Page::Raw));
        state.handle(UiEvent::QueryChanged("wisata".into()));
        assert_eq!(state.query, "wisata");
        state.handle(UiEvent::SelectPage(Page::Raw));
        assert_eq!(state.query, "wisata");
        state.handle(UiEvent::SelectPage(Page::Labeled));
        assert!(state.query.is_empty());
    }

    #[test]
    fn stage_filter_shows_matching_rows() {
        let dir = TempDir::new().unwrap();
        let header = Stage::ALL.map(Stage::column).join(",");
        let mut body = format!("{header}\n");
        for i in 0..8 {
            let stem = if i == 2 || i == 5 { format!("abc{i}") } else { format!("kata{i}") };
            let cells: Vec<String> = (0..7).map(|s| format!("s{s}r{i}")).chain([stem]).collect();
            body.push_str(&cells.join(","));
            body.push('\n');
        }
        fs::write(dir.path().join("data_bersih.csv"), body).unwrap();

        let mut state = state_in(dir.path());
        state.handle(UiEvent::SelectPage(Page::Preprocessing));
        state.handle(UiEvent::StageChanged(Stage::Stemming));
        state.handle(UiEvent::QueryChanged("abc".into()));

        let table = state.current_table().unwrap().unwrap();
        let stage = table.select_column(state.stage.column()).unwrap();
        let hits = search(&stage, &state.query);
        assert_eq!(hits, vec![2, 5]);
        assert_eq!(preview(&hits).len(), 2);
    }

    #[test]
    fn epoch_selection_is_per_page_and_falls_back() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("loss_data.csv"),
            "epoch,iteration,train_loss,val_loss\n1,0,0.9,1.0\n1,1,0.8,0.9\n1,2,0.7,0.8\n2,0,0.6,0.7\n2,1,0.5,0.6\n",
        )
        .unwrap();
        let mut state = state_in(dir.path());
        state.handle(UiEvent::SelectPage(Page::Loss));

        let table = state.current_table().unwrap().unwrap();
        let epochs = table.distinct("epoch").unwrap();
        assert_eq!(state.selected_epoch(&epochs), Some(CellValue::Integer(1)));

        let curves = loss_curves(&table, &CellValue::Integer(1)).unwrap();
        assert_eq!(curves.train.len(), 3);

        state.handle(UiEvent::EpochChanged(CellValue::Integer(2)));
        assert_eq!(state.selected_epoch(&epochs), Some(CellValue::Integer(2)));
        assert_eq!(state.eval_epoch, None);

        state.loss_epoch = Some(CellValue::Integer(42));
        assert_eq!(state.selected_epoch(&epochs), Some(CellValue::Integer(1)));
    }

    #[test]
    fn reload_rereads_the_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("crawl1.csv");
        fs::write(&path, "teks\nsatu\n").unwrap();
        let mut state = state_in(dir.path());
        state.handle(UiEvent::SelectPage(Page::Raw));
        assert_eq!(state.current_table().unwrap().unwrap().len(), 1);

        fs::write(&path, "teks\nsatu\ndua\n").unwrap();
        assert_eq!(state.current_table().unwrap().unwrap().len(), 1);
        state.handle(UiEvent::ReloadData);
        assert_eq!(state.current_table().unwrap().unwrap().len(), 2);
    }
}
