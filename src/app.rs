use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use linediff::config::Config;
use linediff::export::{ExportHeader, export_file_name, plain_text, render_export};
use linediff::input::Side;
use linediff::language::{language_label, syntax_for_file, syntax_for_language};
use linediff::{DiffStats, LineRecord, Strategy, compare};
use syntect::{
    highlighting::{Theme, ThemeSet},
    parsing::{SyntaxReference, SyntaxSet},
};
use tracing::{debug, info, warn};

pub struct App {
    pub left: Side,
    pub right: Side,
    pub strategy: Strategy,
    pub records: Vec<LineRecord>,
    pub stats: DiffStats,
    pub scroll_offset: usize,
    pub horizontal_scroll_offset: usize,
    pub show_shortcuts: bool,
    pub status: Option<String>,
    pub config: Config,
    language_override: Option<String>,
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
    clipboard: Option<arboard::Clipboard>,
}

impl App {
    pub fn new(left: Side, right: Side, config: Config) -> Result<Self> {
        let theme_set = ThemeSet::load_defaults();
        config.validate(&theme_set)?;

        let mut app = Self {
            left,
            right,
            strategy: config.strategy,
            records: Vec::new(),
            stats: DiffStats::default(),
            scroll_offset: 0,
            horizontal_scroll_offset: 0,
            show_shortcuts: true,
            status: None,
            language_override: config.language.clone(),
            config,
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set,
            clipboard: None,
        };
        app.recompute();

        Ok(app)
    }

    /// Rebuilds the records from both full texts.
    pub fn recompute(&mut self) {
        self.records = compare(&self.left.text, &self.right.text, self.strategy);
        self.stats = DiffStats::from_records(&self.records);
        self.scroll_offset = self
            .scroll_offset
            .min(self.records.len().saturating_sub(1));

        debug!(strategy = %self.strategy, stats = %self.stats, "recomputed comparison");
    }

    pub fn toggle_strategy(&mut self) {
        self.strategy = self.strategy.toggled();
        self.recompute();
    }

    pub fn swap(&mut self) {
        std::mem::swap(&mut self.left, &mut self.right);
        self.recompute();
        self.status = Some("Swapped sides".to_string());
    }

    pub fn line_count(&self) -> usize {
        self.records.len()
    }

    pub fn scroll_down(&mut self, lines: usize) {
        let last = self.line_count().saturating_sub(1);
        self.scroll_offset = (self.scroll_offset + lines).min(last);
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_offset = self.line_count().saturating_sub(1);
    }

    pub fn scroll_right(&mut self, columns: usize) {
        self.horizontal_scroll_offset += columns;
    }

    pub fn scroll_left(&mut self, columns: usize) {
        self.horizontal_scroll_offset = self.horizontal_scroll_offset.saturating_sub(columns);
    }

    pub fn toggle_shortcuts(&mut self) {
        self.show_shortcuts = !self.show_shortcuts;
    }

    /// Whether the current strategy should render as two panes at `width`.
    pub fn uses_side_by_side(&self, width: u16) -> bool {
        self.strategy == Strategy::Positional && width >= self.config.side_by_side_min_width
    }

    pub fn syntax(&self) -> Option<&SyntaxReference> {
        match &self.language_override {
            Some(language) => syntax_for_language(&self.syntax_set, language),
            None => syntax_for_file(&self.syntax_set, &self.left.name),
        }
    }

    /// Label written into exports, e.g. `javascript`.
    pub fn language(&self) -> String {
        match &self.language_override {
            Some(language) => language.to_lowercase(),
            None => language_label(self.syntax()),
        }
    }

    pub fn get_theme(&self) -> &Theme {
        // Presence is checked by Config::validate in App::new.
        &self.theme_set.themes[&self.config.theme]
    }

    pub fn get_syntax_set(&self) -> &SyntaxSet {
        &self.syntax_set
    }

    /// Writes the exported diff into `dir` and returns its path.
    pub fn export_to(&mut self, dir: &Path) -> Result<PathBuf> {
        let language = self.language();
        let header = ExportHeader::now(&language);
        let path = dir.join(export_file_name(
            &language,
            header.generated_at.date_naive(),
        ));

        fs::write(&path, render_export(&self.records, &header))
            .with_context(|| format!("failed to write {}", path.display()))?;

        info!(path = %path.display(), records = self.records.len(), "exported diff");
        self.status = Some(format!("Saved {}", path.display()));
        Ok(path)
    }

    /// Puts the records' content on the system clipboard.
    pub fn copy_result(&mut self) {
        let text = plain_text(&self.records);
        let result = self
            .clipboard()
            .and_then(|clipboard| clipboard.set_text(text));

        self.status = Some(match result {
            Ok(()) => "Copied!".to_string(),
            Err(err) => {
                warn!(error = %err, "clipboard unavailable");
                format!("Copy failed: {err}")
            }
        });
    }

    // The handle is kept for the whole session; some platforms drop the
    // contents when it goes away.
    fn clipboard(&mut self) -> Result<&mut arboard::Clipboard, arboard::Error> {
        let clipboard = match self.clipboard.take() {
            Some(clipboard) => clipboard,
            None => arboard::Clipboard::new()?,
        };
        Ok(self.clipboard.insert(clipboard))
    }
}
