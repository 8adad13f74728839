#[derive(Debug, Clone, Copy, Default)]
pub enum CaseMatching {
    Sensitive,
    Insensitive,
    /// Case-insensitive unless query contains uppercase.
    #[default]
    Smart,
}

#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub case_matching: CaseMatching,
    pub unicode_normalization: bool,
    /// Stale entries tolerated before `maintenance_compact` rebuilds an index.
    pub rebuild_threshold: usize,
    pub video_result_limit: usize,
    pub playlist_result_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            case_matching: CaseMatching::default(),
            unicode_normalization: true,
            rebuild_threshold: 100,
            video_result_limit: 100,
            playlist_result_limit: 50,
        }
    }
}
