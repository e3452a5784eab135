//! Report configuration.

/// How the confirmation prompt is answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PromptPolicy {
    /// Print the prompt and ask the confirmation provider.
    #[default]
    Ask,
    /// Answer yes without reading input.
    AssumeYes,
    /// Answer no without reading input.
    AssumeNo,
}

/// The single output a run produces, after flag precedence is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportMode {
    /// Identification banner only.
    About,
    /// Entry count only.
    OnlyCount,
    /// Valid entries only.
    OnlyListValid,
    /// Invalid entries only.
    OnlyListInvalid,
    /// Machine-readable classification.
    Json,
    /// Count, listings and the interactive clean step.
    Full,
}

/// Immutable settings for one report run.
///
/// Built once from the command line and passed to [`Reporter`](super::Reporter).
///
/// # Examples
///
/// ```
/// use envpath::{ReportConfig, ReportMode};
///
/// let config = ReportConfig::default();
/// assert_eq!(config.mode(), ReportMode::Full);
/// assert!(config.count && config.list_invalid);
///
/// let config = ReportConfig { only_count: true, json: true, ..Default::default() };
/// assert_eq!(config.mode(), ReportMode::OnlyCount);
/// ```
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    /// Print the identification banner and stop.
    pub about: bool,
    /// Print only the entry count.
    pub only_count: bool,
    /// Print only the valid entries.
    pub only_list_valid: bool,
    /// Print only the invalid entries.
    pub only_list_invalid: bool,
    /// Print the classification as JSON.
    pub json: bool,
    /// Print the count line in the full report.
    pub count: bool,
    /// Print every entry in the full report.
    pub list: bool,
    /// Print invalid-entry details in the full report.
    pub list_invalid: bool,
    /// How the clean-up prompt is answered.
    pub prompt: PromptPolicy,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            about: false,
            only_count: false,
            only_list_valid: false,
            only_list_invalid: false,
            json: false,
            count: true,
            list: false,
            list_invalid: true,
            prompt: PromptPolicy::Ask,
        }
    }
}

impl ReportConfig {
    /// Resolve which output this configuration produces.
    ///
    /// Precedence: about, only-count, only-list-valid, only-list-invalid,
    /// json, then the full report.
    #[must_use]
    pub fn mode(&self) -> ReportMode {
        if self.about {
            ReportMode::About
        } else if self.only_count {
            ReportMode::OnlyCount
        } else if self.only_list_valid {
            ReportMode::OnlyListValid
        } else if self.only_list_invalid {
            ReportMode::OnlyListInvalid
        } else if self.json {
            ReportMode::Json
        } else {
            ReportMode::Full
        }
    }

    /// Whether a run with this configuration may block on input.
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        self.mode() == ReportMode::Full && self.prompt == PromptPolicy::Ask
    }
}
