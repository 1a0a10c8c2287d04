//! Feed filter configuration
//!
//! The complete set of knobs a feed request carries: platform and keyword filters,
//! sort key, dedupe/merge display mode and the cumulative page window.
//! Each transition method returns the next configuration and applies the page
//! reset rules, so callers never edit fields in place.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::PlatformId;
use crate::error::DomainError;

/// Default number of items added per "load more"
pub const DEFAULT_PAGE_SIZE: usize = 9;

/// Sort key for the feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    #[default]
    Newest,
    Oldest,
    Engagement,
}

impl std::fmt::Display for SortBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortBy::Newest => write!(f, "newest"),
            SortBy::Oldest => write!(f, "oldest"),
            SortBy::Engagement => write!(f, "engagement"),
        }
    }
}

impl std::str::FromStr for SortBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "newest" => Ok(SortBy::Newest),
            "oldest" => Ok(SortBy::Oldest),
            "engagement" => Ok(SortBy::Engagement),
            _ => Err(format!(
                "Unknown sort: {}. Use: newest, oldest, engagement",
                s
            )),
        }
    }
}

/// How pipeline output rows are shaped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMode {
    /// Every matching post
    Flat,
    /// One representative post per signature group
    Deduped,
    /// One aggregate item per signature group
    Merged,
}

/// Filter and display configuration for one pipeline run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    pub selected_platform_ids: BTreeSet<PlatformId>,
    pub keyword: String,
    pub sort_by: SortBy,
    pub dedupe: bool,
    pub merge_view: bool,
    pub page: usize,
    pub page_size: usize,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }
}

impl FilterConfig {
    /// Default configuration with a custom page size
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            selected_platform_ids: BTreeSet::new(),
            keyword: String::new(),
            sort_by: SortBy::Newest,
            dedupe: false,
            merge_view: false,
            page: 1,
            page_size,
        }
    }

    pub fn display_mode(&self) -> DisplayMode {
        match (self.dedupe, self.merge_view) {
            (_, true) => DisplayMode::Merged,
            (true, false) => DisplayMode::Deduped,
            (false, false) => DisplayMode::Flat,
        }
    }

    /// Reject configurations the pipeline is not defined for
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.page == 0 {
            return Err(DomainError::Validation("page must be at least 1".to_string()));
        }
        if self.page_size == 0 {
            return Err(DomainError::Validation(
                "page_size must be greater than 0".to_string(),
            ));
        }
        if self.merge_view && !self.dedupe {
            return Err(DomainError::Validation(
                "merge view requires dedupe".to_string(),
            ));
        }
        Ok(())
    }

    /// Add the platform to the filter, or remove it if already selected
    pub fn toggle_platform(mut self, platform: PlatformId) -> Self {
        if !self.selected_platform_ids.remove(&platform) {
            self.selected_platform_ids.insert(platform);
        }
        self.page = 1;
        self
    }

    pub fn with_platforms(mut self, platforms: impl IntoIterator<Item = PlatformId>) -> Self {
        self.selected_platform_ids = platforms.into_iter().collect();
        self.page = 1;
        self
    }

    pub fn with_keyword(mut self, keyword: &str) -> Self {
        self.keyword = keyword.trim().to_string();
        self.page = 1;
        self
    }

    pub fn with_sort(mut self, sort_by: SortBy) -> Self {
        self.sort_by = sort_by;
        self.page = 1;
        self
    }

    /// Switching dedupe off also leaves merge view
    pub fn with_dedupe(mut self, dedupe: bool) -> Self {
        self.dedupe = dedupe;
        if !dedupe {
            self.merge_view = false;
        }
        self.page = 1;
        self
    }

    /// Switching merge view on also enables dedupe
    pub fn with_merge_view(mut self, merge_view: bool) -> Self {
        self.merge_view = merge_view;
        if merge_view {
            self.dedupe = true;
        }
        self.page = 1;
        self
    }

    /// Jump straight to a page window, leaving filters and modes alone
    pub fn at_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    /// Widen the window by one page
    pub fn load_more(self) -> Self {
        let next = self.page.saturating_add(1);
        self.at_page(next)
    }

    /// Reset every filter and mode, keeping the page size
    pub fn cleared(self) -> Self {
        Self::with_page_size(self.page_size)
    }
}
