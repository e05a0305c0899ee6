use crate::{ConfigError, ConfigErrorResult};

use roster_core::{DEFAULT_PAGE_SIZE, PAGE_SIZES};
use serde::Deserialize;

/// Page sizes offered by the listing
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    pub default_page_size: usize,
    pub page_sizes: Vec<usize>,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            page_sizes: PAGE_SIZES.to_vec(),
        }
    }
}

impl PaginationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.page_sizes.is_empty() || self.page_sizes.contains(&0) {
            return Err(ConfigError::pagination(
                "pagination.page_sizes must be non-empty and contain no zero",
            ));
        }

        if !self.page_sizes.contains(&self.default_page_size) {
            return Err(ConfigError::pagination(format!(
                "pagination.default_page_size {} is not one of {:?}",
                self.default_page_size, self.page_sizes
            )));
        }

        Ok(())
    }

    /// Whether a caller-supplied page size is on offer
    pub fn allows(&self, page_size: usize) -> bool {
        self.page_sizes.contains(&page_size)
    }
}
