//! Validation rules for the trie section of the configuration.

use super::{ConfigResult, Validate};
use crate::data_structures::segment_trie::SegmentTrieConfig;
use crate::error::config::ConfigError;

impl Validate for SegmentTrieConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.delimiter.is_empty() {
            return Err(ConfigError::ValidationError(
                "delimiter must not be empty".to_string(),
            ));
        }

        if self.wildcard.is_empty() {
            return Err(ConfigError::ValidationError(
                "wildcard must not be empty".to_string(),
            ));
        }

        // A wildcard spanning a delimiter could never equal a single segment
        if self.wildcard.contains(self.delimiter.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "wildcard {:?} must not contain the delimiter {:?}",
                self.wildcard, self.delimiter
            )));
        }

        Ok(())
    }
}
