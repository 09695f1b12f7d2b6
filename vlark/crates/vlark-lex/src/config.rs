//! Lexer settings.

/// Longest physical line accepted by default, in characters.
pub const DEFAULT_MAX_LINE_LENGTH: usize = 4096;

/// Settings shared by the Line Classifier and the Tokenizer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LexerConfig {
    /// Lines longer than this abort loading with
    /// [`LoadError::LineTooLong`](crate::LoadError::LineTooLong)
    pub max_line_length: usize,
    /// Columns a tab advances the position by
    pub tab_width: u32,
}

impl LexerConfig {
    /// Replace the maximum line length
    pub fn with_max_line_length(mut self, max_line_length: usize) -> Self {
        self.max_line_length = max_line_length;
        self
    }

    /// Replace the tab width; zero is treated as one
    pub fn with_tab_width(mut self, tab_width: u32) -> Self {
        self.tab_width = tab_width.max(1);
        self
    }
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
            tab_width: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LexerConfig::default();
        assert_eq!(config.max_line_length, 4096);
        assert_eq!(config.tab_width, 1);
    }

    #[test]
    fn test_zero_tab_width_clamped() {
        assert_eq!(LexerConfig::default().with_tab_width(0).tab_width, 1);
        assert_eq!(LexerConfig::default().with_tab_width(4).tab_width, 4);
    }
}
