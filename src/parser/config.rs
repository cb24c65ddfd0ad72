// Parser configuration

/// Default nesting budget shared by statements and expressions.
/// Parser recursion depth is bounded by this value, so it also bounds stack use.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Tunables for a parser session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Maximum nesting of statements, grouped expressions and unary chains
    pub max_depth: usize,
}

impl ParserConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth.max(1);
        self
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
