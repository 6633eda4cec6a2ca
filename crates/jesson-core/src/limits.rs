//! Resource limits that bound recursion and input size.
//!
//! Parsing and baking both recurse once per nested object/array, so an
//! adversarial document like `[[[[...]]]]` would otherwise grow the stack
//! without bound.

/// Default nesting limit, the same depth `serde_json` allows.
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 128;

/// Default input size limit: 64 MiB.
pub const DEFAULT_MAX_INPUT_SIZE: usize = 64 * 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum number of nested objects/arrays. The root object counts as 1.
    pub max_nesting_depth: usize,
    /// Maximum input length in bytes accepted by `parse`.
    pub max_input_size: usize,
}

impl Limits {
    /// No depth or size guard at all.
    pub const fn unbounded() -> Self {
        Self {
            max_nesting_depth: usize::MAX,
            max_input_size: usize::MAX,
        }
    }

    pub const fn with_max_nesting_depth(mut self, depth: usize) -> Self {
        self.max_nesting_depth = depth;
        self
    }

    pub const fn with_max_input_size(mut self, size: usize) -> Self {
        self.max_input_size = size;
        self
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
            max_input_size: DEFAULT_MAX_INPUT_SIZE,
        }
    }
}

/// Tracks the current nesting depth against a limit.
///
/// `enter` before descending into a container, `leave` after returning.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DepthGuard {
    depth: usize,
    limit: usize,
}

impl DepthGuard {
    pub(crate) fn new(limit: usize) -> Self {
        Self { depth: 0, limit }
    }

    pub(crate) fn enter(&mut self) -> crate::Result<()> {
        if self.depth >= self.limit {
            return Err(crate::JessonError::NestingTooDeep { limit: self.limit });
        }
        self.depth += 1;
        Ok(())
    }

    pub(crate) fn leave(&mut self) {
        self.depth -= 1;
    }
}
