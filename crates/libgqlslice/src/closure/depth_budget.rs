/// Depth used when the caller does not ask for one.
pub const DEFAULT_DEPTH: u32 = 5;

/// The number of types a full-closure traversal may still expand.
///
/// The budget belongs to the whole traversal rather than to a branch:
/// siblings draw from the same remaining count, so on wide schemas the
/// traversal order decides which branches get expanded.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DepthBudget {
    remaining: u32,
}
impl DepthBudget {
    pub fn new(depth: u32) -> Self {
        Self {
            remaining: depth,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Take one unit from the budget. Returns `false` (leaving the budget at
    /// zero) once it has run out.
    pub fn try_consume(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }
}
impl Default for DepthBudget {
    fn default() -> Self {
        Self::new(DEFAULT_DEPTH)
    }
}
