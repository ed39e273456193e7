use lasso::{Spur, ThreadedRodeo};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::LazyLock;

/// Global string interner for canvas ids: fast comparisons, low memory.
static INTERNER: LazyLock<ThreadedRodeo> = LazyLock::new(ThreadedRodeo::default);

/// A lightweight, interned identifier for canvas entities.
///
/// Nodes and edges share one id namespace within a canvas, so the same
/// type names both. Internally a `Spur` index: 4 bytes, Copy, Eq, Hash
/// in O(1), which keeps duplicate checks and reference resolution cheap.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CanvasId(Spur);

impl CanvasId {
    /// Intern a new string as a CanvasId, or return existing if already interned.
    pub fn intern(s: &str) -> Self {
        CanvasId(INTERNER.get_or_intern(s))
    }

    /// Resolve back to a string slice.
    pub fn as_str(&self) -> &str {
        INTERNER.resolve(&self.0)
    }
}

impl From<&str> for CanvasId {
    fn from(s: &str) -> Self {
        Self::intern(s)
    }
}

impl fmt::Debug for CanvasId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.as_str())
    }
}

impl fmt::Display for CanvasId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for CanvasId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CanvasId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(CanvasId::intern(&s))
    }
}
