use tracing::warn;

use crate::error::IconError;

/// Largest edge length an ICO directory entry can describe.
///
/// Entry dimensions are stored as a single byte, with 0 meaning 256, so
/// anything larger cannot be represented in the container.
pub const MAX_ICO_SIZE: u32 = 256;

/// Default edge lengths: the resolutions Windows picks from for the
/// taskbar, Explorer views, and alt-tab.
pub const DEFAULT_SIZES: [u32; 4] = [16, 32, 48, 256];

/// Validated list of square edge lengths to embed in the icon.
///
/// Entries keep their requested order, duplicates collapse to the first
/// occurrence, and every entry is within `1..=MAX_ICO_SIZE`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeList(Vec<u32>);

impl SizeList {
    /// Build a validated size list from raw requested sizes.
    pub fn new(sizes: &[u32]) -> crate::Result<Self> {
        if sizes.is_empty() {
            return Err(IconError::EmptySizeList);
        }
        let mut accepted = Vec::with_capacity(sizes.len());
        for &size in sizes {
            if size == 0 || size > MAX_ICO_SIZE {
                return Err(IconError::InvalidSize(size));
            }
            if accepted.contains(&size) {
                warn!("Ignoring duplicate icon size {size}");
                continue;
            }
            accepted.push(size);
        }
        Ok(Self(accepted))
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter().copied()
    }
}

impl Default for SizeList {
    fn default() -> Self {
        Self(DEFAULT_SIZES.to_vec())
    }
}

impl std::fmt::Display for SizeList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, size) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{size}")?;
        }
        Ok(())
    }
}
