//! Brain identifiers.

use std::fmt;

/// Identifies one brain instance inside a host.  Used in log fields,
/// configuration error reports and output rows.
///
/// Ids are assigned by the host and carry no meaning to the brain itself
/// beyond seeding its RNG stream (see [`BrainRng::new`][crate::BrainRng::new]).
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BrainId(pub u32);

impl BrainId {
    /// Position of this brain in a host's dense brain list.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for BrainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "brain#{}", self.0)
    }
}

impl TryFrom<usize> for BrainId {
    type Error = std::num::TryFromIntError;

    fn try_from(n: usize) -> Result<Self, Self::Error> {
        u32::try_from(n).map(BrainId)
    }
}
