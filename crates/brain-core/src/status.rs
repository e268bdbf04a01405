//! Owner status flags.

use bitflags::bitflags;

bitflags! {
    /// Conditions an owner reports about itself.
    ///
    /// Brains only read these; setting them is the host's business.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct StatusFlags: u16 {
        const STUNNED  = 1 << 0;
        const DEAD     = 1 << 1;
        const GROUNDED = 1 << 2;
        const FROZEN   = 1 << 3;
        const ALERTED  = 1 << 4;
    }
}
