//! The (stem, branch) pillar pair and the sexagenary cycle.

use std::fmt::{Display, Formatter};

use crate::branch::Branch;
use crate::stem::Stem;

/// An ordered (stem, branch) pair; one of Year/Month/Day/Hour in a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pillar {
    pub stem: Stem,
    pub branch: Branch,
}

impl Pillar {
    pub const fn new(stem: Stem, branch: Branch) -> Self {
        Self { stem, branch }
    }

    /// Pillar for a sexagenary cycle index (reduced mod 60).
    ///
    /// The 60 cycle entries pair the two alphabets in lockstep, so the
    /// stem and branch of a cycle pillar always share parity.
    pub const fn from_sexagenary(i: u32) -> Self {
        Self {
            stem: Stem::from_index(i),
            branch: Branch::from_index(i),
        }
    }

    /// Position in the 60-cycle, or `None` for the 60 stem/branch
    /// combinations with mismatched parity that never occur in it.
    pub fn sexagenary_index(self) -> Option<u8> {
        let s = self.stem.index() as i32;
        let b = self.branch.index() as i32;
        if s % 2 != b % 2 {
            return None;
        }
        Some((s * 6 - b * 5).rem_euclid(60) as u8)
    }

    /// Two-character display form, e.g. "戊午".
    pub fn symbol_pair(self) -> String {
        format!("{}{}", self.stem.symbol(), self.branch.symbol())
    }
}

impl Display for Pillar {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem.symbol(), self.branch.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_starts_at_jiazi() {
        let p = Pillar::from_sexagenary(0);
        assert_eq!(p.stem, Stem::Jia);
        assert_eq!(p.branch, Branch::Zi);
        assert_eq!(p.to_string(), "甲子");
    }

    #[test]
    fn cycle_roundtrip_all_60() {
        for i in 0..60u32 {
            let p = Pillar::from_sexagenary(i);
            assert_eq!(p.sexagenary_index(), Some(i as u8), "cycle index {i}");
        }
    }

    #[test]
    fn cycle_is_60_periodic() {
        for i in 0..60u32 {
            assert_eq!(Pillar::from_sexagenary(i), Pillar::from_sexagenary(i + 60));
        }
    }

    #[test]
    fn mismatched_parity_is_outside_cycle() {
        let p = Pillar::new(Stem::Jia, Branch::Chou);
        assert_eq!(p.sexagenary_index(), None);
    }

    #[test]
    fn wuwu_is_index_54() {
        // 戊午, the day pillar of 2000-01-01.
        let p = Pillar::new(Stem::Wu, Branch::Wu);
        assert_eq!(p.sexagenary_index(), Some(54));
    }
}
