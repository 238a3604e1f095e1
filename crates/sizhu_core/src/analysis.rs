//! Five-Element tally and the favorable-element heuristic.

use sizhu_tables::{ALL_ELEMENTS, Element, Pillar};

/// Counts per element over the 8 chart symbols (4 stems + 4 branches).
///
/// All 5 keys are always present, zero counts included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementTally {
    counts: [u8; 5],
}

impl ElementTally {
    /// Tally the stems and branches of the given pillars.
    pub fn from_pillars(pillars: &[Pillar]) -> Self {
        let mut counts = [0u8; 5];
        for p in pillars {
            counts[p.stem.element().index() as usize] += 1;
            counts[p.branch.element().index() as usize] += 1;
        }
        Self { counts }
    }

    /// Count for one element.
    pub fn count(&self, element: Element) -> u8 {
        self.counts[element.index() as usize]
    }

    /// Sum over all elements; 8 for any well-formed chart.
    pub fn total(&self) -> u32 {
        self.counts.iter().map(|&c| c as u32).sum()
    }

    /// (element, count) pairs in the fixed Wood→Fire→Earth→Metal→Water order.
    pub fn iter(&self) -> impl Iterator<Item = (Element, u8)> + '_ {
        ALL_ELEMENTS.iter().map(|&e| (e, self.count(e)))
    }
}

/// Derived analysis of an assembled set of pillars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Analysis {
    pub tally: ElementTally,
    pub day_master: Element,
    pub favorable: Element,
}

/// Tally the four pillars and derive day master and favorable element.
///
/// Favorable element is a fill-the-gap rule: the day master's own element
/// when that element is weak (count <= 2), otherwise the first global
/// minimum in Wood→Fire→Earth→Metal→Water order. The tie-break order is
/// part of the output contract.
pub fn analyze(pillars: &[Pillar; 4]) -> Analysis {
    let tally = ElementTally::from_pillars(pillars);
    // 4 pillars x 2 symbols; anything else is a table defect.
    assert_eq!(tally.total(), 8, "element tally must cover all 8 symbols");

    let day_master = pillars[2].stem.element();
    let favorable = favorable_element(&tally, day_master);
    Analysis {
        tally,
        day_master,
        favorable,
    }
}

fn favorable_element(tally: &ElementTally, day_master: Element) -> Element {
    if tally.count(day_master) <= 2 {
        return day_master;
    }
    let mut min = day_master;
    let mut min_count = u8::MAX;
    for (element, count) in tally.iter() {
        if count < min_count {
            min_count = count;
            min = element;
        }
    }
    min
}
