//! The Five Elements (Wuxing) and yin/yang polarity.

/// The Five Elements, in the fixed Wood → Fire → Earth → Metal → Water order.
///
/// This order is load-bearing: favorable-element ties break toward the
/// element that appears first in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All 5 elements in tie-break order (index 0 = Wood).
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
];

impl Element {
    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "Wood",
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Metal => "Metal",
            Self::Water => "Water",
        }
    }

    /// Chinese character, the wire alphabet of the original service.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Wood => "木",
            Self::Fire => "火",
            Self::Earth => "土",
            Self::Metal => "金",
            Self::Water => "水",
        }
    }

    /// 0-based index in tie-break order (Wood=0 .. Water=4).
    pub const fn index(self) -> u8 {
        match self {
            Self::Wood => 0,
            Self::Fire => 1,
            Self::Earth => 2,
            Self::Metal => 3,
            Self::Water => 4,
        }
    }

    /// Look an element up by its Chinese character.
    pub fn from_symbol(s: &str) -> Option<Self> {
        ALL_ELEMENTS.iter().copied().find(|e| e.symbol() == s)
    }
}

/// Yin/yang polarity of a stem or branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarity {
    Yang,
    Yin,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tie_break_order() {
        let names: Vec<&str> = ALL_ELEMENTS.iter().map(|e| e.name()).collect();
        assert_eq!(names, ["Wood", "Fire", "Earth", "Metal", "Water"]);
    }

    #[test]
    fn index_matches_position() {
        for (i, e) in ALL_ELEMENTS.iter().enumerate() {
            assert_eq!(e.index() as usize, i);
        }
    }

    #[test]
    fn symbol_roundtrip() {
        for e in ALL_ELEMENTS {
            assert_eq!(Element::from_symbol(e.symbol()), Some(e));
        }
        assert_eq!(Element::from_symbol("日"), None);
    }
}
