//! The assembled chart value object.

use std::fmt::{Display, Formatter};

use serde::ser::{Serialize, SerializeMap, SerializeStruct, Serializer};
use sizhu_calendar::LunarDisplay;
use sizhu_tables::{Element, Pillar};

use crate::analysis::ElementTally;

/// Gender tag carried through to the report layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl Display for Gender {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The complete four-pillar chart with its derived analysis.
///
/// Created once per computation and immutable thereafter; downstream
/// consumers treat it as an opaque value object and never recompute or
/// mutate its fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaziChart {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
    pub gender: Gender,
    /// Hour pillar was computed from substituted noon; hour-dependent
    /// claims downstream should be suppressed.
    pub time_unknown: bool,
    /// Lunar display strings when the calendar authority supplied them.
    pub lunar: Option<LunarDisplay>,
    /// Five-Element counts over the 8 chart symbols; always sums to 8.
    pub tally: ElementTally,
    /// Element of the day pillar's stem.
    pub day_master: Element,
    /// Heuristic balancing element (not a prediction claim).
    pub favorable: Element,
}

impl BaziChart {
    /// The four pillars in Year/Month/Day/Hour order.
    pub fn pillars(&self) -> [Pillar; 4] {
        [self.year, self.month, self.day, self.hour]
    }
}

/// Wire shape of the original report service: pillar strings, `wuxing`
/// keyed by element characters, `rizhu`/`xiyongshen` as characters.
impl Serialize for BaziChart {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let field_count = if self.lunar.is_some() { 12 } else { 9 };
        let mut s = serializer.serialize_struct("BaziChart", field_count)?;
        s.serialize_field("year", &self.year.symbol_pair())?;
        s.serialize_field("month", &self.month.symbol_pair())?;
        s.serialize_field("day", &self.day.symbol_pair())?;
        s.serialize_field("hour", &self.hour.symbol_pair())?;
        s.serialize_field("gender", self.gender.as_str())?;
        s.serialize_field("wuxing", &WuxingMap(&self.tally))?;
        s.serialize_field("rizhu", self.day.stem.symbol())?;
        s.serialize_field("xiyongshen", self.favorable.symbol())?;
        s.serialize_field("time_unknown", &self.time_unknown)?;
        if let Some(lunar) = &self.lunar {
            s.serialize_field("lunar_year", &lunar.year)?;
            s.serialize_field("lunar_month", &lunar.month)?;
            s.serialize_field("lunar_day", &lunar.day)?;
        }
        s.end()
    }
}

struct WuxingMap<'a>(&'a ElementTally);

impl Serialize for WuxingMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut m = serializer.serialize_map(Some(5))?;
        for (element, count) in self.0.iter() {
            m.serialize_entry(element.symbol(), &count)?;
        }
        m.end()
    }
}
