//! Static stem/branch tables for four-pillar (BaZi) computation.
//!
//! This crate provides:
//! - The 10 Heavenly Stems and 12 Earthly Branches as fixed cyclic alphabets
//! - The Five-Element and polarity classification of every symbol
//! - The `Pillar` (stem, branch) pair and the 60-entry sexagenary cycle
//!
//! These tables are the single source of truth for Element classification;
//! downstream crates look symbols up here instead of re-encoding the mapping.

pub mod branch;
pub mod element;
pub mod pillar;
pub mod stem;

pub use branch::{ALL_BRANCHES, Branch};
pub use element::{ALL_ELEMENTS, Element, Polarity};
pub use pillar::Pillar;
pub use stem::{ALL_STEMS, Stem};
