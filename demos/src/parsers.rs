//! Command line enums and value parsers shared by the demo binaries.
//!
//! Enum variants can be given by their full name or by any prefix which uniquely determines them,
//! plus a few short aliases.

use clap::ValueEnum;
use clap::builder::PossibleValue;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FieldOptions {
    BabyBear,
    Goldilocks,
}

/// Produce a collection of PossibleValue's for an Enum variant.
///
/// We allow any prefix of the full name which uniquely determines the variant.
/// We additionally allow the user to specify a collection of aliases which are
/// not prefixes. For each alias, we also allow any unique prefix of that alias.
///
/// For example, for the `BabyBear` variant of `FieldOptions`, running
/// `get_aliases("baby-bear", 1, vec![("bb", 2)])` produces the following set of
/// allowed strings:
///
/// ```text
/// b, ba, bab, baby, baby-, baby-b, baby-be, baby-bea, baby-bear, bb
/// ```
fn get_aliases(
    base: &'static str,
    min_unique_base_prefix: usize,
    alias: Vec<(&'static str, usize)>,
) -> PossibleValue {
    PossibleValue::new(base).aliases(
        (min_unique_base_prefix..base.len())
            .map(|i| &base[..i])
            .chain(alias.into_iter().flat_map(|(alias, min_unique)| {
                (min_unique..alias.len() + 1).map(|i| &alias[..i])
            })),
    )
}

impl ValueEnum for FieldOptions {
    fn value_variants<'a>() -> &'a [Self] {
        &[FieldOptions::BabyBear, FieldOptions::Goldilocks]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(match self {
            FieldOptions::BabyBear => get_aliases("baby-bear", 1, vec![("bb", 2)]),
            FieldOptions::Goldilocks => get_aliases("goldilocks", 1, vec![("gl", 2)]),
        })
    }
}

/// Parse a hex string, with or without a `0x` prefix.
pub fn parse_hex(s: &str) -> Result<Vec<u8>, hex::FromHexError> {
    hex::decode(s.strip_prefix("0x").unwrap_or(s))
}
