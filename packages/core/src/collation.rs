//! Locale-aware name ordering.
//!
//! Department listings are sorted the way the mobile app sorted them with
//! `localeCompare`: "Engenharia" < "matemática" < "Zoologia", which raw byte
//! order gets wrong (every uppercase letter sorts before any lowercase one,
//! and accented letters land after `z`). The collator is tailored for
//! Portuguese since that is the locale of the persisted data.

use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions, Strength};
use icu_locid::locale;
use once_cell::sync::Lazy;

static COLLATOR: Lazy<Collator> = Lazy::new(|| {
    let mut options = CollatorOptions::new();
    options.strength = Some(Strength::Tertiary);
    // Collation data is compiled into the binary, so this cannot fail at
    // runtime with well-formed locale input.
    Collator::try_new(&locale!("pt").into(), options)
        .expect("compiled collation data for locale `pt`")
});

/// Compare two names with locale-aware collation.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    COLLATOR.compare(a, b)
}
