//! The catalog of timezones offered to users.

use crate::ranker::{rank_labels_with, RankPolicy};
use chrono_tz::{Tz, TZ_VARIANTS};
use nowbot_common::{NowBotError, Result};
use std::collections::BTreeMap;
use tracing::{debug, info};

/// One autocomplete suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Suggestion<'a> {
    /// Label shown to the user.
    pub label: &'a str,
    /// Zone the label stands for.
    pub zone: Tz,
}

impl Suggestion<'_> {
    /// IANA identifier of the suggested zone, used as the choice value.
    #[must_use]
    pub fn zone_id(&self) -> &'static str {
        self.zone.name()
    }
}

/// Immutable mapping from human-readable labels to IANA zones.
///
/// When several zones share a label, the zone with the lexicographically
/// smallest identifier owns it. Every zone the catalog was built from can
/// still be resolved by its identifier.
#[derive(Debug, Clone, Default)]
pub struct TimezoneCatalog {
    by_label: BTreeMap<String, Tz>,
    by_id: BTreeMap<&'static str, Tz>,
}

impl TimezoneCatalog {
    /// Builds a catalog from the given zones.
    pub fn from_zones(zones: impl IntoIterator<Item = Tz>) -> Self {
        let by_id: BTreeMap<&'static str, Tz> =
            zones.into_iter().map(|tz| (tz.name(), tz)).collect();

        let mut by_label: BTreeMap<String, Tz> = BTreeMap::new();
        for (id, tz) in &by_id {
            let label = label_for(id);
            if let Some(owner) = by_label.get(&label) {
                debug!(
                    label = %label,
                    owner = owner.name(),
                    shadowed = *id,
                    "Timezone label collision"
                );
                continue;
            }
            by_label.insert(label, *tz);
        }

        Self { by_label, by_id }
    }

    /// Builds a catalog from every zone in the bundled tz database.
    #[must_use]
    pub fn bundled() -> Self {
        let catalog = Self::from_zones(TZ_VARIANTS.iter().copied());
        info!(
            zones = catalog.zone_count(),
            labels = catalog.len(),
            "Timezone catalog built"
        );
        catalog
    }

    /// Number of labels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_label.len()
    }

    /// Whether the catalog has no labels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_label.is_empty()
    }

    /// Number of zone identifiers known to the catalog, including the ones
    /// that lost their label to another zone.
    #[must_use]
    pub fn zone_count(&self) -> usize {
        self.by_id.len()
    }

    /// All labels in sorted order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.by_label.keys().map(String::as_str)
    }

    /// Zone owning `label`, compared exactly.
    #[must_use]
    pub fn zone_for_label(&self, label: &str) -> Option<Tz> {
        self.by_label.get(label).copied()
    }

    /// Whether `zone_id` is one of the catalog's zone identifiers.
    #[must_use]
    pub fn contains_zone(&self, zone_id: &str) -> bool {
        self.by_id.contains_key(zone_id)
    }

    /// Resolves user input to a zone.
    ///
    /// Accepts a zone identifier ("America/New_York") or a label
    /// ("New York"), first exactly and then ignoring case.
    pub fn resolve(&self, input: &str) -> Result<Tz> {
        let input = input.trim();

        if let Some(tz) = self.by_id.get(input) {
            return Ok(*tz);
        }
        if let Some(tz) = self.by_label.get(input) {
            return Ok(*tz);
        }

        let folded = input.to_lowercase();
        self.by_id
            .iter()
            .find(|(id, _)| id.to_lowercase() == folded)
            .map(|(_, tz)| *tz)
            .or_else(|| {
                self.by_label
                    .iter()
                    .find(|(label, _)| label.to_lowercase() == folded)
                    .map(|(_, tz)| *tz)
            })
            .ok_or_else(|| NowBotError::UnknownTimezone(input.to_string()))
    }

    /// Autocomplete suggestions for `query` with the default ranking policy.
    #[must_use]
    pub fn suggest(&self, query: &str) -> Vec<Suggestion<'_>> {
        self.suggest_with(query, &RankPolicy::default())
    }

    /// Autocomplete suggestions for `query`.
    #[must_use]
    pub fn suggest_with(&self, query: &str, policy: &RankPolicy) -> Vec<Suggestion<'_>> {
        rank_labels_with(self.labels(), query, policy)
            .into_iter()
            .filter_map(|label| {
                self.zone_for_label(label)
                    .map(|zone| Suggestion { label, zone })
            })
            .collect()
    }
}

/// Human-readable label of a zone identifier: the part after the last `/`,
/// with underscores turned into spaces.
#[must_use]
pub fn label_for(zone_id: &str) -> String {
    zone_id
        .rsplit('/')
        .next()
        .unwrap_or(zone_id)
        .replace('_', " ")
}
