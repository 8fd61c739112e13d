//! Lead deduplication passes.
//!
//! All operations are pure, allocation-returning functions over in-memory
//! sequences: they never mutate their inputs, so UI event handlers and
//! server endpoints can call them under whatever concurrency discipline
//! they already have. A lead whose phone normalizes to empty is silently
//! excluded (it cannot receive outbound messages); that is expected
//! filtering, not an error.

use std::collections::HashSet;

use tracing::debug;

use crate::lead::{RawLead, SourceList, UniqueLead};
use crate::phone::{hash_normalized, normalize_phone};

/// Result of [`deduplicate_leads_with_count`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DedupOutcome {
    pub unique_leads: Vec<UniqueLead>,
    /// Leads skipped because an earlier lead in the same pass already
    /// claimed their phone hash. Empty-phone exclusions are not counted.
    pub duplicates_count: usize,
}

/// Deduplicate one source list, preserving first-seen order.
pub fn deduplicate_leads(leads: &[RawLead], source_id: &str) -> Vec<UniqueLead> {
    deduplicate_leads_with_count(leads, source_id).unique_leads
}

/// Deduplicate one source list and report how many duplicates were dropped.
pub fn deduplicate_leads_with_count(leads: &[RawLead], source_id: &str) -> DedupOutcome {
    let mut seen: HashSet<String> = HashSet::new();
    let mut unique_leads = Vec::new();
    let mut duplicates_count = 0;

    for lead in leads {
        let normalized = normalize_phone(lead.phone.as_deref().unwrap_or(""));
        if normalized.is_empty() {
            continue;
        }

        let hash = hash_normalized(&normalized);
        if !seen.insert(hash.clone()) {
            duplicates_count += 1;
            continue;
        }

        unique_leads.push(UniqueLead::from_raw(lead, source_id, hash));
    }

    DedupOutcome {
        unique_leads,
        duplicates_count,
    }
}

/// Merge several source lists into one globally unique sequence.
///
/// Lists are processed in input order and earlier lists win ties, so a
/// contact present in two lists keeps the `source_id` of the first. Output
/// preserves list order, then within-list order.
pub fn deduplicate_multiple_lists(lists: &[SourceList]) -> Vec<UniqueLead> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut merged = Vec::new();

    for list in lists {
        for lead in deduplicate_leads(&list.leads, &list.source_id) {
            if seen.insert(lead.phone_hash.clone()) {
                merged.push(lead);
            }
        }
    }

    debug!(
        lists = lists.len(),
        unique = merged.len(),
        "merged lead lists"
    );
    merged
}

/// Append `incoming` to `existing`, skipping phone hashes already present.
///
/// Lets a caller grow a running selection one list at a time without
/// recomputing the whole set. `incoming` is expected to be the output of a
/// deduplication pass and is only checked against `existing`.
pub fn add_leads_with_deduplication(
    existing: &[UniqueLead],
    incoming: &[UniqueLead],
) -> Vec<UniqueLead> {
    let existing_hashes: HashSet<&str> =
        existing.iter().map(|lead| lead.phone_hash.as_str()).collect();

    let mut merged = existing.to_vec();
    merged.extend(
        incoming
            .iter()
            .filter(|lead| !existing_hashes.contains(lead.phone_hash.as_str()))
            .cloned(),
    );
    merged
}

/// Drop every lead admitted from `source_id`, preserving order of the rest.
pub fn remove_leads_by_source(leads: &[UniqueLead], source_id: &str) -> Vec<UniqueLead> {
    leads
        .iter()
        .filter(|lead| lead.source_id != source_id)
        .cloned()
        .collect()
}

/// Drop a single lead by id, preserving order of the rest.
pub fn remove_lead(leads: &[UniqueLead], lead_id: &str) -> Vec<UniqueLead> {
    leads
        .iter()
        .filter(|lead| lead.id != lead_id)
        .cloned()
        .collect()
}
