//! Running lead selection for one campaign-composition session.
//!
//! The campaign wizard lets a user toggle source lists on and off while
//! composing a send, and shows per-list duplicate counts as it goes. This
//! module keeps that state as a plain value type built on the passes in
//! [`crate::dedupe`]: single-owner, synchronous, no IO. Callers that need
//! to fan the state out (snapshot per wizard step, optimistic UI) clone it.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dedupe::{
    add_leads_with_deduplication, deduplicate_leads_with_count, remove_lead,
    remove_leads_by_source,
};
use crate::lead::{RawLead, UniqueLead};
use crate::stats::DeduplicationStats;

/// How one admitted list broke down at admission time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSummary {
    /// Raw leads the list carried.
    pub total: usize,
    /// Leads admitted into the selection.
    pub added: usize,
    /// Leads dropped as duplicates, within the list or against lists
    /// selected earlier.
    pub duplicates: usize,
    /// Leads dropped for having no usable phone.
    pub missing_phone: usize,
}

/// A source list currently part of the selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedList {
    pub source_id: String,
    pub summary: ListSummary,
}

/// Outcome of [`CampaignSelection::toggle_list`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added(ListSummary),
    Removed,
}

/// The running unique-lead selection for one campaign.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CampaignSelection {
    leads: Vec<UniqueLead>,
    lists: Vec<SelectedList>,
}

impl CampaignSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Admit a source list into the selection.
    ///
    /// The list is deduplicated against itself first, then merged into the
    /// running set; leads whose phone hash is already claimed by an earlier
    /// list are dropped and reported as duplicates. Admitting a list that
    /// is already selected is a no-op returning the summary recorded when
    /// it was first admitted.
    pub fn add_list(&mut self, source_id: &str, leads: &[RawLead]) -> ListSummary {
        if let Some(entry) = self.lists.iter().find(|l| l.source_id == source_id) {
            return entry.summary;
        }

        let outcome = deduplicate_leads_with_count(leads, source_id);
        let missing_phone = leads.len() - outcome.unique_leads.len() - outcome.duplicates_count;

        let merged = add_leads_with_deduplication(&self.leads, &outcome.unique_leads);
        let added = merged.len() - self.leads.len();
        let cross_list = outcome.unique_leads.len() - added;

        let summary = ListSummary {
            total: leads.len(),
            added,
            duplicates: outcome.duplicates_count + cross_list,
            missing_phone,
        };

        self.leads = merged;
        self.lists.push(SelectedList {
            source_id: source_id.to_string(),
            summary,
        });

        debug!(
            source_id,
            added = summary.added,
            duplicates = summary.duplicates,
            "list added to selection"
        );
        summary
    }

    /// Drop a list and every lead it admitted.
    ///
    /// Returns `false` when the list was not selected. Leads from later
    /// lists that were suppressed by this one stay out; re-admitting them
    /// means re-adding their list.
    pub fn remove_list(&mut self, source_id: &str) -> bool {
        let before = self.lists.len();
        self.lists.retain(|l| l.source_id != source_id);
        if self.lists.len() == before {
            return false;
        }

        self.leads = remove_leads_by_source(&self.leads, source_id);
        debug!(
            source_id,
            remaining = self.leads.len(),
            "list removed from selection"
        );
        true
    }

    /// The wizard checkbox: add the list when absent, remove it when present.
    pub fn toggle_list(&mut self, source_id: &str, leads: &[RawLead]) -> ToggleOutcome {
        if self.remove_list(source_id) {
            ToggleOutcome::Removed
        } else {
            ToggleOutcome::Added(self.add_list(source_id, leads))
        }
    }

    /// Opt a single lead out of the selection.
    pub fn remove_lead(&mut self, lead_id: &str) -> bool {
        let before = self.leads.len();
        self.leads = remove_lead(&self.leads, lead_id);
        self.leads.len() != before
    }

    pub fn is_selected(&self, source_id: &str) -> bool {
        self.lists.iter().any(|l| l.source_id == source_id)
    }

    pub fn leads(&self) -> &[UniqueLead] {
        &self.leads
    }

    pub fn into_leads(self) -> Vec<UniqueLead> {
        self.leads
    }

    pub fn selected_lists(&self) -> &[SelectedList] {
        &self.lists
    }

    pub fn len(&self) -> usize {
        self.leads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leads.is_empty()
    }

    /// Aggregate stats over everything admitted so far.
    ///
    /// `original` counts every raw lead of every selected list, so the
    /// duplicate figure also absorbs missing-phone exclusions and manual
    /// opt-outs, matching what the composition screen displays.
    pub fn stats(&self) -> DeduplicationStats {
        let original: usize = self.lists.iter().map(|l| l.summary.total).sum();
        DeduplicationStats::from_counts(original, self.leads.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lead(name: &str, phone: &str) -> RawLead {
        RawLead::new(name).with_phone(phone)
    }

    #[test]
    fn test_cross_list_duplicates_counted_on_later_list() {
        let mut selection = CampaignSelection::new();

        let first = selection.add_list("list1", &[lead("A", "31999990000")]);
        assert_eq!(first.added, 1);
        assert_eq!(first.duplicates, 0);

        let second = selection.add_list(
            "list2",
            &[lead("B", "31999990000"), lead("C", "31888880000")],
        );
        assert_eq!(second.added, 1);
        assert_eq!(second.duplicates, 1);
        assert_eq!(selection.len(), 2);
    }

    #[test]
    fn test_readding_selected_list_is_noop() {
        let mut selection = CampaignSelection::new();
        let first = selection.add_list("list1", &[lead("A", "31999990000")]);
        let again = selection.add_list("list1", &[lead("B", "31888880000")]);

        assert_eq!(first, again);
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn test_toggle_round_trip() {
        let mut selection = CampaignSelection::new();
        selection.add_list("list1", &[lead("A", "31999990000")]);
        let snapshot = selection.leads().to_vec();

        let list2 = vec![lead("B", "31888880000")];
        assert!(matches!(
            selection.toggle_list("list2", &list2),
            ToggleOutcome::Added(_)
        ));
        assert!(matches!(
            selection.toggle_list("list2", &list2),
            ToggleOutcome::Removed
        ));

        assert_eq!(selection.leads(), snapshot.as_slice());
        assert!(!selection.is_selected("list2"));
    }

    #[test]
    fn test_summary_partitions_the_list() {
        let mut selection = CampaignSelection::new();
        let leads = vec![
            lead("A", "31999990000"),
            lead("B", "31999990000"),
            RawLead::new("C"),
        ];
        let summary = selection.add_list("list1", &leads);

        assert_eq!(summary.total, 3);
        assert_eq!(
            summary.added + summary.duplicates + summary.missing_phone,
            summary.total
        );
        assert_eq!(summary.missing_phone, 1);
    }

    #[test]
    fn test_remove_lead_opt_out() {
        let mut selection = CampaignSelection::new();
        selection.add_list("list1", &[lead("A", "31999990000")]);
        let id = selection.leads()[0].id.clone();

        assert!(selection.remove_lead(&id));
        assert!(!selection.remove_lead(&id));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_stats_span_all_lists() {
        let mut selection = CampaignSelection::new();
        selection.add_list("list1", &[lead("A", "31999990000"), lead("B", "31999990000")]);
        selection.add_list("list2", &[lead("C", "31888880000")]);

        let stats = selection.stats();
        assert_eq!(stats.original, 3);
        assert_eq!(stats.unique, 2);
        assert_eq!(stats.duplicates, 1);
    }
}
