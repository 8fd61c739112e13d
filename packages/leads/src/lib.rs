//! # Leads
//!
//! Campaign lead deduplication core: merges leads from one or more source
//! lists into a set unique by phone number, tracking which list first
//! admitted each contact and how many duplicates were dropped along the
//! way.
//!
//! ## Core Concepts
//!
//! - Two leads are the same contact iff their phones normalize to the same
//!   non-empty digit string ([`normalize_phone`]).
//! - The dedup key is a short base-36 hash of the normalized phone
//!   ([`generate_phone_hash`]), the same key the campaign persistence
//!   layer stores per `(campaign_id, phone_hash)` row.
//! - First seen wins: within a list, across lists, and across incremental
//!   merges, the earliest occurrence of a phone keeps its place and its
//!   `source_id`.
//! - Everything is a pure function over in-memory sequences. No IO, no
//!   async, nothing to retry. Leads without a usable phone are silently
//!   excluded, never errors.
//!
//! [`CampaignSelection`] layers the wizard's toggle-lists-on-and-off state
//! on top of the passes; [`import`] is the boundary where loosely-shaped
//! uploaded rows become closed records.
//!
//! ## Example
//!
//! ```rust
//! use leads_core::{deduplicate_leads, RawLead};
//!
//! let leads = vec![
//!     RawLead::new("Ana").with_phone("55 31 98332-3121"),
//!     RawLead::new("Bruno").with_phone("(31) 98332-3121"),
//! ];
//!
//! let unique = deduplicate_leads(&leads, "list-1");
//! assert_eq!(unique.len(), 1);
//! assert_eq!(unique[0].name, "Ana");
//! ```

pub mod dedupe;
pub mod import;
pub mod lead;
pub mod phone;
pub mod selection;
pub mod stats;

pub use dedupe::{
    add_leads_with_deduplication, deduplicate_leads, deduplicate_leads_with_count,
    deduplicate_multiple_lists, remove_lead, remove_leads_by_source, DedupOutcome,
};
pub use import::{parse_lead_json, parse_lead_rows, ImportError};
pub use lead::{RawLead, SourceList, UniqueLead};
pub use phone::{generate_phone_hash, normalize_phone};
pub use selection::{CampaignSelection, ListSummary, SelectedList, ToggleOutcome};
pub use stats::{deduplication_stats, DeduplicationStats};
