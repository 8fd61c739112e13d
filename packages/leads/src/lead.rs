use serde::{Deserialize, Serialize};

/// A lead as supplied by a source list, before deduplication.
///
/// Only `name` is guaranteed; everything else is whatever the upload
/// carried. The same contact routinely appears in several lists with
/// differently formatted phone strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawLead {
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
}

impl RawLead {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: None,
            email: None,
            company: None,
            position: None,
        }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    pub fn with_position(mut self, position: impl Into<String>) -> Self {
        self.position = Some(position.into());
        self
    }
}

/// A deduplicated, campaign-ready lead.
///
/// `source_id` is the list that first admitted the contact; later lists
/// carrying the same phone never overwrite it. `phone_hash` is the dedup
/// key the persistence layer stores per `(campaign_id, phone_hash)` row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniqueLead {
    pub id: String,
    pub source_id: String,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub company: Option<String>,
    pub position: Option<String>,
    pub phone_hash: String,
}

impl UniqueLead {
    /// Build the campaign-ready projection of a raw lead.
    ///
    /// `phone_hash` is passed in because the deduplication pass has already
    /// computed it while deciding admission.
    pub fn from_raw(lead: &RawLead, source_id: &str, phone_hash: String) -> Self {
        let raw_phone = lead.phone.as_deref().unwrap_or("");
        let id = if raw_phone.is_empty() {
            format!("{}-unknown", source_id)
        } else {
            format!("{}-{}", source_id, raw_phone)
        };

        Self {
            id,
            source_id: source_id.to_string(),
            name: lead.name.clone(),
            phone: raw_phone.to_string(),
            email: lead.email.clone(),
            company: lead.company.clone(),
            position: lead.position.clone(),
            phone_hash,
        }
    }
}

/// One named input list for multi-list deduplication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceList {
    pub source_id: String,
    pub leads: Vec<RawLead>,
}

impl SourceList {
    pub fn new(source_id: impl Into<String>, leads: Vec<RawLead>) -> Self {
        Self {
            source_id: source_id.into(),
            leads,
        }
    }
}
