/// Normalize a free-form phone string for duplicate detection
///
/// Leads arrive with phones formatted every way a spreadsheet allows:
/// spaces, dashes, parentheses, country and trunk prefixes. Normalization
/// reduces all of them to a digits-only identity:
/// - Strip every non-digit character
/// - Drop the leading "55" country code when the cleaned number has 12+
///   digits (Brazilian numbers exported with the country code)
/// - Otherwise drop a leading "0" trunk prefix when the cleaned number has
///   11+ digits
///
/// Returns an empty string when no digits survive. No length or format
/// validation happens beyond the prefix rules; a lead with an empty
/// normalized phone is unusable for outbound messaging and gets skipped by
/// the deduplication pass.
pub fn normalize_phone(raw: &str) -> String {
    let cleaned: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

    if cleaned.is_empty() {
        return cleaned;
    }

    if cleaned.len() >= 12 && cleaned.starts_with("55") {
        cleaned[2..].to_string()
    } else if cleaned.len() >= 11 && cleaned.starts_with('0') {
        cleaned[1..].to_string()
    } else {
        cleaned
    }
}

/// Generate the short dedup key for a phone number
///
/// Normalizes the phone, then hashes the normalized digits with a classic
/// 32-bit polynomial rolling hash and encodes the absolute value in base 36.
/// Deterministic and pure. Not cryptographic: the 32-bit space admits
/// collisions, an accepted trade-off because the short key is what the
/// campaign persistence layer stores per `(campaign_id, phone_hash)` row.
///
/// Returns an empty string for phones that normalize to empty.
pub fn generate_phone_hash(raw: &str) -> String {
    let normalized = normalize_phone(raw);
    if normalized.is_empty() {
        return normalized;
    }
    hash_normalized(&normalized)
}

/// Hash digits that have already been through [`normalize_phone`].
pub(crate) fn hash_normalized(normalized: &str) -> String {
    let mut hash: i32 = 0;
    for c in normalized.chars() {
        hash = hash.wrapping_mul(31).wrapping_add(c as i32);
    }
    to_base36((hash as i64).unsigned_abs())
}

fn to_base36(mut value: u64) -> String {
    const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    if value == 0 {
        return "0".to_string();
    }

    let mut out = String::new();
    while value > 0 {
        out.push(ALPHABET[(value % 36) as usize] as char);
        value /= 36;
    }
    out.chars().rev().collect()
}
