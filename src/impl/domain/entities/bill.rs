use serde_derive::{Deserialize, Serialize};

// Lifecycle.
// ---

/// Review lifecycle of a submitted bill. New submissions always start out
/// pending; the other two states are set by a reviewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillStatus {
    Pending,
    Accepted,
    Refused,
}

// Records.
// ---

/// One expense-report entry, as owned by the remote record store.
///
/// `date` is kept as the raw `YYYY-MM-DD` string the store returns; it is
/// both the sort key (lexicographic order is chronological order for this
/// shape) and the fallback display value when formatting fails.
#[derive(Debug, Clone, PartialEq)]
pub struct BillRecord {
    /// Assigned by the store on creation; absent on outgoing payloads.
    pub id: Option<String>,
    pub email: String,
    /// Expense category label ("Transports", "Restaurants et bars", ...).
    pub expense_type: String,
    pub name: String,
    pub amount: f64,
    pub date: String,
    pub vat: String,
    pub pct: u32,
    pub commentary: String,
    /// Set by a successful attachment upload, absent before that.
    pub file_url: Option<String>,
    pub file_name: Option<String>,
    pub status: BillStatus,
    /// Reviewer note; empty until a reviewer writes one.
    pub comment_admin: String,
}

/// A bill prepared for display: the raw record plus its display-formatted
/// date, status, and amount. Rows arrive already sorted anti-chronologically.
#[derive(Debug, Clone, PartialEq)]
pub struct BillListItem {
    pub bill: BillRecord,
    pub date: String,
    pub status: String,
    pub amount: String,
}

// Form input.
// ---

/// Raw field values read from the new-bill form. Everything is a string at
/// this point; numeric coercion happens at submission time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewBillForm {
    pub expense_type: String,
    pub name: String,
    pub amount: String,
    pub date: String,
    pub vat: String,
    pub pct: String,
    pub commentary: String,
}
