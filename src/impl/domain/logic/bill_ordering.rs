use crate::entities::BillRecord;

/// Anti-chronological order, most recent first. Rendering assumes this
/// order and does not sort again, and the store makes no ordering
/// guarantee, so the list usecase sorts defensively before returning.
///
/// Raw `YYYY-MM-DD` strings compare lexicographically in chronological
/// order, so no date parsing is needed here.
pub(crate) fn sort_latest_first(bills: &mut [BillRecord]) {
    bills.sort_by(|a, b| b.date.cmp(&a.date));
}
