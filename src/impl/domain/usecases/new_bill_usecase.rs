use std::sync::Arc;

use crate::{
    domain::logic::attachment_policy::{file_basename, has_allowed_extension},
    domain::repositories::bill_store::BillStore,
    entities::{
        BillRecord, BillStatus, FileSelection, Navigator, NewBillForm, NewBillViewHandler,
        RoutePath, SessionUser,
    },
};

const REJECTED_EXTENSION_ALERT: &str =
    "Seuls les fichiers jpg, jpeg et png sont acceptés.";

/// Fallback percentage when the pct field cannot be parsed.
const DEFAULT_PCT: u32 = 20;

/// Controller for the new-bill form: stages the receipt attachment through
/// the record store, then finalizes the bill on form submission.
///
/// Per instance the attachment moves through Empty -> Staged (upload
/// succeeded) -> Submitted; a rejected file returns it to Empty. The three
/// staged fields are only ever written by `handle_change_file` and read by
/// the submit path.
pub struct NewBillController<N, V>
where
    N: Navigator,
    V: NewBillViewHandler,
{
    store: Option<Arc<dyn BillStore>>,
    navigator: N,
    view: V,
    user: SessionUser,
    file_url: Option<String>,
    file_name: Option<String>,
    bill_id: Option<String>,
}

impl<N, V> NewBillController<N, V>
where
    N: Navigator,
    V: NewBillViewHandler,
{
    pub fn new(
        store: Option<Arc<dyn BillStore>>,
        navigator: N,
        view: V,
        user: SessionUser,
    ) -> Self {
        Self {
            store,
            navigator,
            view,
            user,
            file_url: None,
            file_name: None,
            bill_id: None,
        }
    }

    /// Attachment URL, original filename, and draft key of the staged
    /// upload; all `None` until an upload succeeds.
    pub fn staged(&self) -> (Option<&str>, Option<&str>, Option<&str>) {
        (
            self.file_url.as_deref(),
            self.file_name.as_deref(),
            self.bill_id.as_deref(),
        )
    }

    /// File-input change: validate the extension, then stage the file
    /// through the store's create call.
    ///
    /// A rejected file alerts the user, clears the input, and resets the
    /// staged state so the same file cannot be silently re-submitted. A
    /// failed upload is logged and leaves the previous state in place; two
    /// overlapping selections resolve last-write-wins.
    pub async fn handle_change_file(&mut self, selection: Option<FileSelection>) {
        let Some(selection) = selection else {
            tracing::debug!("file input changed without a file");
            return;
        };
        let file_name = file_basename(&selection.input_value).to_string();
        if !has_allowed_extension(&file_name) {
            self.view.alert(REJECTED_EXTENSION_ALERT);
            self.view.clear_file_input();
            self.file_url = None;
            self.file_name = None;
            self.bill_id = None;
            return;
        }
        let Some(store) = &self.store else {
            return;
        };
        match store
            .create(&file_name, selection.content, &self.user.email)
            .await
        {
            Ok(created) => {
                self.file_url = Some(created.file_url);
                self.file_name = Some(file_name);
                self.bill_id = Some(created.key);
            }
            Err(e) => {
                tracing::error!(file_name = %file_name, error = %e, "attachment upload failed");
            }
        }
    }

    /// Form submission: assemble the bill from the form fields and the
    /// staged attachment, dispatch the update, and navigate back to the
    /// bill list immediately (optimistic navigation; the user is not held
    /// on the network round-trip).
    ///
    /// Submitting before an upload was staged is not guarded against: the
    /// update goes out without identifiers and fails server-side.
    pub fn handle_submit(&self, form: NewBillForm) {
        let bill = BillRecord {
            id: None,
            email: self.user.email.clone(),
            expense_type: form.expense_type,
            name: form.name,
            amount: form.amount.trim().parse().unwrap_or(0.0),
            date: form.date,
            vat: form.vat,
            pct: form.pct.trim().parse().unwrap_or(DEFAULT_PCT),
            commentary: form.commentary,
            file_url: self.file_url.clone(),
            file_name: self.file_name.clone(),
            status: BillStatus::Pending,
            comment_admin: String::new(),
        };
        self.update_bill(bill);
        self.navigator.navigate(RoutePath::Bills);
    }

    /// Dispatch the finalizing update on a background task. Must be called
    /// from within a tokio runtime. Failures are logged; there is no retry
    /// and the caller is never blocked on the outcome.
    pub fn update_bill(&self, bill: BillRecord) {
        let Some(store) = self.store.clone() else {
            return;
        };
        let selector = self.bill_id.clone();
        tokio::spawn(async move {
            if let Err(e) = store.update(selector.as_deref(), &bill).await {
                tracing::error!(error = %e, "bill update failed");
            }
        });
    }
}
