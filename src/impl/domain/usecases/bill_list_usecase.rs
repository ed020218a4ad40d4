use std::sync::Arc;

use fractic_server_error::ServerError;

use crate::{
    domain::logic::{attachment_policy::display_url, bill_ordering::sort_latest_first},
    domain::repositories::bill_store::BillStore,
    entities::{BillListItem, BillsViewHandler, Navigator, RoutePath, SessionUser},
    presentation::{
        amount_fmt::format_amount, date_fmt::format_date, status_fmt::format_status,
    },
};

/// Controller for the bill-list page: fetches and formats the current
/// user's bills, and handles the new-bill and attachment-preview actions.
///
/// Collaborators are injected at construction; handlers are plain methods
/// the host page invokes from its event listeners.
pub struct BillsController<N, V>
where
    N: Navigator,
    V: BillsViewHandler,
{
    store: Option<Arc<dyn BillStore>>,
    navigator: N,
    view: V,
    user: SessionUser,
}

impl<N, V> BillsController<N, V>
where
    N: Navigator,
    V: BillsViewHandler,
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
        }
    }

    /// Fetch all bills and prepare them for display, most recent first.
    ///
    /// Without an injected store this returns an empty list (the page can
    /// render statically). A record whose date cannot be formatted keeps
    /// its raw date instead of aborting the list; remote failures
    /// propagate to the caller for the page-level error view.
    pub async fn get_bills(&self) -> Result<Vec<BillListItem>, ServerError> {
        let Some(store) = &self.store else {
            return Ok(Vec::new());
        };
        let mut bills = store.list().await?;
        tracing::debug!(email = %self.user.email, count = bills.len(), "fetched bills");
        sort_latest_first(&mut bills);
        Ok(bills
            .into_iter()
            .map(|bill| {
                let date = match format_date(&bill.date) {
                    Ok(formatted) => formatted,
                    Err(e) => {
                        tracing::warn!(
                            bill_id = bill.id.as_deref().unwrap_or(""),
                            date = %bill.date,
                            error = %e,
                            "could not format bill date, keeping raw value"
                        );
                        bill.date.clone()
                    }
                };
                let status = format_status(bill.status);
                let amount = format_amount(bill.amount);
                BillListItem {
                    date,
                    status,
                    amount,
                    bill,
                }
            })
            .collect())
    }

    /// "Nouvelle note de frais" button.
    pub fn handle_click_new_bill(&self) {
        self.navigator.navigate(RoutePath::NewBill);
    }

    /// Eye icon next to a bill row. An icon without an attachment URL is
    /// ignored rather than opening an empty modal.
    pub fn handle_click_icon_eye(&self, bill_url: Option<&str>) {
        match bill_url {
            Some(url) if !url.is_empty() => self.view.show_attachment(display_url(url)),
            _ => tracing::debug!("eye icon clicked on a bill without an attachment"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::{
        entities::{BillCreation, BillRecord, BillStatus, UserType},
        errors::StoreRequestFailed,
    };

    fn employee() -> SessionUser {
        SessionUser {
            user_type: UserType::Employee,
            email: "a@a".to_string(),
        }
    }

    fn bill(date: &str) -> BillRecord {
        BillRecord {
            id: Some(format!("id-{date}")),
            email: "a@a".to_string(),
            expense_type: "Transports".to_string(),
            name: "vol".to_string(),
            amount: 348.5,
            date: date.to_string(),
            vat: "70".to_string(),
            pct: 20,
            commentary: String::new(),
            file_url: Some("https://store.test/file/abc.png?token=t".to_string()),
            file_name: Some("facture.png".to_string()),
            status: BillStatus::Pending,
            comment_admin: String::new(),
        }
    }

    struct StubStore {
        bills: Vec<BillRecord>,
        fail_list: bool,
        list_calls: Mutex<u32>,
    }

    impl StubStore {
        fn with_bills(bills: Vec<BillRecord>) -> Arc<Self> {
            Arc::new(Self {
                bills,
                fail_list: false,
                list_calls: Mutex::new(0),
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                bills: Vec::new(),
                fail_list: true,
                list_calls: Mutex::new(0),
            })
        }
    }

    #[async_trait]
    impl BillStore for StubStore {
        async fn list(&self) -> Result<Vec<BillRecord>, ServerError> {
            *self.list_calls.lock().unwrap() += 1;
            if self.fail_list {
                return Err(StoreRequestFailed::new("GET bills"));
            }
            Ok(self.bills.clone())
        }

        async fn create(
            &self,
            _file_name: &str,
            _content: Vec<u8>,
            _email: &str,
        ) -> Result<BillCreation, ServerError> {
            Err(StoreRequestFailed::new("POST bills"))
        }

        async fn update(
            &self,
            _selector: Option<&str>,
            _bill: &BillRecord,
        ) -> Result<BillRecord, ServerError> {
            Err(StoreRequestFailed::new("PATCH bills"))
        }
    }

    #[derive(Clone, Default)]
    struct RecordingNavigator {
        routes: Arc<Mutex<Vec<RoutePath>>>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, route: RoutePath) {
            self.routes.lock().unwrap().push(route);
        }
    }

    #[derive(Clone, Default)]
    struct RecordingView {
        shown: Arc<Mutex<Vec<String>>>,
    }

    impl BillsViewHandler for RecordingView {
        fn show_attachment(&self, img_url: &str) {
            self.shown.lock().unwrap().push(img_url.to_string());
        }
    }

    fn controller(
        store: Option<Arc<dyn BillStore>>,
    ) -> (
        BillsController<RecordingNavigator, RecordingView>,
        RecordingNavigator,
        RecordingView,
    ) {
        let navigator = RecordingNavigator::default();
        let view = RecordingView::default();
        let controller =
            BillsController::new(store, navigator.clone(), view.clone(), employee());
        (controller, navigator, view)
    }

    #[tokio::test]
    async fn orders_bills_from_latest_to_earliest() {
        let store = StubStore::with_bills(vec![
            bill("2001-01-01"),
            bill("2003-03-03"),
            bill("2002-02-02"),
            bill("2004-04-04"),
        ]);
        let (controller, _, _) = controller(Some(store));

        let items = controller.get_bills().await.unwrap();

        let raw_dates: Vec<&str> = items.iter().map(|i| i.bill.date.as_str()).collect();
        assert_eq!(
            raw_dates,
            vec!["2004-04-04", "2003-03-03", "2002-02-02", "2001-01-01"]
        );
    }

    #[tokio::test]
    async fn formats_date_status_and_amount_for_display() {
        let store = StubStore::with_bills(vec![bill("2004-04-04")]);
        let (controller, _, _) = controller(Some(store));

        let items = controller.get_bills().await.unwrap();

        assert_eq!(items[0].date, "4 Avr. 04");
        assert_eq!(items[0].status, "En attente");
        assert_eq!(items[0].amount, "348.50 €");
    }

    #[tokio::test]
    async fn keeps_the_raw_date_when_formatting_fails() {
        let mut broken = bill("2004-04-04");
        broken.date = "not-a-date".to_string();
        let store = StubStore::with_bills(vec![broken]);
        let (controller, _, _) = controller(Some(store));

        let items = controller.get_bills().await.unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].date, "not-a-date");
        assert_eq!(items[0].status, "En attente");
    }

    #[tokio::test]
    async fn returns_empty_without_a_store() {
        let (controller, _, _) = controller(None);
        assert_eq!(controller.get_bills().await.unwrap(), Vec::new());
    }

    #[tokio::test]
    async fn propagates_list_failures() {
        let (controller, _, _) = controller(Some(StubStore::failing()));
        assert!(controller.get_bills().await.is_err());
    }

    #[tokio::test]
    async fn calls_list_on_the_store() {
        let store = StubStore::with_bills(vec![bill("2004-04-04")]);
        let (controller, _, _) = controller(Some(store.clone()));

        controller.get_bills().await.unwrap();

        assert_eq!(*store.list_calls.lock().unwrap(), 1);
    }

    #[test]
    fn new_bill_click_navigates_to_the_new_bill_route() {
        let (controller, navigator, _) = controller(None);

        controller.handle_click_new_bill();

        assert_eq!(*navigator.routes.lock().unwrap(), vec![RoutePath::NewBill]);
        assert_eq!(RoutePath::NewBill.path(), "#employee/bill/new");
    }

    #[test]
    fn eye_icon_click_shows_the_attachment_with_a_clean_url() {
        let (controller, _, view) = controller(None);

        controller.handle_click_icon_eye(Some("https://store.test/file/abc.png?token=t"));

        assert_eq!(
            *view.shown.lock().unwrap(),
            vec!["https://store.test/file/abc.png".to_string()]
        );
    }

    #[test]
    fn eye_icon_click_without_a_url_is_a_no_op() {
        let (controller, _, view) = controller(None);

        controller.handle_click_icon_eye(None);
        controller.handle_click_icon_eye(Some(""));

        assert!(view.shown.lock().unwrap().is_empty());
    }
}
