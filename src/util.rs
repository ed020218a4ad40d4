use std::{path::PathBuf, sync::Arc};

use fractic_server_error::ServerError;

use crate::{
    data::{
        datasources::session_file_datasource::SessionFileDatasource,
        repositories::bill_store_impl::BillStoreImpl,
    },
    domain::repositories::bill_store::BillStore,
    domain::usecases::{bill_list_usecase::BillsController, new_bill_usecase::NewBillController},
    entities::{BillsViewHandler, Navigator, NewBillViewHandler, SessionUser},
    errors::SessionUserMissing,
};

/// Application-boundary wiring: the remote HTTP record store and the
/// file-backed session store, plus constructors for the two page
/// controllers with the session user read once and injected.
pub struct ExpenseBillsUtil {
    store: Arc<dyn BillStore>,
    session: SessionFileDatasource,
}

impl ExpenseBillsUtil {
    pub fn new(api_base_url: &str, session_path: impl Into<PathBuf>) -> Self {
        Self {
            store: Arc::new(BillStoreImpl::new(api_base_url)),
            session: SessionFileDatasource::new(session_path.into()),
        }
    }

    /// The logged-in user, if any.
    pub fn current_user(&self) -> Result<Option<SessionUser>, ServerError> {
        SessionUser::read_from(&self.session)
    }

    pub fn bills_controller<N, V>(
        &self,
        navigator: N,
        view: V,
    ) -> Result<BillsController<N, V>, ServerError>
    where
        N: Navigator,
        V: BillsViewHandler,
    {
        let user = self.current_user()?.ok_or_else(SessionUserMissing::new)?;
        Ok(BillsController::new(
            Some(self.store.clone()),
            navigator,
            view,
            user,
        ))
    }

    pub fn new_bill_controller<N, V>(
        &self,
        navigator: N,
        view: V,
    ) -> Result<NewBillController<N, V>, ServerError>
    where
        N: Navigator,
        V: NewBillViewHandler,
    {
        let user = self.current_user()?.ok_or_else(SessionUserMissing::new)?;
        Ok(NewBillController::new(
            Some(self.store.clone()),
            navigator,
            view,
            user,
        ))
    }
}
