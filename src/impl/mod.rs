// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod bills_http_datasource;
        pub(crate) mod session_file_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod bill_record_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod bill_store_impl;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod attachment;
        pub(crate) mod bill;
        pub(crate) mod handlers;
        pub(crate) mod routes;
        pub(crate) mod session_user;
    }
    pub(crate) mod logic {
        pub(crate) mod attachment_policy;
        pub(crate) mod bill_ordering;
    }
    pub(crate) mod repositories {
        pub(crate) mod bill_store;
        pub(crate) mod session_store;
    }
    pub(crate) mod usecases {
        pub(crate) mod bill_list_usecase;
        pub(crate) mod new_bill_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod amount_fmt;
    pub(crate) mod date_fmt;
    pub(crate) mod status_fmt;
}

// Public exports.
// ---

#[doc(hidden)]
#[allow(unused_imports)]
pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod entities {
        pub use crate::domain::entities::attachment::*;
        pub use crate::domain::entities::bill::*;
        pub use crate::domain::entities::handlers::*;
        pub use crate::domain::entities::routes::*;
        pub use crate::domain::entities::session_user::*;
    }

    pub mod repositories {
        pub use crate::domain::repositories::bill_store::*;
        pub use crate::domain::repositories::session_store::*;
    }

    pub mod usecases {
        pub use crate::domain::usecases::bill_list_usecase::*;
        pub use crate::domain::usecases::new_bill_usecase::*;
    }

    pub mod formatting {
        pub use crate::presentation::amount_fmt::*;
        pub use crate::presentation::date_fmt::*;
        pub use crate::presentation::status_fmt::*;
    }
}
