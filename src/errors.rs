use fractic_server_error::{define_client_error, define_internal_error};

// Parsing-related.
define_client_error!(InvalidIsoDate, "Invalid ISO date: {date}.", { date: &str });
define_client_error!(InvalidSessionUser, "Invalid session user record (invalid JSON).");
define_client_error!(SessionUserMissing, "No user session found.");
define_client_error!(
    InvalidBillPayload,
    "Could not serialize bill payload: {details}.",
    { details: &str }
);

// Session-store-related.
define_internal_error!(SessionReadError, "Error reading session storage.");
define_internal_error!(SessionWriteError, "Error writing session storage.");

// Record-store-related.
define_internal_error!(
    StoreRequestFailed,
    "Record store request failed: {operation}.",
    { operation: &str }
);
define_internal_error!(
    StoreResponseInvalid,
    "Record store returned an invalid response for {operation}.",
    { operation: &str }
);
define_internal_error!(
    StoreRejected,
    "Record store rejected {operation} ({status_code}): {details}.",
    { operation: &str, status_code: u16, details: &str }
);
