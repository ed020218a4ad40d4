use crate::entities::RoutePath;

// Navigation handler.
// ---

pub trait Navigator {
    fn navigate(&self, route: RoutePath);
}

// View handlers.
// ---

pub trait BillsViewHandler {
    /// Inject the attachment image into the preview modal and display it.
    /// `img_url` is always a plain file path (any query string already
    /// stripped).
    fn show_attachment(&self, img_url: &str);
}

pub trait NewBillViewHandler {
    /// Blocking user-facing alert (attachment rejection).
    fn alert(&self, message: &str);

    /// Empty the file input's value so a rejected file cannot be silently
    /// re-submitted.
    fn clear_file_input(&self);
}
