/// Hash routes the controllers navigate to. The literal paths are a fixed
/// contract with the host page's router.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoutePath {
    Bills,
    NewBill,
}

impl RoutePath {
    pub fn path(&self) -> &'static str {
        match self {
            RoutePath::Bills => "#employee/bills",
            RoutePath::NewBill => "#employee/bill/new",
        }
    }
}
