/// Borrowed view of the request attributes the guard inspects.
///
/// `origin` is empty when the request carried no `Origin` header.
#[derive(Debug, Clone, Copy)]
pub struct RequestContext<'a> {
    pub route: &'a str,
    pub origin: &'a str,
}

impl<'a> RequestContext<'a> {
    pub fn new(route: &'a str, origin: Option<&'a str>) -> Self {
        Self {
            route,
            origin: origin.unwrap_or_default(),
        }
    }
}
