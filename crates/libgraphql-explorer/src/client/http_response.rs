#[derive(Clone, Debug, PartialEq)]
pub struct HttpResponse {
    pub body: String,
    pub status: u16,
}
impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            status,
        }
    }
}
