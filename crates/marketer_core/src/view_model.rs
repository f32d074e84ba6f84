#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub url: String,
    pub keywords: Vec<String>,
    pub sentences: Vec<SentenceRowView>,
    pub is_loading: bool,
    pub in_flight: usize,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceRowView {
    pub slot: usize,
    pub text: String,
}
