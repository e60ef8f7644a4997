/// `fields` is `None` when the client asked for no projection and gets the full object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationRequest {
    pub fields: Option<Vec<String>>,
    pub ids: Vec<i64>,
}
