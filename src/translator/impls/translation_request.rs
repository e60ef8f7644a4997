use serde_json::{Map, Value};
use crate::translator::structs::translation_request::TranslationRequest;
use crate::translator::templates::{is_deprecated_field, torrent_get_base};

impl TranslationRequest {
    pub fn new(fields: Option<Vec<String>>, ids: Vec<i64>) -> TranslationRequest {
        TranslationRequest { fields, ids }
    }

    /// Requested fields no translated object will carry, deprecated ones excluded.
    pub fn unsupported_fields(&self) -> Vec<String> {
        let Some(fields) = &self.fields else {
            return Vec::new();
        };
        let base = torrent_get_base();
        let mut unsupported: Vec<String> = Vec::new();
        for field in fields {
            if !base.contains_key(field) && !is_deprecated_field(field) && !unsupported.contains(field) {
                unsupported.push(field.clone());
            }
        }
        unsupported
    }

    /// Keeps the requested fields, in request order.
    pub fn project(&self, mut translated: Map<String, Value>) -> Map<String, Value> {
        match &self.fields {
            None => translated,
            Some(fields) => fields.iter()
                .filter_map(|field| translated.remove(field).map(|value| (field.clone(), value)))
                .collect(),
        }
    }
}
