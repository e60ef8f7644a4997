use parking_lot::Mutex;

/// `required` is probed once at start-up. `credentials` holds the last pair the backend accepted.
#[derive(Debug, Default)]
pub struct AuthState {
    pub required: bool,
    pub(crate) credentials: Mutex<Option<(String, String)>>,
}
