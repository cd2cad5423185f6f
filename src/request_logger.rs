use tracing::{error, info, warn};

/// Tags each log entry of one request with its id and brackets the request
/// with start and end markers. The end marker is written on drop.
pub struct RequestLogger {
    request_id: u64,
}

impl RequestLogger {
    pub fn new(request_id: u64) -> Self {
        info!("------------------- [Request {}] Start -------------------", request_id);
        Self { request_id }
    }

    pub fn request_id(&self) -> u64 {
        self.request_id
    }

    pub fn info<S: AsRef<str>>(&self, msg: S) {
        info!("[Request {}] {}", self.request_id, msg.as_ref());
    }

    pub fn warn<S: AsRef<str>>(&self, msg: S) {
        warn!("[Request {}] {}", self.request_id, msg.as_ref());
    }

    pub fn error<S: AsRef<str>>(&self, msg: S) {
        error!("[Request {}] {}", self.request_id, msg.as_ref());
    }
}

impl Drop for RequestLogger {
    fn drop(&mut self) {
        info!("------------------- [Request {}] End ---------------------", self.request_id);
    }
}
