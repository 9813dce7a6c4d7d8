/// Fire-and-forget channel for user-facing messages.
pub trait Notifier: Send {
    fn notify(&mut self, message: &str);
}
