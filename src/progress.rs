// src/progress.rs
/// Lightweight progress reporting used by the harvest loop.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called when a listing is opened, with the number of entries it declares.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One detail page was scraped into a record.
    fn item_done(&mut self, _url: &str) {}

    /// One detail page could not be fetched; the record is skipped.
    fn item_failed(&mut self, _url: &str, _reason: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}
