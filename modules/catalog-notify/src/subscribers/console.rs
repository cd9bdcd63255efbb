use catalog_events::Event;
use tracing::warn;

use crate::error::NotifyError;
use crate::sink::ConsoleSink;
use crate::subscriber::Subscriber;

/// Prints each event as a two-line block: the kind, then the payload as
/// pretty JSON.
///
/// Never fails. A console write error is logged and dropped.
#[derive(Debug, Default)]
pub struct ConsoleSubscriber {
    sink: ConsoleSink,
}

impl ConsoleSubscriber {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sink(sink: ConsoleSink) -> Self {
        Self { sink }
    }

    fn render(event: &Event) -> String {
        let data = serde_json::to_string_pretty(&event.data()).unwrap_or_default();
        format!(
            "\n[EVENT] Received: {}\n[EVENT] Data: {}\n\n",
            event.kind(),
            data
        )
    }
}

impl Subscriber for ConsoleSubscriber {
    fn handle(&self, event: &Event) -> Result<(), NotifyError> {
        if let Err(e) = self.sink.write_block(&Self::render(event)) {
            warn!(kind = %event.kind(), error = %e, "Console write failed");
        }
        Ok(())
    }
}
