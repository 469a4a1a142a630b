use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use swipr_core::PantryItem;
use swipr_logging::swipr_info;

/// Matches the mock scanner's fixed processing time in the product demo.
pub const DEFAULT_SCAN_DELAY: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanEvent {
    /// The scanner started working on the receipt.
    Scanning,
    /// The detected pantry, ready for confirmation.
    Completed(Vec<PantryItem>),
}

/// Handle to the simulated receipt scanner.
///
/// There is no OCR behind this: a worker thread sleeps for the configured
/// delay and then reports the pantry fixture it was given, so the front
/// end can drive the same scanning/confirmation flow as the real thing.
pub struct ScanHandle {
    event_rx: mpsc::Receiver<ScanEvent>,
}

impl ScanHandle {
    pub fn start(pantry: Vec<PantryItem>, delay: Duration) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let _ = event_tx.send(ScanEvent::Scanning);
            thread::sleep(delay);
            swipr_info!("receipt scan finished with {} pantry items", pantry.len());
            let _ = event_tx.send(ScanEvent::Completed(pantry));
        });

        Self { event_rx }
    }

    pub fn try_recv(&self) -> Option<ScanEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Blocks until the scan completes and returns the detected pantry.
    pub fn wait(self) -> Vec<PantryItem> {
        while let Ok(event) = self.event_rx.recv() {
            if let ScanEvent::Completed(items) = event {
                return items;
            }
        }
        // Worker gone without completing; nothing was detected.
        Vec::new()
    }
}
