//! Mutex poison recovery tests.
//!
//! A writer that panics mid-line poisons the console's writer mutex. Later
//! prints must still go through, and concurrent parsing must keep working.

mod common;

use std::io::{self, Write};
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;

use colorswatch::color::{RgbTriplet, parse_color};
use colorswatch::console::Console;
use common::init_test_logging;

/// Panics on the first write, then records everything.
struct PanicOnceWriter {
    panicked: Arc<AtomicBool>,
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl Write for PanicOnceWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if !self.panicked.swap(true, Ordering::SeqCst) {
            panic!("writer failure while holding the console lock");
        }
        self.buffer
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_console_recovers_after_writer_panic() {
    init_test_logging();
    let buffer = Arc::new(Mutex::new(Vec::new()));
    let console = Console::builder()
        .no_color()
        .writer(Box::new(PanicOnceWriter {
            panicked: Arc::new(AtomicBool::new(false)),
            buffer: Arc::clone(&buffer),
        }))
        .build();

    let first = panic::catch_unwind(AssertUnwindSafe(|| console.print_color("red")));
    assert!(first.is_err(), "first write should panic");

    assert!(console.print_color("blue").unwrap());
    let written = String::from_utf8_lossy(&buffer.lock().unwrap()).into_owned();
    assert_eq!(written, "      R:  0 G:  0 B:255 <blue>\n");
}

#[test]
fn test_parsing_from_many_threads() {
    init_test_logging();
    let inputs = ["tomato", "#ff6347", "rgb(255, 99, 71)", "hsl(9, 100%, 64%)"];

    let handles: Vec<_> = (0..8)
        .map(|i| {
            thread::spawn(move || {
                (0..200)
                    .map(|j| parse_color(inputs[(i + j) % inputs.len()]))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let expected: Vec<RgbTriplet> = inputs.iter().map(|s| parse_color(s).unwrap()).collect();
    assert_eq!(expected[3], RgbTriplet::new(254, 98, 71));

    for (i, handle) in handles.into_iter().enumerate() {
        for (j, result) in handle.join().unwrap().into_iter().enumerate() {
            assert_eq!(result, Ok(expected[(i + j) % inputs.len()]));
        }
    }
}
