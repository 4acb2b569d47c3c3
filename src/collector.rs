use std::time::{Duration, Instant};

use tokio::sync::oneshot;


/// Source of environmental entropy. An implementation delivers a single
/// batch of 32-bit samples through the returned receiver: the channel
/// resolves exactly once, and collection cannot be cancelled after it
/// has started.
pub trait EntropyCollector {
    /// Start gathering at least `bits` bits of entropy, spending about
    /// `work_min` milliseconds of CPU per sample.
    fn gather(&mut self, bits: u32, work_min: u32)
        -> oneshot::Receiver<Vec<u32>>;
}


/// Timing-jitter entropy collector. It counts busy-loop iterations per
/// fixed time slice on a blocking thread; the spread between consecutive
/// counts carries the entropy. Must be used within a tokio runtime.
pub struct TimingCollector;


impl EntropyCollector for TimingCollector {
    fn gather(&mut self, bits: u32, work_min: u32)
              -> oneshot::Receiver<Vec<u32>> {
        let (sender, receiver) = oneshot::channel();
        tokio::task::spawn_blocking(move || {
            let values = sample_jitter(bits, work_min);
            // Collection ran to completion even if the receiver is gone
            let _ = sender.send(values);
        });
        receiver
    }
}


/// Count busy-loop iterations per `work_min`-millisecond slice until the
/// spread of consecutive counts has credited the requested bits.
fn sample_jitter(bits: u32, work_min: u32) -> Vec<u32> {
    let slice = Duration::from_millis(work_min.max(1) as u64);
    let mut values = Vec::new();
    let mut harvested = 0u32;
    let mut previous: u64 = 0;

    while harvested < bits {
        let started = Instant::now();
        let mut count: u64 = 0;
        while started.elapsed() < slice {
            count = count.wrapping_add(1);
            std::hint::black_box(count);
        }

        let delta = count.abs_diff(previous);
        previous = count;
        if delta == 0 {
            continue;
        }

        values.push(delta as u32);
        // Credit the bit width of the spread, capped per sample
        harvested += (64 - delta.leading_zeros()).min(8);
    }
    values
}
