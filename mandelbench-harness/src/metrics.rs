//! Process resource sampling around an opaque call.
//!
//! On Linux CPU time comes from `/proc/self/stat` and memory from
//! `/proc/self/status`. Other platforms only get wall-clock time; the
//! CPU and memory fields are `None`.
//!
//! A baseline sample is always taken before the call, so CPU utilization is
//! the CPU time spent during the call divided by its wall time, never a
//! single cold poll.

use serde::Serialize;
use std::time::{Duration, Instant};

/// Kernel clock ticks per second for `/proc/<pid>/stat` times (USER_HZ).
///
/// Linux exports these times in USER_HZ units, which is 100 on every
/// mainstream architecture regardless of the kernel's internal HZ. A kernel
/// built with a different USER_HZ would scale `cpu_percent` by the ratio.
const CLOCK_TICKS_PER_SEC: u64 = 100;

const BYTES_PER_MIB: f64 = 1024.0 * 1024.0;

/// Snapshot of process resource usage.
///
/// `cpu_time` converts `/proc/self/stat` ticks assuming USER_HZ = 100
/// (`CLOCK_TICKS_PER_SEC`).
#[derive(Clone, Copy, Debug)]
pub struct ResourceSample {
    pub at: Instant,
    /// User + system CPU time consumed by the process so far
    pub cpu_time: Option<Duration>,
    /// Current resident set size
    pub rss_bytes: Option<u64>,
    /// High-water mark of the resident set size
    pub peak_rss_bytes: Option<u64>,
}

impl ResourceSample {
    pub fn now() -> Self {
        let status = read_proc("status");
        let status_bytes = |key: &str| {
            status
                .as_deref()
                .and_then(|s| parse_status_kib(s, key))
                .map(|kib| kib * 1024)
        };

        Self {
            at: Instant::now(),
            cpu_time: read_proc("stat").as_deref().and_then(parse_cpu_time),
            rss_bytes: status_bytes("VmRSS"),
            peak_rss_bytes: status_bytes("VmHWM"),
        }
    }
}

/// Value returned by a measured call together with its resource usage.
#[derive(Clone, Debug)]
pub struct Measured<T> {
    pub value: T,
    pub wall: Duration,
    pub cpu_percent: Option<f64>,
    pub peak_memory_mib: Option<f64>,
    pub memory_delta_mib: Option<f64>,
}

/// Run `f`, sampling resources before and after.
///
/// The peak RSS counter is reset first where the kernel allows it, so the
/// reported peak belongs to this call rather than to an earlier, larger one.
pub fn measure<T>(f: impl FnOnce() -> T) -> Measured<T> {
    reset_peak_rss();
    let before = ResourceSample::now();
    let value = f();
    let after = ResourceSample::now();

    let wall = after.at.duration_since(before.at);

    let cpu_percent = match (before.cpu_time, after.cpu_time) {
        (Some(start), Some(end)) if !wall.is_zero() => {
            let cpu = end.saturating_sub(start);
            Some(cpu.as_secs_f64() / wall.as_secs_f64() * 100.0)
        }
        _ => None,
    };

    let memory_delta_mib = match (before.rss_bytes, after.rss_bytes) {
        (Some(start), Some(end)) => Some((end as f64 - start as f64) / BYTES_PER_MIB),
        _ => None,
    };

    Measured {
        value,
        wall,
        cpu_percent,
        peak_memory_mib: after.peak_rss_bytes.map(|b| b as f64 / BYTES_PER_MIB),
        memory_delta_mib,
    }
}

/// Metrics recorded for one evaluator run.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RunMetrics {
    pub evaluator: String,
    pub display_name: String,
    pub elapsed_ms: f64,
    pub cpu_percent: Option<f64>,
    pub peak_memory_mib: Option<f64>,
    pub memory_delta_mib: Option<f64>,
    pub escaped_cells: usize,
    pub bounded_cells: usize,
}

#[cfg(target_os = "linux")]
fn read_proc(name: &str) -> Option<String> {
    std::fs::read_to_string(format!("/proc/self/{name}")).ok()
}

#[cfg(not(target_os = "linux"))]
fn read_proc(_name: &str) -> Option<String> {
    None
}

#[cfg(target_os = "linux")]
fn reset_peak_rss() {
    // "5" resets VmHWM to the current RSS (Linux >= 4.0)
    if let Err(e) = std::fs::write("/proc/self/clear_refs", "5") {
        log::debug!("Could not reset peak RSS: {e}");
    }
}

#[cfg(not(target_os = "linux"))]
fn reset_peak_rss() {}

/// User + system time from the contents of `/proc/<pid>/stat`.
fn parse_cpu_time(stat: &str) -> Option<Duration> {
    // comm (field 2) may contain spaces and parentheses; fields resume after the last ')'
    let rest = &stat[stat.rfind(')')? + 1..];
    let fields: Vec<&str> = rest.split_whitespace().collect();
    // rest starts at field 3 (state); utime and stime are fields 14 and 15
    let utime: u64 = fields.get(11)?.parse().ok()?;
    let stime: u64 = fields.get(12)?.parse().ok()?;
    let ticks = utime + stime;
    Some(Duration::from_millis(ticks * 1000 / CLOCK_TICKS_PER_SEC))
}

/// Value in kB of a `Key:   1234 kB` line from `/proc/<pid>/status`.
fn parse_status_kib(status: &str, key: &str) -> Option<u64> {
    status.lines().find_map(|line| {
        let value = line.strip_prefix(key)?.strip_prefix(':')?;
        value.split_whitespace().next()?.parse().ok()
    })
}
