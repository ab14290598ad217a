use log::debug;
use std::time::Instant;

pub struct TimeEstimation;

impl TimeEstimation {
    pub fn estimate<T, F: FnOnce() -> T>(func: F) -> (T, u128) {
        let now = Instant::now();
        let result = func();

        (result, now.elapsed().as_millis())
    }
}

pub struct Logging;

impl Logging {
    pub fn estimate_result<T, F: FnOnce() -> T>(func: F, message: &str) -> T {
        let (result, elapsed) = TimeEstimation::estimate(func);

        debug!("{}: {} ms", message, elapsed);

        result
    }
}
