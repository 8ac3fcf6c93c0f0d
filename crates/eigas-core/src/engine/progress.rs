#[derive(Debug, Clone, PartialEq)]
pub enum Progress {
    PhaseStart { name: &'static str },
    PhaseFinish,

    TaskStart { total_steps: u64 },
    TaskIncrement,
    TaskFinish,

    Message(String),
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

/// Forwards workflow events to an optional callback; silent without one.
#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }

    /// Runs `body` between a `TaskStart` and a `TaskFinish` event.
    pub fn task<T>(&self, total_steps: usize, body: impl FnOnce() -> T) -> T {
        self.report(Progress::TaskStart {
            total_steps: total_steps as u64,
        });
        let output = body();
        self.report(Progress::TaskFinish);
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn recording_reporter() -> (ProgressReporter<'static>, Arc<Mutex<Vec<Progress>>>) {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = events.clone();
        let reporter = ProgressReporter::with_callback(Box::new(move |event: Progress| {
            sink.lock().unwrap().push(event);
        }));
        (reporter, events)
    }

    #[test]
    fn reporter_without_callback_is_silent() {
        let reporter = ProgressReporter::new();
        reporter.report(Progress::Message("nobody listens".to_string()));
        assert_eq!(reporter.task(3, || 7), 7);
    }

    #[test]
    fn task_wraps_body_in_start_and_finish_events() {
        let (reporter, events) = recording_reporter();
        let value = reporter.task(2, || {
            reporter.report(Progress::TaskIncrement);
            reporter.report(Progress::TaskIncrement);
            "done"
        });
        assert_eq!(value, "done");
        assert_eq!(
            *events.lock().unwrap(),
            vec![
                Progress::TaskStart { total_steps: 2 },
                Progress::TaskIncrement,
                Progress::TaskIncrement,
                Progress::TaskFinish,
            ]
        );
    }
}
