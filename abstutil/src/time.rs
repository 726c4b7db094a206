use instant::Instant;

pub fn elapsed_seconds(since: Instant) -> f64 {
    let dt = since.elapsed();
    (dt.as_secs() as f64) + (f64::from(dt.subsec_nanos()) * 1e-9)
}

pub fn prettyprint_time(seconds: f64) -> String {
    format!("{:.4}s", seconds)
}

/// A very stripped down version of the hierarchial timer: it only measures named phases and
/// reports them through the log when done.
pub struct Timer {
    outermost_name: String,
    started_at: Instant,
    results: Vec<String>,
    current: Option<(String, Instant)>,
}

impl Timer {
    pub fn new<S: Into<String>>(name: S) -> Timer {
        let name = name.into();
        info!("{}...", name);
        Timer {
            outermost_name: name,
            started_at: Instant::now(),
            results: Vec::new(),
            current: None,
        }
    }

    pub fn start<S: Into<String>>(&mut self, name: S) {
        self.finish_current();
        self.current = Some((name.into(), Instant::now()));
    }

    pub fn stop(&mut self) {
        self.finish_current();
    }

    fn finish_current(&mut self) {
        if let Some((name, started_at)) = self.current.take() {
            let line = format!("{}... {}", name, prettyprint_time(elapsed_seconds(started_at)));
            debug!("{}", line);
            self.results.push(line);
        }
    }

    /// Returns the total elapsed time in seconds.
    pub fn done(mut self) -> f64 {
        self.finish_current();
        let elapsed = elapsed_seconds(self.started_at);
        info!("{} took {}", self.outermost_name, prettyprint_time(elapsed));
        for line in &self.results {
            info!("- {}", line);
        }
        elapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phases_are_recorded_in_order() {
        let mut timer = Timer::new("test");
        timer.start("first");
        timer.start("second");
        timer.stop();
        assert_eq!(timer.results.len(), 2);
        assert!(timer.results[0].starts_with("first..."));
        assert!(timer.results[1].starts_with("second..."));
        assert!(timer.done() >= 0.0);
    }

    #[test]
    fn prettyprint() {
        assert_eq!(prettyprint_time(1.5), "1.5000s");
    }
}
