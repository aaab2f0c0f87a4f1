/// Tags log lines with the component they came from and drops them when
/// the component's logging is switched off.
#[derive(Clone, Copy, PartialEq)]
pub struct Logger {
    component: &'static str,
    enabled: bool,
}

impl Logger {
    pub fn new(component: &'static str, enabled: bool) -> Self {
        Self { component, enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn info(&self, message: &str) {
        if self.enabled {
            tracing::info!(component = self.component, "{}", message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_disabled_logger() {
        let logger = Logger::new("attendance", false);
        assert!(!logger.is_enabled());
        logger.info("dropped");
    }
}
