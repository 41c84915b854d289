/// Restricts the next accepted input to a fixed set of choices while a
/// multiple-choice question is in flight.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PendingOptions {
    options: Vec<String>,
}

impl PendingOptions {
    /// Replaces the pending options. An empty sequence leaves the gate open.
    pub fn arm(&mut self, options: Vec<String>) {
        self.options = options;
    }

    pub fn disarm(&mut self) {
        self.options.clear();
    }

    pub fn is_armed(&self) -> bool {
        !self.options.is_empty()
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Exact membership check; no trimming or case folding.
    pub fn validate(&self, input: &str) -> bool {
        !self.is_armed() || self.options.iter().any(|option| option == input)
    }
}
