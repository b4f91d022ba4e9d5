// Decision value object

categorical_tag! {
    /// Admission outcome, ordered from most to least lenient.
    Decision ("decision") {
        Allow => "ALLOW",
        Conditional => "CONDITIONAL",
        Disallow => "DISALLOW",
    }
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allow)
    }
}
