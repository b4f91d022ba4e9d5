// Threat level value object

categorical_tag! {
    /// Severity of a hard-policy violation. Independent of numeric scoring.
    ThreatLevel ("threat level") {
        None => "NONE",
        Low => "LOW",
        Medium => "MEDIUM",
        High => "HIGH",
        Critical => "CRITICAL",
    }
}

impl ThreatLevel {
    /// Short gate-side label shown next to a result.
    pub fn status_label(&self) -> &'static str {
        match self {
            ThreatLevel::Critical => "[!] EMERGENCY",
            ThreatLevel::High => "[!] ALERT",
            ThreatLevel::Medium | ThreatLevel::Low => "[*] HOLD",
            ThreatLevel::None => "[✓] PROCEED",
        }
    }
}
