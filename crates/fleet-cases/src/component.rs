//! Component inference from free-text alert messages.

/// Keyword rules checked in order; the first rule with any matching keyword wins.
const COMPONENT_RULES: &[(&[&str], &str)] = &[
    (&["motor", "engine"], "Motor / Drive Unit"),
    (&["propulsion", "propeller"], "Propulsion System"),
    (&["gps", "navigation"], "Navigation System"),
    (&["sensor"], "Sensor Array"),
    (&["comm"], "Communication Module"),
    (&["electrical", "bus"], "Electrical System"),
    (&["hydraulic"], "Hydraulic System"),
    (&["hull", "structural"], "Hull Structure"),
    (&["fuel"], "Fuel System"),
];

pub const GENERAL_SYSTEMS: &str = "General Systems";

/// Infer the affected component from an alert message (case-insensitive substring match).
pub fn infer_component(message: &str) -> &'static str {
    let message = message.to_lowercase();
    COMPONENT_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| message.contains(k)))
        .map(|(_, component)| *component)
        .unwrap_or(GENERAL_SYSTEMS)
}
