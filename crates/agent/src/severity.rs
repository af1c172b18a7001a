//! Priority label to severity mapping
//!
//! The priority model emits string labels. The mapping to user-facing
//! advisories is a total function over a closed label set with an explicit
//! default arm: an unmapped label is not an error, it is the lowest tier.

/// Severity tier of a ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Label "1": immediate action.
    TopUrgent,
    /// Label "2": act within minutes.
    Urgent,
    /// Label "3": act within eight hours.
    Normal,
    /// Any other label: act the same day.
    SameDay,
}

impl Severity {
    pub fn from_label(label: &str) -> Self {
        match label {
            "1" => Severity::TopUrgent,
            "2" => Severity::Urgent,
            "3" => Severity::Normal,
            _ => Severity::SameDay,
        }
    }

    /// Advisory line appended to the priority message. Platform copy, kept
    /// verbatim.
    pub fn advisory(&self) -> &'static str {
        match self {
            Severity::TopUrgent => {
                "It should be an TOP URGENT case!! PLEASE TAKE ACTION AT YOUR SOONEST!!"
            }
            Severity::Urgent => "It should be an URGENT case!! Please take action ASAP!",
            Severity::Normal => "It should be an Normal case! Please take action in 8 hours.",
            Severity::SameDay => "It should be an Normal case. Please take action by today.",
        }
    }
}
