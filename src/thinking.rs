use log::debug;

/// Marker some reasoning models emit between their thinking and the answer.
pub const THINKING_DELIMITER: &str = "</think>\n\n";

/// Drop the reasoning section from a model reply.
///
/// Splits once, at the first occurrence of [`THINKING_DELIMITER`], and keeps
/// everything after it. Text without the marker is returned unchanged.
pub fn strip_thinking(text: &str) -> &str {
    match text.split_once(THINKING_DELIMITER) {
        Some((thinking, answer)) => {
            debug!("Stripped {} bytes of thinking output", thinking.len());
            answer
        }
        None => text,
    }
}
