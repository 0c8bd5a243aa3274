//! Decoding of the `run_sse` event stream served by ADK API servers.
//!
//! Each event is a `data: <json>` line whose JSON is an ADK event; the text
//! an agent produced lives in `content.parts[*].text`.

use serde_json::Value;

/// Answer used when no event in a response carried text.
pub const NO_FINAL_TEXT: &str = "No final text response found.";

/// The payload of a `data:` line, trimmed. `None` for any other line.
pub fn data_payload(line: &str) -> Option<&str> {
    line.strip_prefix("data:").map(str::trim)
}

/// Text carried by one event payload, if the payload is JSON with a text part.
pub fn event_text(payload: &str) -> Option<String> {
    let event: Value = serde_json::from_str(payload).ok()?;
    event_text_value(&event)
}

fn event_text_value(event: &Value) -> Option<String> {
    event
        .get("content")?
        .get("parts")?
        .as_array()?
        .iter()
        .find_map(|part| part.get("text").and_then(Value::as_str))
        .map(str::to_string)
}

/// Text of the last event that carried any, or [`NO_FINAL_TEXT`].
pub fn final_text(body: &str) -> String {
    body.lines()
        .filter_map(data_payload)
        .filter_map(event_text)
        .last()
        .unwrap_or_else(|| NO_FINAL_TEXT.to_string())
}

/// Splits a byte stream into complete lines.
///
/// Network chunks may end mid-line or mid-codepoint; bytes are held back
/// until their line terminator arrives.
#[derive(Debug, Default)]
pub struct LineBuffer {
    pending: Vec<u8>,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `chunk` and returns every line it completed, without terminators.
    pub fn push(&mut self, chunk: &[u8]) -> Vec<String> {
        self.pending.extend_from_slice(chunk);
        let mut lines = Vec::new();
        while let Some(pos) = self.pending.iter().position(|b| *b == b'\n') {
            let mut line: Vec<u8> = self.pending.drain(..=pos).collect();
            line.pop();
            if line.last() == Some(&b'\r') {
                line.pop();
            }
            lines.push(String::from_utf8_lossy(&line).into_owned());
        }
        lines
    }

    /// The unterminated tail, if any, once the stream has ended.
    pub fn finish(self) -> Option<String> {
        if self.pending.is_empty() {
            None
        } else {
            Some(String::from_utf8_lossy(&self.pending).into_owned())
        }
    }
}

/// Turns streamed events into text fragments.
///
/// With streaming enabled an ADK server sends `partial` events followed by
/// one aggregate event repeating their text. A complete event whose text
/// equals the partial text streamed since the last complete event is that
/// aggregate and is dropped, so the concatenated fragments equal the reply.
#[derive(Debug, Default)]
pub struct FragmentDecoder {
    partial_text: String,
}

impl FragmentDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The fragment contributed by one line of the stream, if any.
    pub fn decode_line(&mut self, line: &str) -> Option<String> {
        let event: Value = serde_json::from_str(data_payload(line)?).ok()?;
        let text = event_text_value(&event);
        if event.get("partial").and_then(Value::as_bool).unwrap_or(false) {
            if let Some(text) = &text {
                self.partial_text.push_str(text);
            }
            return text;
        }
        let streamed = std::mem::take(&mut self.partial_text);
        match text {
            Some(text) if !streamed.is_empty() && text == streamed => None,
            text => text,
        }
    }
}
