//! TwiML messaging response rendering.

/// Content type Twilio expects for TwiML replies.
pub const TWIML_CONTENT_TYPE: &str = "text/xml";

/// A TwiML `<Response>` holding zero or more `<Message>` verbs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessagingResponse {
    messages: Vec<String>,
}

impl MessagingResponse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a `<Message>` verb.
    pub fn message(mut self, body: impl Into<String>) -> Self {
        self.messages.push(body.into());
        self
    }

    /// Renders the document with an XML declaration.
    pub fn to_xml(&self) -> String {
        let mut xml = String::from(r#"<?xml version="1.0" encoding="UTF-8"?><Response>"#);
        for body in &self.messages {
            xml.push_str("<Message>");
            xml.push_str(&escape_xml(body));
            xml.push_str("</Message>");
        }
        xml.push_str("</Response>");
        xml
    }
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
