use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 聯絡表單的原始請求內容，欄位缺漏時為 None
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactSubmission {
    #[serde(default, deserialize_with = "falsy_as_missing")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "falsy_as_missing")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "falsy_as_missing")]
    pub subject: Option<String>,
    #[serde(default, deserialize_with = "falsy_as_missing")]
    pub message: Option<String>,
}

/// null、false、0 都當作沒填；其他非字串值仍是解析錯誤
fn falsy_as_missing<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) | Some(Value::Bool(false)) => Ok(None),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(other) => Err(de::Error::custom(format!(
            "expected a string field, found {}",
            other
        ))),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SanitizedContact {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acknowledgement {
    pub name: String,
    pub email: String,
    pub timestamp: String,
}

/// Message handed to a notification sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationMessage {
    pub to: String,
    pub from: String,
    pub reply_to: String,
    pub subject: String,
    pub text: String,
    pub html: String,
}

impl NotificationMessage {
    pub fn from_contact(contact: &SanitizedContact, to: &str, from: &str) -> Self {
        let text = format!(
            "New Contact Form Submission\n\nName: {}\nEmail: {}\nSubject: {}\nReceived: {}\n\nMessage:\n{}",
            contact.name, contact.email, contact.subject, contact.timestamp, contact.message
        );

        let html = format!(
            "<h2>New Contact Form Submission</h2>\
             <p><strong>Name:</strong> {}</p>\
             <p><strong>Email:</strong> {}</p>\
             <p><strong>Subject:</strong> {}</p>\
             <p><strong>Message:</strong></p>\
             <p>{}</p>",
            escape_html(&contact.name),
            escape_html(&contact.email),
            escape_html(&contact.subject),
            escape_html(&contact.message).replace('\n', "<br>")
        );

        Self {
            to: to.to_string(),
            from: from.to_string(),
            reply_to: contact.email.clone(),
            subject: format!("[Contact Form] {}", contact.subject),
            text,
            html,
        }
    }
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
