//! Encodings that keep user content safe inside a single header line
//!
//! Two encodings live here:
//!
//! - [`ascii_safe`] passes printable ASCII through untouched and turns any
//!   other string into an RFC 2047 encoded-word (`=?UTF-8?B?...?=`) as a whole.
//! - [`encode_actions`] renders action buttons in ntfy's short header format:
//!   `key=value` pairs joined by `,`, actions joined by `;`.
//!   See <https://docs.ntfy.sh/publish/#using-a-header>.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::borrow::Cow;

use crate::model::{Action, DEFAULT_INTENT, DEFAULT_METHOD};

const ENCODED_WORD_PREFIX: &str = "=?UTF-8?B?";
const ENCODED_WORD_SUFFIX: &str = "?=";

/// Characters that force a value to be quoted in the action format
const SPECIAL_CHARS: [char; 3] = [',', ';', '"'];

fn is_printable_ascii(c: char) -> bool {
    matches!(c, ' '..='~')
}

/// Encode `input` so it can be carried in a header value
///
/// The check is all-or-nothing: a single character outside the printable
/// ASCII range (32..=126) causes the whole string to be base64-encoded.
pub fn ascii_safe(input: &str) -> Cow<'_, str> {
    if input.chars().all(is_printable_ascii) {
        Cow::Borrowed(input)
    } else {
        Cow::Owned(format!(
            "{ENCODED_WORD_PREFIX}{}{ENCODED_WORD_SUFFIX}",
            STANDARD.encode(input.as_bytes())
        ))
    }
}

/// Render a list of actions, separated by `;`
pub fn encode_actions(actions: &[Action]) -> String {
    actions
        .iter()
        .map(encode_action)
        .collect::<Vec<_>>()
        .join(";")
}

/// Render a single action as comma-separated `key=value` pairs
pub fn encode_action(action: &Action) -> String {
    action_fields(action)
        .iter()
        .map(|(key, value)| encode_pair(key, value))
        .collect::<Vec<_>>()
        .join(",")
}

/// Fields of an action in wire order
fn action_fields(action: &Action) -> Vec<(Cow<'_, str>, &str)> {
    let mut fields: Vec<(Cow<'_, str>, &str)> = vec![
        (Cow::Borrowed("action"), action.action()),
        (Cow::Borrowed("label"), action.label()),
    ];

    if action.clear() {
        fields.push((Cow::Borrowed("clear"), "true"));
    }

    match action {
        Action::View(view) => {
            fields.push((Cow::Borrowed("url"), view.url()));
        }
        Action::Broadcast(broadcast) => {
            if broadcast.intent() != DEFAULT_INTENT {
                fields.push((Cow::Borrowed("intent"), broadcast.intent()));
            }
            for (key, value) in broadcast.extras() {
                fields.push((Cow::Owned(format!("extras.{key}")), value.as_str()));
            }
        }
        Action::Http(http) => {
            fields.push((Cow::Borrowed("url"), http.url()));
            if http.method() != DEFAULT_METHOD {
                fields.push((Cow::Borrowed("method"), http.method().name()));
            }
            for (header, value) in http.headers() {
                fields.push((Cow::Owned(format!("headers.{header}")), value.as_str()));
            }
            if let Some(body) = http.body() {
                fields.push((Cow::Borrowed("body"), body));
            }
        }
    }

    fields
}

/// Render one `key=value` pair
///
/// A key containing a special character cannot be told apart from the
/// separators, so the whole pair is quoted in that case.
fn encode_pair(key: &str, value: &str) -> String {
    if needs_quoting(key) {
        quote(&format!("{key}={value}"))
    } else {
        format!("{key}={}", quote_value(value))
    }
}

/// Quote `value` if it contains `,`, `;` or `"`
pub fn quote_value(value: &str) -> Cow<'_, str> {
    if needs_quoting(value) {
        Cow::Owned(quote(value))
    } else {
        Cow::Borrowed(value)
    }
}

fn needs_quoting(value: &str) -> bool {
    value.contains(SPECIAL_CHARS)
}

// Newlines inside quoted values are written as the two characters `\n`.
fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\\\"").replace('\n', "\\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::HttpMethod;

    /// Split an encoded action back into its pairs, honoring quotes
    fn parse_pairs(encoded: &str) -> Vec<(String, String)> {
        let mut segments = Vec::new();
        let mut current = String::new();
        let mut quoted = false;
        let mut chars = encoded.chars();

        while let Some(c) = chars.next() {
            match c {
                '\\' if quoted => match chars.next() {
                    Some('n') => current.push('\n'),
                    Some(other) => current.push(other),
                    None => current.push('\\'),
                },
                '"' => quoted = !quoted,
                ',' if !quoted => segments.push(std::mem::take(&mut current)),
                other => current.push(other),
            }
        }
        segments.push(current);

        segments
            .into_iter()
            .map(|segment| {
                let (key, value) = segment.split_once('=').unwrap();
                (key.to_string(), value.to_string())
            })
            .collect()
    }

    #[test]
    fn test_ascii_passthrough() {
        assert_eq!(ascii_safe("hello world"), "hello world");
        let printable: String = (' '..='~').collect();
        assert_eq!(ascii_safe(&printable), printable);
        assert!(matches!(ascii_safe("plain"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_ascii_safe_non_ascii() {
        assert_eq!(ascii_safe("héllo"), "=?UTF-8?B?aMOpbGxv?=");
    }

    #[test]
    fn test_ascii_safe_is_all_or_nothing() {
        let encoded = ascii_safe("plain text with one snowman \u{2603} in it");
        assert!(encoded.starts_with("=?UTF-8?B?"));
        assert!(encoded.ends_with("?="));
        assert!(!encoded.contains("plain"));

        let inner = &encoded[ENCODED_WORD_PREFIX.len()..encoded.len() - ENCODED_WORD_SUFFIX.len()];
        let decoded = STANDARD.decode(inner).unwrap();
        assert_eq!(
            String::from_utf8(decoded).unwrap(),
            "plain text with one snowman \u{2603} in it"
        );
    }

    #[test]
    fn test_ascii_safe_control_characters() {
        assert!(ascii_safe("line one\nline two").starts_with("=?UTF-8?B?"));
        assert!(ascii_safe("tab\there").starts_with("=?UTF-8?B?"));
        assert!(ascii_safe("del\u{7f}").starts_with("=?UTF-8?B?"));
        assert_eq!(ascii_safe(""), "");
    }

    #[test]
    fn test_encode_view_and_broadcast() {
        let actions = vec![Action::view("V", "U"), Action::broadcast("B").into()];
        assert_eq!(
            encode_actions(&actions),
            "action=view,label=V,url=U;action=broadcast,label=B"
        );
    }

    #[test]
    fn test_encode_clear_flag() {
        let action = Action::view_with_clear("Open", "https://example.com", true);
        assert_eq!(
            encode_action(&action),
            "action=view,label=Open,clear=true,url=https://example.com"
        );
    }

    #[test]
    fn test_encode_broadcast_intent_and_extras() {
        let default_intent: Action = Action::broadcast("B").intent(DEFAULT_INTENT).into();
        assert_eq!(encode_action(&default_intent), "action=broadcast,label=B");

        let action: Action = Action::broadcast("Take picture")
            .intent("com.example.CAMERA")
            .set_extra("cmd", "pic")
            .set_extra("camera", "front")
            .into();
        let pairs = parse_pairs(&encode_action(&action));
        assert!(pairs.contains(&("intent".to_string(), "com.example.CAMERA".to_string())));
        assert!(pairs.contains(&("extras.cmd".to_string(), "pic".to_string())));
        assert!(pairs.contains(&("extras.camera".to_string(), "front".to_string())));
        assert_eq!(pairs.len(), 5);
    }

    #[test]
    fn test_encode_http_action() {
        let action: Action = Action::http("Close door", "https://api.example.com/door")
            .method(HttpMethod::Put)
            .set_header("Authorization", "Bearer abc")
            .body("{\"state\":\"closed\"}")
            .into();
        let encoded = encode_action(&action);
        assert!(encoded.starts_with(
            "action=http,label=Close door,url=https://api.example.com/door,method=PUT"
        ));

        let pairs = parse_pairs(&encoded);
        assert!(pairs.contains(&("headers.Authorization".to_string(), "Bearer abc".to_string())));
        assert!(pairs.contains(&("body".to_string(), "{\"state\":\"closed\"}".to_string())));
        assert!(encoded.ends_with("body=\"{\\\"state\\\":\\\"closed\\\"}\""));
    }

    #[test]
    fn test_encode_http_default_method_omitted() {
        let action: Action = Action::http("H", "https://example.com").into();
        assert_eq!(
            encode_action(&action),
            "action=http,label=H,url=https://example.com"
        );
    }

    #[test]
    fn test_quote_value() {
        assert_eq!(quote_value("plain"), "plain");
        assert_eq!(quote_value("a,b"), "\"a,b\"");
        assert_eq!(quote_value("a;b"), "\"a;b\"");
        assert_eq!(quote_value("say \"hi\""), "\"say \\\"hi\\\"\"");
    }

    #[test]
    fn test_quoted_newlines_are_escaped() {
        assert_eq!(quote_value("one,\ntwo"), "\"one,\\ntwo\"");
        // Without a special character the value is left alone.
        assert_eq!(quote_value("one\ntwo"), "one\ntwo");
    }

    #[test]
    fn test_special_key_quotes_whole_pair() {
        let action: Action = Action::broadcast("B").set_extra("k,1", "v").into();
        assert_eq!(
            encode_action(&action),
            "action=broadcast,label=B,\"extras.k,1=v\""
        );
    }

    #[test]
    fn test_quoting_round_trip() {
        let action: Action = Action::http("Label, with comma", "https://example.com/?a=1;b=2")
            .body("multi\nline, \"quoted\" body")
            .clear(true)
            .into();
        let pairs = parse_pairs(&encode_action(&action));
        assert_eq!(
            pairs,
            vec![
                ("action".to_string(), "http".to_string()),
                ("label".to_string(), "Label, with comma".to_string()),
                ("clear".to_string(), "true".to_string()),
                ("url".to_string(), "https://example.com/?a=1;b=2".to_string()),
                ("body".to_string(), "multi\nline, \"quoted\" body".to_string()),
            ]
        );
    }

    #[test]
    fn test_encoding_is_stable() {
        let action: Action = Action::broadcast("B")
            .set_extra("z", "1")
            .set_extra("a", "2")
            .set_extra("m", "3")
            .into();
        assert_eq!(encode_action(&action), encode_action(&action.clone()));
    }
}
