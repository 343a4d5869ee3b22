//! Contact links for a member.
//!
//! Nothing is sent from here: messaging produces a `mailto:` link for the
//! user's mail client, calling produces a `tel:` link.

use crate::commands::{CmdMessage, CmdResult};
use crate::config::RosterConfig;
use crate::domains::{Domain, Member};
use crate::error::{Result, RosterError};
use crate::model::Entity;
use crate::store::DataStore;

fn find_member<S: DataStore>(store: &S, id: &str) -> Result<Member> {
    store
        .load()?
        .members
        .into_iter()
        .find(|m| m.id == id)
        .ok_or_else(|| RosterError::NotFound {
            domain: Domain::Members.name().to_string(),
            id: id.to_string(),
        })
}

/// Build a `mailto:` link to a member. An empty body is rejected.
pub fn message<S: DataStore>(
    store: &S,
    id: &str,
    body: &str,
    config: &RosterConfig,
) -> Result<CmdResult> {
    if body.trim().is_empty() {
        return Err(RosterError::Validation("Please enter a message.".into()));
    }
    let member = find_member(store, id)?;
    let subject = format!("Message from {}", config.organization);

    let mut result = CmdResult::for_domain(Domain::Members);
    result.link = Some(mailto_link(&member.email, &subject, body));
    result.add_message(CmdMessage::success(format!(
        "Email client opened for {}",
        member.name
    )));
    Ok(result.with_affected(vec![member.to_record()]))
}

/// Build a `tel:` link to a member.
pub fn call<S: DataStore>(store: &S, id: &str) -> Result<CmdResult> {
    let member = find_member(store, id)?;
    if member.phone.trim().is_empty() {
        return Err(RosterError::Validation(format!(
            "{} has no phone number.",
            member.name
        )));
    }

    let mut result = CmdResult::for_domain(Domain::Members);
    result.link = Some(tel_link(&member.phone));
    result.add_message(CmdMessage::info(format!(
        "Initiating call to {}",
        member.name
    )));
    Ok(result.with_affected(vec![member.to_record()]))
}

pub fn mailto_link(email: &str, subject: &str, body: &str) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        email,
        encode_component(subject),
        encode_component(body)
    )
}

/// Phone numbers are written with spaces for reading; links carry none.
pub fn tel_link(phone: &str) -> String {
    let number: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    format!("tel:{}", number)
}

/// Percent-encode everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`,
/// the same set a browser's `encodeURIComponent` leaves alone.
pub fn encode_component(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(byte as char),
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn test_encode_component() {
        assert_eq!(
            encode_component("Message from Rotaract District 3206"),
            "Message%20from%20Rotaract%20District%203206"
        );
        assert_eq!(encode_component("a&b=c?d/e"), "a%26b%3Dc%3Fd%2Fe");
        assert_eq!(encode_component("it's (fine)!"), "it's%20(fine)!");
        assert_eq!(encode_component("line\nbreak"), "line%0Abreak");
        assert_eq!(encode_component("café"), "caf%C3%A9");
    }

    #[test]
    fn test_message_builds_mailto() {
        let store = StoreFixture::new().with_sample().store;
        let res = message(&store, "1", "See you Saturday", &RosterConfig::default()).unwrap();
        assert_eq!(
            res.link.as_deref(),
            Some(
                "mailto:rashvandhappukutty@gmail.com?subject=Message%20from%20Rotaract%20District%203206&body=See%20you%20Saturday"
            )
        );
        assert_eq!(res.messages[0].content, "Email client opened for Rashvandh A");
    }

    #[test]
    fn test_empty_message_rejected() {
        let store = StoreFixture::new().with_sample().store;
        let err = message(&store, "1", "   ", &RosterConfig::default()).unwrap_err();
        assert_eq!(err.to_string(), "Please enter a message.");
    }

    #[test]
    fn test_call_strips_spaces() {
        let store = StoreFixture::new().with_sample().store;
        let res = call(&store, "2").unwrap();
        assert_eq!(res.link.as_deref(), Some("tel:+916359878966"));
        assert_eq!(res.messages[0].content, "Initiating call to Rithanya L");
    }

    #[test]
    fn test_unknown_member() {
        let store = StoreFixture::new().with_sample().store;
        assert!(matches!(
            call(&store, "42"),
            Err(RosterError::NotFound { .. })
        ));
    }
}
