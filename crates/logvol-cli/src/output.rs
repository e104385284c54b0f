//! Response envelope rendering for the kubelet.
//!
//! The kubelet parses standard output as a single JSON object; nothing else
//! may be printed there.

use serde::Serialize;

/// Renders a response envelope as a single JSON line.
///
/// # Errors
///
/// Returns an error if the envelope cannot be serialized.
pub fn render<T: Serialize>(response: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string(response)?)
}

/// Writes a response envelope to standard output.
///
/// # Errors
///
/// Returns an error if the envelope cannot be serialized.
pub fn emit<T: Serialize>(response: &T) -> anyhow::Result<()> {
    println!("{}", render(response)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use logvol_common::types::{DriverResponse, InitResponse};

    use super::*;

    #[test]
    fn render_produces_a_single_line() {
        let line = render(&DriverResponse::success()).expect("render");
        assert!(!line.contains('\n'));
        assert_eq!(line, r#"{"status":"Success","message":"Success"}"#);
    }

    #[test]
    fn render_init_includes_capabilities() {
        let line = render(&InitResponse::success()).expect("render");
        assert!(line.contains(r#""capabilities":{"attach":false}"#));
    }

    #[test]
    fn render_failure_escapes_message_content() {
        let resp = DriverResponse::failure(r#"output: mount: "quoted" failure"#);
        let line = render(&resp).expect("render");
        let back: DriverResponse = serde_json::from_str(&line).expect("parse back");
        assert_eq!(back, resp);
    }
}
