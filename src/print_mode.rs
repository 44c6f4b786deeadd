//! Non-interactive mode: print the command once and exit.

use std::io::Write;

use anyhow::Result;

use crate::form::models::RequestDraft;
use crate::form::services::{CopyOutcome, CopyService};

/// Write the draft's command to `out`, followed by a newline.
///
/// Nothing is written when the URL is empty. When `copy_service` is given
/// the command is copied too and the clipboard is handed off before
/// returning. A copy failure is reported on stderr and does not fail the
/// print.
pub fn print_command<W: Write>(
    draft: &RequestDraft,
    copy_service: Option<&mut CopyService>,
    out: &mut W,
) -> Result<()> {
    let command = draft.to_curl_command();
    if command.is_empty() {
        tracing::debug!("No URL given, nothing to print");
        return Ok(());
    }

    writeln!(out, "{command}")?;
    out.flush()?;

    if let Some(service) = copy_service {
        match service.copy_draft(draft) {
            CopyOutcome::Copied(_) => {
                if let Err(e) = service.hand_off() {
                    eprintln!("Copy failed: {e}");
                }
            }
            CopyOutcome::Failed(reason) => eprintln!("Copy failed: {reason}"),
            CopyOutcome::Skipped => {}
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::models::HttpMethod;
    use crate::form::services::clipboard::RecordingClipboard;
    use crate::form::services::MemoryClipboard;

    #[test]
    fn print_should_write_command_with_newline() {
        let mut draft = RequestDraft::new();
        draft.set_url("https://api.example.com/x".to_string());
        let mut out = Vec::new();

        print_command(&draft, None, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "curl -X GET \"https://api.example.com/x\"\n"
        );
    }

    #[test]
    fn print_should_write_nothing_without_url() {
        let mut draft = RequestDraft::new();
        draft.set_method(HttpMethod::Post);
        draft.set_body_text("ignored".to_string());
        let mut out = Vec::new();

        print_command(&draft, None, &mut out).unwrap();

        assert!(out.is_empty());
    }

    #[test]
    fn print_with_copy_should_fill_clipboard() {
        let clipboard = MemoryClipboard::new();
        let mut service = CopyService::with_sink(Box::new(clipboard.clone()));
        let mut draft = RequestDraft::new();
        draft.set_url("https://x.com".to_string());
        let mut out = Vec::new();

        print_command(&draft, Some(&mut service), &mut out).unwrap();

        assert_eq!(
            clipboard.contents().as_deref(),
            Some("curl -X GET \"https://x.com\"")
        );
    }

    #[test]
    fn print_with_copy_should_hand_off_clipboard_before_returning() {
        let recorder = RecordingClipboard::default();
        let mut service = CopyService::with_sink(Box::new(recorder.clone()));
        let mut draft = RequestDraft::new();
        draft.set_url("https://x.com".to_string());

        print_command(&draft, Some(&mut service), &mut Vec::new()).unwrap();

        assert_eq!(
            recorder.calls(),
            vec!["write curl -X GET \"https://x.com\"", "hand_off"]
        );
    }

    #[test]
    fn print_without_url_should_not_hand_off() {
        let recorder = RecordingClipboard::default();
        let mut service = CopyService::with_sink(Box::new(recorder.clone()));

        print_command(&RequestDraft::new(), Some(&mut service), &mut Vec::new()).unwrap();

        assert!(recorder.calls().is_empty());
    }
}
