use cucumber::then;

use crate::common::world::{parse_field, FormWorld};
use curlform::form::models::NotificationKind;

#[then(regex = r"^the command line (\d+) is `(.*)`$")]
fn command_line_is(world: &mut FormWorld, number: usize, expected: String) {
    let command = world.command();
    let line = command.lines().nth(number - 1);
    assert_eq!(
        line,
        Some(expected.as_str()),
        "unexpected line {number} in:\n{command}"
    );
}

#[then(regex = r"^the command has (\d+) lines?$")]
fn command_line_count(world: &mut FormWorld, count: usize) {
    let command = world.command();
    assert_eq!(command.lines().count(), count, "command was:\n{command}");
}

#[then("the command is empty")]
fn command_is_empty(world: &mut FormWorld) {
    assert_eq!(world.command(), "");
}

#[then(regex = r"^the command does not contain `(.*)`$")]
fn command_lacks(world: &mut FormWorld, fragment: String) {
    let command = world.command();
    assert!(!command.contains(&fragment), "command was:\n{command}");
}

#[then(regex = r"^the (\w+) field has focus$")]
fn field_has_focus(world: &mut FormWorld, field: String) {
    assert_eq!(world.focus(), parse_field(&field));
}

#[then("the body field is visible")]
fn body_visible(world: &mut FormWorld) {
    assert!(world.controller.view_model().is_body_visible());
}

#[then("the body field is hidden")]
fn body_hidden(world: &mut FormWorld) {
    assert!(!world.controller.view_model().is_body_visible());
    assert!(!world.screen().contains("Request Body"));
}

#[then(regex = r"^the body text is still `(.*)`$")]
fn body_text_kept(world: &mut FormWorld, expected: String) {
    assert_eq!(world.controller.view_model().draft().body_text(), expected);
}

#[then("the Generate Curl button is disabled")]
fn button_disabled(world: &mut FormWorld) {
    assert!(!world.controller.view_model().is_button_enabled());
}

#[then("the Generate Curl button is enabled")]
fn button_enabled(world: &mut FormWorld) {
    assert!(world.controller.view_model().is_button_enabled());
}

#[then(regex = r"^the clipboard contains line `(.*)`$")]
fn clipboard_contains_line(world: &mut FormWorld, expected: String) {
    let contents = world.clipboard.contents().expect("clipboard should be filled");
    assert!(
        contents.lines().any(|line| line == expected),
        "clipboard was:\n{contents}"
    );
}

#[then("the clipboard matches the command")]
fn clipboard_matches_command(world: &mut FormWorld) {
    assert_eq!(world.clipboard.contents(), Some(world.command()));
}

#[then("the clipboard is empty")]
fn clipboard_is_empty(world: &mut FormWorld) {
    assert_eq!(world.clipboard.contents(), None);
}

#[then(regex = r#"^I see the notification "(.*)"$"#)]
fn notification_shown(world: &mut FormWorld, title: String) {
    let notification = world
        .controller
        .view_model()
        .notification()
        .expect("a notification should be showing");
    assert_eq!(notification.title(), title);
    assert!(world.screen().contains(&title));
}

#[then("the notification is an error")]
fn notification_is_error(world: &mut FormWorld) {
    let kind = world
        .controller
        .view_model()
        .notification()
        .map(|n| n.kind());
    assert_eq!(kind, Some(NotificationKind::Error));
}

#[then("no notification is shown")]
fn no_notification(world: &mut FormWorld) {
    assert!(world.controller.view_model().notification().is_none());
}

#[then(regex = r"^the screen shows `(.*)`$")]
fn screen_shows(world: &mut FormWorld, text: String) {
    let screen = world.screen();
    assert!(screen.contains(&text), "screen was:\n{screen}");
}

#[then(regex = r"^the screen does not show `(.*)`$")]
fn screen_lacks(world: &mut FormWorld, text: String) {
    let screen = world.screen();
    assert!(!screen.contains(&text), "screen was:\n{screen}");
}

#[then("the form has quit")]
fn form_has_quit(world: &mut FormWorld) {
    assert!(world.controller.should_quit());
}
