use crossterm::event::{KeyCode, KeyModifiers};
use cucumber::{given, when};

use crate::common::world::{parse_field, parse_key, FormWorld};
use curlform::form::events::FormField;
use curlform::HttpMethod;

#[given("a fresh curl form")]
fn fresh_form(_world: &mut FormWorld) {}

#[given("the clipboard denies access")]
fn clipboard_denies_access(world: &mut FormWorld) {
    world.use_denied_clipboard();
}

#[when(regex = r"^I select method (\w+)$")]
fn select_method(world: &mut FormWorld, method: String) {
    let target: HttpMethod = method.parse().expect("valid method");
    world.focus_field(FormField::Method);
    for _ in 0..HttpMethod::ALL.len() {
        if world.controller.view_model().draft().method() == target {
            return;
        }
        world.send_key(KeyCode::Right, KeyModifiers::NONE);
    }
    panic!("method {target} never came up in the selector");
}

#[when(regex = r"^I focus the (\w+) field$")]
fn focus_field(world: &mut FormWorld, field: String) {
    world.focus_field(parse_field(&field));
}

#[when(regex = r"^I type `(.*)`$")]
fn type_text(world: &mut FormWorld, text: String) {
    world.type_text(&text);
}

#[when(regex = r"^I type `(.*)` into the (\w+) field$")]
fn type_into_field(world: &mut FormWorld, text: String, field: String) {
    world.focus_field(parse_field(&field));
    world.type_text(&text);
}

#[when(regex = r"^I press (\w+)$")]
fn press_key(world: &mut FormWorld, key: String) {
    world.send_key(parse_key(&key), KeyModifiers::NONE);
}

#[when(regex = r"^I press (\w+) (\d+) times$")]
fn press_key_times(world: &mut FormWorld, key: String, count: usize) {
    for _ in 0..count {
        world.send_key(parse_key(&key), KeyModifiers::NONE);
    }
}

#[when("I press Ctrl+Y")]
fn press_copy_shortcut(world: &mut FormWorld) {
    world.send_key(KeyCode::Char('y'), KeyModifiers::CONTROL);
}

#[when("I press Ctrl+C")]
fn press_terminate(world: &mut FormWorld) {
    world.send_key(KeyCode::Char('c'), KeyModifiers::CONTROL);
}

#[when("I activate the Generate Curl button")]
fn activate_button(world: &mut FormWorld) {
    world.focus_field(FormField::Button);
    world.send_key(KeyCode::Enter, KeyModifiers::NONE);
}
