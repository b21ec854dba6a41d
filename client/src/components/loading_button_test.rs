use super::*;

#[test]
fn idle_class_is_base() {
    assert_eq!(loading_button_class("btn", false), "btn");
    assert_eq!(loading_button_class("btn toolbar__logout", false), "btn toolbar__logout");
}

#[test]
fn loading_class_adds_modifier_for_first_class() {
    assert_eq!(loading_button_class("btn", true), "btn btn--loading");
    assert_eq!(loading_button_class("btn toolbar__logout", true), "btn toolbar__logout btn--loading");
}

#[test]
fn blank_base_falls_back_to_btn() {
    assert_eq!(loading_button_class("", false), "btn");
    assert_eq!(loading_button_class("   ", true), "btn btn--loading");
}

#[test]
fn clicks_blocked_while_loading_or_disabled() {
    assert!(accepts_click(false, false));
    assert!(!accepts_click(true, false));
    assert!(!accepts_click(false, true));
    assert!(!accepts_click(true, true));
}
