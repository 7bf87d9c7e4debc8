//! Modal bounded numeric prompt
//!
//! Used by the sensor control panel for the two simulate actions. The
//! SpinButton bounds are the validation: out-of-range values cannot be
//! entered, so the apply callback always receives an in-range value.
//! Cancel (or closing the window) applies nothing.

use gtk4::prelude::*;
use gtk4::{Box as GtkBox, Button, Label, Orientation, SpinButton, Window};

/// Show a modal prompt for a single integer value in `[min, max]`.
///
/// `on_apply` runs on OK with the chosen value; cancellation never
/// invokes it.
pub fn show_value_prompt(
    parent: &impl IsA<Window>,
    title: &str,
    prompt: &str,
    current: f64,
    min: f64,
    max: f64,
    on_apply: impl Fn(i64) + 'static,
) {
    let dialog = Window::builder()
        .title(title)
        .modal(true)
        .resizable(false)
        .build();
    dialog.set_transient_for(Some(parent));

    let main_box = GtkBox::new(Orientation::Vertical, 8);
    main_box.set_margin_start(12);
    main_box.set_margin_end(12);
    main_box.set_margin_top(12);
    main_box.set_margin_bottom(12);

    let prompt_label = Label::new(Some(prompt));
    prompt_label.set_halign(gtk4::Align::Start);
    main_box.append(&prompt_label);

    let value_spin = SpinButton::with_range(min, max, 1.0);
    value_spin.set_value(current);
    main_box.append(&value_spin);

    // Buttons
    let button_box = GtkBox::new(Orientation::Horizontal, 6);
    button_box.set_halign(gtk4::Align::End);
    button_box.set_margin_top(12);

    let cancel_button = Button::with_label("Cancel");
    let ok_button = Button::with_label("OK");
    ok_button.add_css_class("suggested-action");

    button_box.append(&cancel_button);
    button_box.append(&ok_button);
    main_box.append(&button_box);

    dialog.set_child(Some(&main_box));

    let dialog_for_ok = dialog.clone();
    let spin_for_ok = value_spin.clone();
    ok_button.connect_clicked(move |_| {
        on_apply(spin_for_ok.value_as_int() as i64);
        dialog_for_ok.close();
    });

    let dialog_for_cancel = dialog.clone();
    cancel_button.connect_clicked(move |_| {
        dialog_for_cancel.close();
    });

    dialog.present();
}
