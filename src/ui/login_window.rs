//! Login window shown at startup
//!
//! The monitoring window is only built after the credential store grants
//! a role; a failed attempt shows a blocking alert and stays on the form.

use std::rc::Rc;

use gtk4::prelude::*;
use gtk4::{
    AlertDialog, Application, ApplicationWindow, Box as GtkBox, Button, Entry, Label, Orientation,
    PasswordEntry,
};
use log::{info, warn};

use crate::config::AppConfig;
use crate::store::CredentialStore;

use super::monitor_window;

pub fn present_login_window(app: &Application, store: Rc<CredentialStore>, config: Rc<AppConfig>) {
    let window = ApplicationWindow::builder()
        .application(app)
        .title("Pipeline Monitoring - Login")
        .default_width(400)
        .default_height(200)
        .resizable(false)
        .build();

    let main_box = GtkBox::new(Orientation::Vertical, 8);
    main_box.set_margin_start(12);
    main_box.set_margin_end(12);
    main_box.set_margin_top(12);
    main_box.set_margin_bottom(12);

    let username_label = Label::new(Some("Username:"));
    username_label.set_halign(gtk4::Align::Start);
    main_box.append(&username_label);

    let username_entry = Entry::new();
    main_box.append(&username_entry);

    let password_label = Label::new(Some("Password:"));
    password_label.set_halign(gtk4::Align::Start);
    main_box.append(&password_label);

    let password_entry = PasswordEntry::new();
    password_entry.set_show_peek_icon(true);
    main_box.append(&password_entry);

    let login_button = Button::with_label("Login");
    login_button.add_css_class("suggested-action");
    login_button.set_margin_top(8);
    main_box.append(&login_button);

    window.set_child(Some(&main_box));

    let attempt_login: Rc<dyn Fn()> = {
        let app = app.clone();
        let window = window.clone();
        let username_entry = username_entry.clone();
        let password_entry = password_entry.clone();
        Rc::new(move || {
            let username = username_entry.text();
            let password = password_entry.text();

            // Exact match on both fields; no distinction between unknown
            // username and wrong password
            match store.authenticate(username.as_str(), password.as_str()) {
                Some(role) => {
                    info!("User '{}' authenticated as {}", username, role);
                    monitor_window::present_monitor_window(&app, role, &config);
                    window.close();
                }
                None => {
                    warn!("Failed login attempt for '{}'", username);
                    AlertDialog::builder()
                        .message("Error")
                        .detail("Invalid credentials")
                        .modal(true)
                        .build()
                        .show(Some(&window));
                }
            }
        })
    };

    let attempt_for_button = attempt_login.clone();
    login_button.connect_clicked(move |_| attempt_for_button());

    // Enter in either field submits the form
    let attempt_for_username = attempt_login.clone();
    username_entry.connect_activate(move |_| attempt_for_username());

    let attempt_for_password = attempt_login.clone();
    password_entry.connect_activate(move |_| attempt_for_password());

    window.present();
}
