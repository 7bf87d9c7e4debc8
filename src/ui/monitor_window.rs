//! Monitoring window
//!
//! Read-only status panel for the three sensors, refreshed on a fixed
//! cadence by a timer on the GTK main loop. Admin and engineer logins
//! additionally get a control panel whose simulate actions mutate the
//! in-memory state through modal prompts; the display catches up on the
//! next tick rather than forcing an immediate redraw.

use std::cell::RefCell;
use std::rc::Rc;

use gtk4::glib;
use gtk4::prelude::*;
use gtk4::{
    Application, ApplicationWindow, Box as GtkBox, Button, DropDown, Frame, Label, Orientation,
};
use log::{debug, info};

use crate::config::AppConfig;
use crate::core::constants::WATER_LEVEL_MAX;
use crate::core::{MonitorState, Role};

use super::value_prompt::show_value_prompt;

/// Labels for one sensor row in the status panel
struct SensorRow {
    infrared: Label,
    water: Label,
    status: Label,
}

pub fn present_monitor_window(app: &Application, role: Role, config: &AppConfig) {
    info!("Opening monitoring view for role {}", role);

    let state = Rc::new(RefCell::new(MonitorState::new(role)));

    let window = ApplicationWindow::builder()
        .application(app)
        .title(format!("Pipeline Monitoring - {} View", role.display_name()))
        .default_width(config.window.width)
        .default_height(config.window.height)
        .build();

    let main_box = GtkBox::new(Orientation::Vertical, 12);
    main_box.set_margin_start(12);
    main_box.set_margin_end(12);
    main_box.set_margin_top(12);
    main_box.set_margin_bottom(12);

    let rows = Rc::new(build_status_panel(&main_box, &state.borrow()));

    if role.can_simulate() {
        build_control_panel(&main_box, &window, &state);
    }

    window.set_child(Some(&main_box));

    // Fixed-cadence refresh; a pure read of the in-memory state. The
    // weak reference stops the timer once the window is gone.
    let window_weak = window.downgrade();
    let state_for_timer = state.clone();
    let rows_for_timer = rows.clone();
    glib::timeout_add_local(config.refresh_interval(), move || {
        if window_weak.upgrade().is_none() {
            return glib::ControlFlow::Break;
        }
        update_display(&state_for_timer.borrow(), &rows_for_timer);
        glib::ControlFlow::Continue
    });

    window.present();
}

/// Build the "Sensor Status" frame and return the per-sensor labels
fn build_status_panel(parent: &GtkBox, state: &MonitorState) -> Vec<SensorRow> {
    let status_frame = Frame::new(Some("Sensor Status"));

    let status_box = GtkBox::new(Orientation::Vertical, 6);
    status_box.set_margin_start(8);
    status_box.set_margin_end(8);
    status_box.set_margin_top(8);
    status_box.set_margin_bottom(8);

    let mut rows = Vec::with_capacity(state.sensors().len());
    for sensor in state.sensors() {
        let row_box = GtkBox::new(Orientation::Horizontal, 12);

        let name_label = Label::new(Some(&format!("Sensor {}:", sensor.id)));
        name_label.add_css_class("heading");
        row_box.append(&name_label);

        let infrared = Label::new(None);
        let water = Label::new(None);
        let status = Label::new(None);
        row_box.append(&infrared);
        row_box.append(&water);
        row_box.append(&status);

        status_box.append(&row_box);
        rows.push(SensorRow {
            infrared,
            water,
            status,
        });
    }

    status_frame.set_child(Some(&status_box));
    parent.append(&status_frame);

    update_display(state, &rows);
    rows
}

/// Build the "Sensor Control" frame for privileged roles
fn build_control_panel(
    parent: &GtkBox,
    window: &ApplicationWindow,
    state: &Rc<RefCell<MonitorState>>,
) {
    let control_frame = Frame::new(Some("Sensor Control"));

    let control_box = GtkBox::new(Orientation::Vertical, 6);
    control_box.set_margin_start(8);
    control_box.set_margin_end(8);
    control_box.set_margin_top(8);
    control_box.set_margin_bottom(8);

    let select_label = Label::new(Some("Select Sensor:"));
    select_label.set_halign(gtk4::Align::Start);
    control_box.append(&select_label);

    let sensor_combo = DropDown::from_strings(&["1", "2", "3"]);
    control_box.append(&sensor_combo);

    let ir_button = Button::with_label("Simulate IR Sensor");
    control_box.append(&ir_button);

    let water_button = Button::with_label("Simulate Water Sensor");
    control_box.append(&water_button);

    let ir_hint = Label::new(Some("IR: 0=No Obstacle, 1=Obstacle"));
    ir_hint.set_halign(gtk4::Align::Start);
    ir_hint.add_css_class("dim-label");
    control_box.append(&ir_hint);

    let water_hint = Label::new(Some("Water: 0=Dry, <500=Partial, >=500=Submerged"));
    water_hint.set_halign(gtk4::Align::Start);
    water_hint.add_css_class("dim-label");
    control_box.append(&water_hint);

    {
        let window = window.clone();
        let state = state.clone();
        let sensor_combo = sensor_combo.clone();
        ir_button.connect_clicked(move |_| {
            let index = sensor_combo.selected() as usize;
            let current = state.borrow().sensors()[index].infrared;
            let state_for_apply = state.clone();
            show_value_prompt(
                &window,
                "IR Simulation",
                "Enter IR value (0 or 1):",
                current as f64,
                0.0,
                1.0,
                move |value| {
                    debug!("Simulating IR value {} on sensor {}", value, index + 1);
                    state_for_apply
                        .borrow_mut()
                        .simulate_infrared(index, value as u8);
                },
            );
        });
    }

    {
        let window = window.clone();
        let state = state.clone();
        water_button.connect_clicked(move |_| {
            let index = sensor_combo.selected() as usize;
            let current = state.borrow().sensors()[index].water_level;
            let state_for_apply = state.clone();
            show_value_prompt(
                &window,
                "Water Simulation",
                "Enter water level (0-1024):",
                current as f64,
                0.0,
                WATER_LEVEL_MAX as f64,
                move |value| {
                    debug!("Simulating water level {} on sensor {}", value, index + 1);
                    state_for_apply
                        .borrow_mut()
                        .simulate_water(index, value as u32);
                },
            );
        });
    }

    control_frame.set_child(Some(&control_box));
    parent.append(&control_frame);
}

fn update_display(state: &MonitorState, rows: &[SensorRow]) {
    for (sensor, row) in state.sensors().iter().zip(rows) {
        row.infrared.set_text(&format!("IR: {}", sensor.infrared));
        row.water.set_text(&format!("Water: {}", sensor.water_level));
        row.status.set_text(&format!("Status: {}", sensor.status));
    }
}
