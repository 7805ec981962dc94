use crate::app::CellscanApp;

/// Top strip: camera controls and the nine pipeline parameters.
pub fn controls(ctx: &egui::Context, app: &mut CellscanApp) {
    egui::TopBottomPanel::top("controls").show(ctx, |ui| {
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            ui.label("Device:");
            ui.add(egui::TextEdit::singleline(&mut app.device_index).desired_width(40.0));
            ui.label("FPS:");
            ui.add(egui::TextEdit::singleline(&mut app.target_fps).desired_width(40.0));

            let live = app.session.is_live();
            if ui
                .add_enabled(!live, egui::Button::new("Start Camera"))
                .clicked()
            {
                app.start_camera();
            }
            if ui
                .add_enabled(live, egui::Button::new("Stop Camera"))
                .clicked()
            {
                app.stop_camera();
            }
            if ui.add_enabled(live, egui::Button::new("Capture")).clicked() {
                app.capture(ctx);
            }
        });

        ui.add_space(4.0);
        ui.horizontal(|ui| {
            param_field(ui, "Low Hue", &mut app.raw_params.hue_lo);
            param_field(ui, "High Hue", &mut app.raw_params.hue_hi);
            param_field(ui, "Low Sat", &mut app.raw_params.sat_lo);
            param_field(ui, "High Sat", &mut app.raw_params.sat_hi);
            param_field(ui, "Low Val", &mut app.raw_params.val_lo);
            param_field(ui, "High Val", &mut app.raw_params.val_hi);
            param_field(ui, "Kernel", &mut app.raw_params.kernel_size);
            param_field(ui, "Min A", &mut app.raw_params.min_area);
            param_field(ui, "Max A", &mut app.raw_params.max_area);
        });
        ui.add_space(4.0);
    });
}

fn param_field(ui: &mut egui::Ui, label: &str, value: &mut String) {
    ui.label(format!("{label}:"));
    ui.add(egui::TextEdit::singleline(value).desired_width(48.0));
}

/// Bottom strip: count readout and the last error, if any.
pub fn status(ctx: &egui::Context, app: &CellscanApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);
        ui.horizontal(|ui| {
            ui.strong(format!("Cell Count: {}", app.view.count));
            if let Some(status) = &app.view.status {
                ui.separator();
                ui.colored_label(egui::Color32::LIGHT_RED, status);
            }
        });
        ui.add_space(2.0);
    });
}

/// Central 2x2 grid: live feed, mask, cleaned mask, annotated result.
pub fn image_grid(ctx: &egui::Context, app: &CellscanApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let cell = egui::vec2(
            (ui.available_width() - 16.0) / 2.0,
            (ui.available_height() - 48.0) / 2.0,
        );

        ui.columns(2, |cols| {
            image_cell(&mut cols[0], "Live Feed", &app.view.live, cell);
            image_cell(&mut cols[0], "Mask", &app.view.mask, cell);
            image_cell(&mut cols[1], "Morph", &app.view.cleaned, cell);
            image_cell(&mut cols[1], "Contours", &app.view.annotated, cell);
        });
    });
}

fn image_cell(
    ui: &mut egui::Ui,
    title: &str,
    texture: &Option<egui::TextureHandle>,
    cell: egui::Vec2,
) {
    ui.label(title);
    match texture {
        Some(texture) => {
            ui.add(egui::Image::new(texture).fit_to_exact_size(cell));
        }
        None => {
            let (rect, _) = ui.allocate_exact_size(cell, egui::Sense::hover());
            ui.painter()
                .rect_filled(rect, 2.0, egui::Color32::from_gray(30));
        }
    }
}
