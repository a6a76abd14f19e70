use crate::LearnApp;
use crate::ui::helpers::big_list_button;
use crate::ui::layout::{message_line, simple_panel};
use crate::view_models::UnitInfo;
use egui::{Context, RichText, ScrollArea};

pub fn ui_learning_path(app: &mut LearnApp, ctx: &Context) {
    // Precompute so the click handlers below can borrow app mutably
    let units: Vec<UnitInfo> = app.unit_infos();
    let language = app.learning.preferences().source_language();

    simple_panel(ctx, 480.0, |ui| {
        let width = ui.available_width();
        let button_h = 36.0;
        ui.heading(format!("{language} learning path"));
        message_line(ui, &app.message);

        ScrollArea::vertical().auto_shrink([false; 2]).show(ui, |ui| {
            for unit in &units {
                ui.add_space(10.0);
                ui.label(RichText::new(unit.label()).strong().size(18.0));
                if !unit.description.is_empty() {
                    ui.label(RichText::new(&unit.description).weak());
                }
                ui.add_space(4.0);

                for lesson in &unit.lessons {
                    if big_list_button(ui, lesson.label(), width, button_h, lesson.unlocked) {
                        app.open_lesson(&unit.id, &lesson.slug);
                        return;
                    }
                    ui.add_space(4.0);
                }
            }
        });
    });
}
