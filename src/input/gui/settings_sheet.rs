use crate::storage::preferences::Preferences;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetDecision {
    Accept(Preferences),
    Cancel,
}

/// Modal-style preferences window. Edits go to a draft that only leaves
/// the sheet when OK is pressed.
#[derive(Debug, Default)]
pub struct SettingsSheet {
    draft: Option<Preferences>,
}

impl SettingsSheet {
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.draft.is_some()
    }

    pub fn open(&mut self, current: Preferences) {
        self.draft = Some(current);
    }

    pub fn toggle(&mut self, current: Preferences) {
        if self.is_open() {
            self.draft = None;
        } else {
            self.open(current);
        }
    }

    pub fn show(&mut self, ctx: &egui::Context) -> Option<SheetDecision> {
        let draft = self.draft.as_mut()?;
        let mut decision = None;

        egui::Window::new("Settings")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.checkbox(&mut draft.anti_aliasing, "Anti-aliasing (4× multisampling)");
                ui.separator();

                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() {
                        decision = Some(SheetDecision::Accept(*draft));
                    }
                    if ui.button("Cancel").clicked() {
                        decision = Some(SheetDecision::Cancel);
                    }
                });
            });

        if decision.is_some() {
            self.draft = None;
        }

        decision
    }
}
