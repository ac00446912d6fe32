use std::sync::mpsc::{Receiver, TryRecvError};

use eframe::egui;

use crate::config::ViewerConfig;
use crate::data::loader::{spawn_load, LoadError};
use crate::data::model::Dataset;
use crate::state::AppState;
use crate::ui::{panels, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct GesViewerApp {
    pub state: AppState,
    config: ViewerConfig,
    /// Result of the startup load, until it arrives.
    pending_load: Option<Receiver<Result<Dataset, LoadError>>>,
}

impl GesViewerApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: ViewerConfig) -> Self {
        cc.egui_ctx.set_theme(egui::ThemePreference::System);

        let pending_load = spawn_load(config.source_path.clone(), cc.egui_ctx.clone());
        let state = AppState {
            loading: true,
            ..AppState::default()
        };

        Self {
            state,
            config,
            pending_load: Some(pending_load),
        }
    }

    fn poll_load(&mut self) {
        let Some(rx) = &self.pending_load else {
            return;
        };
        match rx.try_recv() {
            Ok(Ok(dataset)) => {
                self.state.set_dataset(dataset);
                self.pending_load = None;
            }
            Ok(Err(e)) => {
                self.state.set_load_error(&e);
                self.pending_load = None;
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                log::error!("Loader thread exited without a result");
                self.state.loading = false;
                self.pending_load = None;
            }
        }
    }
}

impl eframe::App for GesViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_load();

        // ---- Top panel: menu bar + status ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state, &self.config);
        });

        // ---- Bottom panel: repository link ----
        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.add_space(4.0);
            panels::footer(ui, &self.config);
            ui.add_space(4.0);
        });

        // ---- Central panel: tabs, filters, table ----
        egui::CentralPanel::default().show(ctx, |ui| {
            panels::header(ui);
            ui.add_space(12.0);
            panels::year_tabs(ui, &mut self.state);
            ui.add_space(8.0);
            panels::controls(ui, &mut self.state);
            ui.separator();
            table::survey_table(ui, &mut self.state);
        });
    }
}
