use std::time::{Duration, Instant};

use eframe::egui;
use game_core::{FlowEvent, FlowSettings, GameFlow, Screen, Settings};

use crate::{
    controller::{
        events::UiAction,
        reducer::{reduce, Reduction},
    },
    ui::{board, confetti::Confetti, confetti::PARTICLE_COUNT, entry, fonts, roster, summary, theme},
};

const NOTICE_TTL: Duration = Duration::from_secs(2);
const ANIMATION_FRAME: Duration = Duration::from_millis(16);

#[derive(Debug, Clone)]
struct StatusBanner {
    text: String,
    expires_at: Option<Instant>,
}

pub struct YutApp {
    flow: GameFlow,
    title: String,
    subtitle: String,
    status: Option<StatusBanner>,
    confetti: Option<Confetti>,
}

impl YutApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings) -> Self {
        theme::apply(&cc.egui_ctx);
        if fonts::install(&cc.egui_ctx, settings.font_path.as_deref()).is_none() {
            tracing::warn!("no hangul font found; set font_path in yut.toml");
        }
        Self::with_settings(settings)
    }

    fn with_settings(settings: Settings) -> Self {
        Self {
            flow: GameFlow::new(FlowSettings::from(&settings)),
            title: settings.title,
            subtitle: settings.subtitle,
            status: None,
            confetti: None,
        }
    }

    fn apply(&mut self, action: UiAction, now: Instant) {
        let Reduction {
            events,
            error,
            dismiss_status,
        } = reduce(&mut self.flow, action, now);
        if dismiss_status {
            self.status = None;
        }
        if let Some(error) = error.filter(|e| e.is_user_visible()) {
            self.status = Some(StatusBanner {
                text: error.message().to_string(),
                expires_at: None,
            });
        }
        self.handle_events(&events, now);
    }

    fn handle_events(&mut self, events: &[FlowEvent], now: Instant) {
        for event in events {
            match event {
                FlowEvent::Cue(cue) => {
                    tracing::debug!(?cue, "sound cue");
                    if *cue == game_core::Cue::Celebrate {
                        self.confetti =
                            Some(Confetti::generate(&mut rand::thread_rng(), PARTICLE_COUNT, now));
                    }
                }
                FlowEvent::Ignored(reason) => {
                    self.status = Some(StatusBanner {
                        text: reason.message().to_string(),
                        expires_at: Some(now + NOTICE_TTL),
                    });
                }
                FlowEvent::ScreenChanged(kind) => {
                    tracing::debug!(screen = kind.name(), "screen");
                    self.status = None;
                }
                FlowEvent::GameFinished { edges } => tracing::info!(edges, "game finished"),
                FlowEvent::CelebrationEnded => self.confetti = None,
            }
        }
    }

    fn expire_status(&mut self, now: Instant) {
        if self
            .status
            .as_ref()
            .and_then(|s| s.expires_at)
            .is_some_and(|at| at <= now)
        {
            self.status = None;
        }
    }

    fn show_status(&self, ctx: &egui::Context, actions: &mut Vec<UiAction>) {
        let Some(status) = &self.status else {
            return;
        };
        egui::TopBottomPanel::top("status_banner")
            .frame(
                egui::Frame::new()
                    .fill(theme::NODE_SELECTABLE)
                    .inner_margin(egui::Margin::symmetric(16, 8)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(&status.text).color(theme::TEXT));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button("✕").clicked() {
                            actions.push(UiAction::DismissStatus);
                        }
                    });
                });
            });
    }

    fn schedule_repaint(&self, ctx: &egui::Context, now: Instant) {
        if self.confetti.is_some() {
            ctx.request_repaint_after(ANIMATION_FRAME);
            return;
        }
        let deadlines = [
            self.flow.next_deadline(),
            self.status.as_ref().and_then(|s| s.expires_at),
        ];
        if let Some(next) = deadlines.into_iter().flatten().min() {
            ctx.request_repaint_after(next.saturating_duration_since(now));
        }
    }
}

impl eframe::App for YutApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        let fired = self.flow.poll(now);
        self.handle_events(&fired, now);
        self.expire_status(now);

        let mut actions = Vec::new();
        self.show_status(ctx, &mut actions);

        let panel = egui::CentralPanel::default().show(ctx, |ui| match self.flow.screen() {
            Screen::Entry => entry::show(ui, &self.title, &self.subtitle, &mut actions),
            Screen::Roster(form) => roster::show(ui, form, &mut actions),
            Screen::Game(stage) => board::show(ui, &stage.engine, &mut actions),
            Screen::Summary(stage) => summary::show(ui, &stage.summary, &mut actions),
        });

        if let Some(confetti) = &self.confetti {
            let painter = ctx.layer_painter(egui::LayerId::new(
                egui::Order::Foreground,
                egui::Id::new("confetti"),
            ));
            confetti.paint(&painter, panel.response.rect, now);
        }

        for action in actions {
            self.apply(action, now);
        }
        self.schedule_repaint(ctx, now);
    }
}
