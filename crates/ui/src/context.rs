use std::sync::Arc;

use services::{DrillService, RewardService, ToneService};

/// What the composition root hands the renderer.
pub trait UiApp: Send + Sync {
    fn drill(&self) -> Arc<DrillService>;
    fn tones(&self) -> Arc<ToneService>;
    fn rewards(&self) -> Arc<RewardService>;
}

#[derive(Clone)]
pub struct AppContext {
    drill: Arc<DrillService>,
    tones: Arc<ToneService>,
    rewards: Arc<RewardService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            drill: app.drill(),
            tones: app.tones(),
            rewards: app.rewards(),
        }
    }

    #[must_use]
    pub fn drill(&self) -> Arc<DrillService> {
        Arc::clone(&self.drill)
    }

    #[must_use]
    pub fn tones(&self) -> Arc<ToneService> {
        Arc::clone(&self.tones)
    }

    #[must_use]
    pub fn rewards(&self) -> Arc<RewardService> {
        Arc::clone(&self.rewards)
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
