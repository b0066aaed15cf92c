//! Browser implementations of the controller seams.

use dashboard::{
    CauseBackend, CauseCard, DashboardError, DashboardView, Diagnostic, DiagnosticSink,
    FundControl, NumberTween, OVERALL_FILL_DELAY_MS, Presenter, RECENT_EXIT_MS, Result,
    SUCCESS_FLASH_MS, SessionStore, Stat, StatFormat, displayed_value,
};
use gloo_net::http::{Request, Response};
use gloo_timers::future::TimeoutFuture;
use impact_types::{ApiError, CAUSES_PATH, Cause, DonationLog, LOG_DONATION_PATH};
use wasm_bindgen_futures::spawn_local;

/// Backend reached through `fetch` on the page's own origin.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooBackend;

impl GlooBackend {
    async fn check(response: Response) -> Result<Response> {
        if response.ok() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(DashboardError::Status {
            status: response.status(),
            message: ApiError::message_from_body(&body),
        })
    }
}

impl CauseBackend for GlooBackend {
    async fn fetch_causes(&self) -> Result<Vec<Cause>> {
        let response = Request::get(CAUSES_PATH)
            .send()
            .await
            .map_err(|e| DashboardError::Network(e.to_string()))?;
        Self::check(response)
            .await?
            .json::<Vec<Cause>>()
            .await
            .map_err(|e| DashboardError::Decode(e.to_string()))
    }

    async fn log_donation(&self, log: &DonationLog) -> Result<()> {
        let request = Request::post(LOG_DONATION_PATH)
            .json(log)
            .map_err(|e| DashboardError::Decode(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| DashboardError::Network(e.to_string()))?;
        Self::check(response).await?;
        Ok(())
    }
}

/// `localStorage` for reads; `clear_all` also wipes `sessionStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

impl SessionStore for BrowserStore {
    fn read(&self, key: &str) -> Option<String> {
        web_sys::window()?
            .local_storage()
            .ok()
            .flatten()?
            .get_item(key)
            .ok()
            .flatten()
    }

    fn clear_all(&self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Ok(Some(local)) = window.local_storage() {
            let _ = local.clear();
        }
        if let Ok(Some(session)) = window.session_storage() {
            let _ = session.clear();
        }
    }
}

/// Diagnostics on the browser console.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl DiagnosticSink for ConsoleSink {
    fn report(&self, diagnostic: Diagnostic) {
        web_sys::console::error_1(&diagnostic.to_string().into());
    }
}

/// Presenter driving tweens and delays off browser timers.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimedPresenter;

fn after<F>(ms: u64, f: F)
where
    F: FnOnce() + 'static,
{
    spawn_local(async move {
        TimeoutFuture::new(ms as u32).await;
        f();
    });
}

impl Presenter for TimedPresenter {
    async fn processing_delay(&self, ms: u64) {
        TimeoutFuture::new(ms as u32).await;
    }

    fn animate_stat<V>(&self, view: &V, stat: Stat, target: f64, format: StatFormat)
    where
        V: DashboardView + Clone + 'static,
    {
        let view = view.clone();
        let tween = NumberTween::new(displayed_value(&view.stat_text(stat)), target);
        spawn_local(async move {
            for value in tween.frames() {
                TimeoutFuture::new(tween.frame_interval_ms() as u32).await;
                view.update_stat(stat, &format.apply(value));
            }
        });
    }

    fn fill_card<V>(&self, view: &V, card: &CauseCard)
    where
        V: DashboardView + Clone + 'static,
    {
        let view = view.clone();
        let (cause_id, percent) = (card.cause_id, card.percent);
        after(card.fill_delay_ms, move || view.set_card_progress(cause_id, percent));
    }

    fn fill_overall<V>(&self, view: &V, percent: f64)
    where
        V: DashboardView + Clone + 'static,
    {
        let view = view.clone();
        after(OVERALL_FILL_DELAY_MS, move || view.set_overall_progress(percent));
    }

    fn flash_success<V>(&self, view: &V, cause_id: u64)
    where
        V: DashboardView + Clone + 'static,
    {
        view.set_fund_control(cause_id, FundControl::Funded);
        let view = view.clone();
        after(SUCCESS_FLASH_MS, move || {
            view.set_fund_control(cause_id, FundControl::Ready);
        });
    }

    fn retire_oldest_recent<V>(&self, view: &V)
    where
        V: DashboardView + Clone + 'static,
    {
        let view = view.clone();
        after(RECENT_EXIT_MS, move || view.remove_oldest_recent());
    }
}
